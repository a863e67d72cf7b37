//! Filename recovery from a `Content-Disposition` header.

use std::sync::LazyLock;

use regex::Regex;

use conspects_entity::edition::Edition;

/// Captures the `filename=` token, quoted or not. Quotes are excluded from
/// the capture so `filename="course.zip"` yields `course.zip`.
static FILENAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"filename="?([^"]+)"?"#).expect("filename pattern is valid")
});

/// Suggested filename for an edition export.
///
/// Uses the header's `filename=` token when present, otherwise
/// `<edition name>.zip`. Never fails.
pub fn recover_filename(content_disposition: Option<&str>, edition: &Edition) -> String {
    content_disposition
        .and_then(extract_filename)
        .unwrap_or_else(|| edition.fallback_archive_name())
}

/// The `filename=` token of a header value, if any.
pub fn extract_filename(header: &str) -> Option<String> {
    FILENAME_PATTERN
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}
