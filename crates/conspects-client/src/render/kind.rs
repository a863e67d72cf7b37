//! File kind dispatch table.

use std::fmt;

/// How a file is treated, decided purely by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Editable plain text.
    PlainText,
    /// Editable markdown.
    Markdown,
    /// Inline image preview.
    Image,
    /// Inline video preview.
    Video,
    /// Embedded document viewer with a download fallback.
    Pdf,
    /// Anything without a dedicated strategy.
    Other,
}

/// Extension to kind mapping. Matching is case-sensitive and the first
/// entry wins; anything absent is [`FileKind::Other`].
const DISPATCH_TABLE: &[(&str, FileKind)] = &[
    ("txt", FileKind::PlainText),
    ("md", FileKind::Markdown),
    ("jpg", FileKind::Image),
    ("jpeg", FileKind::Image),
    ("gif", FileKind::Image),
    ("png", FileKind::Image),
    ("mp4", FileKind::Video),
    ("pdf", FileKind::Pdf),
];

impl FileKind {
    /// Resolve the kind for an extension.
    pub fn from_extension(extension: &str) -> Self {
        DISPATCH_TABLE
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Other)
    }

    /// Whether the kind has an editing strategy.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::PlainText | Self::Markdown)
    }

    /// Media type used when building a data URI for this kind.
    pub fn media_type(&self, extension: &str) -> String {
        match self {
            Self::Image => format!("image/{extension}"),
            Self::Video => format!("video/{extension}"),
            Self::Pdf => "application/pdf".to_string(),
            Self::Markdown => "text/markdown".to_string(),
            Self::PlainText | Self::Other => "text/plain".to_string(),
        }
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "text",
            Self::Markdown => "markdown",
            Self::Image => "image",
            Self::Video => "video",
            Self::Pdf => "pdf",
            Self::Other => "unsupported",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(FileKind::from_extension("txt"), FileKind::PlainText);
        assert_eq!(FileKind::from_extension("md"), FileKind::Markdown);
        for ext in ["jpg", "jpeg", "gif", "png"] {
            assert_eq!(FileKind::from_extension(ext), FileKind::Image);
        }
        assert_eq!(FileKind::from_extension("mp4"), FileKind::Video);
        assert_eq!(FileKind::from_extension("pdf"), FileKind::Pdf);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(FileKind::from_extension("PNG"), FileKind::Other);
        assert_eq!(FileKind::from_extension("Txt"), FileKind::Other);
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(FileKind::from_extension("docx"), FileKind::Other);
        assert_eq!(FileKind::from_extension(""), FileKind::Other);
    }

    #[test]
    fn test_only_text_kinds_are_editable() {
        assert!(FileKind::PlainText.is_editable());
        assert!(FileKind::Markdown.is_editable());
        assert!(!FileKind::Pdf.is_editable());
        assert!(!FileKind::Other.is_editable());
    }
}
