//! Rendering strategies built from a file descriptor.

use std::fmt;

use conspects_entity::file::FileDescriptor;

use super::kind::FileKind;

/// A `data:<media>;base64,<payload>` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    /// Declared media type.
    pub media_type: String,
    /// Base64 payload, passed through as received.
    pub payload: String,
}

impl DataUri {
    /// Wrap a base64 payload under a media type.
    pub fn new(media_type: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            payload: payload.into(),
        }
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.media_type, self.payload)
    }
}

/// A link that saves its target under a suggested filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    /// Link target.
    pub href: DataUri,
    /// Suggested filename.
    pub filename: String,
}

/// How a selected file is displayed or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Plain-text editor.
    TextEditor,
    /// Markdown editor with preview.
    MarkdownEditor,
    /// Inline image.
    Image {
        /// Image source.
        source: DataUri,
        /// Alternative text (the file name).
        alt: String,
    },
    /// Inline video with controls.
    Video {
        /// Video source.
        source: DataUri,
    },
    /// Embedded document viewer.
    Pdf {
        /// Document source.
        source: DataUri,
        /// Shown when the viewer cannot display the document.
        fallback: DownloadLink,
    },
    /// No preview; offer the raw payload for download.
    Unsupported {
        /// Generic download link.
        link: DownloadLink,
    },
}

impl RenderStrategy {
    /// Choose the strategy for a file. Pure: the same descriptor always
    /// yields the same strategy.
    pub fn for_file(file: &FileDescriptor) -> Self {
        let kind = FileKind::from_extension(&file.extension);
        let source = DataUri::new(kind.media_type(&file.extension), file.content.clone());

        match kind {
            FileKind::PlainText => Self::TextEditor,
            FileKind::Markdown => Self::MarkdownEditor,
            FileKind::Image => Self::Image {
                source,
                alt: file.name.clone(),
            },
            FileKind::Video => Self::Video { source },
            FileKind::Pdf => Self::Pdf {
                fallback: DownloadLink {
                    href: source.clone(),
                    filename: format!("{}.pdf", file.name),
                },
                source,
            },
            FileKind::Other => Self::Unsupported {
                link: DownloadLink {
                    href: source,
                    filename: file.name.clone(),
                },
            },
        }
    }

    /// Whether this strategy lets the user edit and save.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::TextEditor | Self::MarkdownEditor)
    }

    /// The download link offered by this strategy, if any.
    pub fn download_link(&self) -> Option<&DownloadLink> {
        match self {
            Self::Pdf { fallback, .. } => Some(fallback),
            Self::Unsupported { link } => Some(link),
            _ => None,
        }
    }

    /// The inline source shown by this strategy, if any.
    pub fn source(&self) -> Option<&DataUri> {
        match self {
            Self::Image { source, .. } | Self::Video { source } | Self::Pdf { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }

    /// Short label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TextEditor => "text editor",
            Self::MarkdownEditor => "markdown editor",
            Self::Image { .. } => "image preview",
            Self::Video { .. } => "video preview",
            Self::Pdf { .. } => "pdf viewer",
            Self::Unsupported { .. } => "unsupported file type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conspects_core::types::FileId;

    fn file(name: &str, extension: &str, content: &str) -> FileDescriptor {
        FileDescriptor {
            id: FileId(1),
            name: name.to_string(),
            extension: extension.to_string(),
            content: content.to_string(),
            can_be_edited: false,
            can_be_previewed: true,
            is_attachment: false,
        }
    }

    #[test]
    fn test_image_data_uri_prefix() {
        for ext in ["jpg", "jpeg", "gif", "png"] {
            let strategy = RenderStrategy::for_file(&file("diagram", ext, "iVBOR"));
            let RenderStrategy::Image { source, alt } = &strategy else {
                panic!("expected image strategy for {ext}, got {strategy:?}");
            };
            assert!(
                source
                    .to_string()
                    .starts_with(&format!("data:image/{ext};base64,"))
            );
            assert_eq!(alt, "diagram");
        }
    }

    #[test]
    fn test_video_data_uri() {
        let strategy = RenderStrategy::for_file(&file("lecture", "mp4", "AAAA"));
        assert_eq!(
            strategy.source().map(ToString::to_string).as_deref(),
            Some("data:video/mp4;base64,AAAA")
        );
        assert!(strategy.download_link().is_none());
    }

    #[test]
    fn test_pdf_always_has_fallback_link() {
        let strategy = RenderStrategy::for_file(&file("syllabus", "pdf", "JVBERi0="));
        let link = strategy.download_link().expect("pdf fallback link");
        assert_eq!(link.filename, "syllabus.pdf");
        assert_eq!(link.href.to_string(), "data:application/pdf;base64,JVBERi0=");
        assert_eq!(
            strategy.source().map(ToString::to_string).as_deref(),
            Some("data:application/pdf;base64,JVBERi0=")
        );
    }

    #[test]
    fn test_unknown_extension_is_unsupported_with_plain_link() {
        let strategy = RenderStrategy::for_file(&file("essay", "docx", "UEsDBA=="));
        let RenderStrategy::Unsupported { link } = &strategy else {
            panic!("expected unsupported strategy, got {strategy:?}");
        };
        assert_eq!(link.href.to_string(), "data:text/plain;base64,UEsDBA==");
        assert_eq!(link.filename, "essay");
        assert!(!strategy.is_editable());
    }

    #[test]
    fn test_text_kinds_are_editors() {
        assert_eq!(
            RenderStrategy::for_file(&file("notes", "txt", "")),
            RenderStrategy::TextEditor
        );
        assert_eq!(
            RenderStrategy::for_file(&file("readme", "md", "")),
            RenderStrategy::MarkdownEditor
        );
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let descriptor = file("photo", "png", "abc=");
        let before = descriptor.clone();
        assert_eq!(
            RenderStrategy::for_file(&descriptor),
            RenderStrategy::for_file(&descriptor)
        );
        assert_eq!(descriptor, before);
    }
}
