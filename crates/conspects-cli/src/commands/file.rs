//! File CLI commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Subcommand};

use conspects_client::download::ObjectUrl;
use conspects_client::render::FileDetails;
use conspects_client::{DirectorySink, DownloadableArtifact, FileKind, FileRenderer, RenderedView};
use conspects_core::error::AppError;
use conspects_core::traits::transport::HttpTransport;
use conspects_core::types::FileId;

use crate::output::{self, OutputFormat};

/// Arguments for file commands
#[derive(Debug, Args)]
pub struct FileArgs {
    /// File subcommand
    #[command(subcommand)]
    pub command: FileCommand,
}

/// File subcommands
#[derive(Debug, Subcommand)]
pub enum FileCommand {
    /// Show file details and how it would be displayed
    Show {
        /// File ID
        id: FileId,
    },
    /// Edit a text or markdown file and save it back
    Edit {
        /// File ID
        id: FileId,
        /// Read the new content from this path instead of opening an editor
        #[arg(long)]
        from: Option<PathBuf>,
    },
    /// Render a markdown file to HTML
    Preview {
        /// File ID
        id: FileId,
    },
    /// Save the decoded file content to disk
    Download {
        /// File ID
        id: FileId,
        /// Target directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

/// Execute file commands
pub async fn execute(
    args: &FileArgs,
    transport: Arc<dyn HttpTransport>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let renderer = FileRenderer::new(transport);

    match &args.command {
        FileCommand::Show { id } => {
            let file = renderer.fetch(*id).await?;
            let RenderedView::File { details, strategy } = renderer.render(Some(&file)) else {
                return Err(AppError::not_found(format!("File {} not found", id)));
            };

            output::print_item(&details, format, |d: &FileDetails| {
                output::print_kv("File", &d.display_name);
                output::print_kv("Can be edited", &d.can_be_edited.to_string());
                output::print_kv("Can be previewed", &d.can_be_previewed.to_string());
                output::print_kv("Attachment", &d.is_attachment.to_string());
                output::print_kv("Shown as", strategy.label());
                if let Some(link) = strategy.download_link() {
                    output::print_kv("Download as", &link.filename);
                }
            });
        }
        FileCommand::Edit { id, from } => {
            let file = renderer.fetch(*id).await?;
            let mut session = renderer.open_editor(&file)?;

            let text = match from {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let edited = dialoguer::Editor::new()
                        .extension(&format!(".{}", file.extension))
                        .edit(session.text())
                        .map_err(|e| AppError::internal(format!("Editor error: {}", e)))?;
                    match edited {
                        Some(text) => text,
                        None => {
                            output::print_warning("Editor closed without saving; nothing sent");
                            return Ok(());
                        }
                    }
                }
            };

            session.set_text(text);
            if !session.is_dirty() {
                output::print_warning("No changes to save");
                return Ok(());
            }

            // Wait for the save before reporting; the saved text is now the baseline.
            renderer.save_session(&file, &session).await?;
            session.mark_saved();
            output::print_success(&format!("Saved '{}'", file.display_name()));
        }
        FileCommand::Preview { id } => {
            let file = renderer.fetch(*id).await?;
            let session = renderer.open_editor(&file)?;
            let html = session.markdown_preview().ok_or_else(|| {
                AppError::validation(format!(
                    "'{}' is not a markdown file ({})",
                    file.display_name(),
                    FileKind::from_extension(&file.extension).as_str()
                ))
            })?;
            println!("{}", html);
        }
        FileCommand::Download { id, dir } => {
            let file = renderer.fetch(*id).await?;
            let data = file.decoded_content().map_err(|e| {
                AppError::validation(format!(
                    "Content of '{}' could not be decoded: {}",
                    file.display_name(),
                    e
                ))
            })?;

            let kind = FileKind::from_extension(&file.extension);
            let artifact = DownloadableArtifact {
                filename: file.display_name(),
                media_type: kind.media_type(&file.extension),
                data: data.into(),
            };

            let sink = DirectorySink::new(dir);
            let url = ObjectUrl::acquire(&sink, &artifact)?;
            url.trigger(&artifact.filename)?;

            output::print_success(&format!(
                "Downloaded {} bytes to {}",
                artifact.len(),
                sink.destination(&artifact.filename).display()
            ));
        }
    }

    Ok(())
}
