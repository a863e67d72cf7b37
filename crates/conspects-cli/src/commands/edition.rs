//! Edition CLI commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use conspects_client::edition::parse_year;
use conspects_client::{DirectorySink, DuplicateEditionForm, EditionCatalog, EditionTransferManager};
use conspects_core::config::ClientConfig;
use conspects_core::error::AppError;
use conspects_core::traits::transport::HttpTransport;
use conspects_core::types::{EditionId, SubjectId};
use conspects_entity::edition::Edition;

use super::input_error;
use crate::output::{self, OutputFormat};

/// Arguments for edition commands
#[derive(Debug, Args)]
pub struct EditionArgs {
    /// Edition subcommand
    #[command(subcommand)]
    pub command: EditionCommand,
}

/// Edition subcommands
#[derive(Debug, Subcommand)]
pub enum EditionCommand {
    /// List editions of a subject
    List {
        /// Subject ID
        #[arg(short, long)]
        subject: SubjectId,
    },
    /// Create a new, empty edition
    Add {
        /// Subject ID
        #[arg(short, long)]
        subject: SubjectId,
        /// Edition name
        #[arg(short, long)]
        name: String,
        /// Edition year
        #[arg(short, long)]
        year: String,
    },
    /// Copy an edition under a new name and year
    Duplicate {
        /// Subject ID
        #[arg(short, long)]
        subject: SubjectId,
        /// Edition to copy
        edition: EditionId,
        /// New name (prompted when omitted)
        #[arg(short, long)]
        name: Option<String>,
        /// New year (prompted when omitted)
        #[arg(short, long)]
        year: Option<String>,
    },
    /// Download an edition as a zip archive
    Export {
        /// Subject ID
        #[arg(short, long)]
        subject: SubjectId,
        /// Edition to export
        edition: EditionId,
        /// Target directory (defaults to download.directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

/// Edition display row
#[derive(Debug, Serialize, Tabled)]
struct EditionRow {
    /// Edition ID
    id: i64,
    /// Name
    name: String,
    /// Year
    year: i32,
    /// Permission
    permission: String,
}

impl From<&Edition> for EditionRow {
    fn from(edition: &Edition) -> Self {
        Self {
            id: edition.id.get(),
            name: edition.name.clone(),
            year: edition.year,
            permission: edition.user_permission.as_str().to_string(),
        }
    }
}

/// Execute edition commands
pub async fn execute(
    args: &EditionArgs,
    transport: Arc<dyn HttpTransport>,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let catalog = EditionCatalog::new(transport.clone());

    match &args.command {
        EditionCommand::List { subject } => {
            print_editions(&catalog, *subject, format).await?;
        }
        EditionCommand::Add {
            subject,
            name,
            year,
        } => {
            let year = parse_year(year)?;
            catalog.create(*subject, name, year).await?;
            output::print_success(&format!("Edition '{}' ({}) created", name, year));
            print_editions(&catalog, *subject, format).await?;
        }
        EditionCommand::Duplicate {
            subject,
            edition,
            name,
            year,
        } => {
            let base = find_edition(&catalog, *subject, *edition).await?;
            let mut form = DuplicateEditionForm::for_edition(&base);

            let name = match name {
                Some(n) => n.clone(),
                None => dialoguer::Input::<String>::new()
                    .with_prompt("New edition name")
                    .default(form.name().to_string())
                    .interact_text()
                    .map_err(input_error)?,
            };
            form.set_name(name);

            let year = match year {
                Some(y) => y.clone(),
                None => dialoguer::Input::<String>::new()
                    .with_prompt("New edition year")
                    .default(form.year_input().to_string())
                    .interact_text()
                    .map_err(input_error)?,
            };
            form.set_year_input(year);

            let manager = EditionTransferManager::new(transport, sink_for(None, config));
            manager.duplicate_from_form(&form).await?;

            output::print_success(&format!(
                "Edition '{}' duplicated as '{}'",
                base.name,
                form.name()
            ));
            print_editions(&catalog, *subject, format).await?;
        }
        EditionCommand::Export {
            subject,
            edition,
            dir,
        } => {
            let edition = find_edition(&catalog, *subject, *edition).await?;
            let sink = sink_for(dir.as_ref(), config);
            let destination = sink.directory().to_path_buf();
            let manager = EditionTransferManager::new(transport, sink);

            output::print_kv("Exporting", &edition.name);
            let artifact = manager.export_zip(&edition).await?;

            output::print_success(&format!(
                "Saved {} ({} bytes) to {}",
                artifact.filename,
                artifact.len(),
                destination.display()
            ));
        }
    }

    Ok(())
}

async fn print_editions(
    catalog: &EditionCatalog,
    subject: SubjectId,
    format: OutputFormat,
) -> Result<(), AppError> {
    let editions = catalog.list(subject).await?;
    let rows: Vec<EditionRow> = editions.iter().map(EditionRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}

async fn find_edition(
    catalog: &EditionCatalog,
    subject: SubjectId,
    edition: EditionId,
) -> Result<Edition, AppError> {
    catalog.find(subject, edition).await?.ok_or_else(|| {
        AppError::not_found(format!(
            "Edition {} not found in subject {}",
            edition, subject
        ))
    })
}

fn sink_for(dir: Option<&PathBuf>, config: &ClientConfig) -> Arc<DirectorySink> {
    let directory = dir.cloned().unwrap_or_else(|| config.download.directory.clone());
    Arc::new(DirectorySink::new(directory))
}
