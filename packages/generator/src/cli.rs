//! Command-line interface for the generator.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::auth::{access_token, ServiceAccountKey};
use crate::cache::PlaceholderCache;
use crate::config::{validate_document_id, PLACEHOLDER_FILE};
use crate::docs::DocsClient;
use crate::drive::DriveClient;
use crate::error::{GeneratorError, Result};
use crate::generator::{generate_contract, load_or_fetch_placeholders, FieldValues};
use crate::http::create_client;
use crate::records::read_records;

/// Deedmill - Fill Google Docs contract templates and export PDFs.
#[derive(Parser)]
#[command(name = "deedmill-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the contract templates in the configured Drive folder.
    Templates {
        /// Folder id (default: TEMPLATE_FOLDER_ID environment variable)
        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Show the placeholder fields of a template, in document order.
    Placeholders {
        /// Template document id
        document_id: String,

        /// Re-extract even when a cached entry exists
        #[arg(long)]
        refresh: bool,

        /// Placeholder cache file (default: placeholders.json)
        #[arg(long)]
        cache: Option<PathBuf>,
    },

    /// Generate contract PDFs from a template.
    Generate {
        /// Template document id
        template_id: String,

        /// CSV file with one contract per row
        #[arg(long, conflicts_with = "set")]
        csv: Option<PathBuf>,

        /// Field value for a single contract (repeatable)
        #[arg(long = "set", value_parser = parse_key_val, value_name = "FIELD=VALUE")]
        set: Vec<(String, String)>,

        /// Output directory (default: contracts/)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Base name for generated files (default: contract_<timestamp>)
        #[arg(short, long)]
        name: Option<String>,

        /// Placeholder cache file (default: placeholders.json)
        #[arg(long)]
        cache: Option<PathBuf>,

        /// Re-extract placeholders even when a cached entry exists
        #[arg(long)]
        refresh: bool,
    },
}

/// Parse a FIELD=VALUE argument.
fn parse_key_val(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    Ok((key.trim().to_lowercase(), value.to_string()))
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Templates { folder } => templates_command(folder.as_deref()),
        Commands::Placeholders {
            document_id,
            refresh,
            cache,
        } => placeholders_command(&document_id, refresh, cache.as_deref()),
        Commands::Generate {
            template_id,
            csv,
            set,
            output,
            name,
            cache,
            refresh,
        } => generate_command(
            &template_id,
            csv.as_deref(),
            set,
            output.as_deref(),
            name.as_deref(),
            cache.as_deref(),
            refresh,
        ),
    }
}

/// Authenticate and build the API clients.
fn connect() -> Result<(DocsClient, DriveClient)> {
    let key = ServiceAccountKey::from_env()?;
    let client = create_client()?;
    let token = access_token(&client, &key)?;

    let docs = DocsClient::new(client.clone(), token.clone());
    let drive = DriveClient::new(client, token);
    Ok((docs, drive))
}

/// Create the spinner used around network phases.
fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Execute the templates command.
fn templates_command(folder: Option<&str>) -> Result<()> {
    let folder_id = match folder {
        Some(id) => id.to_string(),
        None => std::env::var("TEMPLATE_FOLDER_ID")
            .map_err(|_| GeneratorError::MissingTemplateFolder)?,
    };
    validate_document_id(&folder_id)?;

    let (_docs, drive) = connect()?;

    let pb = spinner();
    pb.set_message("Listing templates...");
    let templates = match drive.list_templates(&folder_id) {
        Ok(templates) => templates,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    if templates.is_empty() {
        println!("No templates found in folder {folder_id}");
        return Ok(());
    }

    println!("{}", style("Templates:").bold());
    for template in templates {
        println!("  {}  {}", style(&template.name).cyan(), style(&template.id).dim());
    }

    Ok(())
}

/// Execute the placeholders command.
fn placeholders_command(document_id: &str, refresh: bool, cache: Option<&Path>) -> Result<()> {
    validate_document_id(document_id)?;

    let cache = PlaceholderCache::new(cache.unwrap_or_else(|| Path::new(PLACEHOLDER_FILE)));
    let (docs, _drive) = connect()?;

    let pb = spinner();
    pb.set_message("Extracting placeholders...");
    let placeholders = match load_or_fetch_placeholders(&docs, &cache, document_id, refresh) {
        Ok(placeholders) => placeholders,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    println!(
        "{} {}",
        style("Placeholders in").bold(),
        style(document_id).cyan()
    );
    for placeholder in placeholders {
        println!("  {placeholder}");
    }

    Ok(())
}

/// Execute the generate command.
fn generate_command(
    template_id: &str,
    csv: Option<&Path>,
    set: Vec<(String, String)>,
    output: Option<&Path>,
    name: Option<&str>,
    cache: Option<&Path>,
    refresh: bool,
) -> Result<()> {
    validate_document_id(template_id)?;

    let records: Vec<FieldValues> = if let Some(path) = csv {
        read_records(path)?
    } else if !set.is_empty() {
        vec![set.into_iter().collect()]
    } else {
        return Err(GeneratorError::MissingFieldData);
    };

    let output_dir = output.unwrap_or_else(|| Path::new("contracts"));
    let base_name = match name {
        Some(name) => name.to_string(),
        None => format!(
            "contract_{}",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        ),
    };

    let cache = PlaceholderCache::new(cache.unwrap_or_else(|| Path::new(PLACEHOLDER_FILE)));
    let (docs, drive) = connect()?;

    let pb = spinner();
    pb.set_message("Extracting placeholders...");
    let placeholders = match load_or_fetch_placeholders(&docs, &cache, template_id, refresh) {
        Ok(placeholders) => placeholders,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    let total = records.len();
    let mut written = Vec::with_capacity(total);

    for (index, data) in records.iter().enumerate() {
        let file_name = if total == 1 {
            base_name.clone()
        } else {
            format!("{base_name}_{:03}", index + 1)
        };

        pb.set_message(format!("Generating {} ({}/{})...", file_name, index + 1, total));
        let path = match generate_contract(
            &docs,
            &drive,
            template_id,
            &placeholders,
            data,
            &file_name,
            output_dir,
        ) {
            Ok(path) => path,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };
        written.push(path);
    }

    pb.finish_and_clear();

    println!(
        "{} {} contract(s)",
        style("Generated").green().bold(),
        written.len()
    );
    for path in written {
        println!("  {}", path.display());
    }

    Ok(())
}
