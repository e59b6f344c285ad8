//! headtag CLI - normalize document head metadata into canonical tags.

use clap::{Parser, Subcommand};
use headtag_schema::SchemaCatalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod input;
mod output;

use commands::{catalog, fingerprint, head, normalize};

#[derive(Parser)]
#[command(name = "headtag")]
#[command(about = "Normalize document head metadata into canonical tags")]
struct Cli {
    /// JSON catalog extending the built-in schema catalog
    #[arg(long, global = true, env = "HEADTAG_CATALOG")]
    catalog: Option<String>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize one tag input
    Normalize {
        /// Tag name (title, meta, link, script, ...)
        tag: String,
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Include the hygiene report in the output
        #[arg(long)]
        report: bool,
        /// Print a table instead of JSON
        #[arg(long)]
        table: bool,
    },
    /// Flatten a whole head object into tags
    Head {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Include the fingerprint of the tag list
        #[arg(long)]
        fingerprint: bool,
        /// Print a table instead of JSON
        #[arg(long)]
        table: bool,
    },
    /// Print the fingerprint of a JSON array of canonical tags
    Fingerprint {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Print the effective schema catalog
    Catalog,
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_catalog(path: Option<&str>) -> Result<SchemaCatalog, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            tracing::debug!(path, "loading catalog");
            Ok(SchemaCatalog::load(path).map_err(|e| format!("Invalid catalog: {}", e))?)
        }
        None => Ok(SchemaCatalog::builtin()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_catalog(cli.catalog.as_deref()).and_then(|schema| match cli.command {
        Commands::Normalize {
            tag,
            input,
            report,
            table,
        } => normalize::run(schema, tag, input, report, table),
        Commands::Head {
            input,
            fingerprint,
            table,
        } => head::run(schema, input, fingerprint, table),
        Commands::Fingerprint { input } => fingerprint::run(input),
        Commands::Catalog => catalog::run(schema),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
