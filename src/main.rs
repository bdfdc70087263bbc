use std::path::PathBuf;

use aasx_core::constants::{BASE_IRI_ENV, DIGIT_MODE_ENV, ID_SCHEME_ENV};
use aasx_core::{
    assignments_to_json, assignments_to_yaml, EntityRequest, IdentifierConfig, IdentifierSession,
    Manifest,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aasx-ids")]
#[command(about = "Derive Asset Administration Shell identifiers from short names")]
struct Cli {
    /// Identifier scheme, `iri` or `uuid` (overrides AASX_ID_SCHEME)
    #[arg(long, global = true)]
    scheme: Option<String>,
    /// Base IRI for IRI-style identifiers (overrides AASX_BASE_IRI)
    #[arg(long, global = true)]
    base_iri: Option<String>,
    /// Digit mode, `deterministic` or `random` (overrides AASX_DIGIT_MODE)
    #[arg(long, global = true)]
    digit_mode: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identifier for an asset
    Asset {
        /// Asset short name
        name: String,
    },
    /// Identifier for a submodel of a shell
    Submodel {
        /// Shell short name
        shell: String,
        /// Submodel short name
        submodel: String,
    },
    /// Identifier for an asset administration shell
    Shell {
        /// Shell short name
        name: String,
    },
    /// Identifier for a concept description
    Concept {
        /// Concept description short name
        name: String,
    },
    /// Identifiers for every entity in a YAML or JSON manifest
    Batch {
        /// Path to the manifest file
        manifest: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

/// Main entry point for the identifier CLI
///
/// Configuration is read from the environment (after loading `.env`) and then overridden by any
/// command-line options. Logs go to stderr so identifiers on stdout can be piped.
///
/// # Environment Variables
/// - `AASX_ID_SCHEME`: `iri` (default) or `uuid`
/// - `AASX_BASE_IRI`: base IRI for IRI-style identifiers (default: `https://example.com`)
/// - `AASX_DIGIT_MODE`: `deterministic` (default) or `random`
/// - `RUST_LOG`: log filter
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("aasx=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli).inspect_err(|e| {
        tracing::error!("invalid identifier configuration: {e}");
    })?;
    let mut session = IdentifierSession::new(&config);

    match cli.command {
        Commands::Asset { name } => print_one(&mut session, EntityRequest::Asset { name }),
        Commands::Submodel { shell, submodel } => {
            print_one(&mut session, EntityRequest::Submodel { shell, submodel })
        }
        Commands::Shell { name } => print_one(&mut session, EntityRequest::Shell { name }),
        Commands::Concept { name } => print_one(&mut session, EntityRequest::Concept { name }),
        Commands::Batch { manifest, format } => {
            let manifest = Manifest::load(&manifest)?;
            let assignments = session.assign_all(&manifest);
            let rendered = match format {
                OutputFormat::Json => assignments_to_json(&assignments)?,
                OutputFormat::Yaml => assignments_to_yaml(&assignments)?,
            };
            println!("{}", rendered.trim_end());
        }
    }

    Ok(())
}

/// Merge command-line overrides over the environment and resolve the configuration.
fn resolve_config(cli: &Cli) -> anyhow::Result<IdentifierConfig> {
    let pick = |flag: &Option<String>, var: &str| flag.clone().or_else(|| std::env::var(var).ok());

    let config = IdentifierConfig::from_env_values(
        pick(&cli.scheme, ID_SCHEME_ENV),
        pick(&cli.base_iri, BASE_IRI_ENV),
        pick(&cli.digit_mode, DIGIT_MODE_ENV),
    )?;
    tracing::debug!(
        "resolved identifier config (scheme={}, base_iri='{}', digit_mode={})",
        config.scheme(),
        config.base_iri(),
        config.digit_mode()
    );
    Ok(config)
}

fn print_one(session: &mut IdentifierSession, request: EntityRequest) {
    println!("{}", session.assign(&request).identifier);
}
