//! Asset registry command line interface
//!
//! # Usage
//!
//! ```bash
//! # Create an info template for a new asset
//! asset-manager add-token c60_t0xdAC17F958D2ee523a2206206994597C13D831ec7
//!
//! # List it in the default or extended token list of its chain
//! asset-manager add-tokenlist c60_t0xdAC17F958D2ee523a2206206994597C13D831ec7
//! asset-manager add-tokenlist-extended c60_t0xdAC17F958D2ee523a2206206994597C13D831ec7
//!
//! # Attach a whitepaper
//! asset-manager upload-document c60_t0xdAC17F958D2ee523a2206206994597C13D831ec7 ./whitepaper.pdf
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use asset_registry_core::{AssetRegistry, RegistryConfig, TemplateMode, TokenListKind};

#[derive(Parser)]
#[command(name = "asset-manager")]
#[command(version = asset_registry_core::VERSION)]
#[command(about = "Manage asset info records, token lists and documents of an asset registry")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Registry root containing `blockchains/` (overrides configuration)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Configuration file (defaults to ./asset-manager.{toml,json,yaml} when present)
    #[arg(long, short, global = true, env = "ASSET_MANAGER_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an info.json template for a new asset
    AddToken {
        asset_id: String,

        /// Replace an existing info.json
        #[arg(long)]
        force: bool,
    },

    /// Add an asset to the default token list of its chain
    #[command(name = "add-tokenlist")]
    AddTokenList { asset_id: String },

    /// Add an asset to the extended token list of its chain
    #[command(name = "add-tokenlist-extended")]
    AddTokenListExtended { asset_id: String },

    /// Copy a supporting document into an asset directory
    UploadDocument {
        asset_id: String,

        /// Document to copy (.pdf, .doc, .docx, .txt, .md)
        document: PathBuf,
    },

    /// Print the effective configuration
    ShowConfig,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = RegistryConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(root) = cli.root {
        config = config.with_root(root);
    }
    let registry = AssetRegistry::new(config);

    match cli.command {
        Commands::AddToken { asset_id, force } => {
            let mode = if force { TemplateMode::Overwrite } else { TemplateMode::CreateNew };
            let path = registry.create_asset_template(&asset_id, mode)?;
            println!("Created {}", path.display());
        }
        Commands::AddTokenList { asset_id } => add_to_list(&registry, &asset_id, TokenListKind::Default)?,
        Commands::AddTokenListExtended { asset_id } => add_to_list(&registry, &asset_id, TokenListKind::Extended)?,
        Commands::UploadDocument { asset_id, document } => {
            let destination = registry.attach_document(&asset_id, &document)?;
            println!("Uploaded {}", destination.display());
        }
        Commands::ShowConfig => {
            let rendered =
                serde_json::to_string_pretty(registry.config()).context("Failed to render configuration")?;
            println!("{}", rendered);
        }
    }
    Ok(())
}

fn add_to_list(registry: &AssetRegistry, asset_id: &str, kind: TokenListKind) -> Result<()> {
    let list = registry
        .add_asset_to_list(asset_id, kind)
        .with_context(|| format!("Failed to add {} to the {} token list", asset_id, kind))?;
    println!(
        "Added {} to {} (version {}, {} tokens)",
        asset_id, list.name, list.version.major, list.tokens.len()
    );
    Ok(())
}
