//! `tokenweave` - generate CSS variables, utility classes and name lists from a
//! design-token file.
//!
//! ```text
//! tokenweave generate tokens.yaml -o dist
//! tokenweave check tokens.yaml --on-unresolved fail
//! tokenweave index dist
//! ```
//!
//! Set `RUST_LOG` for finer control over logging; `-v` raises the default to
//! `debug`.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tokenweave::UnresolvedPolicy;

#[derive(Parser)]
#[command(name = "tokenweave")]
#[command(version, about = "Design tokens to theme-aware CSS and typed name lists")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every artifact and write it to the output directory
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Output directory
        #[arg(short, long, default_value = commands::DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
    },

    /// Run the full generation in memory and report what would be written
    Check {
        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// Rebuild index.css from the style sheets already in a directory
    Index {
        /// Output directory containing css/
        dir: PathBuf,
    },
}

/// Options shared by `generate` and `check`.
#[derive(Args, Debug, Clone)]
pub struct GenerationArgs {
    /// Token definition file (YAML or JSON)
    pub input: PathBuf,

    /// Generator settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// What to do with utility references that resolve to nothing
    #[arg(long, value_name = "POLICY", value_parser = ["skip", "emit-empty", "fail"])]
    pub on_unresolved: Option<String>,

    /// Guess missing utility properties from the prefix
    #[arg(long)]
    pub legacy_property_derivation: bool,

    /// Do not write index.css
    #[arg(long)]
    pub no_index: bool,

    /// Do not write tier-wide aggregate lists
    #[arg(long)]
    pub no_global_aggregates: bool,
}

impl GenerationArgs {
    pub fn policy(&self) -> anyhow::Result<Option<UnresolvedPolicy>> {
        self.on_unresolved
            .as_deref()
            .map(|raw| raw.parse().map_err(anyhow::Error::msg))
            .transpose()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Generate { generation, output } => commands::generate(&generation, &output),
        Commands::Check { generation } => commands::check(&generation),
        Commands::Index { dir } => commands::index(&dir),
    };

    match result {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
