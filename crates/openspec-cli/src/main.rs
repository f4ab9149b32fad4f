mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "openspec",
    about = "Scaffold and refresh OpenSpec slash commands for AI coding assistants",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from openspec/ or .git/)
    #[arg(long, global = true, env = "OPENSPEC_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize OpenSpec and write slash commands
    Init {
        /// Tools to scaffold, comma-separated (default: all available)
        #[arg(long, value_delimiter = ',')]
        tools: Vec<String>,
    },

    /// Refresh slash command files that already exist
    Update,

    /// List supported tools and whether they are scaffolded
    Tools,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init { tools } => cmd::init::run(&root, &tools, cli.json),
        Commands::Update => cmd::update::run(&root, cli.json),
        Commands::Tools => cmd::tools::run(&root, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
