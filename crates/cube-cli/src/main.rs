//! cube - inspect the spinning cube's matrices
//!
//! Prints the projection, view and model matrices a renderer would upload,
//! projects vertices through them and cross-checks the affine inverse.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cube")]
#[command(author, version, about = "Inspect the spinning cube's matrices")]
#[command(long_about = "
Computes the per-frame matrices of the spinning cube scene and prints them.

Examples:
  cube frame                          # Proj/View/Model at t = 0
  cube frame -t 1.5 --width 1920 --height 1080
  cube frame --bytes                  # std140 Matrices block as hex
  cube project -t 0.5                 # All 8 corners to clip space and NDC
  cube project --x 1 --y 0 --z 0      # One object-space point
  cube inverse -t 2                   # inverse vs inverse_trans of Model
  cube -c scene.yaml config           # Effective configuration
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Scene configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the matrices for one frame
    #[command(visible_alias = "f")]
    Frame(FrameArgs),

    /// Project points through Proj * View * Model
    #[command(visible_alias = "p")]
    Project(ProjectArgs),

    /// Compare the general and affine inverse of Model
    #[command(visible_alias = "i")]
    Inverse(InverseArgs),

    /// Print the effective configuration as YAML
    Config,
}

/// Arguments for the `frame` command.
#[derive(Args)]
struct FrameArgs {
    /// Time in seconds
    #[arg(short, long, default_value = "0.0")]
    time: f32,

    /// Framebuffer width (overrides config)
    #[arg(long)]
    width: Option<u32>,

    /// Framebuffer height (overrides config)
    #[arg(long)]
    height: Option<u32>,

    /// Hex-dump the std140 Matrices block instead
    #[arg(short, long)]
    bytes: bool,
}

/// Arguments for the `project` command.
#[derive(Args)]
struct ProjectArgs {
    /// Time in seconds
    #[arg(short, long, default_value = "0.0")]
    time: f32,

    /// Object-space X (default: all cube corners)
    #[arg(long, allow_hyphen_values = true)]
    x: Option<f32>,

    /// Object-space Y
    #[arg(long, allow_hyphen_values = true)]
    y: Option<f32>,

    /// Object-space Z
    #[arg(long, allow_hyphen_values = true)]
    z: Option<f32>,
}

/// Arguments for the `inverse` command.
#[derive(Args)]
struct InverseArgs {
    /// Time in seconds
    #[arg(short, long, default_value = "0.0")]
    time: f32,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Frame(args) => commands::frame::run(args, config),
        Commands::Project(args) => commands::project::run(args, config),
        Commands::Inverse(args) => commands::inverse::run(args, config),
        Commands::Config => commands::config::run(config),
    }
}
