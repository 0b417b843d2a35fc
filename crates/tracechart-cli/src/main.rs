//! CLI tool for tracechart.
//!
//! Turns a collected profile into chart specifications and reports.

mod commands;

use anyhow::Result;
use clap::{Args, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cargo-tracechart")]
#[command(bin_name = "cargo tracechart")]
#[command(about = "Profile trace charting CLI", long_about = None)]
#[command(version)]
enum Cli {
    #[command(subcommand)]
    Tracechart(Commands),
}

#[derive(Parser)]
enum Commands {
    /// Lay out task executions as a timeline
    Tasks {
        /// Path to the profile JSON file
        profile: PathBuf,

        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Lay out CPU and memory usage over time
    Resources {
        /// Path to the profile JSON file
        profile: PathBuf,

        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Stack the task timeline above the resource chart
    Both {
        /// Path to the profile JSON file
        profile: PathBuf,

        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Print per-slot and per-function metrics
    Analyze {
        /// Path to the profile JSON file
        profile: PathBuf,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available palettes and their sizes
    Palettes {
        /// JSON palette catalog to list instead of the built-in one
        #[arg(long)]
        palette_catalog: Option<PathBuf>,
    },
}

/// Chart settings shared by the layout commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ChartArgs {
    /// Palette name
    #[arg(long)]
    palette: Option<String>,

    /// Maximum length of task labels
    #[arg(long)]
    label_size: Option<usize>,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Chart width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Chart height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Comma-separated tools, e.g. "hover,save,xpan"
    #[arg(long)]
    tools: Option<String>,

    /// JSON file with chart options; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON palette catalog replacing the built-in one
    #[arg(long)]
    palette_catalog: Option<PathBuf>,

    /// Where to write the chart specification
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the chart specification to stdout
    #[arg(long)]
    show: bool,
}

/// Which charts a layout command produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartSelection {
    Tasks,
    Resources,
    Both,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let Cli::Tracechart(cmd) = Cli::parse();

    match cmd {
        Commands::Tasks { profile, chart } => {
            commands::chart(ChartSelection::Tasks, &profile, &chart)
        }
        Commands::Resources { profile, chart } => {
            commands::chart(ChartSelection::Resources, &profile, &chart)
        }
        Commands::Both { profile, chart } => {
            commands::chart(ChartSelection::Both, &profile, &chart)
        }
        Commands::Analyze { profile, json } => commands::analyze(&profile, json),
        Commands::Palettes { palette_catalog } => {
            commands::list_palettes(palette_catalog.as_deref())
        }
    }
}
