mod calc;
mod cmd;
mod data;
mod logging;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "moodcal", about = "mood tracker with a calendar heatmap")]
struct Cli {
    /// Path to the data directory containing config and data files (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default data files
    Init,
    /// Print a month grid with mood markers
    Grid {
        year: i32,
        /// Month number, 1 = January
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },
    /// List logged moods
    Moods {
        /// Only show one month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Checked before the log file exists, which would make the directory look populated.
    let needs_init = dir_needs_init(&data_dir);
    std::fs::create_dir_all(&data_dir)?;
    logging::init(&data_dir)?;
    info!(dir = %data_dir.display(), "moodcal starting");

    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && needs_init {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Grid { year, month }) => cmd::grid::run(year, month),
        Some(Commands::Moods { month }) => cmd::moods::run(month.as_deref()),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
