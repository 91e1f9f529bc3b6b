mod catalog;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::catalog::{CatalogSource, HttpCatalog};
use crate::core::calendar::{self, ExportError};
use crate::core::config::{self, ResolvedConfig};

#[derive(Parser)]
#[command(name = "marquee", about = "Terminal tour-date browser")]
struct Args {
    /// Override the shows.json URL
    #[arg(long)]
    shows_url: Option<String>,

    /// Fetch the catalog, write the calendar file, and exit (no TUI)
    #[arg(long)]
    export: bool,

    /// Directory the exported calendar is written to
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("marquee.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("marquee: {e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    let resolved = config::resolve(&file_config, args.shows_url.as_deref(), args.out.as_deref());

    log::info!("Marquee starting up (shows: {})", resolved.shows_url);

    if args.export {
        return run_export(&resolved).await;
    }

    tui::run(resolved)
}

/// Headless export: fetch the catalog, write the .ics, print where it went.
async fn run_export(config: &ResolvedConfig) -> std::io::Result<()> {
    let source = HttpCatalog::new(config.shows_url.clone());
    let shows = match source.fetch().await {
        Ok(shows) => shows,
        Err(e) => {
            eprintln!("marquee: failed to load shows: {e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    match calendar::export_to_dir(&shows, &config.band_name, &config.export_dir) {
        Ok(path) => {
            println!("Calendar saved to {}", path.display());
            Ok(())
        }
        Err(ExportError::NoShows) => {
            println!("No shows to export");
            Ok(())
        }
        Err(ExportError::Io(e)) => Err(e),
    }
}
