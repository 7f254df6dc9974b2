use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use tabconsole::core::config::{self, CliOverrides, ConsoleConfig};
use tabconsole::{demo, tui};

#[derive(Parser)]
#[command(name = "tabconsole", about = "Tabbed command console for the terminal")]
struct Args {
    /// Tab name (repeat for several tabs)
    #[arg(short, long = "tab", value_name = "NAME")]
    tabs: Vec<String>,

    /// Soft-wrap long output lines instead of scrolling horizontally
    #[arg(long)]
    wrap: bool,

    /// Config file (default: ~/.tabconsole/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the debug log
    #[arg(long, default_value = "tabconsole.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("tabconsole starting up");

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        ConsoleConfig::default()
    });

    let cli = CliOverrides {
        tabs: args.tabs,
        wrap: args.wrap,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(resolved, Arc::new(demo::execute))
}
