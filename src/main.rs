use clap::Parser;
use log::LevelFilter;
use std::error::Error;
use std::path::Path;

use passgen::cli::{self, Args};
use passgen::core::Config;
use passgen::logging;

fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    let level_override = args.verbose.then_some(LevelFilter::Debug);
    if let Err(e) = logging::init_logging(&config, level_override) {
        eprintln!("Failed to set up logging: {}", e);
        if let Err(e) = logging::init_stderr_logging(level_override.unwrap_or(config.log_level)) {
            eprintln!("Failed to set up stderr logging: {}", e);
        }
    }
    config.log_warnings();

    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    cli::handlers::run(&args, &config).map_err(|e| {
        log::error!("passgen failed: {}", e);
        e
    })
}
