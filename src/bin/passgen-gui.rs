use std::path::Path;

use passgen::core::Config;
use passgen::{gui, logging};

fn main() -> eframe::Result<()> {
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let config = Config::load();
    if let Err(e) = logging::init_logging(&config, None) {
        eprintln!("Failed to set up logging: {}", e);
        if let Err(e) = logging::init_stderr_logging(config.log_level) {
            eprintln!("Failed to set up stderr logging: {}", e);
        }
    }
    config.log_warnings();
    log::debug!("Loaded config: {:?}", config);

    gui::run(&config)
}
