//! Brickbust entry point

use std::error::Error;

use brickbust::Config;
use brickbust::platform;

fn main() {
    env_logger::init();

    let config = Config::load();
    log::info!("Starting {}", config.title);

    if let Err(err) = platform::run(config) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}
