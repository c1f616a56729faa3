//! Walk every threshold and log one message per level
//!
//! Shows which levels survive each threshold on the console.
//!
//! Run with: cargo run --example level_walk

use ultralog::prelude::*;
use ultralog::{debug, error, fatal, info, trace, warning};

fn log_all(param: u8) {
    fatal!("level_walk", "a fatal message, param {}", param);
    error!("level_walk", "an error message, param {}", param);
    warning!("level_walk", "a warning message, param {}", param);
    info!("level_walk", "an info message, param {}", param);
    debug!("level_walk", "a debug message, param {}", param);
    trace!("level_walk", "a trace message, param {}", param);
}

fn main() -> Result<()> {
    ultralog::init_from_env()?;

    println!("Use default log level ({}):", ultralog::level());
    log_all(0);
    println!();

    for threshold in LogLevel::ALL.iter().rev() {
        println!("Set log level: {}", threshold);
        ultralog::set_level(*threshold);
        log_all(threshold.rank());
        println!();
    }

    ultralog::shutdown()
}
