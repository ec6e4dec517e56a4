// src/template/launch.rs
//
// Shared `main` body for the template binaries.

use std::process::ExitCode;
use env_logger::Env;
use log::{error, info};
use crate::config::KitConfig;
use crate::template::runner::{Solve, Template};

/// Initializes env_logger at `level` unless `RUST_LOG` overrides it. Logs go to stderr.
pub fn init_logger(level: &str) {
    let env = Env::default()
        .filter_or("RUST_LOG", level)
        .write_style_or("RUST_LOG_STYLE", "auto");

    // A second call (tests, embedding) keeps the first logger
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Loads configuration, falls back to `default_problem` when no problem name is
/// configured, and runs `solver`. Any setup or solve error ends in exit code 1.
pub fn launch<S: Solve>(default_problem: &str, solver: &mut S) -> ExitCode {
    let mut config = match KitConfig::load() {
        Ok(config) => config,
        Err(e) => {
            init_logger("warn");
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logger(&config.log_level);

    if config.problem.is_empty() {
        config.problem = default_problem.to_string();
    }

    match Template::new(config).run(solver) {
        Ok(cases) => {
            info!("Finished {} case(s)", cases);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
