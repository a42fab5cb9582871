//! linelog demo binary
//!
//! Usage:
//!   linelog                          Log from 3 worker threads to app.log + stdout
//!   linelog --file run --level error Tag records with ERROR, write run.log
//!   linelog --file "" --no-console   Emit nowhere (lock/format path only)

use clap::Parser;
use linelog::cli::Cli;
use linelog::{get_instance, init_tracing, Level};
use std::thread;
use tracing::warn;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let logger = get_instance(&cli.file, !cli.no_console);

    let mut handles = Vec::with_capacity(cli.threads);
    for i in 0..cli.threads {
        let level = cli.level;
        let spawned = thread::Builder::new()
            .name(format!("worker-{i}"))
            .spawn(move || {
                if i == 0 {
                    // The first worker drives the stored level; the rest tag
                    // each record explicitly.
                    logger.set_level(level);
                    logger.log_current("worker", &format!("message at stored {level}"));
                    logger.log_current("worker", "second message at stored level");
                } else {
                    logger.log(level, "worker", &format!("message from worker {i}"));
                    logger.log(Level::Info, "worker", &format!("worker {i} done"));
                }
            });
        match spawned {
            Ok(handle) => handles.push(handle),
            Err(e) => warn!("failed to spawn worker {}: {}", i, e),
        }
    }

    for handle in handles {
        let _ = handle.join();
    }
}
