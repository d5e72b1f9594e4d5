//! propworks-sim - run a prop scene from the command line
//!
//! Usage: `propworks-sim <scene.toml>`; set `PROPWORKS_LOG` to change
//! verbosity.

use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};
use propworks_sim::{config, logger, run, SceneError, Summary};

fn main() -> ExitCode {
    logger::init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: propworks-sim <scene.toml>");
        return ExitCode::from(2);
    };

    match config::load(&path).and_then(run) {
        Ok(summary) => {
            report(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            exit_code(&e)
        }
    }
}

fn report(summary: &Summary) {
    info!(
        "{} ticks, {} jobs, {} prints",
        summary.ticks,
        summary.completed.len(),
        summary.prints.len()
    );
    info!(
        "arm: {} picks, {} deposits, {} ignored commands",
        summary.picks, summary.deposits, summary.ignored
    );
    if summary.refused > 0 {
        info!("station refused {} items", summary.refused);
    }
    for (slot, id) in summary.vessels.iter().enumerate() {
        info!("vessel {}: '{}'", slot, id);
    }
}

fn exit_code(e: &SceneError) -> ExitCode {
    match e {
        SceneError::Io(_) => ExitCode::from(3),
        _ => ExitCode::FAILURE,
    }
}
