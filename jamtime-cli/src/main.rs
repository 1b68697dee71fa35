//! JAMTime CLI - terminal clock and converter for JAM Common Era timeslots
//!
//! This is a thin host around jamtime-core: it owns the clock, the refresh
//! timer and the terminal, and forwards every typed line to the interpreter.

mod config;
mod display;
mod live;
mod logging;
mod repl;
mod ticker;

use clap::Parser;
use config::{Cli, HostConfig, Mode};
use jamtime_core::{Interpreter, Response};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = HostConfig::from(Cli::parse());
    logging::init_tracing(&config.log_level)?;
    debug!(?config, "starting jamtime");

    let interp = Arc::new(Interpreter::new(config.zone));

    match config.mode {
        Mode::Repl => repl::run_repl(interp).await?,
        Mode::Clock => live::run_clock(interp, config.refresh).await?,
        Mode::Exec { line } => return Ok(exec_line(&interp, &line.join(" "))),
    }

    Ok(ExitCode::SUCCESS)
}

// One-shot mode: print the result, fail the process on a command error
fn exec_line(interp: &Interpreter, line: &str) -> ExitCode {
    match interp.execute(line) {
        Ok(Response::Display(text)) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(Response::Clear) | Ok(Response::Empty) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", display::render_error(&e));
            ExitCode::FAILURE
        }
    }
}
