//! `sweep`: run a cleaning robot over a grid and watch it work.
//!
//! Builds a [`Session`](sweep::engine::Session) from the command line,
//! renders each step to the terminal, and prints a summary when the
//! policy has covered the whole surface.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use sweep::prelude::{NullSink, Session, TerminalSink};
use tracing::info;

use crate::cli::Cli;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();
    let step_delay = config.step_delay;
    let mut session = Session::new(config).context("invalid run configuration")?;
    info!(
        policy = session.policy().name(),
        seeds = session.seeds().len(),
        "session ready"
    );

    let report = if cli.quiet {
        session.run(&mut NullSink)?
    } else {
        let mut sink = TerminalSink::stdout(step_delay).with_clear(!cli.no_clear);
        let report = session.run(&mut sink)?;
        if let Some(err) = sink.take_error() {
            return Err(err).context("write frames to stdout");
        }
        report
    };

    println!("{report}");
    Ok(())
}
