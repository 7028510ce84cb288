// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # ta-roster
//!
//! Command-line front end for the roster. Each invocation loads the data
//! file, runs one subcommand and, if the roster changed, saves it back.
//!
//! The data file defaults to `data/roster.json` and can be moved with
//! `--data` or the `TA_ROSTER_DATA` environment variable. A missing file
//! starts an empty roster.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod report;

#[cfg(test)]
mod tests;

use clap::Parser;
use cli::{Action, Args};
use color_eyre::{Result, eyre::Context};
use std::io::Write;
use ta_roster::{Roster, TransitionResult, apply};
use ta_roster_persistence::JsonStore;
use tracing::info;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    match run(args, &mut stdout) {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Loads the roster, performs the requested action and saves any change.
fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let store: JsonStore = JsonStore::new(args.data);
    let path: String = store.path().display().to_string();
    let roster: Roster = store
        .load()
        .wrap_err_with(|| format!("failed to load roster from {path}"))?;

    match args.command.into_action()? {
        Action::Mutate(command) => {
            let name: &'static str = command.name();
            let result: TransitionResult = apply(&roster, command)?;
            store
                .save(&result.new_roster)
                .wrap_err_with(|| format!("failed to save roster to {path}"))?;
            info!(command = name, roster = %result.new_roster.summary(), "Roster updated");
            report::write_outcome(out, &result.outcome)?;
        }
        Action::Report(view) => report::write_report(out, &roster, &view)?,
    }
    Ok(())
}
