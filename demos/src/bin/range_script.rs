// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted date range picker session and prints the outcome.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::info;
use understory_date_range_demos::{Script, replay};

#[derive(Debug, Parser)]
#[command(about = "Replay a scripted date range picker session")]
struct Args {
    /// Session script (TOML).
    script: PathBuf,
    /// Overrides the script's `today`.
    #[arg(long)]
    today: Option<NaiveDate>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let script = Script::load(&args.script)?;
    script.logging.init();

    let today = args
        .today
        .or(script.today)
        .unwrap_or_else(|| Local::now().date_naive());
    info!(script = %args.script.display(), %today, events = script.events.len(), "replaying session");

    let report = replay(script, today);
    println!("{report}");
    Ok(())
}
