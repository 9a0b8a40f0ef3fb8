// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::Result;
use truck_finder::{cli, error::FinderError, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    log::init(args.verbose, args.log_file.as_deref())?;

    match cli::run(&args) {
        Ok(summary) => {
            truck_finder::logf!("Done: {} event(s) on page, sent={}", summary.events_found, summary.sent);
            Ok(())
        }
        Err(FinderError::CalendarNotFound) => {
            eprintln!("{}", FinderError::CalendarNotFound);
            std::process::exit(1);
        }
        // color-eyre prints the report; logging it as well would show it twice
        Err(e) => Err(e.into()),
    }
}
