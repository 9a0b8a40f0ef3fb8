// src/runner.rs
use std::io::Write;

use chrono::{DateTime, TimeZone};
use reqwest::blocking::Client;

use crate::{
    config::Options,
    error::Result,
    message,
    notify::Notifier,
    routing::Router,
    specs,
};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub events_found: usize,
    pub message: String,
    pub sent: bool,
}

/// One full pass: fetch → extract → enrich → render → print → deliver.
///
/// The composed message is always written to `out`. It is handed to
/// `notifier` only when this is not a dry run.
pub fn run<Tz: TimeZone>(
    opts: &Options,
    client: &Client,
    router: &dyn Router,
    notifier: Option<&dyn Notifier>,
    now: &DateTime<Tz>,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    let url = opts.vendor.page_url();
    let events = specs::calendar::fetch_and_extract(client, &url)?;

    let message = message::build_message(
        opts.format,
        &events,
        &opts.location,
        router,
        &opts.vendor,
        now,
    )?;
    writeln!(out, "{message}")?;

    let sent = match notifier {
        _ if opts.dry_run => {
            logf!("Dry run: not sending");
            false
        }
        Some(n) => {
            writeln!(out, "Sending the above message to the webhook...")?;
            n.send(&message)?;
            writeln!(out, "Message sent!")?;
            true
        }
        None => {
            logw!("No webhook configured; message not sent");
            false
        }
    };

    Ok(RunSummary { events_found: events.len(), message, sent })
}
