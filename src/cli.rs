// src/cli.rs
use std::{io, path::PathBuf};

use chrono::Utc;
use clap::{Parser, ValueEnum};

use crate::config::consts::*;
use crate::config::{Credentials, Format, Options, VendorProfile};
use crate::core::net;
use crate::error::Result;
use crate::notify::{Notifier, Webhook};
use crate::routing::GoogleDirections;
use crate::runner::{self, RunSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Daily,
    Weekly,
}

impl From<FormatArg> for Format {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Daily => Format::Daily,
            FormatArg::Weekly => Format::Weekly,
        }
    }
}

/// Find out where a food truck will be and how far away that is.
#[derive(Debug, Parser)]
#[command(name = "truck_finder", version, about)]
pub struct Args {
    /// Message layout: the next 24 hours, or the next 7 days
    #[arg(value_enum)]
    pub format: FormatArg,

    /// Source location to measure distance to the truck from
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub location: String,

    /// Run without sending a message to the webhook
    #[arg(short, long)]
    pub debug: bool,

    /// StreetFoodFinder vendor id, or a full page URL
    #[arg(long, default_value = DEFAULT_VENDOR)]
    pub vendor: String,

    /// Vendor name used in the message headers
    #[arg(long, default_value = DEFAULT_VENDOR_NAME)]
    pub vendor_name: String,

    /// Bot name used in the message banner
    #[arg(long, default_value = DEFAULT_BOT_NAME)]
    pub bot_name: String,

    /// Directory holding the `maps` and `discord` key files
    #[arg(long, default_value = DEFAULT_KEYS_DIR)]
    pub keys_dir: PathBuf,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also append debug logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn options(&self) -> Options {
        Options {
            format: self.format.into(),
            location: self.location.clone(),
            dry_run: self.debug,
            vendor: VendorProfile {
                vendor: self.vendor.clone(),
                display_name: self.vendor_name.clone(),
                bot_name: self.bot_name.clone(),
            },
            keys_dir: self.keys_dir.clone(),
        }
    }
}

/// Build the real collaborators from `args` and run the pipeline once.
pub fn run(args: &Args) -> Result<RunSummary> {
    let opts = args.options();
    logf!("Run: {:?} for {} from {:?}", opts.format, opts.vendor.page_url(), opts.location);

    let creds = Credentials::load(&opts.keys_dir, !opts.dry_run)?;
    let client = net::build_client()?;

    let router = GoogleDirections::new(client.clone(), creds.routing_key.clone());
    let webhook = creds.webhook_url.as_ref().map(|url| Webhook::new(client.clone(), url.clone()));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner::run(
        &opts,
        &client,
        &router,
        webhook.as_ref().map(|w| w as &dyn Notifier),
        &Utc::now(),
        &mut out,
    )
}
