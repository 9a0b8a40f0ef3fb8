// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Message layout selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Daily,
    Weekly,
}

/// Who we are scraping and how they are named in the message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VendorProfile {
    /// StreetFoodFinder identifier or a full page URL.
    pub vendor: String,
    pub display_name: String,
    pub bot_name: String,
}

impl Default for VendorProfile {
    fn default() -> Self {
        Self {
            vendor: DEFAULT_VENDOR.into(),
            display_name: DEFAULT_VENDOR_NAME.into(),
            bot_name: DEFAULT_BOT_NAME.into(),
        }
    }
}

impl VendorProfile {
    /// Full page URL: identifiers are appended to the StreetFoodFinder base.
    pub fn page_url(&self) -> String {
        let v = self.vendor.trim();
        if v.starts_with("http://") || v.starts_with("https://") {
            v.to_string()
        } else {
            format!("{}{}", VENDOR_BASE_URL, v.trim_start_matches('/'))
        }
    }

    pub fn banner(&self) -> String {
        format!("**!!!     __{} Alert__     !!!**\n\n", self.bot_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub format: Format,
    pub location: String,        // source address to route from
    pub dry_run: bool,           // print only, skip the webhook
    pub vendor: VendorProfile,
    pub keys_dir: PathBuf,
}

impl Options {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            location: DEFAULT_SOURCE.into(),
            dry_run: false,
            vendor: VendorProfile::default(),
            keys_dir: PathBuf::from(DEFAULT_KEYS_DIR),
        }
    }
}
