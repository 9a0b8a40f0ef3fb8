// src/specs/calendar.rs
//
// StreetFoodFinder vendor pages ship their schedule as a script variable:
//
//   sff.v.vendor_locations = [{"starttime":1700000000, ...}, ...];
//
// We find that line in a <script> block and parse the right-hand side.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::blocking::Client;

use crate::core::{html, net};
use crate::error::{FinderError, Result};
use crate::event::Event;

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sff\.v\.vendor_locations = (.*);").expect("assignment pattern")
});

static NULL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnull\b").expect("null pattern"));

/// GET the vendor page and pull its calendar.
pub fn fetch_and_extract(client: &Client, url: &str) -> Result<Vec<Event>> {
    let doc = net::http_get(client, url)?;
    let events = extract_events(&doc)?;
    logf!("Calendar: {} event(s) from {}", events.len(), url);
    Ok(events)
}

/// Raw JSON text of the calendar assignment, nulls replaced by `""`.
/// When several scripts carry the assignment, the last one wins.
pub fn find_calendar_json(doc: &str) -> Option<String> {
    let mut found = None;
    for body in html::script_bodies(doc) {
        if let Some(cap) = ASSIGNMENT.captures(body) {
            found = Some(cap[1].to_string());
        }
    }
    found
        .filter(|s| !s.trim().is_empty())
        .map(|s| NULL_TOKEN.replace_all(&s, r#""""#).into_owned())
}

/// Parse the page's events, preserving page order.
pub fn extract_events(doc: &str) -> Result<Vec<Event>> {
    let json = find_calendar_json(doc).ok_or(FinderError::CalendarNotFound)?;
    logd!("Calendar: {} bytes of JSON", json.len());
    Ok(serde_json::from_str(&json)?)
}
