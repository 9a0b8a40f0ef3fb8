// src/message.rs
//
// Renders the webhook message. Events are only enriched (one routing call
// each) once they are known to fall inside the message window.

use chrono::{DateTime, Duration, TimeZone};

use crate::config::consts::{DAILY_WINDOW_HOURS, WEEKLY_WINDOW_DAYS};
use crate::config::{Format, VendorProfile};
use crate::enrich::{enrich_event, start_of};
use crate::error::Result;
use crate::event::Event;
use crate::routing::Router;

pub const NOT_SCHEDULED: &str = "\n\tnot scheduled :(";

pub fn build_message<Tz: TimeZone>(
    format: Format,
    events: &[Event],
    source: &str,
    router: &dyn Router,
    vendor: &VendorProfile,
    now: &DateTime<Tz>,
) -> Result<String> {
    match format {
        Format::Daily => build_daily_message(events, source, router, vendor, now),
        Format::Weekly => build_weekly_message(events, source, router, vendor, now),
    }
}

/// Everything starting in the next 24 hours.
///
/// Events are put in start order first, then scanned until the first one
/// outside the window; nothing after that point is looked up. Events with no
/// usable start time sort last, so they only fail the run when the scan
/// reaches them.
pub fn build_daily_message<Tz: TimeZone>(
    events: &[Event],
    source: &str,
    router: &dyn Router,
    vendor: &VendorProfile,
    now: &DateTime<Tz>,
) -> Result<String> {
    let mut message = vendor.banner();
    message.push_str(&format!("_In the next 24 hours, {} is..._", vendor.display_name));

    let cutoff = now.fixed_offset() + Duration::hours(DAILY_WINDOW_HOURS);

    let mut order: Vec<_> = events
        .iter()
        .enumerate()
        .map(|(i, ev)| (start_of(i, ev).ok(), i))
        .collect();
    order.sort_by_key(|&(start, i)| (start.is_none(), start, i));

    let mut any = false;
    for (start, i) in order {
        let start = match start {
            Some(s) => s,
            None => start_of(i, &events[i])?,
        };
        if start >= cutoff {
            logd!("Daily: stop at #{i}, starts {start}");
            break;
        }
        let e = enrich_event(i, &events[i], source, router)?;
        message.push_str(&format!("\n\t {} {}", e.date, e.summary()));
        any = true;
    }
    if !any {
        message.push_str(NOT_SCHEDULED);
    }
    Ok(message)
}

/// Everything starting in the next 7 days, in page order.
pub fn build_weekly_message<Tz: TimeZone>(
    events: &[Event],
    source: &str,
    router: &dyn Router,
    vendor: &VendorProfile,
    now: &DateTime<Tz>,
) -> Result<String> {
    let mut message = vendor.banner();
    message.push_str(&format!("_{} Upcoming Events..._", vendor.display_name));

    let cutoff = now.fixed_offset() + Duration::days(WEEKLY_WINDOW_DAYS);

    for (i, ev) in events.iter().enumerate() {
        if start_of(i, ev)? >= cutoff {
            continue;
        }
        let e = enrich_event(i, ev, source, router)?;
        message.push_str(&format!("\n\t{}: {}", e.date, e.summary()));
    }
    Ok(message)
}
