// src/enrich.rs
use chrono::{DateTime, FixedOffset};

use crate::config::consts::UTC_OFFSET_HOURS;
use crate::error::{FinderError, Result};
use crate::event::{EnrichedEvent, Event};
use crate::routing::Router;

/// The fixed offset calendar times are rendered in.
pub fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(UTC_OFFSET_HOURS * 3600).expect("offset within a day")
}

/// Epoch seconds as a local zoned timestamp.
pub fn to_local(epoch: i64) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp(epoch, 0).map(|utc| utc.with_timezone(&local_offset()))
}

/// Local start time of an event, or a `BadEvent` naming its position.
pub fn start_of(index: usize, event: &Event) -> Result<DateTime<FixedOffset>> {
    local_time(index, "start", event.starttime)
}

fn local_time(index: usize, which: &str, epoch: Option<i64>) -> Result<DateTime<FixedOffset>> {
    let epoch = epoch.ok_or_else(|| FinderError::BadEvent {
        index,
        reason: format!("missing {which} time"),
    })?;
    to_local(epoch).ok_or_else(|| FinderError::BadEvent {
        index,
        reason: format!("{which} time {epoch} out of range"),
    })
}

/// Attach local date/time strings and travel info from `source` to one event.
/// `index` is only used to label errors.
pub fn enrich_event(
    index: usize,
    event: &Event,
    source: &str,
    router: &dyn Router,
) -> Result<EnrichedEvent> {
    let start = local_time(index, "start", event.starttime)?;
    let end = local_time(index, "end", event.endtime)?;

    let destination = event.destination().ok_or_else(|| FinderError::BadEvent {
        index,
        reason: "no address".into(),
    })?;

    let leg = router.directions(source, destination, start)?;
    logd!("Enrich: #{index} {destination:?} {} ({})", leg.distance, leg.duration);

    Ok(EnrichedEvent {
        start,
        date: start.format("%m/%d").to_string(),
        starttime: start.format("%H:%M").to_string(),
        endtime: end.format("%H:%M").to_string(),
        shortstreet: event.shortstreet.clone(),
        streetaddress: event.streetaddress.clone(),
        fulladdress: event.fulladdress.clone(),
        distance: leg.distance,
        traveltime: leg.duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Leg;
    use std::cell::RefCell;

    /// Records every lookup and answers with a fixed leg.
    #[derive(Default)]
    struct FakeRouter {
        calls: RefCell<Vec<(String, String, i64)>>,
    }

    impl Router for FakeRouter {
        fn directions(&self, o: &str, d: &str, dep: DateTime<FixedOffset>) -> Result<Leg> {
            self.calls.borrow_mut().push((o.into(), d.into(), dep.timestamp()));
            Ok(Leg { distance: "5.2 mi".into(), duration: "12 mins".into() })
        }
    }

    fn event() -> Event {
        Event {
            starttime: Some(1_700_000_000),
            endtime: Some(1_700_010_800),
            streetaddress: "100 Main St".into(),
            shortstreet: "Main St".into(),
            fulladdress: "100 Main St, Cary, NC".into(),
        }
    }

    #[test]
    fn epoch_renders_at_fixed_minus_four() {
        let t = to_local(1_700_000_000).unwrap();
        assert_eq!(t.to_rfc3339(), "2023-11-14T18:13:20-04:00");
        assert_eq!(t.format("%m/%d %H:%M").to_string(), "11/14 18:13");
    }

    #[test]
    fn enrich_fills_derived_fields() {
        let router = FakeRouter::default();
        let e = enrich_event(0, &event(), "5200 Paramount Parkway", &router).unwrap();

        assert_eq!(e.date, "11/14");
        assert_eq!(e.starttime, "18:13");
        assert_eq!(e.endtime, "21:13");
        assert_eq!(e.distance, "5.2 mi");
        assert_eq!(e.traveltime, "12 mins");
        assert_eq!(
            e.summary(),
            "@ Main St, 5.2 mi (12 mins) away. Event from 18:13 to 21:13"
        );
        assert_eq!(
            router.calls.borrow().as_slice(),
            &[("5200 Paramount Parkway".to_string(), "100 Main St".to_string(), 1_700_000_000)]
        );
    }

    #[test]
    fn missing_start_fails_before_routing() {
        let router = FakeRouter::default();
        let ev = Event { starttime: None, ..event() };
        let err = enrich_event(3, &ev, "here", &router).unwrap_err();
        assert!(matches!(err, FinderError::BadEvent { index: 3, .. }));
        assert!(router.calls.borrow().is_empty());
    }

    #[test]
    fn missing_address_fails() {
        let router = FakeRouter::default();
        let ev = Event { streetaddress: String::new(), fulladdress: String::new(), ..event() };
        assert!(matches!(
            enrich_event(0, &ev, "here", &router),
            Err(FinderError::BadEvent { .. })
        ));
    }
}
