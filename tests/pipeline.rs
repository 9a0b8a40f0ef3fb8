// tests/pipeline.rs
//
// Whole pipeline against a fake vendor page, a fake router and a spy notifier.
use std::cell::RefCell;

use chrono::{DateTime, FixedOffset, Utc};
use truck_finder::{
    FinderError, Result,
    config::{Format, Options, VendorProfile},
    core::net,
    notify::{Notifier, Webhook},
    routing::{Leg, Router},
    runner,
};

struct FixedRouter;

impl Router for FixedRouter {
    fn directions(&self, _: &str, _: &str, _: DateTime<FixedOffset>) -> Result<Leg> {
        Ok(Leg { distance: "8.1 mi".into(), duration: "17 mins".into() })
    }
}

#[derive(Default)]
struct SpyNotifier {
    sent: RefCell<Vec<String>>,
}

impl Notifier for SpyNotifier {
    fn send(&self, message: &str) -> Result<()> {
        self.sent.borrow_mut().push(message.to_string());
        Ok(())
    }
}

fn sample() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/vendor_page.html"))
        .unwrap()
}

// Ten minutes before the first event in the sample page.
fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 - 600, 0).unwrap()
}

fn options(server: &mockito::Server, format: Format, dry_run: bool) -> Options {
    Options {
        dry_run,
        vendor: VendorProfile {
            vendor: format!("{}/thenakedempanada", server.url()),
            ..Default::default()
        },
        ..Options::new(format)
    }
}

fn serve_sample(server: &mut mockito::Server) -> mockito::Mock {
    server
        .mock("GET", "/thenakedempanada")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(sample())
        .create()
}

#[test]
fn dry_run_prints_but_never_notifies() {
    let mut server = mockito::Server::new();
    let page = serve_sample(&mut server);
    let spy = SpyNotifier::default();
    let client = net::build_client().unwrap();
    let mut out = Vec::new();

    let summary = runner::run(
        &options(&server, Format::Daily, true),
        &client,
        &FixedRouter,
        Some(&spy),
        &now(),
        &mut out,
    )
    .unwrap();

    page.assert();
    assert!(spy.sent.borrow().is_empty());
    assert!(!summary.sent);
    assert_eq!(summary.events_found, 3);

    let printed = String::from_utf8(out).unwrap();
    assert_eq!(printed, format!("{}\n", summary.message));
    assert!(printed.contains("\n\t 11/14 @ Main St, 8.1 mi (17 mins) away. Event from 18:13 to 21:13"));
    assert!(!printed.contains("Brewery Ln"));
}

#[test]
fn live_run_sends_the_printed_message() {
    let mut server = mockito::Server::new();
    let _page = serve_sample(&mut server);
    let spy = SpyNotifier::default();
    let client = net::build_client().unwrap();
    let mut out = Vec::new();

    let summary = runner::run(
        &options(&server, Format::Weekly, false),
        &client,
        &FixedRouter,
        Some(&spy),
        &now(),
        &mut out,
    )
    .unwrap();

    assert!(summary.sent);
    assert_eq!(*spy.sent.borrow(), vec![summary.message.clone()]);

    // all three sample events start within a week of `now`
    assert_eq!(summary.message.matches("\n\t").count(), 3);
    assert!(summary.message.contains("\n\t11/21: @ Farmers Market, 8.1 mi (17 mins) away. Event from 18:00 to 22:00"));

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.starts_with(&summary.message));
    assert!(printed.ends_with("Sending the above message to the webhook...\nMessage sent!\n"));
}

#[test]
fn webhook_receives_the_message_over_http() {
    let mut server = mockito::Server::new();
    let _page = serve_sample(&mut server);
    let hook = server
        .mock("POST", "/api/webhooks/1/t0ken")
        .match_body(mockito::Matcher::Regex("EmpanadaBot Alert".into()))
        .with_status(204)
        .create();

    let client = net::build_client().unwrap();
    let webhook = Webhook::new(client.clone(), format!("{}/api/webhooks/1/t0ken", server.url()));
    let mut out = Vec::new();

    runner::run(
        &options(&server, Format::Daily, false),
        &client,
        &FixedRouter,
        Some(&webhook),
        &now(),
        &mut out,
    )
    .unwrap();

    hook.assert();
}

#[test]
fn page_without_calendar_fails_before_anything_is_printed() {
    let mut server = mockito::Server::new();
    let _page = server
        .mock("GET", "/thenakedempanada")
        .with_body("<html><script>sff.v.vendor_id = 1;</script></html>")
        .create();
    let spy = SpyNotifier::default();
    let client = net::build_client().unwrap();
    let mut out = Vec::new();

    let err = runner::run(
        &options(&server, Format::Daily, false),
        &client,
        &FixedRouter,
        Some(&spy),
        &now(),
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(err, FinderError::CalendarNotFound));
    assert!(out.is_empty());
    assert!(spy.sent.borrow().is_empty());
}

#[test]
fn routing_failure_stops_the_run() {
    struct BrokenRouter;
    impl Router for BrokenRouter {
        fn directions(&self, _: &str, _: &str, _: DateTime<FixedOffset>) -> Result<Leg> {
            Err(FinderError::Routing { status: "OVER_QUERY_LIMIT".into(), message: String::new() })
        }
    }

    let mut server = mockito::Server::new();
    let _page = serve_sample(&mut server);
    let spy = SpyNotifier::default();
    let client = net::build_client().unwrap();
    let mut out = Vec::new();

    let err = runner::run(
        &options(&server, Format::Weekly, false),
        &client,
        &BrokenRouter,
        Some(&spy),
        &now(),
        &mut out,
    )
    .unwrap_err();

    assert!(matches!(err, FinderError::Routing { .. }));
    assert!(spy.sent.borrow().is_empty());
}
