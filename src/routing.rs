// src/routing.rs
//
// Driving distance/time lookups. `Router` is the seam enrichment depends on;
// `GoogleDirections` is the real provider.

use chrono::{DateTime, FixedOffset, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::consts::DIRECTIONS_URL;
use crate::error::{FinderError, Result};

/// Human-readable travel info for one trip, as the provider words it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    pub distance: String, // e.g. "5.2 mi"
    pub duration: String, // e.g. "12 mins"
}

pub trait Router {
    /// Driving directions from `origin` to `destination`, leaving at `departure`.
    fn directions(
        &self,
        origin: &str,
        destination: &str,
        departure: DateTime<FixedOffset>,
    ) -> Result<Leg>;
}

/// Google Directions JSON API.
pub struct GoogleDirections {
    client: Client,
    key: String,
    endpoint: String,
}

impl GoogleDirections {
    pub fn new(client: Client, key: impl Into<String>) -> Self {
        Self { client, key: key.into(), endpoint: DIRECTIONS_URL.to_string() }
    }

    /// Point at another endpoint (a local fake in tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<RouteJson>,
}

#[derive(Deserialize)]
struct RouteJson {
    #[serde(default)]
    legs: Vec<LegJson>,
}

#[derive(Deserialize)]
struct LegJson {
    distance: TextValue,
    duration: TextValue,
}

#[derive(Deserialize)]
struct TextValue {
    text: String,
}

impl Router for GoogleDirections {
    fn directions(
        &self,
        origin: &str,
        destination: &str,
        departure: DateTime<FixedOffset>,
    ) -> Result<Leg> {
        // The API refuses departure times in the past.
        let departure_ts = departure.timestamp().max(Utc::now().timestamp()).to_string();

        logd!("Directions: {origin:?} -> {destination:?} at {departure_ts}");
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", "driving"),
                ("departure_time", departure_ts.as_str()),
                ("key", self.key.as_str()),
            ])
            .send()
            .map_err(|e| e.without_url())?;

        let status = resp.status();
        if !status.is_success() {
            // Don't echo the query string; it carries the key.
            return Err(FinderError::Status { status, url: self.endpoint.clone() });
        }

        let body: DirectionsResponse = serde_json::from_str(&resp.text().map_err(|e| e.without_url())?)?;
        match body.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" | "NOT_FOUND" => {
                return Err(FinderError::NoRoute {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                });
            }
            other => {
                return Err(FinderError::Routing {
                    status: other.to_string(),
                    message: body.error_message.unwrap_or_default(),
                });
            }
        }

        let leg = body
            .routes
            .into_iter()
            .next()
            .and_then(|r| r.legs.into_iter().next())
            .ok_or_else(|| FinderError::NoRoute {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })?;

        Ok(Leg { distance: leg.distance.text, duration: leg.duration.text })
    }
}
