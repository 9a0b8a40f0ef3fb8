// src/event.rs
//
// Calendar records as they come off the vendor page, and the enriched
// form the message is rendered from.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// One scheduled appearance, straight from the page's JSON.
/// Only the fields we use are kept; the page carries many more.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Event {
    /// Epoch seconds. `None` when the page left it null or blank.
    #[serde(default, deserialize_with = "epoch_opt")]
    pub starttime: Option<i64>,
    #[serde(default, deserialize_with = "epoch_opt")]
    pub endtime: Option<i64>,
    #[serde(default)]
    pub streetaddress: String,
    #[serde(default)]
    pub shortstreet: String,
    #[serde(default)]
    pub fulladdress: String,
}

impl Event {
    /// Where to route to: the street address, else the full address.
    pub fn destination(&self) -> Option<&str> {
        [self.streetaddress.as_str(), self.fulladdress.as_str()]
            .into_iter()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

/// An event with local times and travel info attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichedEvent {
    pub start: DateTime<FixedOffset>,
    pub date: String,      // MM/DD
    pub starttime: String, // HH:MM
    pub endtime: String,   // HH:MM
    pub shortstreet: String,
    pub streetaddress: String,
    pub fulladdress: String,
    pub distance: String,
    pub traveltime: String,
}

impl EnrichedEvent {
    /// `@ <street>, <distance> (<time>) away. Event from <start> to <end>`
    pub fn summary(&self) -> String {
        format!(
            "@ {}, {} ({}) away. Event from {} to {}",
            self.shortstreet, self.distance, self.traveltime, self.starttime, self.endtime
        )
    }
}

/// Accept `123`, `123.0`, `"123"`, `""` and `null` for a timestamp.
fn epoch_opt<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(de)? {
        None => Ok(None),
        Some(Raw::Int(v)) => Ok(Some(v)),
        Some(Raw::Float(v)) => Ok(Some(v as i64)),
        Some(Raw::Text(t)) => {
            let t = t.trim();
            if t.is_empty() {
                return Ok(None);
            }
            t.parse::<i64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid epoch timestamp {t:?}")))
        }
    }
}
