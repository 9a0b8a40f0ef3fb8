// src/notify.rs
use reqwest::blocking::Client;
use serde::Serialize;

use crate::error::{FinderError, Result};

/// Somewhere a finished message can be delivered.
pub trait Notifier {
    fn send(&self, message: &str) -> Result<()>;
}

/// Discord-style incoming webhook: POST `{"content": "..."}`.
pub struct Webhook {
    client: Client,
    url: String,
}

#[derive(Serialize)]
struct Payload<'a> {
    content: &'a str,
}

impl Webhook {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

impl Notifier for Webhook {
    fn send(&self, message: &str) -> Result<()> {
        // The webhook URL is itself the secret; strip it from transport errors too.
        let resp = self
            .client
            .post(&self.url)
            .json(&Payload { content: message })
            .send()
            .map_err(|e| e.without_url())?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FinderError::Status { status, url: "<webhook>".into() });
        }
        logf!("Webhook: delivered {} chars ({})", message.chars().count(), status);
        Ok(())
    }
}
