// src/core/net.rs

// Blocking HTTP over reqwest. One client per run, shared by every stage.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};
use crate::error::{FinderError, Result};

/// Client with the crate user-agent and 15 s connect/read timeouts.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(TIMEOUT_SECS))
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// GET `url` and return the body text. Any non-2xx status is an error.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    logd!("GET {url}");
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FinderError::Status { status, url: url.to_string() });
    }
    let body = resp.text()?;
    logd!("GET {url} -> {} ({} bytes)", status, body.len());
    Ok(body)
}
