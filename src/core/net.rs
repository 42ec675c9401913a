// src/core/net.rs

// Single blocking GET, JSON body

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::config::{consts::USER_AGENT, SourceOptions};
use crate::error::Result;

pub fn client(opts: &SourceOptions) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(opts.timeout_secs))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET `url` and decode the body. Non-2xx statuses are errors.
pub fn http_get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    logd!("GET {}", url);
    let resp = client.get(url).send()?.error_for_status()?;
    let body = resp.text()?;
    logd!("GET {} → {} bytes", url, body.len());
    Ok(serde_json::from_str(&body)?)
}
