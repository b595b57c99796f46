//! A minimal Moonraker HTTP client.
pub mod status;

use std::time::Duration;

use status::{QueryResponse, Status};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Object groups requested from `/printer/objects/query`.
pub const QUERY_OBJECTS: &str =
    "print_stats&virtual_sdcard&extruder&heater_bed&display_status&toolhead";

/// Upper bound for the whole request, connect included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Reads printer status from a Moonraker instance.
pub struct MoonrakerClient {
    base_url: String,
    client: reqwest::Client,
}

impl MoonrakerClient {
    /// Create a new client.
    ///
    /// * `base_url`: Moonraker address without a trailing slash, e.g.
    ///   `http://192.168.1.100:7125`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: build_client(REQUEST_TIMEOUT),
        }
    }

    /// Replace the default request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn query_url(&self) -> String {
        format!("{}/printer/objects/query?{}", self.base_url, QUERY_OBJECTS)
    }

    /// Fetch a status snapshot. Issues exactly one request and never retries.
    pub async fn query_status(&self) -> Result<Status> {
        let url = self.query_url();
        debug!(%url, "querying printer objects");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| self.map_error(e))?;

        let body = response
            .json::<QueryResponse>()
            .await
            .map_err(|e| self.map_error(e))?;

        Ok(body.result.status)
    }

    fn map_error(&self, err: reqwest::Error) -> Error {
        warn!(base_url = %self.base_url, error = %err, "moonraker query failed");
        if err.is_connect() {
            Error::Unreachable {
                url: self.base_url.clone(),
            }
        } else if err.is_timeout() {
            Error::Timeout {
                url: self.base_url.clone(),
            }
        } else {
            Error::Fetch(err.to_string())
        }
    }
}

fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_lists_all_groups() {
        let client = MoonrakerClient::new("http://192.168.1.100:7125");
        assert_eq!(
            client.query_url(),
            "http://192.168.1.100:7125/printer/objects/query?print_stats&virtual_sdcard&extruder&heater_bed&display_status&toolhead"
        );
    }
}
