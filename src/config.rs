use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Environment variable read by [`Settings::from_env`].
pub const MOONRAKER_URL_VAR: &str = "MOONRAKER_URL";

/// Plugin settings as handed over by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub moonraker_url: String,
    /// Remaining host settings (style, refresh interval, ...), passed through
    /// to the renderer untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    pub fn new(moonraker_url: impl Into<String>) -> Self {
        Self {
            moonraker_url: moonraker_url.into(),
            extra: Map::new(),
        }
    }

    /// Reads settings from the environment. An unset URL is left empty so
    /// that validation reports it the same way as an empty host setting.
    pub fn from_env() -> Self {
        Self::new(std::env::var(MOONRAKER_URL_VAR).unwrap_or_default())
    }

    /// Normalized base URL: surrounding whitespace and trailing slashes removed.
    pub fn base_url(&self) -> Result<String> {
        let url = self.moonraker_url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(Error::NotConfigured);
        }
        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn strips_whitespace_and_trailing_slashes() {
        let settings = Settings::new("  http://192.168.1.100:7125// ");
        assert_eq!(settings.base_url().unwrap(), "http://192.168.1.100:7125");
    }

    #[test]
    fn empty_url_is_not_configured() {
        for url in ["", "   ", "/", " // "] {
            let err = Settings::new(url).base_url().unwrap_err();
            assert!(matches!(err, Error::NotConfigured), "{url:?}");
        }
    }

    #[test]
    fn missing_key_deserializes_to_empty() {
        let settings: Settings = serde_json::from_value(json!({"refresh": 60})).unwrap();
        assert_eq!(settings.moonraker_url, "");
        assert_eq!(settings.extra["refresh"], 60);
        assert!(settings.base_url().is_err());
    }

    #[test]
    fn deserializes_host_settings() {
        let settings: Settings =
            serde_json::from_value(json!({"moonraker_url": "http://printer.local"})).unwrap();
        assert_eq!(settings.base_url().unwrap(), "http://printer.local");
    }
}
