//! Printer object snapshot returned by `/printer/objects/query`.
//!
//! Every object group and every field is optional. Missing values and JSON
//! `null` both decode to the field's default so that a partially configured
//! printer (no heated bed, no display) still yields a usable snapshot.
use serde::{Deserialize, Deserializer, Serialize};
use smol_str::SmolStr;

/// Envelope of a Moonraker JSON-RPC style response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub result: QueryResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResult {
    pub status: Status,
}

/// The object groups this plugin reads. `toolhead` is queried but unused.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Status {
    #[serde(default, deserialize_with = "null_as_default")]
    pub print_stats: PrintStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub virtual_sdcard: VirtualSdcard,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extruder: Heater,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heater_bed: Heater,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_status: DisplayStatus,
}

impl Status {
    /// Completion fraction. The file-based `virtual_sdcard` value wins; the
    /// `M73`-driven `display_status` value is the fallback.
    pub fn progress(&self) -> f64 {
        self.virtual_sdcard
            .progress
            .or(self.display_status.progress)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PrintStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: PrintState,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: SmolStr,
    /// Seconds spent actually printing.
    #[serde(default, deserialize_with = "null_as_default")]
    pub print_duration: f64,
    /// Seconds since the job started, pauses included.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_duration: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct VirtualSdcard {
    #[serde(default)]
    pub progress: Option<f64>,
}

/// Temperatures of a heater object (`extruder`, `heater_bed`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Heater {
    #[serde(default, deserialize_with = "null_as_default")]
    pub temperature: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DisplayStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: SmolStr,
    #[serde(default)]
    pub progress: Option<f64>,
}

/// `print_stats.state` as reported by Klipper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "SmolStr", into = "SmolStr")]
pub enum PrintState {
    Printing,
    Paused,
    Complete,
    Error,
    #[default]
    Standby,
    Cancelled,
    Other(SmolStr),
}

impl PrintState {
    pub fn as_str(&self) -> &str {
        match self {
            PrintState::Printing => "printing",
            PrintState::Paused => "paused",
            PrintState::Complete => "complete",
            PrintState::Error => "error",
            PrintState::Standby => "standby",
            PrintState::Cancelled => "cancelled",
            PrintState::Other(raw) => raw,
        }
    }

    /// Human readable label.
    pub fn label(&self) -> SmolStr {
        match self {
            PrintState::Printing => "Printing".into(),
            PrintState::Paused => "Paused".into(),
            PrintState::Complete => "Complete ✓".into(),
            PrintState::Error => "Error".into(),
            PrintState::Standby => "Standby".into(),
            PrintState::Cancelled => "Cancelled".into(),
            PrintState::Other(raw) => capitalize(raw).into(),
        }
    }

    /// CSS class used by the template to pick a colour.
    pub fn css_class(&self) -> &'static str {
        match self {
            PrintState::Printing => "state-printing",
            PrintState::Paused => "state-paused",
            PrintState::Complete => "state-complete",
            PrintState::Error | PrintState::Cancelled => "state-error",
            PrintState::Standby | PrintState::Other(_) => "state-standby",
        }
    }
}

impl From<SmolStr> for PrintState {
    fn from(raw: SmolStr) -> Self {
        match raw.as_str() {
            "printing" => PrintState::Printing,
            "paused" => PrintState::Paused,
            "complete" => PrintState::Complete,
            "error" => PrintState::Error,
            "standby" => PrintState::Standby,
            "cancelled" => PrintState::Cancelled,
            _ => PrintState::Other(raw),
        }
    }
}

impl From<PrintState> for SmolStr {
    fn from(state: PrintState) -> Self {
        match state {
            PrintState::Other(raw) => raw,
            known => SmolStr::new(known.as_str()),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
