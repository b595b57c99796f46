use serde::Serialize;
use smol_str::SmolStr;

use crate::format::{
    display_filename, estimate_remaining, format_duration, progress_percent, round1,
};
use crate::moonraker::status::Status;

/// Values handed to the display template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayData {
    /// Raw Klipper state, e.g. `printing`.
    pub state: SmolStr,
    pub state_label: SmolStr,
    pub state_class: &'static str,
    pub filename: String,
    pub progress_pct: f64,
    pub nozzle_actual: f64,
    pub nozzle_target: f64,
    pub bed_actual: f64,
    pub bed_target: f64,
    pub elapsed: String,
    pub remaining: String,
    /// `display_status.message`, usually set by `M117` from the slicer.
    pub layer_info: SmolStr,
}

impl DisplayData {
    pub fn from_status(status: &Status) -> Self {
        let print_stats = &status.print_stats;
        let progress = status.progress();

        Self {
            state: print_stats.state.as_str().into(),
            state_label: print_stats.state.label(),
            state_class: print_stats.state.css_class(),
            filename: display_filename(&print_stats.filename),
            progress_pct: progress_percent(progress),
            nozzle_actual: round1(status.extruder.temperature),
            nozzle_target: round1(status.extruder.target),
            bed_actual: round1(status.heater_bed.temperature),
            bed_target: round1(status.heater_bed.target),
            elapsed: format_duration(print_stats.print_duration),
            remaining: estimate_remaining(print_stats.print_duration, progress),
            layer_info: status.display_status.message.clone(),
        }
    }
}

impl From<&Status> for DisplayData {
    fn from(status: &Status) -> Self {
        Self::from_status(status)
    }
}
