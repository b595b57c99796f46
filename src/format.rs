//! Unit conversion and text helpers for the display.

/// Placeholder shown when a value is not available.
pub const PLACEHOLDER: &str = "—";

/// File names longer than this are shortened.
const MAX_FILENAME_CHARS: usize = 28;
/// Characters kept from a shortened file name, before the ellipsis.
const TRUNCATED_FILENAME_CHARS: usize = 25;

/// Below this fraction the remaining time estimate is too noisy to show.
const MIN_ESTIMATE_PROGRESS: f64 = 0.01;

/// Rounds to one decimal place, ties to even on the exact decimal value.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Completion fraction (0.0 - 1.0) as a percentage with one decimal.
pub fn progress_percent(fraction: f64) -> f64 {
    round1(fraction * 100.0)
}

/// Formats seconds as `"{m}m {ss}s"`, or `"{h}h {mm}m"` from one hour on.
pub fn format_duration(secs: f64) -> String {
    // Saturating cast: negatives and NaN become 0.
    let secs = secs as u64;
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{h}h {m:02}m")
    } else {
        format!("{m}m {s:02}s")
    }
}

/// Extrapolates the time left from the elapsed print time.
pub fn estimate_remaining(elapsed: f64, fraction: f64) -> String {
    if fraction > MIN_ESTIMATE_PROGRESS && elapsed > 0.0 {
        let total = elapsed / fraction;
        format_duration((total - elapsed).max(0.0))
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Base name of a job path, shortened to fit the display.
pub fn display_filename(path: &str) -> String {
    if path.is_empty() {
        return PLACEHOLDER.to_string();
    }

    let name = path.rsplit('/').next().unwrap_or_default();
    if name.chars().count() > MAX_FILENAME_CHARS {
        let mut short: String = name.chars().take(TRUNCATED_FILENAME_CHARS).collect();
        short.push('…');
        short
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_to_percent() {
        assert_eq!(progress_percent(0.0), 0.0);
        assert_eq!(progress_percent(1.0), 100.0);
        assert_eq!(progress_percent(0.5), 50.0);
        assert_eq!(progress_percent(0.1225), 12.2);
        assert_eq!(progress_percent(0.9876), 98.8);
    }

    #[test]
    fn round_temperatures() {
        assert_eq!(round1(214.97), 215.0);
        assert_eq!(round1(59.93), 59.9);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn round_ties_to_even() {
        assert_eq!(round1(60.25), 60.2);
        assert_eq!(round1(60.35), 60.4);
        assert_eq!(round1(0.35), 0.3);
        assert_eq!(round1(210.05), 210.1);
    }

    #[test]
    fn durations_under_an_hour() {
        assert_eq!(format_duration(0.0), "0m 00s");
        assert_eq!(format_duration(59.9), "0m 59s");
        assert_eq!(format_duration(61.0), "1m 01s");
        assert_eq!(format_duration(3599.0), "59m 59s");
    }

    #[test]
    fn durations_over_an_hour_omit_seconds() {
        assert_eq!(format_duration(3600.0), "1h 00m");
        assert_eq!(format_duration(3661.0), "1h 01m");
        assert_eq!(format_duration(36_000.0 + 59.0 * 60.0 + 59.0), "10h 59m");
    }

    #[test]
    fn durations_never_negative() {
        assert_eq!(format_duration(-5.0), "0m 00s");
        assert_eq!(format_duration(f64::NAN), "0m 00s");
    }

    #[test]
    fn remaining_time() {
        assert_eq!(estimate_remaining(600.0, 0.5), "10m 00s");
        assert_eq!(estimate_remaining(3600.0, 0.25), "3h 00m");
        assert_eq!(estimate_remaining(600.0, 1.0), "0m 00s");
    }

    #[test]
    fn remaining_time_needs_progress_and_elapsed() {
        assert_eq!(estimate_remaining(600.0, 0.01), PLACEHOLDER);
        assert_eq!(estimate_remaining(600.0, 0.0), PLACEHOLDER);
        assert_eq!(estimate_remaining(0.0, 0.5), PLACEHOLDER);
    }

    #[test]
    fn filename_base_name() {
        assert_eq!(display_filename("benchy.gcode"), "benchy.gcode");
        assert_eq!(display_filename("parts/v2/bracket.gcode"), "bracket.gcode");
        assert_eq!(display_filename(""), PLACEHOLDER);
    }

    #[test]
    fn filename_truncation() {
        let exact = "a".repeat(28);
        assert_eq!(display_filename(&exact), exact);

        let long = "abcdefghijklmnopqrstuvwxyz0123.gcode";
        assert_eq!(display_filename(long), "abcdefghijklmnopqrstuvwxy…");
        assert_eq!(display_filename(&format!("dir/{long}")), "abcdefghijklmnopqrstuvwxy…");
    }

    #[test]
    fn filename_truncation_counts_chars() {
        let name = "ü".repeat(30);
        let short = display_filename(&name);
        assert_eq!(short.chars().count(), 26);
        assert!(short.ends_with('…'));
    }
}
