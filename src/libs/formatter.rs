//! Time-field formatting for attendance display.
//!
//! Upstream attendance sheets are filled in by hand and the duration
//! columns (`totalHours`, `basicHours`, `overtime`, `lessBasic`) arrive in
//! several encodings. This module normalizes all of them into one
//! human-readable duration string.
//!
//! ## Accepted Encodings
//!
//! - **Decimal hours**: `"8.5"` → `"8 hr 30 min"`
//! - **Duration pairs**: `"8:15"` → `"8 hr 15 min"` (hours and minutes, not a clock time)
//! - **Pre-formatted**: anything containing `hr` or `min` passes through unchanged
//!
//! Anything else is shown as it was received. Missing cells render as the
//! [`PLACEHOLDER`] glyph.
//!
//! ## Examples
//!
//! ```rust
//! use almuraqib::libs::formatter::format_time_field;
//!
//! assert_eq!(format_time_field(Some("1.5")), "1 hr 30 min");
//! assert_eq!(format_time_field(Some("8:15")), "8 hr 15 min");
//! assert_eq!(format_time_field(Some("2 hr")), "2 hr");
//! assert_eq!(format_time_field(None), "—");
//! ```

/// Glyph shown for missing or unusable values.
pub const PLACEHOLDER: &str = "—";

/// Renders an hour/minute pair with zero elision.
///
/// When the hour part is zero only minutes are shown, when the minute part
/// is zero only hours are shown. A zero duration therefore renders as
/// `"0 min"`.
///
/// # Examples
///
/// ```rust
/// use almuraqib::libs::formatter::format_hours_minutes;
///
/// assert_eq!(format_hours_minutes(2, 0), "2 hr");
/// assert_eq!(format_hours_minutes(0, 45), "45 min");
/// assert_eq!(format_hours_minutes(1, 5), "1 hr 5 min");
/// ```
pub fn format_hours_minutes(hours: i64, minutes: i64) -> String {
    if hours == 0 {
        format!("{} min", minutes)
    } else if minutes == 0 {
        format!("{} hr", hours)
    } else {
        format!("{} hr {} min", hours, minutes)
    }
}

/// Renders a minute count using [`format_hours_minutes`].
pub fn format_minutes(total_minutes: u32) -> String {
    format_hours_minutes((total_minutes / 60) as i64, (total_minutes % 60) as i64)
}

/// Returns `true` when the value already carries a unit marker.
fn has_unit_marker(value: &str) -> bool {
    value.contains("hr") || value.contains("min")
}

/// Parses decimal hours such as `"8.5"` into whole hours and rounded minutes.
///
/// Only finite numbers are accepted, so `"inf"` and `"NaN"` fall through.
fn parse_decimal_hours(value: &str) -> Option<(i64, i64)> {
    let decimal: f64 = value.trim().parse().ok()?;
    if !decimal.is_finite() {
        return None;
    }

    let hours = decimal.floor();
    let minutes = ((decimal - hours) * 60.0).round();
    Some((hours as i64, minutes as i64))
}

/// Parses an `HH:MM` duration. Extra `:`-separated parts are ignored.
fn parse_duration_pair(value: &str) -> Option<(i64, i64)> {
    let mut parts = value.split(':');
    let hours = parts.next()?.trim().parse::<i64>().ok()?;
    let minutes = parts.next()?.trim().parse::<i64>().ok()?;
    Some((hours, minutes))
}

/// Parses a raw duration cell into `(hours, minutes)`.
///
/// Decimal hours are tried first, then the `HH:MM` duration encoding.
/// Returns `None` for values that match neither, including values that
/// already carry a unit marker.
pub fn parse_time_field(value: &str) -> Option<(i64, i64)> {
    if value.is_empty() || has_unit_marker(value) {
        return None;
    }
    parse_decimal_hours(value).or_else(|| parse_duration_pair(value))
}

/// Normalizes a raw duration cell into a display string.
///
/// This function never fails: missing values become [`PLACEHOLDER`],
/// unit-bearing values pass through, and unparseable values are returned
/// unchanged. Applying it to its own output yields the same string.
pub fn format_time_field(value: Option<&str>) -> String {
    match value {
        None | Some("") => PLACEHOLDER.to_string(),
        Some(value) => match parse_time_field(value) {
            Some((hours, minutes)) => format_hours_minutes(hours, minutes),
            None => value.to_string(),
        },
    }
}

/// Returns the value, or [`PLACEHOLDER`] when it is missing or empty.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
