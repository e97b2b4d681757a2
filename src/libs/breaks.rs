use crate::libs::formatter::{format_minutes, PLACEHOLDER};

/// Parses a 12-hour clock time such as `"11:00 AM"` into minutes since midnight.
///
/// The value must be a time part and a meridiem separated by a single space.
/// The meridiem is matched case-insensitively and must be `AM` or `PM`.
/// `12:xx AM` maps to hour 0 and `PM` adds twelve hours except for `12:xx PM`.
/// Values too large to count in minutes are unparseable.
pub fn parse_clock_time(value: &str) -> Option<u32> {
    let clean = value.trim().to_uppercase();
    let parts: Vec<&str> = clean.split(' ').collect();
    if parts.len() != 2 {
        return None;
    }

    let mut components = parts[0].split(':');
    let mut hours = components.next()?.parse::<u32>().ok()?;
    let minutes = components.next()?.parse::<u32>().ok()?;

    match parts[1] {
        "PM" if hours != 12 => hours = hours.checked_add(12)?,
        "AM" if hours == 12 => hours = 0,
        "AM" | "PM" => {}
        _ => return None,
    }

    hours.checked_mul(60)?.checked_add(minutes)
}

/// Calculates the break length between break-out and break-in clock times.
///
/// Returns [`PLACEHOLDER`] when either side is missing or unparseable, when
/// either side resolves to exactly midnight (zero minutes doubles as the
/// parse-failure sentinel, so `12:00 AM` is never a valid boundary), or when
/// break-out is not strictly before break-in. Overnight breaks are not
/// supported.
pub fn break_duration(break_out: Option<&str>, break_in: Option<&str>) -> String {
    break_minutes(break_out, break_in).map(format_minutes).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Break length in minutes, or `None` under the rules of [`break_duration`].
pub fn break_minutes(break_out: Option<&str>, break_in: Option<&str>) -> Option<u32> {
    let out_minutes = parse_clock_time(break_out.filter(|v| !v.is_empty())?).unwrap_or(0);
    let in_minutes = parse_clock_time(break_in.filter(|v| !v.is_empty())?).unwrap_or(0);

    if out_minutes == 0 || in_minutes == 0 {
        return None;
    }
    if out_minutes >= in_minutes {
        return None;
    }

    Some(in_minutes - out_minutes)
}
