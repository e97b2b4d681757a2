#[cfg(test)]
mod tests {
    use almuraqib::libs::breaks::{break_duration, break_minutes, parse_clock_time};
    use almuraqib::libs::formatter::PLACEHOLDER;

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(parse_clock_time("11:00 AM"), Some(660));
        assert_eq!(parse_clock_time("1:30 pm"), Some(810));
        assert_eq!(parse_clock_time("12:15 PM"), Some(735));
        assert_eq!(parse_clock_time("12:15 AM"), Some(15));
        assert_eq!(parse_clock_time("  02:05 Pm  "), Some(845));
    }

    #[test]
    fn test_parse_clock_time_rejects_malformed_values() {
        assert_eq!(parse_clock_time("11:00"), None);
        assert_eq!(parse_clock_time("11:00  AM"), None);
        assert_eq!(parse_clock_time("11:00 XM"), None);
        assert_eq!(parse_clock_time("eleven AM"), None);
        assert_eq!(parse_clock_time(""), None);
    }

    #[test]
    fn test_break_duration() {
        assert_eq!(break_duration(Some("11:00 AM"), Some("12:30 PM")), "1 hr 30 min");
        assert_eq!(break_duration(Some("1:00 PM"), Some("1:45 PM")), "45 min");
        assert_eq!(break_duration(Some("12:00 PM"), Some("2:00 PM")), "2 hr");
    }

    #[test]
    fn test_break_duration_missing_sides() {
        assert_eq!(break_duration(None, Some("12:30 PM")), PLACEHOLDER);
        assert_eq!(break_duration(Some("11:00 AM"), None), PLACEHOLDER);
        assert_eq!(break_duration(Some(""), Some("12:30 PM")), PLACEHOLDER);
    }

    #[test]
    fn test_break_duration_rejects_reversed_and_equal_times() {
        assert_eq!(break_duration(Some("2:00 PM"), Some("1:00 PM")), PLACEHOLDER);
        assert_eq!(break_duration(Some("1:00 PM"), Some("1:00 PM")), PLACEHOLDER);
    }

    #[test]
    fn test_oversized_clock_values_are_unparseable() {
        assert_eq!(parse_clock_time("4294967295:00 AM"), None);
        assert_eq!(parse_clock_time("4294967290:00 PM"), None);
        assert_eq!(parse_clock_time("11:4294967295 AM"), None);
        assert_eq!(parse_clock_time("99999999999:00 AM"), None);
    }

    #[test]
    fn test_break_duration_with_oversized_cells() {
        assert_eq!(break_duration(Some("4294967295:00 AM"), Some("1:00 PM")), PLACEHOLDER);
        assert_eq!(break_duration(Some("11:00 AM"), Some("4294967290:00 PM")), PLACEHOLDER);
        assert_eq!(break_duration(Some("11:4294967295 AM"), Some("1:00 PM")), PLACEHOLDER);
    }

    #[test]
    fn test_midnight_is_treated_as_unparseable() {
        assert_eq!(break_minutes(Some("12:00 AM"), Some("1:00 AM")), None);
        assert_eq!(break_minutes(Some("garbage"), Some("1:00 AM")), None);
        assert_eq!(break_minutes(Some("12:01 AM"), Some("1:00 AM")), Some(59));
    }
}
