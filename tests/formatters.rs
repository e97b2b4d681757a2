#[cfg(test)]
mod tests {
    use almuraqib::libs::formatter::{format_hours_minutes, format_minutes, format_time_field, or_placeholder, parse_time_field, PLACEHOLDER};

    #[test]
    fn test_format_hours_minutes_elision() {
        assert_eq!(format_hours_minutes(2, 0), "2 hr");
        assert_eq!(format_hours_minutes(0, 45), "45 min");
        assert_eq!(format_hours_minutes(1, 5), "1 hr 5 min");
        assert_eq!(format_hours_minutes(0, 0), "0 min");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(90), "1 hr 30 min");
        assert_eq!(format_minutes(60), "1 hr");
        assert_eq!(format_minutes(15), "15 min");
    }

    #[test]
    fn test_decimal_hours() {
        assert_eq!(format_time_field(Some("8.5")), "8 hr 30 min");
        assert_eq!(format_time_field(Some("1.5")), "1 hr 30 min");
        assert_eq!(format_time_field(Some("8")), "8 hr");
        assert_eq!(format_time_field(Some("0.25")), "15 min");
        assert_eq!(format_time_field(Some("0")), "0 min");
    }

    #[test]
    fn test_decimal_minutes_can_round_up_to_sixty() {
        assert_eq!(format_time_field(Some("1.999")), "1 hr 60 min");
    }

    #[test]
    fn test_duration_pairs() {
        assert_eq!(format_time_field(Some("8:15")), "8 hr 15 min");
        assert_eq!(format_time_field(Some("0:45")), "45 min");
        assert_eq!(format_time_field(Some("9:00")), "9 hr");
        assert_eq!(parse_time_field("10:30:00"), Some((10, 30)));
    }

    #[test]
    fn test_unit_values_pass_through() {
        assert_eq!(format_time_field(Some("2 hr")), "2 hr");
        assert_eq!(format_time_field(Some("45 min")), "45 min");
        assert_eq!(parse_time_field("1 hr 5 min"), None);
    }

    #[test]
    fn test_missing_values_use_placeholder() {
        assert_eq!(format_time_field(None), PLACEHOLDER);
        assert_eq!(format_time_field(Some("")), PLACEHOLDER);
        assert_eq!(or_placeholder(None), PLACEHOLDER);
        assert_eq!(or_placeholder(Some("")), PLACEHOLDER);
        assert_eq!(or_placeholder(Some("Site A")), "Site A");
    }

    #[test]
    fn test_unparseable_values_returned_unchanged() {
        assert_eq!(format_time_field(Some("N/A")), "N/A");
        assert_eq!(format_time_field(Some("abc:def")), "abc:def");
        assert_eq!(format_time_field(Some("inf")), "inf");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        for raw in ["8.5", "8:15", "0.25", "3", "N/A"] {
            let once = format_time_field(Some(raw));
            let twice = format_time_field(Some(&once));
            assert_eq!(once, twice, "value {raw}");
        }
    }
}
