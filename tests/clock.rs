#[cfg(test)]
mod tests {
    use chrono::Duration;
    use paydesk::libs::clock::{
        clock_to_decimal_hours, clock_to_minutes, decimal_hours_to_clock, duration_to_minutes, format_duration,
        minutes_to_clock, parse_clock,
    };

    #[test]
    fn test_decimal_hours_to_clock() {
        assert_eq!(decimal_hours_to_clock(8.5), "08:30");
        assert_eq!(decimal_hours_to_clock(1.25), "01:15");
        assert_eq!(decimal_hours_to_clock(0.1), "00:06");
        assert_eq!(decimal_hours_to_clock(152.5), "152:30");
    }

    #[test]
    fn test_degenerate_hours_render_as_zero() {
        assert_eq!(decimal_hours_to_clock(0.0), "00:00");
        assert_eq!(decimal_hours_to_clock(-3.0), "00:00");
        assert_eq!(decimal_hours_to_clock(f64::NAN), "00:00");
        assert_eq!(decimal_hours_to_clock(f64::INFINITY), "00:00");
    }

    #[test]
    fn test_fraction_just_below_an_hour_keeps_sixty_minutes() {
        // Accumulated floating point totals land here; the rendering is kept as is.
        assert_eq!(decimal_hours_to_clock(7.999997), "07:60");
    }

    #[test]
    fn test_clock_to_decimal_hours() {
        assert_eq!(clock_to_decimal_hours("08:30"), 8.5);
        assert_eq!(clock_to_decimal_hours("00:45"), 0.75);
        assert_eq!(clock_to_decimal_hours("37:45"), 37.75);
        assert_eq!(clock_to_decimal_hours(" 01:06 "), 1.1);
    }

    #[test]
    fn test_invalid_clock_text_is_zero_hours() {
        assert_eq!(clock_to_decimal_hours(""), 0.0);
        assert_eq!(clock_to_decimal_hours("0830"), 0.0);
        assert_eq!(clock_to_decimal_hours("ab:cd"), 0.0);
        assert_eq!(clock_to_decimal_hours("08:75"), 0.0);
        assert_eq!(clock_to_decimal_hours("-1:30"), 0.0);
    }

    #[test]
    fn test_round_trip_stays_within_a_minute() {
        for minutes in (0..24 * 60).step_by(7) {
            let text = minutes_to_clock(minutes);
            let back = decimal_hours_to_clock(clock_to_decimal_hours(&text));
            let diff = duration_to_minutes(&back).unwrap() - minutes;
            assert!(diff.abs() <= 1, "{} came back as {}", text, back);
        }
    }

    #[test]
    fn test_parse_clock() {
        assert!(parse_clock("09:00").is_some());
        assert!(parse_clock("23:59:59").is_some());
        assert!(parse_clock("24:00").is_none());
        assert!(parse_clock("  ").is_none());
        assert_eq!(clock_to_minutes("13:30"), Some(810));
        assert_eq!(clock_to_minutes("nope"), None);
    }

    #[test]
    fn test_minutes_and_durations() {
        assert_eq!(minutes_to_clock(510), "08:30");
        assert_eq!(minutes_to_clock(-15), "00:00");
        assert_eq!(duration_to_minutes("1:05"), Some(65));
        assert_eq!(duration_to_minutes("100:00"), Some(6000));
        assert_eq!(format_duration(&Duration::minutes(125)), "02:05");
        assert_eq!(format_duration(&Duration::seconds(59)), "00:00");
    }
}
