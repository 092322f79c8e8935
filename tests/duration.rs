#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use paydesk::libs::duration::{calculate_work_duration, ShiftClock};
    use paydesk::libs::records::AttendanceRecord;
    use serde_json::json;

    #[test]
    fn test_standard_day_with_break() {
        let worked = calculate_work_duration(Some("09:00"), Some("13:00"), Some("13:30"), Some("18:00"), Some("00:00"));
        assert_eq!(worked, "08:30");
    }

    #[test]
    fn test_without_break_is_out_minus_in() {
        assert_eq!(calculate_work_duration(Some("08:15"), None, None, Some("16:45"), None), "08:30");
        assert_eq!(ShiftClock::new("10:00", "10:01").net_minutes(), 1);
    }

    #[test]
    fn test_equal_in_and_out_is_zero() {
        assert_eq!(calculate_work_duration(Some("09:00"), None, None, Some("09:00"), None), "00:00");
    }

    #[test]
    fn test_overnight_shift_is_zero() {
        assert_eq!(ShiftClock::new("22:00", "06:00").net_duration(), "00:00");
    }

    #[test]
    fn test_break_order_does_not_matter() {
        let forward = ShiftClock::new("09:00", "18:00").with_break("13:00", "13:30");
        let reversed = ShiftClock::new("09:00", "18:00").with_break("13:30", "13:00");
        assert_eq!(forward.break_minutes(), 30);
        assert_eq!(forward.net_minutes(), reversed.net_minutes());
    }

    #[test]
    fn test_overtime_is_added() {
        let shift = ShiftClock::new("09:00", "18:00").with_break("13:00", "14:00").with_overtime("1:15");
        assert_eq!(shift.net_duration(), "09:15");
    }

    #[test]
    fn test_missing_readings_degrade() {
        assert_eq!(calculate_work_duration(None, None, None, Some("18:00"), None), "00:00");
        assert_eq!(calculate_work_duration(Some("garbage"), None, None, Some("18:00"), None), "00:00");

        // A half-entered break or unreadable overtime is ignored.
        let shift = ShiftClock::new("09:00", "17:00").with_overtime("soon");
        assert_eq!(shift.net_duration(), "08:00");
        assert_eq!(calculate_work_duration(Some("09:00"), Some("12:00"), None, Some("17:00"), None), "08:00");
    }

    #[test]
    fn test_break_longer_than_shift_never_goes_negative() {
        let shift = ShiftClock::new("09:00", "10:00").with_break("08:00", "12:00");
        assert_eq!(shift.net_minutes(), 0);
    }

    #[test]
    fn test_from_record_uses_utc_wall_clock() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": "a1",
            "employeeId": "e1",
            "date": "2025-03-10",
            "status": "PRESENT",
            "checkIn": "2025-03-10T09:00:00Z",
            "breakIn": "2025-03-10T13:00:00Z",
            "breakOut": "2025-03-10T13:30:00Z",
            "checkOut": "2025-03-10T18:00:00Z",
            "overtime": 0.5
        }))
        .unwrap();

        let shift = ShiftClock::from_record(&record);
        assert_eq!(shift.check_in.as_deref(), Some("09:00"));
        assert_eq!(shift.overtime.as_deref(), Some("00:30"));
        assert_eq!(shift.net_duration(), "09:00");
        assert_eq!(record.check_out, Some(Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap()));
    }
}
