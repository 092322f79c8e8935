#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use paydesk::libs::edit::{clock_on_date, AttendanceEdit, BreakEdit, DeleteRequest, ValidationError};
    use paydesk::libs::records::{AttendanceRecord, AttendanceStatus, BreakSession};
    use serde_json::json;

    fn record() -> AttendanceRecord {
        serde_json::from_value(json!({
            "id": "a1",
            "employeeId": "e1",
            "date": "2025-03-10",
            "status": "LATE",
            "checkIn": "2025-03-10T09:40:00Z",
            "checkOut": "2025-03-10T18:00:00Z",
            "overtime": 0.0
        }))
        .unwrap()
    }

    fn session() -> BreakSession {
        serde_json::from_value(json!({
            "id": "b1",
            "employeeId": "e1",
            "date": "2025-03-10",
            "startTime": "2025-03-10T13:00:00Z",
            "endTime": "2025-03-10T13:50:00Z",
            "status": "COMPLETED"
        }))
        .unwrap()
    }

    #[test]
    fn test_reason_is_required() {
        let edit = AttendanceEdit {
            check_in: Some("09:00".to_string()),
            reason: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(edit.validate(&record()), Err(ValidationError::MissingReason));
    }

    #[test]
    fn test_invalid_clock_is_rejected() {
        let edit = AttendanceEdit {
            check_out: Some("25:00".to_string()),
            reason: "fix".to_string(),
            ..Default::default()
        };
        assert_eq!(edit.validate(&record()), Err(ValidationError::InvalidClock("25:00".to_string())));
    }

    #[test]
    fn test_check_out_must_follow_check_in() {
        let edit = AttendanceEdit {
            check_out: Some("09:30".to_string()),
            reason: "fix".to_string(),
            ..Default::default()
        };
        assert!(matches!(edit.validate(&record()), Err(ValidationError::EndBeforeStart { .. })));
    }

    #[test]
    fn test_unchanged_values_are_nothing_to_change() {
        let edit = AttendanceEdit {
            check_in: Some("09:40".to_string()),
            status: Some(AttendanceStatus::Late),
            reason: "fix".to_string(),
            ..Default::default()
        };
        assert_eq!(edit.validate(&record()), Err(ValidationError::NothingToChange));
    }

    #[test]
    fn test_changes_and_payload() {
        let edit = AttendanceEdit {
            check_in: Some("9:00".to_string()),
            overtime: Some("1:30".to_string()),
            status: Some(AttendanceStatus::Present),
            reason: " terminal offline ".to_string(),
            ..Default::default()
        };
        let record = record();
        assert_eq!(edit.validate(&record), Ok(()));

        let changes = edit.changes(&record);
        let fields: Vec<&str> = changes.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["checkIn", "overtime", "status"]);
        assert_eq!(changes[0].old_value.as_deref(), Some("09:40"));
        assert_eq!(changes[0].new_value.as_deref(), Some("09:00"));
        assert_eq!(changes[1].new_value.as_deref(), Some("01:30"));

        let payload = edit.to_payload(record.date);
        assert_eq!(payload["checkIn"], json!("2025-03-10T09:00:00+00:00"));
        assert_eq!(payload["overtime"], json!(1.5));
        assert_eq!(payload["status"], json!("PRESENT"));
        assert_eq!(payload["editReason"], json!("terminal offline"));
        assert!(payload.get("checkOut").is_none());
    }

    #[test]
    fn test_break_edit() {
        let session = session();

        let ok = BreakEdit {
            end: Some("13:30".to_string()),
            reason: "badge double tap".to_string(),
            ..Default::default()
        };
        assert_eq!(ok.validate(&session), Ok(()));
        assert_eq!(ok.to_payload(session.date)["endTime"], json!("2025-03-10T13:30:00+00:00"));

        let backwards = BreakEdit {
            end: Some("12:30".to_string()),
            reason: "typo".to_string(),
            ..Default::default()
        };
        assert!(matches!(backwards.validate(&session), Err(ValidationError::EndBeforeStart { .. })));

        let empty = BreakEdit {
            reason: "nothing".to_string(),
            ..Default::default()
        };
        assert_eq!(empty.validate(&session), Err(ValidationError::NothingToChange));
    }

    #[test]
    fn test_clock_on_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(clock_on_date(date, "18:05").map(|t| t.to_rfc3339()), Some("2025-03-10T18:05:00+00:00".to_string()));
        assert!(clock_on_date(date, "6pm").is_none());
    }

    #[test]
    fn test_unchanged_overtime_is_not_a_change() {
        let mut record = record();
        record.overtime = 7.999997;

        let same = AttendanceEdit {
            overtime: Some("8:00".to_string()),
            reason: "recheck".to_string(),
            ..Default::default()
        };
        assert!(same.changes(&record).is_empty());

        let longer = AttendanceEdit {
            overtime: Some("8:15".to_string()),
            reason: "approved extra".to_string(),
            ..Default::default()
        };
        let changes = longer.changes(&record);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].old_value.as_deref(), Some("08:00"));
        assert_eq!(changes[0].new_value.as_deref(), Some("08:15"));
    }

    #[test]
    fn test_delete_request() {
        let blank = DeleteRequest { reason: " ".to_string() };
        assert_eq!(blank.validate(), Err(ValidationError::MissingReason));

        let request = DeleteRequest {
            reason: " duplicate punch ".to_string(),
        };
        assert_eq!(request.validate(), Ok(()));
        assert_eq!(request.to_payload(), json!({"reason": "duplicate punch"}));
    }
}
