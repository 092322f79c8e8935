#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use paydesk::libs::records::{
        wire_date, ApiList, AttendanceRecord, AttendanceStatus, BreakSession, BreakStatus, EditActor, EditHistory,
        EditHistoryEntry, FlowaceRecord, WorkLog,
    };
    use serde_json::json;

    fn entry(field: &str, hour: u32) -> EditHistoryEntry {
        EditHistoryEntry {
            field: field.to_string(),
            old_value: Some("09:00".to_string()),
            new_value: Some("09:15".to_string()),
            reason: "terminal offline".to_string(),
            edited_by: EditActor {
                id: "admin".to_string(),
                name: Some("HR Admin".to_string()),
                role: Some("ADMIN".to_string()),
            },
            edited_at: Utc.with_ymd_and_hms(2025, 3, 11, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_attendance_list_envelope() {
        let body = json!({
            "data": [{
                "id": "a1",
                "employeeId": "e1",
                "employeeName": "Meera",
                "date": "2025-03-10T00:00:00.000Z",
                "status": "WFH_APPROVED",
                "checkIn": "2025-03-10T09:00:00Z",
                "checkOut": null,
                "totalHours": 8.5,
                "hasBeenEdited": true,
                "editReason": "late sync",
                "editHistory": [{
                    "field": "checkIn",
                    "oldValue": null,
                    "newValue": "09:00",
                    "reason": "late sync",
                    "editedBy": {"id": "u1"},
                    "editedAt": "2025-03-11T10:00:00Z"
                }]
            }]
        });

        let list: ApiList<AttendanceRecord> = serde_json::from_value(body).unwrap();
        let record = &list.data[0];
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(record.status, AttendanceStatus::WfhApproved);
        assert!(record.check_out.is_none());
        assert_eq!(record.overtime, 0.0);
        assert_eq!(record.edit_history.len(), 1);
        assert_eq!(record.display_name(), "Meera");
    }

    #[test]
    fn test_missing_data_is_an_empty_list() {
        let list: ApiList<AttendanceRecord> = serde_json::from_value(json!({})).unwrap();
        assert!(list.data.is_empty());
    }

    #[test]
    fn test_status_wire_names() {
        for status in AttendanceStatus::ALL {
            let encoded = serde_json::to_value(status).unwrap();
            assert_eq!(encoded, json!(status.as_wire()));
        }
        assert!(AttendanceStatus::HalfDay.is_attended());
        assert!(!AttendanceStatus::LeaveApproved.is_attended());
        assert!(!AttendanceStatus::Absent.is_attended());
        assert!(serde_json::from_value::<AttendanceStatus>(json!("ON_BREAK")).is_err());
    }

    #[test]
    fn test_edit_history_is_kept_in_order() {
        let mut history = EditHistory::new();
        history.append(entry("checkIn", 10));
        history.append(entry("checkOut", 12));
        history.append(entry("status", 11));
        history.append(entry("overtime", 12));

        let fields: Vec<&str> = history.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["checkIn", "status", "checkOut", "overtime"]);
        assert_eq!(history.latest().map(|e| e.field.as_str()), Some("overtime"));
    }

    #[test]
    fn test_edit_history_serializes_as_plain_array() {
        let mut history = EditHistory::new();
        history.append(entry("checkIn", 10));
        let value = serde_json::to_value(&history).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["editedBy"]["role"], json!("ADMIN"));
    }

    #[test]
    fn test_break_durations() {
        let session: BreakSession = serde_json::from_value(json!({
            "id": "b1",
            "employeeId": "e1",
            "date": "2025-03-10",
            "startTime": "2025-03-10T13:00:00Z",
            "status": "ACTIVE"
        }))
        .unwrap();

        assert_eq!(session.status, BreakStatus::Active);
        assert_eq!(session.duration_minutes(), None);
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 13, 40, 0).unwrap();
        assert_eq!(session.elapsed_minutes(now), 40);
        assert_eq!(session.display_name(), "e1");
    }

    #[test]
    fn test_work_log_and_flowace() {
        let log: WorkLog = serde_json::from_value(json!({
            "id": "w1",
            "employeeId": "e1",
            "date": "2025-03-10",
            "entries": [{"tag": "Support", "minutes": 120}, {"tag": "Calls", "minutes": 45}]
        }))
        .unwrap();
        assert_eq!(log.total_minutes(), 165);
        assert!(!log.is_submitted());

        let flowace: FlowaceRecord = serde_json::from_value(json!({
            "id": "f1",
            "employeeId": "e1",
            "date": "2025-03-10",
            "loggedHours": 8.0,
            "productiveHours": 6.0
        }))
        .unwrap();
        assert_eq!(flowace.productivity(), 75.0);
    }

    #[test]
    fn test_wire_date_parse() {
        assert_eq!(wire_date::parse("2025-03-10"), NaiveDate::from_ymd_opt(2025, 3, 10));
        assert_eq!(wire_date::parse("2025-03-10T18:30:00+05:30"), NaiveDate::from_ymd_opt(2025, 3, 10));
        assert_eq!(wire_date::parse("10/03/2025"), None);
        assert_eq!(wire_date::parse("2025"), None);
    }
}
