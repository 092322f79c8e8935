#[cfg(test)]
mod tests {
    use paydesk::libs::aggregate::{
        average, count_by_status, format_percentage, percentage, summarize_by_employee, sum_break_minutes, sum_hours,
        sum_overtime, AttendanceStats, PenaltyTotals,
    };
    use paydesk::libs::records::{AttendanceRecord, AttendanceStatus, BreakSession, Penalty};
    use serde_json::json;

    fn record(employee: &str, name: &str, status: &str, hours: f64, overtime: f64) -> AttendanceRecord {
        serde_json::from_value(json!({
            "id": format!("{}-{}", employee, status),
            "employeeId": employee,
            "employeeName": name,
            "date": "2025-03-10",
            "status": status,
            "totalHours": hours,
            "overtime": overtime
        }))
        .unwrap()
    }

    fn sample() -> Vec<AttendanceRecord> {
        vec![
            record("e1", "Ravi", "PRESENT", 8.0, 0.5),
            record("e1", "Ravi", "LATE", 7.5, 0.0),
            record("e1", "Ravi", "ABSENT", 0.0, 0.0),
            record("e2", "Anita", "HALF_DAY", 4.0, 0.0),
            record("e2", "Anita", "LEAVE_APPROVED", 0.0, 0.0),
            record("e2", "Anita", "WFH_APPROVED", 8.5, 1.0),
        ]
    }

    #[test]
    fn test_percentage_helpers() {
        assert_eq!(percentage(1.0, 4.0), 25.0);
        assert_eq!(percentage(3.0, 0.0), 0.0);
        assert_eq!(format_percentage(66.6666), "66.7%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(average(vec![2.0, 4.0, 9.0]), 5.0);
        assert_eq!(average(Vec::new()), 0.0);
    }

    #[test]
    fn test_attendance_stats() {
        let records = sample();
        let stats = AttendanceStats::from_records(&records);

        assert_eq!(stats.total_days, 6);
        assert_eq!(stats.attended(), 4);
        assert_eq!(stats.leave, 1);
        assert_eq!(stats.absent, 1);
        assert_eq!(format_percentage(stats.attendance_rate()), "66.7%");
        assert_eq!(stats.total_hours, 28.0);
        assert_eq!(stats.average_hours(), 7.0);
        assert_eq!(stats.total_overtime, 1.5);
    }

    #[test]
    fn test_empty_stats_do_not_divide_by_zero() {
        let none: Vec<AttendanceRecord> = Vec::new();
        let stats = AttendanceStats::from_records(&none);
        assert_eq!(stats.attendance_rate(), 0.0);
        assert_eq!(stats.average_hours(), 0.0);
    }

    #[test]
    fn test_sums_and_counts() {
        let records = sample();
        assert_eq!(sum_hours(&records), 28.0);
        assert_eq!(sum_overtime(&records), 1.5);

        let counts = count_by_status(&records);
        assert_eq!(counts.get(&AttendanceStatus::Present), Some(&1));
        assert_eq!(counts.get(&AttendanceStatus::WfhApproved), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), 6);
    }

    #[test]
    fn test_summarize_by_employee_sorts_by_name() {
        let summaries = summarize_by_employee(&sample());
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].employee_name, "Anita");
        assert_eq!(summaries[0].stats.attended(), 2);
        assert_eq!(summaries[1].employee_id, "e1");
        assert_eq!(summaries[1].stats.total_hours, 15.5);
    }

    #[test]
    fn test_break_and_penalty_totals() {
        let breaks: Vec<BreakSession> = serde_json::from_value(json!([
            {"id": "b1", "employeeId": "e1", "date": "2025-03-10", "startTime": "2025-03-10T13:00:00Z",
             "endTime": "2025-03-10T13:45:00Z", "status": "COMPLETED"},
            {"id": "b2", "employeeId": "e1", "date": "2025-03-11", "startTime": "2025-03-11T13:00:00Z",
             "status": "COMPLETED", "duration": 20},
            {"id": "b3", "employeeId": "e2", "date": "2025-03-11", "startTime": "2025-03-11T15:00:00Z",
             "status": "ACTIVE"}
        ]))
        .unwrap();
        assert_eq!(sum_break_minutes(&breaks), 65);

        let penalties: Vec<Penalty> = serde_json::from_value(json!([
            {"id": "p1", "employeeId": "e1", "date": "2025-03-10", "amount": 150.0, "breakId": "b1"},
            {"id": "p2", "employeeId": "e2", "date": "2025-03-12", "amount": 50.5}
        ]))
        .unwrap();
        let totals = PenaltyTotals::from_penalties(&penalties);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.amount, 200.5);
    }
}
