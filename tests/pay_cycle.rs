#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use paydesk::libs::pay_cycle::{format_cycle_period, CycleError, CycleOffset, PayCycle};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_current_cycle_after_the_sixth() {
        let cycle = PayCycle::current(date(2025, 3, 10)).unwrap();
        assert_eq!(cycle.start, date(2025, 3, 6));
        assert_eq!(cycle.end, date(2025, 4, 5));
    }

    #[test]
    fn test_current_cycle_before_the_sixth() {
        let cycle = PayCycle::current(date(2025, 3, 3)).unwrap();
        assert_eq!(cycle.start, date(2025, 2, 6));
        assert_eq!(cycle.end, date(2025, 3, 5));
    }

    #[test]
    fn test_boundary_days() {
        assert_eq!(PayCycle::current(date(2025, 3, 6)).unwrap().start, date(2025, 3, 6));
        assert_eq!(PayCycle::current(date(2025, 3, 5)).unwrap().end, date(2025, 3, 5));
    }

    #[test]
    fn test_offsets_cross_year_boundaries() {
        let today = date(2025, 1, 3);
        let previous = PayCycle::by_offset(today, CycleOffset::Previous.months()).unwrap();
        assert_eq!(previous.start, date(2024, 11, 6));
        assert_eq!(previous.end, date(2024, 12, 5));

        let next = PayCycle::by_offset(date(2025, 12, 20), CycleOffset::Next.months()).unwrap();
        assert_eq!(next.start, date(2026, 1, 6));
        assert_eq!(next.end, date(2026, 2, 5));
    }

    #[test]
    fn test_cycles_are_contiguous() {
        let today = date(2024, 2, 29);
        for n in -30..30 {
            let cycle = PayCycle::by_offset(today, n).unwrap();
            let following = PayCycle::by_offset(today, n + 1).unwrap();
            assert_eq!(cycle.end + Duration::days(1), following.start);
            assert_eq!(cycle.next().unwrap(), following);
            assert_eq!(following.previous().unwrap(), cycle);
        }
    }

    #[test]
    fn test_every_date_falls_in_its_cycle() {
        let mut day = date(2024, 12, 1);
        while day < date(2025, 4, 1) {
            let cycle = PayCycle::containing(day).unwrap();
            assert!(cycle.contains(day), "{} not in {:?}", day, cycle);
            day += Duration::days(1);
        }
    }

    #[test]
    fn test_days_and_dates() {
        let cycle = PayCycle::current(date(2025, 2, 10)).unwrap();
        assert_eq!(cycle.days(), 28);
        assert_eq!(cycle.dates().count(), 28);
        assert_eq!(cycle.dates().last(), Some(cycle.end));
    }

    #[test]
    fn test_out_of_range_offset() {
        let result = PayCycle::by_offset(NaiveDate::MAX, 1);
        assert_eq!(result, Err(CycleError::OutOfRange { offset: 1 }));
    }

    #[test]
    fn test_format_cycle_period() {
        assert_eq!(format_cycle_period(date(2025, 1, 6), date(2025, 2, 5)), "6 Jan – 5 Feb 2025");
        assert_eq!(format_cycle_period(date(2024, 12, 6), date(2025, 1, 5)), "6 Dec 2024 – 5 Jan 2025");
        assert_eq!(PayCycle::current(date(2025, 3, 10)).unwrap().label(), "6 Mar – 5 Apr 2025");
    }
}
