#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime};
    use worktime::libs::breaks::{BreakGroup, BreakInterval, BreakMode, BreakSpec};

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_interval_duration_same_day() {
        let interval = BreakInterval::new(time(12, 0, 0), time(12, 30, 0));
        assert_eq!(interval.duration(), Duration::minutes(30));
    }

    #[test]
    fn test_interval_duration_wraps_past_midnight() {
        // 23:00:00 - 01:00:00 spans two hours across the day boundary
        let interval = BreakInterval::new(time(23, 0, 0), time(1, 0, 0));
        assert_eq!(interval.duration(), Duration::hours(2));
    }

    #[test]
    fn test_interval_duration_zero_when_bounds_equal() {
        let interval = BreakInterval::new(time(9, 0, 0), time(9, 0, 0));
        assert_eq!(interval.duration(), Duration::zero());
    }

    #[test]
    fn test_flat_spec_total() {
        assert_eq!(BreakSpec::Flat { minutes: 30 }.total(), Duration::minutes(30));
        assert_eq!(BreakSpec::Flat { minutes: 0 }.total(), Duration::zero());
    }

    #[test]
    fn test_interval_spec_total_sums_intervals() {
        let spec = BreakSpec::Intervals(vec![
            BreakInterval::new(time(10, 0, 0), time(10, 15, 0)),
            BreakInterval::new(time(12, 0, 0), time(12, 45, 0)),
        ]);
        assert_eq!(spec.total(), Duration::minutes(60));
    }

    #[test]
    fn test_both_modes_reduce_to_the_same_total() {
        let flat = BreakSpec::Flat { minutes: 120 };
        let intervals = BreakSpec::Intervals(vec![BreakInterval::new(time(23, 0, 0), time(1, 0, 0))]);
        assert_eq!(flat.total(), intervals.total());
    }

    #[test]
    fn test_spec_mode() {
        assert_eq!(BreakSpec::Flat { minutes: 5 }.mode(), BreakMode::Flat);
        assert_eq!(BreakSpec::Intervals(vec![]).mode(), BreakMode::Intervals);
    }

    #[test]
    fn test_break_group_formatting() {
        let breaks = vec![
            BreakInterval::new(time(12, 0, 0), time(12, 30, 0)),
            BreakInterval::new(time(23, 0, 0), time(1, 0, 0)),
        ];
        let formatted = breaks.format();

        assert_eq!(formatted.len(), 2);
        assert_eq!(formatted[0].id, 1);
        assert_eq!(formatted[0].start, "12:00:00");
        assert_eq!(formatted[0].end, "12:30:00");
        assert_eq!(formatted[0].duration, "00:30:00");
        assert_eq!(formatted[1].id, 2);
        assert_eq!(formatted[1].duration, "02:00:00");
    }
}
