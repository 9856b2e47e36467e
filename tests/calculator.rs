#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime};
    use worktime::libs::breaks::{BreakInterval, BreakSpec};
    use worktime::libs::calculator::{compute, CalculatorInput};
    use worktime::libs::codec::format_duration;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn input(target: f64, worked: Duration, break_minutes: u64) -> CalculatorInput {
        CalculatorInput {
            weekly_target_hours: target,
            worked,
            breaks: BreakSpec::Flat { minutes: break_minutes },
            day_start: None,
        }
    }

    #[test]
    fn test_remaining_with_breaks_subtracted() {
        // 45h target, 40h worked, 30min of breaks: 39:30 counted, 5:30 left
        let output = compute(&input(45.0, Duration::hours(40), 30));
        assert_eq!(format_duration(&output.remaining), "05:30:00");
        assert_eq!(output.overtime, Duration::zero());
    }

    #[test]
    fn test_overtime_beyond_target() {
        let output = compute(&input(40.0, Duration::hours(42), 0));
        assert_eq!(output.remaining, Duration::zero());
        assert_eq!(format_duration(&output.overtime), "02:00:00");
    }

    #[test]
    fn test_exact_target_yields_both_zero() {
        let output = compute(&input(40.0, Duration::hours(40), 0));
        assert_eq!(output.remaining, Duration::zero());
        assert_eq!(output.overtime, Duration::zero());
    }

    #[test]
    fn test_remaining_and_overtime_are_mutually_exclusive() {
        for worked_hours in [0, 10, 39, 40, 41, 80] {
            for break_minutes in [0, 30, 90] {
                let output = compute(&input(40.0, Duration::hours(worked_hours), break_minutes));
                assert!(
                    output.remaining == Duration::zero() || output.overtime == Duration::zero(),
                    "both nonzero for worked={}h breaks={}min",
                    worked_hours,
                    break_minutes
                );
            }
        }
    }

    #[test]
    fn test_go_home_time() {
        let mut args = input(45.0, Duration::hours(40), 30);
        args.day_start = Some(time(9, 0, 0));
        let output = compute(&args);
        assert_eq!(output.go_home, Some(time(14, 30, 0)));
    }

    #[test]
    fn test_go_home_absent_without_day_start() {
        let output = compute(&input(45.0, Duration::hours(40), 30));
        assert_eq!(output.go_home, None);
    }

    #[test]
    fn test_go_home_wraps_past_midnight() {
        let mut args = input(40.0, Duration::hours(38), 0);
        args.day_start = Some(time(23, 0, 0));
        let output = compute(&args);
        assert_eq!(output.go_home, Some(time(1, 0, 0)));
    }

    #[test]
    fn test_breaks_exceeding_worked_time_clamp_to_zero() {
        let output = compute(&input(40.0, Duration::hours(1), 90));
        assert_eq!(output.remaining, Duration::hours(40));
        assert_eq!(output.overtime, Duration::zero());
    }

    #[test]
    fn test_negative_worked_treated_as_zero() {
        let output = compute(&input(40.0, Duration::seconds(-3600), 0));
        assert_eq!(output.remaining, Duration::hours(40));
        assert_eq!(output.overtime, Duration::zero());
    }

    #[test]
    fn test_non_positive_target_makes_all_work_overtime() {
        let output = compute(&input(0.0, Duration::hours(3), 0));
        assert_eq!(output.remaining, Duration::zero());
        assert_eq!(output.overtime, Duration::hours(3));

        let output = compute(&input(-5.0, Duration::hours(3), 0));
        assert_eq!(output.overtime, Duration::hours(3));
    }

    #[test]
    fn test_fractional_target_hours() {
        let output = compute(&input(0.5, Duration::zero(), 0));
        assert_eq!(output.remaining, Duration::minutes(30));
    }

    #[test]
    fn test_interval_mode_equivalent_to_flat_total() {
        let flat = compute(&input(45.0, Duration::hours(40), 120));
        let intervals = compute(&CalculatorInput {
            weekly_target_hours: 45.0,
            worked: Duration::hours(40),
            breaks: BreakSpec::Intervals(vec![BreakInterval::new(time(23, 0, 0), time(1, 0, 0))]),
            day_start: None,
        });

        assert_eq!(flat.remaining, intervals.remaining);
        assert_eq!(flat.overtime, intervals.overtime);
    }
}
