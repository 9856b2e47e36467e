#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime};
    use worktime::libs::breaks::{BreakMode, BreakSpec};
    use worktime::libs::codec::format_duration;
    use worktime::libs::config::{BreaksConfig, CalculatorConfig};
    use worktime::libs::form::{BreakBound, FormState, TimeComponent, TimeField};

    fn form() -> FormState {
        FormState::new(&CalculatorConfig::default(), &BreaksConfig::default())
    }

    fn set_field(form: &mut FormState, hours: &str, minutes: &str, seconds: &str) {
        form.set_worked(TimeComponent::Hours, hours);
        form.set_worked(TimeComponent::Minutes, minutes);
        form.set_worked(TimeComponent::Seconds, seconds);
    }

    #[test]
    fn test_initial_state_from_defaults() {
        let form = form();
        assert_eq!(form.weekly_target(), "45");
        assert_eq!(form.worked().text(), "00:00:00");
        assert_eq!(form.break_mode(), BreakMode::Flat);
        assert_eq!(form.flat_break_minutes(), "30");
        assert_eq!(form.breaks().len(), 1);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_time_field_strips_non_digits() {
        let mut field = TimeField::new("Time worked", false);
        assert!(field.set(TimeComponent::Hours, "1a2"));
        assert_eq!(field.hours(), "12");
    }

    #[test]
    fn test_time_field_drops_out_of_range_minutes_and_seconds() {
        let mut field = TimeField::new("Time worked", false);
        field.set(TimeComponent::Minutes, "45");

        // 75 is refused and the previous value kept
        assert!(!field.set(TimeComponent::Minutes, "75"));
        assert_eq!(field.minutes(), "45");
        assert!(!field.set(TimeComponent::Seconds, "60"));
    }

    #[test]
    fn test_time_field_hours_unbounded() {
        let mut field = TimeField::new("Time worked", false);
        assert!(field.set(TimeComponent::Hours, "99"));
        assert_eq!(field.duration(), Duration::hours(99));
    }

    #[test]
    fn test_time_field_empty_components_read_as_zero() {
        let mut field = TimeField::new("Time worked", false);
        field.set(TimeComponent::Hours, "9");
        assert_eq!(field.text(), "9:00:00");
        assert_eq!(field.duration(), Duration::hours(9));
    }

    #[test]
    fn test_required_field_error_surfaces_inline() {
        let mut form = form();
        set_field(&mut form, "", "", "");

        let errors = form.errors();
        assert_eq!(errors, vec!["Time worked cannot be empty".to_string()]);
    }

    #[test]
    fn test_nullable_field_never_errors_when_empty() {
        let form = form();
        assert!(form.start_time().is_empty());
        assert!(form.start_time().error().is_none());
    }

    #[test]
    fn test_weekly_target_keeps_digits_and_first_decimal_point() {
        let mut form = form();
        form.set_weekly_target("40h");
        assert_eq!(form.weekly_target(), "40");
        assert_eq!(form.weekly_target_hours(), 40.0);

        form.set_weekly_target("37.5");
        assert_eq!(form.weekly_target_hours(), 37.5);

        form.set_weekly_target("");
        assert_eq!(form.weekly_target_hours(), 0.0);
    }

    #[test]
    fn test_recompute_on_every_mutation() {
        let mut form = form();
        form.set_weekly_target("45");
        form.set_flat_break_minutes("30");
        set_field(&mut form, "40", "00", "00");

        assert_eq!(format_duration(&form.output().remaining), "05:30:00");
        assert_eq!(form.output().overtime, Duration::zero());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut form = form();
        set_field(&mut form, "40", "00", "00");
        let first = form.output().clone();
        set_field(&mut form, "40", "00", "00");
        assert_eq!(first, *form.output());
    }

    #[test]
    fn test_go_home_follows_start_time() {
        let mut form = form();
        form.set_flat_break_minutes("30");
        set_field(&mut form, "40", "00", "00");
        form.set_start_time(TimeComponent::Hours, "9");

        assert_eq!(form.output().go_home, NaiveTime::from_hms_opt(14, 30, 0));
    }

    #[test]
    fn test_break_rows_add_and_remove() {
        let mut form = form();
        form.set_break_mode(BreakMode::Intervals);
        form.add_break();
        assert_eq!(form.breaks().len(), 2);

        // The first row is fixed
        assert!(!form.remove_break(0));
        assert!(form.remove_break(1));
        assert_eq!(form.breaks().len(), 1);
        assert!(!form.remove_break(5));
    }

    #[test]
    fn test_incomplete_break_rows_are_skipped() {
        let mut form = form();
        form.set_break_mode(BreakMode::Intervals);
        form.set_break(0, BreakBound::Start, TimeComponent::Hours, "12");

        // End still empty, so the row contributes nothing
        assert_eq!(form.break_spec(), BreakSpec::Intervals(vec![]));
        assert_eq!(form.break_spec().total(), Duration::zero());
    }

    #[test]
    fn test_complete_break_row_feeds_the_calculator() {
        let mut form = form();
        form.set_break_mode(BreakMode::Intervals);
        set_field(&mut form, "40", "00", "00");
        form.set_break(0, BreakBound::Start, TimeComponent::Hours, "12");
        form.set_break(0, BreakBound::End, TimeComponent::Hours, "12");
        form.set_break(0, BreakBound::End, TimeComponent::Minutes, "30");

        assert_eq!(form.break_spec().total(), Duration::minutes(30));
        assert_eq!(format_duration(&form.output().remaining), "05:30:00");
    }

    #[test]
    fn test_mode_switch_changes_downstream_spec_only() {
        let mut form = form();
        form.set_flat_break_minutes("45");
        assert_eq!(form.break_spec(), BreakSpec::Flat { minutes: 45 });

        form.set_break_mode(BreakMode::Intervals);
        assert!(matches!(form.break_spec(), BreakSpec::Intervals(_)));

        // Switching back restores the flat figure untouched
        form.set_break_mode(BreakMode::Flat);
        assert_eq!(form.break_spec(), BreakSpec::Flat { minutes: 45 });
    }

    #[test]
    fn test_start_time_folds_overflowing_hours() {
        let mut field = TimeField::new("Start time", true);
        field.set(TimeComponent::Hours, "25");
        assert_eq!(field.time_of_day(), NaiveTime::from_hms_opt(1, 0, 0));
    }
}
