//! Computed-field derivation for project records.
//!
//! Computed fields are recalculated on every read and never stored.
//! Derivation is pure and idempotent: fields that cannot be computed
//! (missing end date, missing budget) are left `None`, never an error.

use chrono::NaiveDate;

use crate::project::Project;
use crate::status::ProjectStatus;

/// Populate the computed fields of a project as of the given date.
///
/// Safe to call repeatedly; any previously derived values are overwritten.
pub fn derive_computed_fields(mut project: Project, as_of: NaiveDate) -> Project {
    project.days_remaining = days_remaining(&project, as_of);
    project.is_overdue = is_overdue(&project, as_of);
    project.is_on_track = is_on_track(&project, as_of);
    project.budget_utilization = budget_utilization(&project);
    project.status_color = Some(project.status.color_hex().to_string());
    project.priority_color = Some(project.priority.color_hex().to_string());
    project
}

/// Signed day count from `as_of` to the project's end. Completed projects
/// measure against the actual end date when one is recorded. Negative once
/// past due.
fn days_remaining(project: &Project, as_of: NaiveDate) -> Option<i64> {
    let end = if project.status == ProjectStatus::Completed {
        project.actual_end_date.or(project.end_date)
    } else {
        project.end_date
    };
    end.map(|end| (end - as_of).num_days())
}

/// Past the planned end date while still in a non-terminal status.
pub(crate) fn is_overdue(project: &Project, as_of: NaiveDate) -> Option<bool> {
    let end = project.end_date?;
    if project.status.is_terminal() {
        return Some(false);
    }
    Some(end < as_of)
}

/// Progress at or above the linear expectation for the elapsed schedule,
/// and not overdue. Requires a started schedule of positive length and a
/// recorded progress percentage.
fn is_on_track(project: &Project, as_of: NaiveDate) -> Option<bool> {
    let end = project.end_date?;
    let progress = project.progress_percentage?;

    let total_days = (end - project.start_date).num_days();
    let elapsed_days = (as_of - project.start_date).num_days();
    if total_days <= 0 || elapsed_days <= 0 {
        return None;
    }

    if is_overdue(project, as_of) == Some(true) {
        return Some(false);
    }

    let expected_progress = elapsed_days as f64 / total_days as f64 * 100.0;
    Some(f64::from(progress) >= expected_progress)
}

/// Actual cost over budget, as a percentage. Undefined without a positive
/// budget and a recorded actual cost.
fn budget_utilization(project: &Project) -> Option<f64> {
    let budget = project.budget.filter(|&b| b > 0.0)?;
    let actual_cost = project.actual_cost?;
    Some(actual_cost / budget * 100.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::ProjectPriority;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project() -> Project {
        Project::new("Migration wave 2", date(2024, 1, 1))
    }

    // -- days remaining ------------------------------------------------------

    #[test]
    fn days_remaining_counts_to_end_date() {
        let mut p = project();
        p.end_date = Some(date(2024, 1, 11));
        let p = derive_computed_fields(p, date(2024, 1, 1));
        assert_eq!(p.days_remaining, Some(10));
    }

    #[test]
    fn days_remaining_goes_negative_past_due() {
        let mut p = project();
        p.end_date = Some(date(2024, 1, 1));
        let p = derive_computed_fields(p, date(2024, 1, 4));
        assert_eq!(p.days_remaining, Some(-3));
    }

    #[test]
    fn completed_project_measures_against_actual_end() {
        let mut p = project();
        p.status = ProjectStatus::Completed;
        p.end_date = Some(date(2024, 6, 30));
        p.actual_end_date = Some(date(2024, 6, 10));
        let p = derive_computed_fields(p, date(2024, 6, 1));
        assert_eq!(p.days_remaining, Some(9));
    }

    #[test]
    fn days_remaining_absent_without_end_date() {
        let p = derive_computed_fields(project(), date(2024, 1, 1));
        assert_eq!(p.days_remaining, None);
    }

    // -- overdue -------------------------------------------------------------

    #[test]
    fn past_due_active_project_is_overdue() {
        let mut p = project();
        p.status = ProjectStatus::Active;
        p.end_date = Some(date(2023, 1, 1));
        let p = derive_computed_fields(p, date(2024, 1, 1));
        assert_eq!(p.is_overdue, Some(true));
    }

    #[test]
    fn terminal_statuses_are_never_overdue() {
        for status in [
            ProjectStatus::Completed,
            ProjectStatus::Cancelled,
            ProjectStatus::Archived,
            ProjectStatus::Rejected,
        ] {
            let mut p = project();
            p.status = status;
            p.end_date = Some(date(2023, 1, 1));
            let p = derive_computed_fields(p, date(2024, 1, 1));
            assert_eq!(p.is_overdue, Some(false), "{status:?} flagged overdue");
        }
    }

    #[test]
    fn end_date_today_is_not_overdue() {
        let mut p = project();
        p.status = ProjectStatus::Active;
        p.end_date = Some(date(2024, 1, 1));
        let p = derive_computed_fields(p, date(2024, 1, 1));
        assert_eq!(p.is_overdue, Some(false));
    }

    #[test]
    fn overdue_absent_without_end_date() {
        let p = derive_computed_fields(project(), date(2024, 1, 1));
        assert_eq!(p.is_overdue, None);
    }

    // -- on track ------------------------------------------------------------

    #[test]
    fn behind_linear_expectation_is_off_track() {
        // Halfway through the schedule with 40% done.
        let mut p = project();
        p.status = ProjectStatus::Active;
        p.end_date = Some(date(2024, 6, 30));
        p.progress_percentage = Some(40);
        let p = derive_computed_fields(p, date(2024, 4, 1));
        assert_eq!(p.is_on_track, Some(false));
        assert_eq!(p.is_overdue, Some(false));
    }

    #[test]
    fn ahead_of_linear_expectation_is_on_track() {
        let mut p = project();
        p.status = ProjectStatus::Active;
        p.end_date = Some(date(2024, 6, 30));
        p.progress_percentage = Some(60);
        let p = derive_computed_fields(p, date(2024, 4, 1));
        assert_eq!(p.is_on_track, Some(true));
    }

    #[test]
    fn overdue_project_is_off_track_even_at_full_progress() {
        let mut p = project();
        p.status = ProjectStatus::Active;
        p.end_date = Some(date(2024, 2, 1));
        p.progress_percentage = Some(99);
        let p = derive_computed_fields(p, date(2024, 3, 1));
        assert_eq!(p.is_on_track, Some(false));
    }

    #[test]
    fn on_track_absent_before_schedule_starts() {
        let mut p = project();
        p.end_date = Some(date(2024, 6, 30));
        p.progress_percentage = Some(0);
        let p = derive_computed_fields(p, date(2023, 12, 1));
        assert_eq!(p.is_on_track, None);
    }

    #[test]
    fn on_track_absent_without_progress() {
        let mut p = project();
        p.end_date = Some(date(2024, 6, 30));
        p.progress_percentage = None;
        let p = derive_computed_fields(p, date(2024, 4, 1));
        assert_eq!(p.is_on_track, None);
    }

    // -- budget utilization --------------------------------------------------

    #[test]
    fn utilization_is_cost_over_budget_percent() {
        let mut p = project();
        p.budget = Some(1000.0);
        p.actual_cost = Some(250.0);
        let p = derive_computed_fields(p, date(2024, 1, 1));
        assert!((p.budget_utilization.unwrap() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn utilization_undefined_for_zero_or_missing_budget() {
        let mut p = project();
        p.actual_cost = Some(250.0);
        let derived = derive_computed_fields(p.clone(), date(2024, 1, 1));
        assert_eq!(derived.budget_utilization, None);

        p.budget = Some(0.0);
        let derived = derive_computed_fields(p, date(2024, 1, 1));
        assert_eq!(derived.budget_utilization, None);
    }

    // -- colors --------------------------------------------------------------

    #[test]
    fn colors_follow_status_and_priority() {
        let mut p = project();
        p.status = ProjectStatus::Active;
        p.priority = ProjectPriority::Critical;
        let p = derive_computed_fields(p, date(2024, 1, 1));
        assert_eq!(p.status_color.as_deref(), Some("#007bff"));
        assert_eq!(p.priority_color.as_deref(), Some("#dc3545"));
    }

    // -- idempotence ---------------------------------------------------------

    #[test]
    fn derivation_is_idempotent() {
        let mut p = project();
        p.status = ProjectStatus::Active;
        p.end_date = Some(date(2024, 6, 30));
        p.progress_percentage = Some(55);
        p.budget = Some(2000.0);
        p.actual_cost = Some(500.0);

        let as_of = date(2024, 4, 1);
        let once = derive_computed_fields(p, as_of);
        let twice = derive_computed_fields(once.clone(), as_of);
        assert_eq!(once, twice);
    }

    #[test]
    fn stale_computed_values_are_overwritten() {
        let mut p = project();
        p.end_date = Some(date(2024, 6, 30));
        p.days_remaining = Some(9999);
        p.status_color = Some("#000000".into());
        let p = derive_computed_fields(p, date(2024, 6, 20));
        assert_eq!(p.days_remaining, Some(10));
        assert_eq!(p.status_color.as_deref(), Some("#ffc107"));
    }
}
