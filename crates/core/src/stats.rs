//! Aggregate statistics over a project collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::project::Project;
use crate::status::ProjectStatus;

/// Read-only snapshot produced by [`aggregate`]; never mutated directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total_projects: u64,
    pub active_projects: u64,
    pub completed_projects: u64,
    pub overdue_projects: u64,
    pub high_risk_projects: u64,
    pub total_budget: f64,
    pub total_actual_cost: f64,
    pub average_progress: f64,
}

/// Aggregate a project collection into a stats snapshot as of a date.
///
/// An empty collection yields the all-zero snapshot; averaging is
/// division-by-zero safe. A project with no recorded progress contributes
/// zero to the average.
pub fn aggregate(projects: &[Project], as_of: NaiveDate) -> ProjectStats {
    let mut stats = ProjectStats {
        total_projects: projects.len() as u64,
        ..Default::default()
    };

    let mut progress_sum: i64 = 0;
    for project in projects {
        if project.is_active == Some(true) {
            stats.active_projects += 1;
        }
        if project.status == ProjectStatus::Completed {
            stats.completed_projects += 1;
        }
        if crate::derived::is_overdue(project, as_of) == Some(true) {
            stats.overdue_projects += 1;
        }
        if project.is_high_risk() {
            stats.high_risk_projects += 1;
        }
        stats.total_budget += project.budget.unwrap_or(0.0);
        stats.total_actual_cost += project.actual_cost.unwrap_or(0.0);
        progress_sum += i64::from(project.progress_percentage.unwrap_or(0));
    }

    if !projects.is_empty() {
        stats.average_progress = progress_sum as f64 / projects.len() as f64;
    }
    stats
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
