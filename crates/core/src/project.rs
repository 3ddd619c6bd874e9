//! Project entity and user reference shapes.
//!
//! Field names serialize in camelCase to match the contract consumed by the
//! web UI. Relations follow the denormalized dual-representation pattern:
//! the `*_id` field is canonical, the embedded [`User`] is a read-side
//! projection populated by the persistence layer and never re-derived here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::{ProjectPriority, ProjectStatus, ProjectType, RiskLevel};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// User reference shape
// ---------------------------------------------------------------------------

/// Minimal projection of a person, used wherever a project references a
/// manager, client, or team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl User {
    /// "First Last" display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ---------------------------------------------------------------------------
// Project entity
// ---------------------------------------------------------------------------

/// One managed initiative.
///
/// Computed fields are never authoritative input: they are populated by
/// [`derive_computed_fields`](crate::derived::derive_computed_fields) at
/// read time and skipped on the wire when absent. Audit fields are owned by
/// the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Absent until the record has been persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short unique identifier, e.g. `PRJ-1042`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end_date: Option<NaiveDate>,

    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    #[serde(rename = "type")]
    pub kind: ProjectType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_manager_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_manager: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<User>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team_member_ids: Vec<DbId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team_members: Vec<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_description: Option<String>,
    /// Opaque numeric score; the scale is owned by the system operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<i32>,
    /// Opaque numeric score; the scale is owned by the system operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_satisfaction_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,
    /// Self-referential relation forming a project hierarchy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_project_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_criteria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_metrics: Option<String>,

    // Computed fields, populated at read time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_overdue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_on_track: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_utilization: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_color: Option<String>,

    // Audit fields, written only by the persistence layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<Timestamp>,
}

impl Project {
    /// Create a not-yet-persisted project with the platform's creation
    /// defaults: Planning status, Medium priority, Other type, zero
    /// progress, active.
    pub fn new(name: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            code: None,
            start_date,
            end_date: None,
            actual_start_date: None,
            actual_end_date: None,
            status: ProjectStatus::Planning,
            priority: ProjectPriority::Medium,
            kind: ProjectType::Other,
            budget: None,
            actual_cost: None,
            progress_percentage: Some(0),
            project_manager_id: None,
            project_manager: None,
            client_id: None,
            client: None,
            team_member_ids: Vec::new(),
            team_members: Vec::new(),
            location: None,
            department: None,
            tags: None,
            risk_level: None,
            risk_description: None,
            quality_score: None,
            customer_satisfaction_score: None,
            is_active: Some(true),
            is_template: None,
            parent_project_id: None,
            notes: None,
            completion_criteria: None,
            success_metrics: None,
            days_remaining: None,
            is_overdue: None,
            is_on_track: None,
            budget_utilization: None,
            status_color: None,
            priority_color: None,
            created_by: None,
            created_at: None,
            last_modified_by: None,
            last_modified_at: None,
        }
    }

    /// Whether the record has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Update progress, applying the platform's lifecycle side effects:
    /// reaching 100% completes the project and stamps the actual end date;
    /// the first nonzero progress moves a Planning project to Active and
    /// stamps the actual start date.
    pub fn set_progress(&mut self, progress_percentage: i32, today: NaiveDate) {
        self.progress_percentage = Some(progress_percentage);

        if progress_percentage >= 100 {
            self.status = ProjectStatus::Completed;
            self.actual_end_date = Some(today);
        } else if progress_percentage > 0 && self.status == ProjectStatus::Planning {
            self.status = ProjectStatus::Active;
            if self.actual_start_date.is_none() {
                self.actual_start_date = Some(today);
            }
        }
    }

    /// Change status, stamping actual dates: Completed records the actual
    /// end date, Active records the actual start date. Dates already set
    /// are left untouched.
    pub fn transition_status(&mut self, status: ProjectStatus, today: NaiveDate) {
        self.status = status;

        match status {
            ProjectStatus::Completed if self.actual_end_date.is_none() => {
                self.actual_end_date = Some(today);
            }
            ProjectStatus::Active if self.actual_start_date.is_none() => {
                self.actual_start_date = Some(today);
            }
            _ => {}
        }
    }

    /// Add a user to the canonical team member id list. Set semantics:
    /// adding an existing member is a no-op.
    pub fn add_team_member(&mut self, user_id: DbId) {
        if !self.team_member_ids.contains(&user_id) {
            self.team_member_ids.push(user_id);
        }
    }

    /// Remove a user from the team. Also drops the stale entry from the
    /// denormalized `team_members` projection so the two stay consistent.
    pub fn remove_team_member(&mut self, user_id: DbId) {
        self.team_member_ids.retain(|&id| id != user_id);
        self.team_members.retain(|u| u.id != user_id);
    }

    /// Whether this project carries High or Critical risk.
    pub fn is_high_risk(&self) -> bool {
        self.risk_level.is_some_and(RiskLevel::is_high)
    }

    /// Below 50% progress while still in a non-terminal status.
    pub fn is_low_progress(&self) -> bool {
        !self.status.is_terminal() && self.progress_percentage.unwrap_or(0) < 50
    }

    /// Whether the planned end date falls within the next `days` days
    /// (inclusive) of `as_of`. Terminal projects never count as ending soon.
    pub fn ends_within(&self, as_of: NaiveDate, days: i64) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match self.end_date {
            Some(end) => {
                let remaining = (end - as_of).num_days();
                (0..=days).contains(&remaining)
            }
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
