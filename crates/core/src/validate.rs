//! Field-level validation for project records.
//!
//! Validation never fails with an error: the result carries a
//! (possibly empty) list of violations for the caller to display. Enum
//! fields are closed Rust types, so invalid enum values are
//! unrepresentable and need no runtime check.

use serde::{Deserialize, Serialize};

use crate::project::Project;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of a project name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of a project description.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Maximum length of a project code.
pub const MAX_CODE_LENGTH: usize = 50;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// camelCase field name as it appears on the wire.
    pub field: String,
    /// Stable machine-readable code, e.g. `"required"` or `"out_of_range"`.
    pub code: String,
    pub message: String,
}

/// Aggregated result of validating one project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<FieldViolation>,
}

fn violation(field: &str, code: &str, message: impl Into<String>) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        code: code.to_string(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a project record, returning every violation found.
pub fn validate(project: &Project) -> ValidationResult {
    let mut violations = Vec::new();

    check_name(project, &mut violations);
    check_lengths(project, &mut violations);
    check_dates(project, &mut violations);
    check_numeric_ranges(project, &mut violations);
    check_self_reference(project, &mut violations);
    check_denormalized_references(project, &mut violations);
    check_terminal_consistency(project, &mut violations);

    ValidationResult {
        is_valid: violations.is_empty(),
        violations,
    }
}

fn check_name(project: &Project, out: &mut Vec<FieldViolation>) {
    if project.name.trim().is_empty() {
        out.push(violation("name", "required", "Project name is required"));
    }
}

fn check_lengths(project: &Project, out: &mut Vec<FieldViolation>) {
    if project.name.chars().count() > MAX_NAME_LENGTH {
        out.push(violation(
            "name",
            "too_long",
            format!("Project name must not exceed {MAX_NAME_LENGTH} characters"),
        ));
    }
    if let Some(description) = &project.description {
        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            out.push(violation(
                "description",
                "too_long",
                format!("Description must not exceed {MAX_DESCRIPTION_LENGTH} characters"),
            ));
        }
    }
    if let Some(code) = &project.code {
        if code.chars().count() > MAX_CODE_LENGTH {
            out.push(violation(
                "code",
                "too_long",
                format!("Project code must not exceed {MAX_CODE_LENGTH} characters"),
            ));
        }
    }
}

fn check_dates(project: &Project, out: &mut Vec<FieldViolation>) {
    if let Some(end) = project.end_date {
        if project.start_date > end {
            out.push(violation(
                "startDate",
                "date_order",
                "Start date cannot be after end date",
            ));
        }
    }
}

fn check_numeric_ranges(project: &Project, out: &mut Vec<FieldViolation>) {
    if let Some(progress) = project.progress_percentage {
        if !(0..=100).contains(&progress) {
            out.push(violation(
                "progressPercentage",
                "out_of_range",
                "Progress percentage must be between 0 and 100",
            ));
        }
    }
    if let Some(budget) = project.budget {
        if budget < 0.0 {
            out.push(violation("budget", "negative", "Budget cannot be negative"));
        }
    }
    if let Some(actual_cost) = project.actual_cost {
        if actual_cost < 0.0 {
            out.push(violation(
                "actualCost",
                "negative",
                "Actual cost cannot be negative",
            ));
        }
    }
}

fn check_self_reference(project: &Project, out: &mut Vec<FieldViolation>) {
    if let (Some(id), Some(parent_id)) = (project.id, project.parent_project_id) {
        if id == parent_id {
            out.push(violation(
                "parentProjectId",
                "self_reference",
                "A project cannot be its own parent",
            ));
        }
    }
}

/// The `*_id` field is canonical; an embedded object that disagrees with it
/// indicates a stale read-side projection.
fn check_denormalized_references(project: &Project, out: &mut Vec<FieldViolation>) {
    if let (Some(manager_id), Some(manager)) = (project.project_manager_id, &project.project_manager)
    {
        if manager.id != manager_id {
            out.push(violation(
                "projectManager",
                "reference_mismatch",
                "Embedded project manager does not match projectManagerId",
            ));
        }
    }
    if let (Some(client_id), Some(client)) = (project.client_id, &project.client) {
        if client.id != client_id {
            out.push(violation(
                "client",
                "reference_mismatch",
                "Embedded client does not match clientId",
            ));
        }
    }
    for member in &project.team_members {
        if !project.team_member_ids.contains(&member.id) {
            out.push(violation(
                "teamMembers",
                "reference_mismatch",
                format!("Embedded team member {} is not in teamMemberIds", member.id),
            ));
        }
    }
}

/// Advisory invariant: an actual end date on a still-running project.
fn check_terminal_consistency(project: &Project, out: &mut Vec<FieldViolation>) {
    if project.actual_end_date.is_some() && !project.status.is_terminal() {
        out.push(violation(
            "actualEndDate",
            "status_mismatch",
            "Actual end date is set but the project status is not terminal",
        ));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
