//! Search criteria matching and filtering for project collections.
//!
//! Every criterion is optional; an absent field imposes no constraint.
//! Populated criteria combine as an AND-conjunction.

use serde::{Deserialize, Serialize};

use crate::project::Project;
use crate::status::{ProjectPriority, ProjectStatus, ProjectType};
use crate::types::DbId;

/// Filter shape built by the presentation layer from user input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSearchCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<ProjectPriority>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProjectType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Case-insensitive free-text term matched against name, description,
    /// and code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ProjectSearchCriteria {
    /// Whether this project satisfies every populated criterion.
    pub fn matches(&self, project: &Project) -> bool {
        if self.status.is_some_and(|s| project.status != s) {
            return false;
        }
        if self.priority.is_some_and(|p| project.priority != p) {
            return false;
        }
        if self.kind.is_some_and(|k| project.kind != k) {
            return false;
        }
        if let Some(department) = &self.department {
            if project.department.as_deref() != Some(department.as_str()) {
                return false;
            }
        }
        if let Some(manager_id) = self.manager_id {
            if project.project_manager_id != Some(manager_id) {
                return false;
            }
        }
        if let Some(member_id) = self.team_member_id {
            if !project.team_member_ids.contains(&member_id) {
                return false;
            }
        }
        if let Some(is_active) = self.is_active {
            if project.is_active != Some(is_active) {
                return false;
            }
        }
        if let Some(term) = &self.search_term {
            if !matches_term(project, term) {
                return false;
            }
        }
        true
    }

    /// Filter a project collection, preserving input order.
    pub fn filter<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

fn matches_term(project: &Project, term: &str) -> bool {
    let term = term.to_lowercase();
    let haystacks = [
        Some(project.name.as_str()),
        project.description.as_deref(),
        project.code.as_deref(),
    ];
    haystacks
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
