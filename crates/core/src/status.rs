//! Closed enumerations for the project record: lifecycle status, priority,
//! project type, and risk level.
//!
//! Serde tags use SCREAMING_SNAKE_CASE to match the wire contract consumed
//! by the UI (`PLANNING`, `ON_HOLD`, ...). Color tokens live here because
//! the mapping is fixed per enum value; they are purely presentational.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Fallback color token for statuses without a dedicated mapping.
const COLOR_NEUTRAL: &str = "#6c757d";

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
    Cancelled,
    Suspended,
    Review,
    Approved,
    Rejected,
    Archived,
}

impl ProjectStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Planning,
        Self::Active,
        Self::OnHold,
        Self::Completed,
        Self::Cancelled,
        Self::Suspended,
        Self::Review,
        Self::Approved,
        Self::Rejected,
        Self::Archived,
    ];

    /// Wire tag for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "PLANNING",
            Self::Active => "ACTIVE",
            Self::OnHold => "ON_HOLD",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Suspended => "SUSPENDED",
            Self::Review => "REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Parse a wire tag.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Invalid project status '{s}'")))
    }

    /// Human-readable label for display in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Suspended => "Suspended",
            Self::Review => "Under Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Archived => "Archived",
        }
    }

    /// Terminal statuses admit no further lifecycle transitions. Overdue
    /// evaluation skips them.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Cancelled | Self::Archived | Self::Rejected
        )
    }

    /// Fixed presentation color token for this status.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Completed => "#28a745",
            Self::Active => "#007bff",
            Self::Planning => "#ffc107",
            Self::OnHold => "#fd7e14",
            Self::Cancelled => "#dc3545",
            _ => COLOR_NEUTRAL,
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectPriority
// ---------------------------------------------------------------------------

/// Project priority. Variants are declared lowest-first so the derived
/// `Ord` matches the business ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectPriority {
    Low,
    Medium,
    High,
    Critical,
    Urgent,
}

impl ProjectPriority {
    /// Every priority, lowest first.
    pub const ALL: [Self; 5] = [
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Critical,
        Self::Urgent,
    ];

    /// Wire tag for this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
            Self::Urgent => "URGENT",
        }
    }

    /// Parse a wire tag.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Invalid project priority '{s}'")))
    }

    /// Human-readable label for display in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Urgent => "Urgent",
        }
    }

    /// Fixed presentation color token for this priority.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Critical => "#dc3545",
            Self::Urgent => "#fd7e14",
            Self::High => "#ffc107",
            Self::Medium => "#007bff",
            Self::Low => "#28a745",
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectType
// ---------------------------------------------------------------------------

/// Categorical project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    Development,
    Maintenance,
    Research,
    Infrastructure,
    Migration,
    Upgrade,
    Consulting,
    Training,
    Documentation,
    Testing,
    Deployment,
    Integration,
    Customization,
    Support,
    Other,
}

impl ProjectType {
    /// Every project type, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Development,
        Self::Maintenance,
        Self::Research,
        Self::Infrastructure,
        Self::Migration,
        Self::Upgrade,
        Self::Consulting,
        Self::Training,
        Self::Documentation,
        Self::Testing,
        Self::Deployment,
        Self::Integration,
        Self::Customization,
        Self::Support,
        Self::Other,
    ];

    /// Wire tag for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "DEVELOPMENT",
            Self::Maintenance => "MAINTENANCE",
            Self::Research => "RESEARCH",
            Self::Infrastructure => "INFRASTRUCTURE",
            Self::Migration => "MIGRATION",
            Self::Upgrade => "UPGRADE",
            Self::Consulting => "CONSULTING",
            Self::Training => "TRAINING",
            Self::Documentation => "DOCUMENTATION",
            Self::Testing => "TESTING",
            Self::Deployment => "DEPLOYMENT",
            Self::Integration => "INTEGRATION",
            Self::Customization => "CUSTOMIZATION",
            Self::Support => "SUPPORT",
            Self::Other => "OTHER",
        }
    }

    /// Parse a wire tag.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Invalid project type '{s}'")))
    }

    /// Human-readable label for display in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Maintenance => "Maintenance",
            Self::Research => "Research",
            Self::Infrastructure => "Infrastructure",
            Self::Migration => "Migration",
            Self::Upgrade => "Upgrade",
            Self::Consulting => "Consulting",
            Self::Training => "Training",
            Self::Documentation => "Documentation",
            Self::Testing => "Testing",
            Self::Deployment => "Deployment",
            Self::Integration => "Integration",
            Self::Customization => "Customization",
            Self::Support => "Support",
            Self::Other => "Other",
        }
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Project risk level. Declared lowest-first so derived `Ord` matches the
/// business ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Every risk level, lowest first.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Wire tag for this risk level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// Parse a wire tag.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Invalid risk level '{s}'")))
    }

    /// Human-readable label for display in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// High and Critical risk projects are surfaced on the risk dashboard.
    pub fn is_high(self) -> bool {
        self >= Self::High
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
