//! Project record schema and pure domain logic for the portfolio platform.
//!
//! This crate is the typed contract shared by the persistence/API layer and
//! the presentation layer. It contains no I/O: every operation is a pure
//! function over in-memory records.
//!
//! - [`project`] — the [`Project`](project::Project) entity, its
//!   [`User`](project::User) reference shape, and lifecycle helpers.
//! - [`status`] — closed enumerations for status, priority, type, and risk.
//! - [`validate`] — field-level validation returning violation lists.
//! - [`derived`] — computed-field derivation (`daysRemaining`, `isOverdue`,
//!   `isOnTrack`, `budgetUtilization`, color tokens).
//! - [`search`] — [`ProjectSearchCriteria`](search::ProjectSearchCriteria)
//!   matching and filtering.
//! - [`stats`] — [`ProjectStats`](stats::ProjectStats) aggregation.

pub mod derived;
pub mod error;
pub mod project;
pub mod search;
pub mod stats;
pub mod status;
pub mod types;
pub mod validate;

pub use derived::derive_computed_fields;
pub use error::CoreError;
pub use project::{Project, User};
pub use search::ProjectSearchCriteria;
pub use stats::ProjectStats;
pub use status::{ProjectPriority, ProjectStatus, ProjectType, RiskLevel};
pub use validate::{validate, FieldViolation, ValidationResult};
