//! Service layer for the batch form's business logic.
//!
//! Services sit between the store and whatever UI drives them: candidate
//! validation, the conflict detector, and the create/edit submission flows
//! that tie both together.

pub mod conflict;
pub mod submission;
pub mod validation;

pub use conflict::{find_conflict, find_conflict_with_settings};
pub use submission::{
    create_batch, create_batch_with_settings, update_batch, update_batch_with_settings,
    SubmissionError,
};
pub use validation::{
    has_blocking_issues, validate_candidate, validate_candidate_with_settings, Criticality,
    ValidationIssue, ValidationSettings,
};
