//! Candidate field validation.
//!
//! These are the light, advisory checks the batch form runs before the
//! conflict detector. They never touch the roster; anything requiring other
//! batches lives in [`crate::services::conflict`].

use serde::{Deserialize, Serialize};

use crate::api::Candidate;

/// Tunable validation behavior, typically loaded from the store config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Slots shorter than this many minutes get an advisory warning.
    #[serde(default = "default_min_slot_minutes")]
    pub min_slot_minutes: u16,
    /// Whether lenient skips of unparseable stored time ranges are logged
    /// at warn level (debug otherwise).
    #[serde(default = "default_warn_on_unparseable_times")]
    pub warn_on_unparseable_times: bool,
}

fn default_min_slot_minutes() -> u16 {
    30
}

fn default_warn_on_unparseable_times() -> bool {
    true
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            min_slot_minutes: default_min_slot_minutes(),
            warn_on_unparseable_times: default_warn_on_unparseable_times(),
        }
    }
}

/// How severe a validation issue is. Only `Error` blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Error,
    Warning,
}

/// One problem found in a candidate, tied to the form field it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub criticality: Criticality,
    pub description: String,
}

impl ValidationIssue {
    pub fn error(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            criticality: Criticality::Error,
            description: description.into(),
        }
    }

    pub fn warning(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            criticality: Criticality::Warning,
            description: description.into(),
        }
    }
}

/// Validate a candidate with default settings.
pub fn validate_candidate(candidate: &Candidate) -> Vec<ValidationIssue> {
    validate_candidate_with_settings(candidate, &ValidationSettings::default())
}

/// Validate a candidate's fields, returning every issue found.
///
/// The form requires instructors and days even though the detector itself
/// tolerates their absence (it just reports no conflict).
pub fn validate_candidate_with_settings(
    candidate: &Candidate,
    settings: &ValidationSettings,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if candidate.name.trim().is_empty() {
        issues.push(ValidationIssue::error("name", "Batch name is required"));
    }

    if candidate.course_id.value().trim().is_empty() {
        issues.push(ValidationIssue::error("course", "A course must be selected"));
    }

    if candidate.instructor_ids.is_empty() {
        issues.push(ValidationIssue::error(
            "instructors",
            "At least one instructor must be selected",
        ));
    }

    if candidate.days.is_empty() {
        issues.push(ValidationIssue::error(
            "days",
            "At least one weekday must be selected",
        ));
    }

    if !candidate.time_slot.is_well_formed() {
        issues.push(ValidationIssue::error(
            "time",
            "Start time must be before end time",
        ));
    } else if candidate.time_slot.duration_minutes() < settings.min_slot_minutes {
        issues.push(ValidationIssue::warning(
            "time",
            format!(
                "Time slot is shorter than {} minutes",
                settings.min_slot_minutes
            ),
        ));
    }

    if let (Some(start), Some(end)) = (candidate.start_date, candidate.end_date) {
        if start > end {
            issues.push(ValidationIssue::error(
                "dates",
                "Start date must not be after end date",
            ));
        }
    }

    issues
}

/// Whether any issue is severe enough to block submission.
pub fn has_blocking_issues(issues: &[ValidationIssue]) -> bool {
    issues
        .iter()
        .any(|issue| issue.criticality == Criticality::Error)
}
