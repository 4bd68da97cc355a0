use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Programming-contract faults — distinct from validation findings.
///
/// Data-quality problems never surface here; they are reported as
/// [`ValidationIssue`] values inside a [`ValidationResult`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MyInvoisError {
    /// The document builder was used without a required part.
    #[error("builder error: {0}")]
    Builder(String),
}

/// Severity of a validation finding.
///
/// Errors block submission; warnings are advisory and never affect
/// [`ValidationResult::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Issue category, derived from the issue code prefix. Used for the
/// per-category error counts in [`ValidationSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Config,
    Supplier,
    Buyer,
    Invoice,
    Items,
    Tax,
}

/// A single validation finding.
///
/// The `code` is a stable machine-readable identifier (e.g. `ITM_010`)
/// keyed on by external tooling — codes are append-only, never renumbered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Stable issue code (e.g. "SUP_002").
    pub code: String,
    /// Dot-separated path to the offending field (e.g. "lines[2].net_amount").
    pub field: String,
    /// Human-readable description.
    pub message: String,
    pub category: IssueCategory,
    pub severity: Severity,
}

// Issues are value objects compared by code + field; the message is
// free to change between releases.
impl PartialEq for ValidationIssue {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.field == other.field
    }
}

impl Eq for ValidationIssue {}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.field, self.message)
    }
}

/// Aggregate counts over a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub error_count: usize,
    pub warning_count: usize,
    /// Error counts per category. Categories without errors are absent.
    pub errors_by_category: BTreeMap<IssueCategory, usize>,
}

/// The engine's sole output. Constructed once per validation run and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff no errors were found. Warnings never fail validation.
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    pub summary: ValidationSummary,
}

impl ValidationResult {
    /// Bucket raw findings into errors and warnings and compute the summary.
    pub(crate) fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        for issue in issues {
            match issue.severity {
                Severity::Error => errors.push(issue),
                Severity::Warning => warnings.push(issue),
            }
        }

        let mut errors_by_category = BTreeMap::new();
        for issue in &errors {
            *errors_by_category.entry(issue.category).or_insert(0) += 1;
        }

        let summary = ValidationSummary {
            error_count: errors.len(),
            warning_count: warnings.len(),
            errors_by_category,
        };

        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            summary,
        }
    }
}
