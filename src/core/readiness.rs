//! Submission readiness pre-check.
//!
//! A cheap, presence-only check for UI use while an invoice is still
//! being drafted — long before totals are reconciled or a full
//! [`InvoiceDocument`](super::types::InvoiceDocument) can be assembled.
//! Issues are short human-readable sentences meant for direct display
//! in a settings or onboarding screen, not coded findings.

use serde::{Deserialize, Serialize};

use super::config::EngineConfig;

/// Partial supplier details available while drafting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftSupplier {
    pub tin: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

/// Partial buyer details available while drafting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftBuyer {
    pub name: Option<String>,
}

/// Outcome of a readiness pre-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Readiness {
    /// True iff no issues were found.
    pub ready: bool,
    /// Prose issue list for end-user display.
    pub issues: Vec<String>,
}

fn missing(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Answer "is this invoice even submittable" from partial data.
///
/// Never reconciles amounts (there may be none yet); it only checks
/// that the pieces a submission needs are present.
pub fn quick_readiness_check(
    supplier: &DraftSupplier,
    buyer: &DraftBuyer,
    item_count: usize,
    config: &EngineConfig,
) -> Readiness {
    let mut issues = Vec::new();

    if !config.enabled {
        issues.push("E-invoicing is not enabled in settings".to_string());
    }
    if !config.has_credentials() {
        issues.push("MyInvois API credentials are not configured".to_string());
    }
    if missing(&supplier.tin) {
        issues.push("Supplier TIN is not configured".to_string());
    }
    if missing(&supplier.street) {
        issues.push("Supplier street address is missing".to_string());
    }
    if missing(&supplier.city) {
        issues.push("Supplier city is missing".to_string());
    }
    if missing(&supplier.postcode) {
        issues.push("Supplier postcode is missing".to_string());
    }
    if missing(&supplier.country) {
        issues.push("Supplier country is missing".to_string());
    }
    if missing(&buyer.name) {
        issues.push("Buyer name is missing".to_string());
    }
    if item_count == 0 {
        issues.push("Invoice has no line items".to_string());
    }

    Readiness {
        ready: issues.is_empty(),
        issues,
    }
}
