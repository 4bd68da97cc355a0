use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::config::EngineConfig;
use super::currencies::{self, HOME_CURRENCY};
use super::error::{IssueCategory, Severity, ValidationIssue, ValidationResult};
use super::identifiers::validate_tin;
use super::types::*;
use super::{countries, states, tax_types, units};

/// Absolute tolerance for amount reconciliation. Mismatches within one
/// sen are treated as rounding, not inconsistency.
const AMOUNT_TOLERANCE: Decimal = dec!(0.01);

/// Maximum invoice number length accepted by the tax platform.
const MAX_NUMBER_LEN: usize = 50;

/// Maximum supplier legal name length.
const MAX_NAME_LEN: usize = 300;

/// Validate a fully assembled document against the compliance rule set.
///
/// Runs every checker in a fixed order and returns the complete issue
/// list in one pass — a thoroughly broken document produces a result
/// full of errors rather than an early abort, so callers can surface
/// every problem at once. Never panics on data-quality problems.
pub fn validate(doc: &InvoiceDocument, config: &EngineConfig, profile: Profile) -> ValidationResult {
    let mut issues = Vec::new();

    check_header(doc, profile, &mut issues);
    check_supplier(&doc.supplier, profile, &mut issues);
    check_buyer(&doc.buyer, profile, &mut issues);
    check_lines(&doc.lines, profile, &mut issues);
    check_tax_subtotals(doc, profile, &mut issues);
    check_totals(doc, profile, &mut issues);
    check_currency(doc, profile, &mut issues);
    check_config(doc, config, profile, &mut issues);

    ValidationResult::from_issues(issues)
}

// ── Severity policy ──────────────────────────────────────────────────────────
//
// Severity is assigned per issue code from a table rather than inline in
// the checkers, so a profile can promote an advisory to a hard error as a
// configuration change. Per-profile overrides take precedence over the
// defaults below.

/// Default severity per issue code. Sorted by code for binary search.
static DEFAULT_SEVERITIES: &[(&str, Severity)] = &[
    ("BUY_001", Severity::Error),
    ("BUY_002", Severity::Warning),
    ("BUY_003", Severity::Error),
    ("BUY_P01", Severity::Error),
    ("CFG_001", Severity::Warning),
    ("CURRENCY_001", Severity::Error),
    ("DOC_001", Severity::Error),
    ("DOC_002", Severity::Error),
    ("DOC_003", Severity::Error),
    ("DOC_004", Severity::Error),
    ("DOC_005", Severity::Warning),
    ("DOC_006", Severity::Error),
    ("ITM_001", Severity::Error),
    ("ITM_002", Severity::Error),
    ("ITM_003", Severity::Error),
    ("ITM_004", Severity::Error),
    ("ITM_005", Severity::Error),
    ("ITM_006", Severity::Warning),
    ("ITM_007", Severity::Error),
    ("ITM_008", Severity::Warning),
    ("ITM_009", Severity::Error),
    ("ITM_010", Severity::Error),
    ("ITM_011", Severity::Warning),
    ("ITM_012", Severity::Warning),
    ("SUP_001", Severity::Error),
    ("SUP_002", Severity::Error),
    ("SUP_003", Severity::Error),
    ("SUP_004", Severity::Error),
    ("SUP_005", Severity::Error),
    ("SUP_006", Severity::Error),
    ("SUP_007", Severity::Error),
    ("SUP_008", Severity::Error),
    ("SUP_009", Severity::Warning),
    ("SUP_010", Severity::Warning),
    ("SUP_011", Severity::Error),
    ("SUP_012", Severity::Warning),
    ("SUP_013", Severity::Warning),
    ("SUP_P01", Severity::Error),
    ("TAX_001", Severity::Warning),
    ("TAX_002", Severity::Error),
    ("TOT_001", Severity::Error),
    ("TOT_002", Severity::Error),
    ("TOT_003", Severity::Error),
    ("TOT_004", Severity::Warning),
];

/// National-profile severity overrides. Currently empty — the defaults
/// encode the national rule set.
static NATIONAL_OVERRIDES: &[(&str, Severity)] = &[];

/// Network-profile severity overrides. Currently empty; candidates for
/// promotion (e.g. TOT_004, SUP_009) go here, never inline in checkers.
static NETWORK_OVERRIDES: &[(&str, Severity)] = &[];

fn lookup_severity(table: &[(&str, Severity)], code: &str) -> Option<Severity> {
    table
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| table[i].1)
}

/// Resolve the severity for an issue code under a submission profile.
/// Unknown codes default to error: a checker emitting an unregistered
/// code is a bug that should fail loudly in tests.
pub fn severity_for(code: &str, profile: Profile) -> Severity {
    let overrides = match profile {
        Profile::National => NATIONAL_OVERRIDES,
        Profile::Network => NETWORK_OVERRIDES,
    };
    lookup_severity(overrides, code)
        .or_else(|| lookup_severity(DEFAULT_SEVERITIES, code))
        .unwrap_or(Severity::Error)
}

/// Issue category from the code prefix.
fn category_for(code: &str) -> IssueCategory {
    if code.starts_with("SUP_") {
        IssueCategory::Supplier
    } else if code.starts_with("BUY_") {
        IssueCategory::Buyer
    } else if code.starts_with("ITM_") {
        IssueCategory::Items
    } else if code.starts_with("TAX_") {
        IssueCategory::Tax
    } else if code.starts_with("CFG_") {
        IssueCategory::Config
    } else {
        // DOC_, TOT_, CURRENCY_ — document-level findings.
        IssueCategory::Invoice
    }
}

fn push(
    issues: &mut Vec<ValidationIssue>,
    profile: Profile,
    code: &str,
    field: impl Into<String>,
    message: impl Into<String>,
) {
    issues.push(ValidationIssue {
        code: code.into(),
        field: field.into(),
        message: message.into(),
        category: category_for(code),
        severity: severity_for(code, profile),
    });
}

fn within_tolerance(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= AMOUNT_TOLERANCE
}

// ── Checkers ─────────────────────────────────────────────────────────────────

fn check_header(doc: &InvoiceDocument, profile: Profile, issues: &mut Vec<ValidationIssue>) {
    if doc.number.trim().is_empty() {
        push(issues, profile, "DOC_001", "number", "invoice number must not be empty");
    } else if doc.number.len() > MAX_NUMBER_LEN {
        push(
            issues,
            profile,
            "DOC_002",
            "number",
            format!("invoice number must not exceed {MAX_NUMBER_LEN} characters"),
        );
    }

    // Parseability is guaranteed by the type system; only presence can fail.
    if doc.issue_date.is_none() {
        push(issues, profile, "DOC_003", "issue_date", "issue date is required");
    }

    if doc.currency_code.trim().is_empty() {
        push(issues, profile, "DOC_004", "currency_code", "currency code is required");
    } else if !currencies::is_known_currency_code(&doc.currency_code) {
        push(
            issues,
            profile,
            "DOC_005",
            "currency_code",
            format!("currency code '{}' is not a known ISO 4217 code", doc.currency_code),
        );
    }

    if doc.doc_type.requires_original_ref()
        && doc.original_ref.as_deref().is_none_or(|r| r.trim().is_empty())
    {
        push(
            issues,
            profile,
            "DOC_006",
            "original_ref",
            format!(
                "document type {} requires a reference to the original document",
                doc.doc_type.code()
            ),
        );
    }
}

fn check_supplier(supplier: &Supplier, profile: Profile, issues: &mut Vec<ValidationIssue>) {
    if supplier.tin.trim().is_empty() {
        push(issues, profile, "SUP_001", "supplier.tin", "supplier TIN is required");
    } else if !validate_tin(&supplier.tin) {
        push(
            issues,
            profile,
            "SUP_002",
            "supplier.tin",
            format!("supplier TIN '{}' is not a valid format", supplier.tin),
        );
    }

    if supplier.legal_name.trim().is_empty() {
        push(issues, profile, "SUP_003", "supplier.legal_name", "supplier legal name is required");
    } else if supplier.legal_name.chars().count() > MAX_NAME_LEN {
        push(
            issues,
            profile,
            "SUP_004",
            "supplier.legal_name",
            format!("supplier legal name must not exceed {MAX_NAME_LEN} characters"),
        );
    }

    let addr = &supplier.address;
    if addr.street.trim().is_empty() {
        push(issues, profile, "SUP_005", "supplier.address.street", "supplier street is required");
    }
    if addr.city.trim().is_empty() {
        push(issues, profile, "SUP_006", "supplier.address.city", "supplier city is required");
    }
    if addr.postcode.trim().is_empty() {
        push(issues, profile, "SUP_007", "supplier.address.postcode", "supplier postcode is required");
    }
    if addr.country.trim().is_empty() {
        push(issues, profile, "SUP_008", "supplier.address.country", "supplier country is required");
    } else if !countries::is_known_country_code(&addr.country) {
        push(
            issues,
            profile,
            "SUP_012",
            "supplier.address.country",
            format!(
                "country code '{}' is not a known ISO 3166-1 alpha-3 code",
                addr.country
            ),
        );
    }

    if let Some(state) = addr.state.as_deref() {
        if !states::is_known_state_code(state) {
            push(
                issues,
                profile,
                "SUP_013",
                "supplier.address.state",
                format!("state code '{state}' is not a known MyInvois state code"),
            );
        }
    }

    let has_contact = supplier
        .contact
        .as_ref()
        .is_some_and(|c| c.phone.is_some() || c.email.is_some());
    if !has_contact {
        push(
            issues,
            profile,
            "SUP_009",
            "supplier.contact",
            "supplier should have at least one contact channel (phone or email)",
        );
    }

    match &supplier.msic_code {
        None => {
            push(
                issues,
                profile,
                "SUP_010",
                "supplier.msic_code",
                "MSIC industry classification code is recommended",
            );
        }
        Some(code) => {
            if code.len() != 5 || !code.bytes().all(|b| b.is_ascii_digit()) {
                push(
                    issues,
                    profile,
                    "SUP_011",
                    "supplier.msic_code",
                    format!("MSIC code '{code}' must be exactly 5 digits"),
                );
            }
        }
    }

    if profile == Profile::Network && supplier.peppol_id.is_none() {
        push(
            issues,
            profile,
            "SUP_P01",
            "supplier.peppol_id",
            "supplier Peppol participant identifier is required for network submissions",
        );
    }
}

fn check_buyer(buyer: &Buyer, profile: Profile, issues: &mut Vec<ValidationIssue>) {
    if buyer.name.trim().is_empty() {
        push(issues, profile, "BUY_001", "buyer.name", "buyer name is required");
    }

    let has_tin = buyer.tin.as_deref().is_some_and(|t| !t.trim().is_empty());
    let has_generic_id = buyer.id_value.as_deref().is_some_and(|v| !v.trim().is_empty());
    if !has_tin && !has_generic_id {
        push(
            issues,
            profile,
            "BUY_002",
            "buyer.tin",
            "buyer should have a TIN or an identification number (NRIC, BRN, passport, army)",
        );
    }

    if let Some(tin) = buyer.tin.as_deref() {
        if !tin.trim().is_empty() && !validate_tin(tin) {
            push(
                issues,
                profile,
                "BUY_003",
                "buyer.tin",
                format!("buyer TIN '{tin}' is not a valid format"),
            );
        }
    }

    if profile == Profile::Network && buyer.peppol_id.is_none() {
        push(
            issues,
            profile,
            "BUY_P01",
            "buyer.peppol_id",
            "buyer Peppol participant identifier is required for network submissions",
        );
    }
}

fn check_lines(lines: &[InvoiceLine], profile: Profile, issues: &mut Vec<ValidationIssue>) {
    if lines.is_empty() {
        push(issues, profile, "ITM_001", "lines", "invoice must have at least one line item");
        return;
    }

    for (i, line) in lines.iter().enumerate() {
        let prefix = format!("lines[{i}]");

        if line.product_name.trim().is_empty() {
            push(
                issues,
                profile,
                "ITM_002",
                format!("{prefix}.product_name"),
                "product name must not be empty",
            );
        }

        if line.quantity <= Decimal::ZERO {
            push(
                issues,
                profile,
                "ITM_003",
                format!("{prefix}.quantity"),
                format!("quantity must be positive, got {}", line.quantity),
            );
        }

        if line.unit_price.is_sign_negative() && !line.unit_price.is_zero() {
            push(
                issues,
                profile,
                "ITM_004",
                format!("{prefix}.unit_price"),
                format!("unit price must not be negative, got {}", line.unit_price),
            );
        }

        if line.unit_code.trim().is_empty() {
            push(
                issues,
                profile,
                "ITM_005",
                format!("{prefix}.unit_code"),
                "unit of measure code is required",
            );
        } else if !units::is_known_unit_code(&line.unit_code) {
            push(
                issues,
                profile,
                "ITM_006",
                format!("{prefix}.unit_code"),
                format!("unit code '{}' is not a known UN/CEFACT Rec 20 code", line.unit_code),
            );
        }

        if line.tax_type.trim().is_empty() {
            push(
                issues,
                profile,
                "ITM_007",
                format!("{prefix}.tax_type"),
                "tax type code is required",
            );
        } else if !tax_types::is_known_tax_type(&line.tax_type) {
            push(
                issues,
                profile,
                "ITM_008",
                format!("{prefix}.tax_type"),
                format!("tax type '{}' is not a known MyInvois tax type code", line.tax_type),
            );
        }

        if line.tax_rate < Decimal::ZERO || line.tax_rate > dec!(100) {
            push(
                issues,
                profile,
                "ITM_009",
                format!("{prefix}.tax_rate"),
                format!("tax rate must be between 0 and 100, got {}", line.tax_rate),
            );
        }

        // The load-bearing numeric consistency rule: a net amount that
        // disagrees with quantity × unit price means the document
        // contradicts itself and must not be submitted.
        let expected_net = line.quantity * line.unit_price;
        if !within_tolerance(line.net_amount, expected_net) {
            push(
                issues,
                profile,
                "ITM_010",
                format!("{prefix}.net_amount"),
                format!(
                    "net amount {} does not match quantity {} × unit price {} = {}",
                    line.net_amount, line.quantity, line.unit_price, expected_net
                ),
            );
        }

        // Advisory only — upstream rounding conventions may differ.
        let expected_tax = line.net_amount * line.tax_rate / dec!(100);
        if !within_tolerance(line.tax_amount, expected_tax) {
            push(
                issues,
                profile,
                "ITM_011",
                format!("{prefix}.tax_amount"),
                format!(
                    "tax amount {} does not match net {} × rate {}% = {}",
                    line.tax_amount, line.net_amount, line.tax_rate, expected_tax
                ),
            );
        }

        if tax_types::is_exemption_tax_type(&line.tax_type) && line.exemption_reason_code.is_none() {
            push(
                issues,
                profile,
                "ITM_012",
                format!("{prefix}.exemption_reason_code"),
                format!(
                    "tax type '{}' is an exemption class; an exemption reason code is recommended",
                    line.tax_type
                ),
            );
        }
    }
}

fn check_tax_subtotals(doc: &InvoiceDocument, profile: Profile, issues: &mut Vec<ValidationIssue>) {
    // Line-level rounding drift is expected — advisory only.
    let line_tax_sum: Decimal = doc.lines.iter().map(|l| l.tax_amount).sum();
    if !within_tolerance(line_tax_sum, doc.totals.total_tax) {
        push(
            issues,
            profile,
            "TAX_001",
            "totals.total_tax",
            format!(
                "sum of line tax amounts {} differs from declared total tax {}",
                line_tax_sum, doc.totals.total_tax
            ),
        );
    }

    // The declared subtotal breakdown is structural: it must reconcile.
    let subtotal_tax_sum: Decimal = doc.tax_subtotals.iter().map(|s| s.tax_amount).sum();
    if !within_tolerance(subtotal_tax_sum, doc.totals.total_tax) {
        push(
            issues,
            profile,
            "TAX_002",
            "tax_subtotals",
            format!(
                "sum of tax subtotal amounts {} does not match declared total tax {}",
                subtotal_tax_sum, doc.totals.total_tax
            ),
        );
    }
}

fn check_totals(doc: &InvoiceDocument, profile: Profile, issues: &mut Vec<ValidationIssue>) {
    let totals = &doc.totals;

    let line_net_sum: Decimal = doc.lines.iter().map(|l| l.net_amount).sum();
    if !within_tolerance(totals.line_extension, line_net_sum) {
        push(
            issues,
            profile,
            "TOT_001",
            "totals.line_extension",
            format!(
                "line extension amount {} does not match sum of line net amounts {}",
                totals.line_extension, line_net_sum
            ),
        );
    }

    let allowances = totals.allowance_total.unwrap_or(Decimal::ZERO);
    let charges = totals.charge_total.unwrap_or(Decimal::ZERO);
    let expected_exclusive = totals.line_extension - allowances + charges;
    if !within_tolerance(totals.tax_exclusive, expected_exclusive) {
        push(
            issues,
            profile,
            "TOT_002",
            "totals.tax_exclusive",
            format!(
                "tax-exclusive amount {} does not match line extension {} - allowances {} + charges {}",
                totals.tax_exclusive, totals.line_extension, allowances, charges
            ),
        );
    }

    let expected_inclusive = totals.tax_exclusive + totals.total_tax;
    if !within_tolerance(totals.tax_inclusive, expected_inclusive) {
        push(
            issues,
            profile,
            "TOT_003",
            "totals.tax_inclusive",
            format!(
                "tax-inclusive amount {} does not match tax-exclusive {} + total tax {}",
                totals.tax_inclusive, totals.tax_exclusive, totals.total_tax
            ),
        );
    }

    // Some jurisdictions allow rounding adjustments at the payable level,
    // so this stays advisory under the national profile.
    if !within_tolerance(totals.payable, totals.tax_inclusive) {
        push(
            issues,
            profile,
            "TOT_004",
            "totals.payable",
            format!(
                "payable amount {} differs from tax-inclusive amount {}",
                totals.payable, totals.tax_inclusive
            ),
        );
    }
}

fn check_currency(doc: &InvoiceDocument, profile: Profile, issues: &mut Vec<ValidationIssue>) {
    if !doc.currency_code.trim().is_empty()
        && doc.currency_code != HOME_CURRENCY
        && doc.exchange_rate.is_none()
    {
        push(
            issues,
            profile,
            "CURRENCY_001",
            "exchange_rate",
            format!(
                "exchange rate is required when the document currency ({}) is not {}",
                doc.currency_code, HOME_CURRENCY
            ),
        );
    }
}

fn check_config(
    doc: &InvoiceDocument,
    config: &EngineConfig,
    profile: Profile,
    issues: &mut Vec<ValidationIssue>,
) {
    // Advisory cross-check against the registered settings: a document
    // issued under a TIN other than the configured one usually means the
    // wrong company profile is selected.
    if let Some(registered) = config.supplier_tin.as_deref() {
        let registered_norm = registered.trim().to_ascii_uppercase();
        let doc_norm = doc.supplier.tin.trim().to_ascii_uppercase();
        if validate_tin(&registered_norm)
            && validate_tin(&doc_norm)
            && registered_norm != doc_norm
        {
            push(
                issues,
                profile,
                "CFG_001",
                "supplier.tin",
                format!(
                    "document supplier TIN '{}' differs from the registered TIN '{}'",
                    doc.supplier.tin, registered
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn minimal_doc() -> InvoiceDocument {
        InvoiceDocument {
            doc_type: DocumentType::Invoice,
            doc_type_version: "1.0".into(),
            number: "INV-2024-001".into(),
            issue_date: NaiveDate::from_ymd_opt(2024, 7, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0),
            due_date: None,
            currency_code: "MYR".into(),
            exchange_rate: None,
            original_ref: None,
            supplier: Supplier {
                tin: "C123456789012".into(),
                brn: Some("202001012345".into()),
                sst_no: None,
                ttx_no: None,
                legal_name: "Contoh Sdn Bhd".into(),
                trading_name: None,
                address: Address {
                    street: "12 Jalan Ampang".into(),
                    city: "Kuala Lumpur".into(),
                    postcode: "50450".into(),
                    state: Some("14".into()),
                    country: "MYS".into(),
                },
                contact: Some(Contact {
                    phone: Some("+60312345678".into()),
                    email: None,
                }),
                msic_code: Some("62010".into()),
                peppol_id: None,
            },
            buyer: Buyer {
                tin: Some("C210987654321".into()),
                name: "Pembeli Enterprise".into(),
                ..Buyer::default()
            },
            lines: vec![InvoiceLine {
                line_no: 1,
                product_name: "Consulting services".into(),
                description: None,
                quantity: dec!(1),
                unit_code: "C62".into(),
                unit_price: dec!(100),
                net_amount: dec!(100),
                tax_type: "02".into(),
                tax_rate: dec!(0),
                tax_amount: dec!(0),
                exemption_reason_code: None,
                exemption_reason: None,
                classification: None,
            }],
            tax_subtotals: vec![TaxSubtotal {
                tax_type: "02".into(),
                tax_rate: dec!(0),
                taxable_amount: dec!(100),
                tax_amount: dec!(0),
            }],
            totals: Totals {
                line_extension: dec!(100),
                tax_exclusive: dec!(100),
                tax_inclusive: dec!(100),
                allowance_total: None,
                charge_total: None,
                payable: dec!(100),
                total_tax: dec!(0),
            },
            payment: None,
            payment_terms: None,
            notes: Vec::new(),
        }
    }

    fn codes(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.code.as_str()).collect()
    }

    #[test]
    fn minimal_document_is_valid() {
        let result = validate(&minimal_doc(), &EngineConfig::default(), Profile::National);
        assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn severity_tables_are_sorted() {
        for table in [DEFAULT_SEVERITIES, NATIONAL_OVERRIDES, NETWORK_OVERRIDES] {
            for window in table.windows(2) {
                assert!(
                    window[0].0 < window[1].0,
                    "severity table not sorted: {} >= {}",
                    window[0].0,
                    window[1].0
                );
            }
        }
    }

    #[test]
    fn severity_lookup_matches_table() {
        assert_eq!(severity_for("ITM_010", Profile::National), Severity::Error);
        assert_eq!(severity_for("TAX_001", Profile::National), Severity::Warning);
        assert_eq!(severity_for("TOT_004", Profile::Network), Severity::Warning);
        // Unregistered codes fail closed.
        assert_eq!(severity_for("ZZZ_999", Profile::National), Severity::Error);
    }

    #[test]
    fn category_prefix_mapping() {
        assert_eq!(category_for("DOC_001"), IssueCategory::Invoice);
        assert_eq!(category_for("CURRENCY_001"), IssueCategory::Invoice);
        assert_eq!(category_for("TOT_003"), IssueCategory::Invoice);
        assert_eq!(category_for("SUP_002"), IssueCategory::Supplier);
        assert_eq!(category_for("BUY_P01"), IssueCategory::Buyer);
        assert_eq!(category_for("ITM_010"), IssueCategory::Items);
        assert_eq!(category_for("TAX_002"), IssueCategory::Tax);
        assert_eq!(category_for("CFG_001"), IssueCategory::Config);
    }

    #[test]
    fn every_emitted_code_has_a_severity_entry() {
        // Run a document that trips as many checks as possible and make
        // sure no issue fell back to the unregistered-code default by
        // accident (all codes must be in DEFAULT_SEVERITIES).
        let mut doc = minimal_doc();
        doc.number = String::new();
        doc.issue_date = None;
        doc.currency_code = "ZZZ".into();
        doc.supplier.tin = "bad".into();
        doc.supplier.legal_name = String::new();
        doc.supplier.address = Address::default();
        doc.supplier.contact = None;
        doc.supplier.msic_code = Some("1".into());
        doc.buyer.name = String::new();
        doc.buyer.tin = Some("bad".into());
        doc.lines[0].product_name = String::new();
        doc.lines[0].quantity = dec!(0);
        doc.lines[0].unit_price = dec!(-1);
        doc.lines[0].unit_code = "ZZZ".into();
        doc.lines[0].tax_type = "99".into();
        doc.lines[0].tax_rate = dec!(200);
        doc.lines[0].net_amount = dec!(55);
        doc.totals.total_tax = dec!(9);

        let result = validate(&doc, &EngineConfig::default(), Profile::Network);
        for issue in result.errors.iter().chain(result.warnings.iter()) {
            assert!(
                lookup_severity(DEFAULT_SEVERITIES, &issue.code).is_some(),
                "code {} missing from severity table",
                issue.code
            );
        }
    }

    #[test]
    fn header_checks() {
        let mut doc = minimal_doc();
        doc.number = "X".repeat(51);
        doc.issue_date = None;
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(codes(&result.errors).contains(&"DOC_002"));
        assert!(codes(&result.errors).contains(&"DOC_003"));
    }

    #[test]
    fn unknown_currency_is_warning_only() {
        let mut doc = minimal_doc();
        doc.currency_code = "ZZZ".into();
        doc.exchange_rate = Some(dec!(4.7));
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(result.is_valid);
        assert!(codes(&result.warnings).contains(&"DOC_005"));
    }

    #[test]
    fn foreign_currency_requires_exchange_rate() {
        let mut doc = minimal_doc();
        doc.currency_code = "USD".into();
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(codes(&result.errors).contains(&"CURRENCY_001"));

        doc.exchange_rate = Some(dec!(4.72));
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(!codes(&result.errors).contains(&"CURRENCY_001"));
    }

    #[test]
    fn credit_note_requires_original_ref() {
        let mut doc = minimal_doc();
        doc.doc_type = DocumentType::CreditNote;
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(codes(&result.errors).contains(&"DOC_006"));

        doc.original_ref = Some("INV-2024-000".into());
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(!codes(&result.errors).contains(&"DOC_006"));
    }

    #[test]
    fn supplier_address_fields_reported_individually() {
        let mut doc = minimal_doc();
        doc.supplier.address = Address {
            street: String::new(),
            city: String::new(),
            postcode: "50450".into(),
            state: None,
            country: String::new(),
        };
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        let errs = codes(&result.errors);
        assert!(errs.contains(&"SUP_005"));
        assert!(errs.contains(&"SUP_006"));
        assert!(!errs.contains(&"SUP_007"));
        assert!(errs.contains(&"SUP_008"));
    }

    #[test]
    fn msic_absence_warns_bad_format_errors() {
        let mut doc = minimal_doc();
        doc.supplier.msic_code = None;
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(codes(&result.warnings).contains(&"SUP_010"));
        assert!(result.is_valid);

        doc.supplier.msic_code = Some("620".into());
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(codes(&result.errors).contains(&"SUP_011"));
    }

    #[test]
    fn network_profile_requires_participant_ids() {
        let doc = minimal_doc();

        let national = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(!codes(&national.errors).contains(&"SUP_P01"));
        assert!(!codes(&national.errors).contains(&"BUY_P01"));

        let network = validate(&doc, &EngineConfig::default(), Profile::Network);
        assert!(codes(&network.errors).contains(&"SUP_P01"));
        assert!(codes(&network.errors).contains(&"BUY_P01"));

        let mut doc = doc;
        doc.supplier.peppol_id = Some(ParticipantId {
            scheme: "0230".into(),
            value: "C123456789012".into(),
        });
        doc.buyer.peppol_id = Some(ParticipantId {
            scheme: "0230".into(),
            value: "C210987654321".into(),
        });
        let network = validate(&doc, &EngineConfig::default(), Profile::Network);
        assert!(!codes(&network.errors).contains(&"SUP_P01"));
        assert!(!codes(&network.errors).contains(&"BUY_P01"));
    }

    #[test]
    fn buyer_without_any_id_is_warning() {
        let mut doc = minimal_doc();
        doc.buyer.tin = None;
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(result.is_valid);
        assert!(codes(&result.warnings).contains(&"BUY_002"));

        doc.buyer.id_type = Some(IdType::Nric);
        doc.buyer.id_value = Some("880101141234".into());
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(!codes(&result.warnings).contains(&"BUY_002"));
    }

    #[test]
    fn empty_lines_short_circuits() {
        let mut doc = minimal_doc();
        doc.lines.clear();
        // Totals still reconcile against an empty line set.
        doc.tax_subtotals.clear();
        doc.totals = Totals {
            line_extension: dec!(0),
            tax_exclusive: dec!(0),
            tax_inclusive: dec!(0),
            allowance_total: None,
            charge_total: None,
            payable: dec!(0),
            total_tax: dec!(0),
        };
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        let item_errors: Vec<_> = result
            .errors
            .iter()
            .filter(|e| e.code.starts_with("ITM_"))
            .collect();
        assert_eq!(item_errors.len(), 1);
        assert_eq!(item_errors[0].code, "ITM_001");
    }

    #[test]
    fn net_amount_tolerance_boundary() {
        let mut doc = minimal_doc();
        doc.lines[0].quantity = dec!(2);
        doc.lines[0].unit_price = dec!(10.00);
        doc.lines[0].net_amount = dec!(20.005);
        doc.tax_subtotals[0].taxable_amount = dec!(20.005);
        doc.totals.line_extension = dec!(20.005);
        doc.totals.tax_exclusive = dec!(20.005);
        doc.totals.tax_inclusive = dec!(20.005);
        doc.totals.payable = dec!(20.005);
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(
            !codes(&result.errors).contains(&"ITM_010"),
            "0.005 is within tolerance"
        );

        doc.lines[0].net_amount = dec!(20.02);
        doc.tax_subtotals[0].taxable_amount = dec!(20.02);
        doc.totals.line_extension = dec!(20.02);
        doc.totals.tax_exclusive = dec!(20.02);
        doc.totals.tax_inclusive = dec!(20.02);
        doc.totals.payable = dec!(20.02);
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(codes(&result.errors).contains(&"ITM_010"));
    }

    #[test]
    fn line_tax_mismatch_is_warning() {
        let mut doc = minimal_doc();
        doc.lines[0].tax_rate = dec!(6);
        doc.lines[0].tax_amount = dec!(5.00); // expected 6.00
        // Subtotals and totals agree with the (wrong) line figure so
        // only the line-level advisory fires.
        doc.tax_subtotals[0].tax_rate = dec!(6);
        doc.tax_subtotals[0].tax_amount = dec!(5.00);
        doc.totals.total_tax = dec!(5.00);
        doc.totals.tax_inclusive = dec!(105.00);
        doc.totals.payable = dec!(105.00);
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(result.is_valid);
        assert!(codes(&result.warnings).contains(&"ITM_011"));
    }

    #[test]
    fn exemption_class_without_reason_warns() {
        let mut doc = minimal_doc();
        doc.lines[0].tax_type = "E".into();
        doc.tax_subtotals[0].tax_type = "E".into();
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(result.is_valid);
        assert!(codes(&result.warnings).contains(&"ITM_012"));

        doc.lines[0].exemption_reason_code = Some("EX-001".into());
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(!codes(&result.warnings).contains(&"ITM_012"));
    }

    #[test]
    fn subtotal_mismatch_error_and_line_sum_warning_are_independent() {
        let mut doc = minimal_doc();
        // Declared total tax 0.50 above both the line sum and the
        // subtotal sum: TAX_001 (warning) and TAX_002 (error) both fire.
        doc.totals.total_tax = dec!(0.50);
        doc.totals.tax_inclusive = dec!(100.50);
        doc.totals.payable = dec!(100.50);
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(codes(&result.warnings).contains(&"TAX_001"));
        assert!(codes(&result.errors).contains(&"TAX_002"));
        assert!(!result.is_valid);
    }

    #[test]
    fn totals_chain_checks() {
        let mut doc = minimal_doc();
        doc.totals.tax_exclusive = dec!(95); // breaks TOT_002
        doc.totals.tax_inclusive = dec!(90); // breaks TOT_003 too
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        let errs = codes(&result.errors);
        assert!(errs.contains(&"TOT_002"));
        assert!(errs.contains(&"TOT_003"));
    }

    #[test]
    fn payable_mismatch_is_warning() {
        let mut doc = minimal_doc();
        doc.totals.payable = dec!(100.05);
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(result.is_valid);
        assert!(codes(&result.warnings).contains(&"TOT_004"));
    }

    #[test]
    fn allowances_and_charges_enter_the_exclusive_total() {
        let mut doc = minimal_doc();
        doc.totals.allowance_total = Some(dec!(10));
        doc.totals.charge_total = Some(dec!(5));
        doc.totals.tax_exclusive = dec!(95);
        doc.totals.tax_inclusive = dec!(95);
        doc.totals.payable = dec!(95);
        let result = validate(&doc, &EngineConfig::default(), Profile::National);
        assert!(
            !codes(&result.errors).contains(&"TOT_002"),
            "100 - 10 + 5 = 95 should reconcile"
        );
    }

    #[test]
    fn registered_tin_mismatch_is_config_warning() {
        let mut config = EngineConfig::default();
        config.supplier_tin = Some("C999999999999".into());
        let result = validate(&minimal_doc(), &config, Profile::National);
        assert!(result.is_valid);
        assert!(codes(&result.warnings).contains(&"CFG_001"));
        assert_eq!(result.warnings.iter().find(|i| i.code == "CFG_001").unwrap().category, IssueCategory::Config);
    }
}
