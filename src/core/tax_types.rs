//! MyInvois tax type codes.
//!
//! The e-Invoice tax type list is maintained by LHDN and extended over
//! time, so unknown codes are surfaced by the rule checkers as warnings
//! rather than rejected here.

/// Check whether `code` is a known MyInvois tax type code.
pub fn is_known_tax_type(code: &str) -> bool {
    tax_type_name(code).is_some()
}

/// Human-readable descriptor for a tax type code.
pub fn tax_type_name(code: &str) -> Option<&'static str> {
    TAX_TYPES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| TAX_TYPES[i].1)
}

/// True for codes that denote an exemption or not-applicable class —
/// lines carrying these should state an exemption reason.
pub fn is_exemption_tax_type(code: &str) -> bool {
    matches!(code, "06" | "E")
}

/// MyInvois tax type codes with descriptors.
/// Sorted by code for binary search.
static TAX_TYPES: &[(&str, &str)] = &[
    ("01", "Sales Tax"),
    ("02", "Service Tax"),
    ("03", "Tourism Tax"),
    ("04", "High-Value Goods Tax"),
    ("05", "Sales Tax on Low Value Goods"),
    ("06", "Not Applicable"),
    ("E", "Tax Exemption"),
];
