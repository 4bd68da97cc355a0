//! MyInvois Malaysian state codes.

/// Check whether `code` is a known MyInvois state code.
pub fn is_known_state_code(code: &str) -> bool {
    state_name(code).is_some()
}

/// Human-readable state name for a MyInvois state code.
pub fn state_name(code: &str) -> Option<&'static str> {
    STATE_CODES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| STATE_CODES[i].1)
}

/// MyInvois state codes. Sorted by code for binary search.
static STATE_CODES: &[(&str, &str)] = &[
    ("00", "All States"),
    ("01", "Johor"),
    ("02", "Kedah"),
    ("03", "Kelantan"),
    ("04", "Melaka"),
    ("05", "Negeri Sembilan"),
    ("06", "Pahang"),
    ("07", "Pulau Pinang"),
    ("08", "Perak"),
    ("09", "Perlis"),
    ("10", "Selangor"),
    ("11", "Terengganu"),
    ("12", "Sabah"),
    ("13", "Sarawak"),
    ("14", "Wilayah Persekutuan Kuala Lumpur"),
    ("15", "Wilayah Persekutuan Labuan"),
    ("16", "Wilayah Persekutuan Putrajaya"),
    ("17", "Not Applicable"),
];
