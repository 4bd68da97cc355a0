//! ISO 3166-1 alpha-3 country code lookup.
//!
//! MyInvois addresses use alpha-3 codes ("MYS", not "MY"). This is a
//! subset covering Malaysia's main trading partners; unknown codes are
//! warnings downstream, not errors.

/// Check whether `code` is a known ISO 3166-1 alpha-3 country code.
pub fn is_known_country_code(code: &str) -> bool {
    COUNTRY_CODES.binary_search(&code).is_ok()
}

/// Sorted list of ISO 3166-1 alpha-3 country codes.
/// Sorted for binary search.
static COUNTRY_CODES: &[&str] = &[
    "ARE", "AUS", "AUT", "BEL", "BGD", "BRA", "BRN", "CAN", "CHE", "CHN", "CZE", "DEU", "DNK",
    "EGY", "ESP", "FIN", "FRA", "GBR", "GRC", "HKG", "HUN", "IDN", "IND", "IRL", "ITA", "JPN",
    "KHM", "KOR", "KWT", "LAO", "LKA", "MEX", "MMR", "MYS", "NLD", "NOR", "NPL", "NZL", "OMN",
    "PAK", "PHL", "POL", "PRT", "QAT", "RUS", "SAU", "SGP", "SWE", "THA", "TLS", "TUR", "TWN",
    "USA", "VNM", "ZAF",
];
