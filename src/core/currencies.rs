//! ISO 4217 currency code lookup.
//!
//! Covers MYR plus the currencies most commonly seen on Malaysian
//! cross-border invoices. Unknown codes produce a warning (DOC_005),
//! not an error, since the list is a pragmatic subset.

/// The jurisdiction's home currency. Documents in any other currency
/// must carry an exchange rate.
pub const HOME_CURRENCY: &str = "MYR";

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

/// Sorted list of ISO 4217 currency codes relevant to Malaysian trade.
/// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AED", // UAE Dirham
    "AUD", // Australian Dollar
    "BDT", // Bangladeshi Taka
    "BND", // Brunei Dollar
    "CAD", // Canadian Dollar
    "CHF", // Swiss Franc
    "CNY", // Chinese Yuan
    "DKK", // Danish Krone
    "EUR", // Euro
    "GBP", // Pound Sterling
    "HKD", // Hong Kong Dollar
    "IDR", // Indonesian Rupiah
    "INR", // Indian Rupee
    "JPY", // Japanese Yen
    "KHR", // Cambodian Riel
    "KRW", // South Korean Won
    "KWD", // Kuwaiti Dinar
    "LAK", // Lao Kip
    "LKR", // Sri Lankan Rupee
    "MMK", // Myanmar Kyat
    "MYR", // Malaysian Ringgit
    "NOK", // Norwegian Krone
    "NPR", // Nepalese Rupee
    "NZD", // New Zealand Dollar
    "PHP", // Philippine Peso
    "PKR", // Pakistani Rupee
    "QAR", // Qatari Riyal
    "SAR", // Saudi Riyal
    "SEK", // Swedish Krona
    "SGD", // Singapore Dollar
    "THB", // Thai Baht
    "TWD", // New Taiwan Dollar
    "USD", // US Dollar
    "VND", // Vietnamese Dong
    "ZAR", // South African Rand
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_currencies() {
        assert!(is_known_currency_code("MYR"));
        assert!(is_known_currency_code("SGD"));
        assert!(is_known_currency_code("USD"));
        assert!(is_known_currency_code("EUR"));
        assert!(is_known_currency_code("CNY"));
    }

    #[test]
    fn unknown_currencies() {
        assert!(!is_known_currency_code("XYZ"));
        assert!(!is_known_currency_code(""));
        assert!(!is_known_currency_code("RM"));
        assert!(!is_known_currency_code("myr"));
    }

    #[test]
    fn list_is_sorted() {
        for window in CURRENCY_CODES.windows(2) {
            assert!(
                window[0] < window[1],
                "currency codes not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }
}
