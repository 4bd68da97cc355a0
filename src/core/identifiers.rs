//! TIN and business registration number format validation.
//!
//! Both validators are pure and total: every input maps to true/false,
//! no panics for malformed input. They check format only — whether an
//! identifier is actually registered is a question for the tax platform.

/// Validate a Malaysian Tax Identification Number (TIN) by format.
///
/// A TIN is a one- or two-letter classification prefix (C company,
/// D partnership, E employer, F association, IG individual, and so on)
/// followed by 10–12 digits. Input is trimmed and uppercased first, so
/// `"c123456789012"` is accepted.
pub fn validate_tin(value: &str) -> bool {
    let value = value.trim().to_ascii_uppercase();
    if value.is_empty() {
        return false;
    }

    let prefix_len = value
        .bytes()
        .take_while(|b| b.is_ascii_uppercase())
        .count();
    if !(1..=2).contains(&prefix_len) {
        return false;
    }

    let digits = &value[prefix_len..];
    (10..=12).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a Malaysian business registration number (SSM) by format.
///
/// Accepts any of the formats in circulation:
/// - new 12-digit format (e.g. `202001012345`);
/// - old letter-prefixed format (e.g. `A1234567`);
/// - registrar format, digits-hyphen-letter (e.g. `1234567-X`);
/// - three-part LLP format (e.g. `LLP1234567-LGN`).
pub fn validate_brn(value: &str) -> bool {
    let value = value.trim().to_ascii_uppercase();
    if value.is_empty() {
        return false;
    }

    is_new_format(&value) || is_old_format(&value) || is_registrar_format(&value) || is_llp_format(&value)
}

/// New format: exactly 12 digits.
fn is_new_format(v: &str) -> bool {
    v.len() == 12 && v.bytes().all(|b| b.is_ascii_digit())
}

/// Old format: single letter prefix followed by 6–8 digits.
fn is_old_format(v: &str) -> bool {
    let bytes = v.as_bytes();
    bytes.len() >= 7
        && bytes[0].is_ascii_uppercase()
        && (6..=8).contains(&(bytes.len() - 1))
        && bytes[1..].iter().all(|b| b.is_ascii_digit())
}

/// Registrar format: 6–8 digits, hyphen, single check letter.
fn is_registrar_format(v: &str) -> bool {
    let Some((digits, suffix)) = v.split_once('-') else {
        return false;
    };
    (6..=8).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == 1
        && suffix.bytes().all(|b| b.is_ascii_uppercase())
}

/// LLP format: "LLP" + 7 digits + "-" + 3 letters (e.g. LLP1234567-LGN).
fn is_llp_format(v: &str) -> bool {
    let Some(rest) = v.strip_prefix("LLP") else {
        return false;
    };
    let Some((digits, suffix)) = rest.split_once('-') else {
        return false;
    };
    digits.len() == 7
        && digits.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == 3
        && suffix.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- TIN ---

    #[test]
    fn valid_company_tin() {
        assert!(validate_tin("C123456789012"));
        assert!(validate_tin("C1234567890"));
    }

    #[test]
    fn valid_two_letter_prefix() {
        assert!(validate_tin("IG123456789012"));
        assert!(validate_tin("SG1234567890"));
    }

    #[test]
    fn tin_is_case_insensitive() {
        assert!(validate_tin("c123456789012"));
        assert!(validate_tin("ig123456789012"));
    }

    #[test]
    fn tin_whitespace_trimmed() {
        assert!(validate_tin("  C123456789012  "));
    }

    #[test]
    fn empty_tin_rejected() {
        assert!(!validate_tin(""));
        assert!(!validate_tin("   "));
    }

    #[test]
    fn tin_wrong_digit_count_rejected() {
        assert!(!validate_tin("X999"));
        assert!(!validate_tin("C123456789")); // 9 digits
        assert!(!validate_tin("C1234567890123")); // 13 digits
    }

    #[test]
    fn tin_bad_shape_rejected() {
        assert!(!validate_tin("1234567890")); // no prefix
        assert!(!validate_tin("ABC1234567890")); // 3-letter prefix
        assert!(!validate_tin("C12345A7890")); // letter among digits
    }

    // --- BRN ---

    #[test]
    fn valid_new_format() {
        assert!(validate_brn("202001012345"));
    }

    #[test]
    fn valid_old_format() {
        assert!(validate_brn("A1234567"));
        assert!(validate_brn("w123456"));
    }

    #[test]
    fn valid_registrar_format() {
        assert!(validate_brn("1234567-X"));
        assert!(validate_brn("123456-a"));
    }

    #[test]
    fn valid_llp_format() {
        assert!(validate_brn("LLP1234567-LGN"));
        assert!(validate_brn("llp1234567-lgn"));
    }

    #[test]
    fn empty_brn_rejected() {
        assert!(!validate_brn(""));
        assert!(!validate_brn("   "));
    }

    #[test]
    fn malformed_brn_rejected() {
        assert!(!validate_brn("2020010123456")); // 13 digits
        assert!(!validate_brn("12345")); // too few digits
        assert!(!validate_brn("1234567-XY")); // two-letter suffix
        assert!(!validate_brn("LLP123456-LGN")); // 6-digit LLP body
        assert!(!validate_brn("ABC-DEF"));
    }
}
