//! UN/CEFACT Recommendation 20 unit codes.
//!
//! The full Rec 20 list has ~2000 codes; this is the subset most common
//! on Malaysian commercial invoices. Unrecognized codes produce a
//! warning (ITM_006) downstream.

/// Check whether `code` is a known UN/CEFACT Rec 20 unit code.
pub fn is_known_unit_code(code: &str) -> bool {
    UNIT_CODES.binary_search(&code).is_ok()
}

/// Sorted list of common UN/CEFACT Rec 20 unit codes.
/// Sorted for binary search.
static UNIT_CODES: &[&str] = &[
    "ANN", // Year
    "BG",  // Bag
    "BO",  // Bottle
    "BX",  // Box
    "C62", // One (piece/unit)
    "CMT", // Centimetre
    "CS",  // Case
    "CT",  // Carton
    "DAY", // Day
    "DZN", // Dozen
    "EA",  // Each
    "FOT", // Foot
    "GLL", // Gallon (US)
    "GRM", // Gram
    "H87", // Piece
    "HUR", // Hour
    "INH", // Inch
    "KGM", // Kilogram
    "KMT", // Kilometre
    "KWH", // Kilowatt-hour
    "LBR", // Pound
    "LS",  // Lump sum
    "LTR", // Litre
    "MIN", // Minute
    "MLT", // Millilitre
    "MMT", // Millimetre
    "MON", // Month
    "MTK", // Square metre
    "MTQ", // Cubic metre
    "MTR", // Metre
    "NPR", // Number of pairs
    "PA",  // Packet
    "PK",  // Pack
    "PR",  // Pair
    "RO",  // Roll
    "SA",  // Sack
    "SEC", // Second
    "SET", // Set
    "TNE", // Tonne (metric ton)
    "WEE", // Week
    "XBX", // Box (packaging)
    "XPK", // Package
    "XPX", // Pallet
    "YRD", // Yard
];
