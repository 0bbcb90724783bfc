//! CEP (Brazilian postal code) normalization

/// Strip non-digit characters and require exactly 8 digits.
///
/// `"01310-100"` normalizes to `"01310100"`; anything with 7 or 9 digits
/// after stripping is rejected.
pub fn normalize(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 8 {
        Some(digits)
    } else {
        None
    }
}
