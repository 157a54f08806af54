//! Classification and tidying of numeric header tokens.

use common::FindSubstring;
use strum_macros::Display;

/// What kind of number an ASCII token spells, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NumericKind {
    NotNumber,
    Integer,
    FloatingPoint,
    /// Colon-separated fields, with or without a decimal point.
    Sexagesimal,
}

impl NumericKind {
    #[inline]
    pub fn is_number(self) -> bool {
        self != NumericKind::NotNumber
    }

    /// Floating-point or sexagesimal.
    #[inline]
    pub fn is_fractional(self) -> bool {
        matches!(self, NumericKind::FloatingPoint | NumericKind::Sexagesimal)
    }
}

#[inline]
fn is_exponent_letter(c: u8) -> bool {
    matches!(c, b'D' | b'd' | b'E' | b'e')
}

/// Classify `text` as an integer, floating-point, sexagesimal or non-number.
///
/// Accepted bytes are digits, `+ - D d E e : .` and spaces. Trailing spaces
/// are ignored and scanning stops at a line feed. A sign may only follow an
/// exponent letter, a colon, a space or the start of the text, and may not be
/// doubled. Only `.`, `d` and `e` mark a floating-point value; the upper-case
/// exponent letters are accepted but do not change an integer's kind.
pub fn classify(text: &str) -> NumericKind {
    let bytes = text.as_bytes();
    match bytes.first() {
        None => return NumericKind::NotNumber,
        Some(&c) if is_exponent_letter(c) => return NumericKind::NotNumber,
        Some(_) => {}
    }

    let end = bytes.iter().rposition(|&c| c != b' ').map_or(0, |i| i + 1);

    let mut digits = 0usize;
    let mut colons = 0usize;
    let mut fractional = false;

    for (i, &c) in bytes[..end].iter().enumerate() {
        match c {
            b'\n' => break,
            b'0'..=b'9' => digits += 1,
            b':' => colons += 1,
            b'.' | b'd' | b'e' => fractional = true,
            b'D' | b'E' | b' ' => {}
            b'+' | b'-' => {
                if matches!(bytes.get(i + 1), Some(b'+' | b'-')) {
                    return NumericKind::NotNumber;
                }
                if i > 0 {
                    let prev = bytes[i - 1];
                    if !is_exponent_letter(prev) && prev != b':' && prev != b' ' {
                        return NumericKind::NotNumber;
                    }
                }
            }
            _ => return NumericKind::NotNumber,
        }
    }

    if digits == 0 {
        NumericKind::NotNumber
    } else if colons > 0 {
        NumericKind::Sexagesimal
    } else if fractional {
        NumericKind::FloatingPoint
    } else {
        NumericKind::Integer
    }
}

#[inline]
pub fn is_not_number(text: &str) -> bool {
    !classify(text).is_number()
}

/// Number of characters after the first decimal point.
///
/// `-1` when `text` is not a number and has no colon, `0` without a decimal
/// point.
pub fn decimal_places(text: &str) -> i32 {
    if is_not_number(text) && !text.contains_bytes(":") {
        return -1;
    }
    match text.find_bytes(".") {
        Some(dot) => (text.len() - dot - 1) as i32,
        None => 0,
    }
}

/// Clean up a numeric string for display.
///
/// * a leading `#` is dropped when the rest is numeric, together with one
///   trailing non-numeric character;
/// * a two-digit positive exponent (`E+kk`) is folded into the mantissa when
///   there are enough digits after the decimal point;
/// * with `drop_zeros`, insignificant trailing zeros are removed, keeping one
///   digit after the decimal point;
/// * a trailing decimal point is removed;
/// * with `fill_blanks`, spaces become underscores.
pub fn tidy_numeric(text: &str, fill_blanks: bool, drop_zeros: bool) -> String {
    let mut tidy = strip_hash(text).to_string();

    if classify(&tidy).is_fractional() && tidy.contains_bytes("E+") {
        fold_positive_exponent(&mut tidy);
    }

    if drop_zeros
        && classify(&tidy).is_fractional()
        && tidy.contains_bytes(".")
        && !["E-", "E+", "e-", "e+"]
            .iter()
            .any(|marker| tidy.contains_bytes(marker))
    {
        while tidy.len() > 1 && tidy.ends_with('0') && !tidy[..tidy.len() - 1].ends_with('.') {
            tidy.pop();
        }
    }

    if tidy.ends_with('.') {
        tidy.pop();
    }

    if fill_blanks {
        tidy = tidy.replace(' ', "_");
    }

    tidy
}

fn strip_hash(text: &str) -> &str {
    let Some(rest) = text.strip_prefix('#') else {
        return text;
    };
    let Some(last) = rest.chars().last() else {
        return text;
    };

    let last_start = rest.len() - last.len_utf8();
    let candidate = if is_not_number(&rest[last_start..]) {
        &rest[..last_start]
    } else {
        rest
    };

    if is_not_number(candidate) {
        text
    } else {
        candidate
    }
}

/// Rewrite `d.dddE+kk` as a plain decimal by moving the point `kk` places.
fn fold_positive_exponent(tidy: &mut String) {
    let bytes = tidy.as_bytes();
    let len = bytes.len();
    if len < 4 || &bytes[len - 4..len - 2] != b"E+" {
        return;
    }
    let (tens, units) = (bytes[len - 2], bytes[len - 1]);
    if !tens.is_ascii_digit() || !units.is_ascii_digit() {
        return;
    }

    let exponent = usize::from(tens - b'0') * 10 + usize::from(units - b'0');
    if exponent + 7 >= len {
        return;
    }

    let mut mantissa = bytes[..len - 4].to_vec();
    if exponent > 0 {
        let Some(dot) = mantissa.iter().position(|&c| c == b'.') else {
            return;
        };
        if dot + exponent >= mantissa.len() {
            return;
        }
        mantissa.remove(dot);
        mantissa.insert(dot + exponent, b'.');
    }

    // Only ASCII bytes were moved around.
    *tidy = String::from_utf8_lossy(&mantissa).into_owned();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_integer() {
        assert_eq!(classify("123"), NumericKind::Integer);
        assert_eq!(classify("-42"), NumericKind::Integer);
        assert_eq!(classify("+7"), NumericKind::Integer);
        assert_eq!(classify("  12  "), NumericKind::Integer);
    }

    #[test]
    fn test_classify_floating_point() {
        assert_eq!(classify("12.5"), NumericKind::FloatingPoint);
        assert_eq!(classify("1.5e3"), NumericKind::FloatingPoint);
        assert_eq!(classify("1.5E-3"), NumericKind::FloatingPoint);
        assert_eq!(classify("2d5"), NumericKind::FloatingPoint);
        assert_eq!(classify(".5"), NumericKind::FloatingPoint);
    }

    #[test]
    fn test_classify_upper_case_exponent_alone_stays_integer() {
        assert_eq!(classify("1E5"), NumericKind::Integer);
        assert_eq!(classify("3D+2"), NumericKind::Integer);
    }

    #[test]
    fn test_classify_sexagesimal() {
        assert_eq!(classify("12:34:56"), NumericKind::Sexagesimal);
        assert_eq!(classify("-12:34:56.7"), NumericKind::Sexagesimal);
        assert_eq!(classify("12:-5"), NumericKind::Sexagesimal);
    }

    #[test]
    fn test_classify_not_number() {
        assert_eq!(classify(""), NumericKind::NotNumber);
        assert_eq!(classify("abc"), NumericKind::NotNumber);
        assert_eq!(classify("e5"), NumericKind::NotNumber);
        assert_eq!(classify("D12"), NumericKind::NotNumber);
        assert_eq!(classify("12x"), NumericKind::NotNumber);
        assert_eq!(classify("."), NumericKind::NotNumber);
        assert_eq!(classify("   "), NumericKind::NotNumber);
        assert_eq!(classify(":"), NumericKind::NotNumber);
    }

    #[test]
    fn test_classify_sign_rules() {
        assert_eq!(classify("--5"), NumericKind::NotNumber);
        assert_eq!(classify("+-5"), NumericKind::NotNumber);
        assert_eq!(classify("5-3"), NumericKind::NotNumber);
        assert_eq!(classify("1.5-3"), NumericKind::NotNumber);
        assert_eq!(classify("1e-3"), NumericKind::FloatingPoint);
        assert_eq!(classify("1 -3"), NumericKind::Integer);
    }

    #[test]
    fn test_classify_stops_at_line_feed() {
        assert_eq!(classify("12\n"), NumericKind::Integer);
        assert_eq!(classify("12\nabc"), NumericKind::Integer);
        assert_eq!(classify("\n12"), NumericKind::NotNumber);
    }

    #[test]
    fn test_is_not_number() {
        assert!(is_not_number("abc"));
        assert!(is_not_number(""));
        assert!(!is_not_number("12:00"));
        assert!(!is_not_number("3.14"));
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places("12.345"), 3);
        assert_eq!(decimal_places("12"), 0);
        assert_eq!(decimal_places("abc"), -1);
        assert_eq!(decimal_places("12:34:56.78"), 2);
        assert_eq!(decimal_places("1.5e3"), 3);
        assert_eq!(decimal_places("12."), 0);
    }

    #[test]
    fn test_decimal_places_colon_rescues_non_number() {
        // Not a number, but the colon marks it as a coordinate.
        assert_eq!(decimal_places("12h:30.5"), 1);
        assert_eq!(decimal_places("ab:cd"), 0);
    }

    #[test]
    fn test_tidy_hash_prefix() {
        assert_eq!(tidy_numeric("#123", false, false), "123");
        assert_eq!(tidy_numeric("#123x", false, false), "123");
        assert_eq!(tidy_numeric("#abc", false, false), "#abc");
        assert_eq!(tidy_numeric("#", false, false), "#");
    }

    #[test]
    fn test_tidy_folds_positive_exponent() {
        assert_eq!(tidy_numeric("1.234567890E+02", false, false), "123.4567890");
        assert_eq!(tidy_numeric("1.234567890E+00", false, false), "1.234567890");
    }

    #[test]
    fn test_tidy_keeps_exponent_without_enough_digits() {
        assert_eq!(tidy_numeric("1.5E+02", false, false), "1.5E+02");
        assert_eq!(tidy_numeric("12345678.9E+05", false, false), "12345678.9E+05");
    }

    #[test]
    fn test_tidy_drops_trailing_zeros() {
        assert_eq!(tidy_numeric("12.500", false, true), "12.5");
        assert_eq!(tidy_numeric("12.000", false, true), "12.0");
        assert_eq!(tidy_numeric("12.500", false, false), "12.500");
        assert_eq!(tidy_numeric("1.500e-3", false, true), "1.500e-3");
        assert_eq!(tidy_numeric("1200", false, true), "1200");
    }

    #[test]
    fn test_tidy_trailing_point_and_blanks() {
        assert_eq!(tidy_numeric("12.", false, false), "12");
        assert_eq!(tidy_numeric("12 30 00", true, false), "12_30_00");
        assert_eq!(tidy_numeric("12 30 00", false, false), "12 30 00");
        assert_eq!(tidy_numeric("", true, true), "");
    }
}
