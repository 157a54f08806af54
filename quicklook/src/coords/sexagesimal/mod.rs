//! Sexagesimal and decimal angle parsing.


use common::FindSubstring;

use super::error::CoordError;
use super::leading::{leading_float, leading_int};
use super::numeric::{classify, NumericKind};

/// Degrees (or hours), minutes and seconds read from a delimited string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub negative: bool,
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Sexagesimal {
    /// Split `text` at colons, or at spaces when it has no colon.
    ///
    /// Returns `None` when there is no separator at all. Fields that do not
    /// start with a number read as zero. Without a seconds field the minutes
    /// are read as an integer, so `"10:30.5"` gives 10°30'.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, body) = split_sign(text);
        let (degree_field, rest) = split_field(body)?;

        let degrees = leading_int(degree_field).unwrap_or(0) as f64;
        let (minutes, seconds) = match split_field(rest) {
            Some((minute_field, second_field)) => (
                leading_int(minute_field).unwrap_or(0) as f64,
                leading_float(second_field).unwrap_or(0.0),
            ),
            None => (leading_int(rest).unwrap_or(0) as f64, 0.0),
        };

        Some(Self {
            negative,
            degrees,
            minutes,
            seconds,
        })
    }

    /// Signed decimal value in the unit of the first field.
    pub fn to_degrees(&self) -> f64 {
        let magnitude = self.degrees + self.minutes / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Skip leading spaces, take an optional sign and drop trailing spaces.
fn split_sign(text: &str) -> (bool, &str) {
    let text = text.trim_start_matches(' ');
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    (negative, body.trim_end_matches(' '))
}

fn split_field(text: &str) -> Option<(&str, &str)> {
    let sep = text.find_bytes(":").or_else(|| text.find_bytes(" "))?;
    Some((&text[..sep], &text[sep + 1..]))
}

/// Legacy reading of `text` and whether it was a well-formed number.
fn read_angle(text: &str) -> (f64, bool) {
    let (negative, body) = split_sign(text);
    if body.is_empty() {
        return (0.0, false);
    }

    let kind = classify(body);
    let well_formed = kind.is_number();

    if let Some(fields) = Sexagesimal::parse(text) {
        return (fields.to_degrees(), well_formed);
    }

    let magnitude = match kind {
        NumericKind::FloatingPoint => leading_float(&normalize_exponent(body)).unwrap_or(0.0),
        _ => leading_int(body).unwrap_or(0) as f64,
    };
    (if negative { -magnitude } else { magnitude }, well_formed)
}

/// Replace Fortran-style `D`/`d` exponents (and `E`) with `e`.
fn normalize_exponent(text: &str) -> String {
    text.replacen('D', "e", 1)
        .replacen('d', "e", 1)
        .replacen('E', "e", 1)
}

fn unparseable(text: &str) -> CoordError {
    CoordError::Unparseable {
        text: text.to_string(),
    }
}

/// Declination (or any angle) in degrees from sexagesimal or decimal text.
///
/// Never fails: missing or unreadable text gives `0.0`, and partially numeric
/// text gives whatever its numeric prefix spells. Use
/// [`try_parse_declination`] to tell those cases apart.
pub fn parse_declination<'a>(text: impl Into<Option<&'a str>>) -> f64 {
    match text.into() {
        Some(text) if !text.is_empty() => read_angle(text).0,
        _ => 0.0,
    }
}

/// Right ascension in degrees.
///
/// Colon-separated text is taken as hours and multiplied by 15; anything
/// else is taken as degrees already.
pub fn parse_right_ascension<'a>(text: impl Into<Option<&'a str>>) -> f64 {
    let Some(text) = text.into() else {
        return 0.0;
    };
    let value = parse_declination(text);
    if text.contains_bytes(":") {
        value * 15.0
    } else {
        value
    }
}

/// Strict form of [`parse_declination`].
///
/// Accepted text yields exactly the legacy value.
pub fn try_parse_declination(text: &str) -> Result<f64, CoordError> {
    if text.trim_matches(' ').is_empty() {
        return Err(CoordError::Empty);
    }
    match read_angle(text) {
        (value, true) => Ok(value),
        (_, false) => Err(unparseable(text)),
    }
}

/// Strict form of [`parse_right_ascension`].
pub fn try_parse_right_ascension(text: &str) -> Result<f64, CoordError> {
    let value = try_parse_declination(text)?;
    Ok(if text.contains_bytes(":") {
        value * 15.0
    } else {
        value
    })
}
