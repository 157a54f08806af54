//! Numeric token classification and sky-coordinate parsing.
//!
//! Header values and survey responses carry right ascension and declination
//! either as decimal degrees (`187.5`, `-12.58`, `1.2D+01`) or as sexagesimal
//! fields separated by colons or spaces (`12:30:00`, `-12 34 56.7`). The
//! legacy entry points never fail and return `0.0` for unreadable text; the
//! `try_` variants report it.

mod error;
pub(crate) mod leading;
pub mod numeric;
pub mod sexagesimal;

pub use error::CoordError;
pub use numeric::{classify, decimal_places, is_not_number, tidy_numeric, NumericKind};
pub use sexagesimal::{
    parse_declination, parse_right_ascension, try_parse_declination, try_parse_right_ascension,
    Sexagesimal,
};
