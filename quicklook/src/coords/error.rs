use thiserror::Error;

/// Errors reported by the strict coordinate parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("Coordinate string is empty")]
    Empty,

    #[error("Cannot read a coordinate from '{text}'")]
    Unparseable { text: String },
}
