//! Plain-text cone-search responses.
//!
//! The service answers with a few header lines followed by one source per
//! line, RA and Dec in degrees as the first two columns. An XML tail, if any,
//! ends the table.

use common::FindSubstring;

use crate::coords::leading::leading_float;

use super::{SkyPosition, SkyProjection};

/// Markers of header, separator and unit lines.
const SKIP_MARKERS: [&str; 6] = ["#", "RAJ", "---", "   ", "2MASS", "deg"];

/// Shortest line, terminator included, that can hold a source.
const MIN_ROW_LEN: usize = 10;

/// How a response line is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Data,
    Skip,
    /// Start of the XML tail; nothing after it is read.
    End,
}

/// Classify one response line, including its line terminator if it has one.
///
/// Skip rules are checked before the end marker, so a short or commented
/// line mentioning `xmlns` is skipped rather than ending the table.
pub fn classify_row(line: &str) -> RowKind {
    if SKIP_MARKERS.iter().any(|marker| line.contains_bytes(marker)) || line.len() < MIN_ROW_LEN {
        RowKind::Skip
    } else if line.contains_bytes("xmlns") {
        RowKind::End
    } else {
        RowKind::Data
    }
}

/// RA and Dec from the first two space-separated columns of a data row.
///
/// Columns that do not start with a number read as `0`. `None` when the row
/// has no second column.
pub fn parse_sky_position(row: &str) -> Option<SkyPosition> {
    let row = row.trim_start();
    let split = row.find_bytes(" ")?;
    let (ra_field, rest) = (&row[..split], row[split..].trim_start());
    let dec_field = match rest.find_bytes(" ") {
        Some(end) => &rest[..end],
        None => rest,
    };

    Some(SkyPosition {
        ra: leading_float(ra_field).unwrap_or(0.0),
        dec: leading_float(dec_field).unwrap_or(0.0),
    })
}

/// Every source position in a response body.
pub fn parse_response(text: &str) -> Vec<SkyPosition> {
    let mut positions = Vec::new();
    for line in text.split_inclusive('\n') {
        match classify_row(line) {
            RowKind::Skip => continue,
            RowKind::End => break,
            RowKind::Data => {
                if let Some(position) = parse_sky_position(line) {
                    positions.push(position);
                }
            }
        }
    }
    tracing::debug!(count = positions.len(), "Parsed survey sources");
    positions
}

/// Pixel positions of `positions`, dropping those the projection rejects.
pub fn project_rows(positions: &[SkyPosition], projection: &impl SkyProjection) -> Vec<(f64, f64)> {
    positions
        .iter()
        .filter_map(|&sky| projection.sky_to_pixel(sky))
        .collect()
}
