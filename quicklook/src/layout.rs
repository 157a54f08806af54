//! Page layouts for multi-detector exposures.
//!
//! A pawprint preview shows every detector of one exposure on a single page,
//! arranged as the detectors sit in the focal plane rather than in extension
//! order.

use common::FindSubstring;

/// Detector grid for one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PawprintLayout {
    pub columns: u32,
    pub rows: u32,
    /// Image extension shown in each panel, row by row from the top left.
    pub extensions: Vec<u32>,
}

/// VIRCAM's 16 detectors, top row first.
const VIRCAM_ORDER: [u32; 16] = [13, 14, 15, 16, 9, 10, 11, 12, 5, 6, 7, 8, 1, 2, 3, 4];

impl PawprintLayout {
    fn sequential(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            extensions: (1..=columns * rows).collect(),
        }
    }

    /// Layout for the `INSTRUME` header value, or `None` for instruments
    /// without a known detector arrangement.
    pub fn for_instrument(instrument: &str) -> Option<Self> {
        if instrument.contains_bytes("VIRCAM") {
            Some(Self {
                columns: 4,
                rows: 4,
                extensions: VIRCAM_ORDER.to_vec(),
            })
        } else if instrument.contains_bytes("WFC") {
            // Also matches WFCAM.
            Some(Self::sequential(2, 2))
        } else if instrument.contains_bytes("MOSAIC") {
            Some(Self::sequential(4, 2))
        } else if instrument.contains_bytes("SuprimeCam") {
            Some(Self::sequential(5, 2))
        } else {
            tracing::debug!(instrument, "No pawprint layout for instrument");
            None
        }
    }

    pub fn panels(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Absolute HDU numbers to visit for a file with `hdu_count` HDUs.
    ///
    /// Extension `n` lives in HDU `n + 1` behind the primary header; panels
    /// beyond the extensions present in the file are skipped.
    pub fn hdu_order(&self, hdu_count: u32) -> Vec<u32> {
        self.extensions
            .iter()
            .filter(|&&ext| ext < hdu_count)
            .map(|&ext| ext + 1)
            .collect()
    }
}
