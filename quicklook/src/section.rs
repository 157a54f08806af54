//! Image sections, crop presets and companion catalogue paths.
//!
//! Image paths may carry an extension suffix (`image.fit+5`) and a pixel
//! section (`image.fit[1001:2000,1:600]`). Pixel coordinates are 1-based and
//! inclusive, as in the image header.

use common::FindSubstring;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::coords::leading::leading_float;

/// Side of the square cut out by the corner and centre presets.
pub const CROP_BOX: i64 = 600;

/// Inclusive pixel range to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub x1: i64,
    pub x2: i64,
    pub y1: i64,
    pub y2: i64,
}

impl PixelBounds {
    /// Pixel position of the field centre used for sky queries.
    pub fn centre(&self) -> (f64, f64) {
        (self.x2 as f64 / 2.0, self.y2 as f64 / 2.0)
    }

    /// Larger of the two upper bounds, which sets the query radius.
    pub fn extent(&self) -> i64 {
        self.x2.max(self.y2)
    }
}

/// Display presets selecting part of a large detector.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum CropRegion {
    #[default]
    #[strum(serialize = "full")]
    #[serde(rename = "full")]
    Full,
    #[strum(serialize = "bl")]
    #[serde(rename = "bl")]
    BottomLeft,
    #[strum(serialize = "tl")]
    #[serde(rename = "tl")]
    TopLeft,
    #[strum(serialize = "tr")]
    #[serde(rename = "tr")]
    TopRight,
    #[strum(serialize = "br")]
    #[serde(rename = "br")]
    BottomRight,
    #[strum(serialize = "cc")]
    #[serde(rename = "cc")]
    Centre,
}

impl CropRegion {
    /// Preset named anywhere in `selector`; the last of `bl tl tr br cc`
    /// that occurs wins.
    pub fn from_selector(selector: &str) -> Option<Self> {
        [
            ("bl", CropRegion::BottomLeft),
            ("tl", CropRegion::TopLeft),
            ("tr", CropRegion::TopRight),
            ("br", CropRegion::BottomRight),
            ("cc", CropRegion::Centre),
        ]
        .into_iter()
        .filter(|(key, _)| selector.contains_bytes(key))
        .map(|(_, region)| region)
        .last()
    }

    /// Pixel bounds of this preset on an `naxis1 × naxis2` image.
    pub fn bounds(self, naxis1: i64, naxis2: i64) -> PixelBounds {
        let half_box = CROP_BOX / 2;
        match self {
            CropRegion::Full => PixelBounds {
                x1: 1,
                x2: naxis1,
                y1: 1,
                y2: naxis2,
            },
            CropRegion::BottomLeft => PixelBounds {
                x1: 1,
                x2: CROP_BOX,
                y1: 1,
                y2: CROP_BOX,
            },
            CropRegion::TopLeft => PixelBounds {
                x1: 1,
                x2: CROP_BOX,
                y1: naxis2 - CROP_BOX,
                y2: naxis2,
            },
            CropRegion::TopRight => PixelBounds {
                x1: naxis1 - CROP_BOX,
                x2: naxis1,
                y1: naxis2 - CROP_BOX,
                y2: naxis2,
            },
            // Stops one column short of the edge, matching earlier previews.
            CropRegion::BottomRight => PixelBounds {
                x1: naxis1 - CROP_BOX,
                x2: naxis1 - 1,
                y1: 1,
                y2: CROP_BOX,
            },
            CropRegion::Centre => PixelBounds {
                x1: naxis1 / 2 - half_box,
                x2: naxis1 / 2 + half_box,
                y1: naxis2 / 2 - half_box,
                y2: naxis2 / 2 + half_box,
            },
        }
    }
}

/// Path with any `[...]` section suffix removed.
pub fn strip_section(path: &str) -> &str {
    match path.find_bytes("[") {
        Some(open) => &path[..open],
        None => path,
    }
}

/// Path of the source catalogue written next to an image.
///
/// `v20091103_00368_st.fit+12` becomes `v20091103_00368_st_cat.fits+12`.
pub fn catalogue_path(image_path: &str) -> String {
    let renamed = image_path.replacen(".fit", "_cat.fits", 1);
    strip_section(&renamed).to_string()
}

/// Catalogue extension matching an image extension. Catalogue tables start
/// at the second HDU, so a primary-HDU image maps to HDU 2.
pub fn catalogue_hdu(image_hdu: u32) -> u32 {
    if image_hdu <= 1 {
        2
    } else {
        image_hdu
    }
}

/// Zero-based offset of the section's first pixel, `(x1 - 1, y1 - 1)`.
///
/// Catalogue positions refer to the full image; subtracting this offset
/// places them on a section. Missing or malformed parts give `0`.
pub fn section_offset(path: &str) -> (f32, f32) {
    let Some(open) = path.find_bytes("[") else {
        return (0.0, 0.0);
    };
    let section = &path[open + 1..];

    let Some(comma) = section.find_bytes(",") else {
        return (0.0, 0.0);
    };
    let x = range_start(&section[..comma]);
    let y = range_start(&section[comma + 1..]);

    match (x, y) {
        (Some(x), Some(y)) => (x, y),
        (Some(x), None) => (x, 0.0),
        _ => (0.0, 0.0),
    }
}

/// First pixel of an `a:b` range, made zero-based.
fn range_start(range: &str) -> Option<f32> {
    let colon = range.find_bytes(":")?;
    let start = leading_float(&range[..colon]).unwrap_or(0.0);
    Some(start as f32 - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_crop_from_selector() {
        assert_eq!(CropRegion::from_selector("bl"), Some(CropRegion::BottomLeft));
        assert_eq!(CropRegion::from_selector("cc"), Some(CropRegion::Centre));
        assert_eq!(CropRegion::from_selector("xx"), None);
        // Later presets override earlier ones.
        assert_eq!(CropRegion::from_selector("tl,br"), Some(CropRegion::BottomRight));
        assert_eq!(CropRegion::from_selector("br,tl"), Some(CropRegion::BottomRight));
    }

    #[test]
    fn test_crop_names_round_trip() {
        for region in CropRegion::iter() {
            let name = region.to_string();
            assert_eq!(name.parse::<CropRegion>().unwrap(), region);
        }
    }

    #[test]
    fn test_crop_bounds() {
        let (n1, n2) = (2048, 4096);
        assert_eq!(
            CropRegion::Full.bounds(n1, n2),
            PixelBounds { x1: 1, x2: 2048, y1: 1, y2: 4096 }
        );
        assert_eq!(
            CropRegion::BottomLeft.bounds(n1, n2),
            PixelBounds { x1: 1, x2: 600, y1: 1, y2: 600 }
        );
        assert_eq!(
            CropRegion::TopLeft.bounds(n1, n2),
            PixelBounds { x1: 1, x2: 600, y1: 3496, y2: 4096 }
        );
        assert_eq!(
            CropRegion::TopRight.bounds(n1, n2),
            PixelBounds { x1: 1448, x2: 2048, y1: 3496, y2: 4096 }
        );
        assert_eq!(
            CropRegion::BottomRight.bounds(n1, n2),
            PixelBounds { x1: 1448, x2: 2047, y1: 1, y2: 600 }
        );
        assert_eq!(
            CropRegion::Centre.bounds(n1, n2),
            PixelBounds { x1: 724, x2: 1324, y1: 1748, y2: 2348 }
        );
    }

    #[test]
    fn test_bounds_centre_and_extent() {
        let bounds = CropRegion::Full.bounds(2048, 4096);
        assert_eq!(bounds.centre(), (1024.0, 2048.0));
        assert_eq!(bounds.extent(), 4096);
    }

    #[test]
    fn test_strip_section() {
        assert_eq!(strip_section("image.fit[1:600,1:600]"), "image.fit");
        assert_eq!(strip_section("image.fit+3"), "image.fit+3");
    }

    #[test]
    fn test_catalogue_path() {
        assert_eq!(
            catalogue_path("v20091103_00368_st.fit+12"),
            "v20091103_00368_st_cat.fits+12"
        );
        assert_eq!(catalogue_path("a.fit[1:10,1:10]"), "a_cat.fits");
        assert_eq!(catalogue_path("no_extension"), "no_extension");
    }

    #[test]
    fn test_catalogue_hdu() {
        assert_eq!(catalogue_hdu(1), 2);
        assert_eq!(catalogue_hdu(5), 5);
    }

    #[test]
    fn test_section_offset() {
        assert_eq!(section_offset("image.fit[1001:2000,501:1100]"), (1000.0, 500.0));
        assert_eq!(section_offset("image.fit[1:600,1:600]"), (0.0, 0.0));
        assert_eq!(section_offset("image.fit"), (0.0, 0.0));
        assert_eq!(section_offset("image.fit[100:200]"), (0.0, 0.0));
        assert_eq!(section_offset("image.fit[101:200,*]"), (100.0, 0.0));
    }
}
