//! Source catalogue overlays.
//!
//! Each catalogued source is drawn as an ellipse scaled from its Gaussian
//! width, coloured by morphological class. Reading the catalogue table and
//! drawing the outlines are left to the caller; this module turns table
//! columns into outlines in display pixels.

#[cfg(test)]
mod tests;

use strum_macros::Display;
use thiserror::Error;

pub const X_COLUMN: &str = "x_coordinate";
pub const Y_COLUMN: &str = "y_coordinate";
/// Optional; older catalogues have no classification.
pub const CLASSIFICATION_COLUMN: &str = "classification";
pub const SIGMA_COLUMN: &str = "gaussian_sigma";
pub const ELLIPTICITY_COLUMN: &str = "ellipticity";
pub const POSITION_ANGLE_COLUMN: &str = "position_angle";

/// Vertices in an ellipse outline.
pub const OUTLINE_VERTICES: usize = 60;

/// Ellipse size relative to the Gaussian sigma, before the symbol scale.
const SIGMA_TO_AXIS: f64 = 2.4;

/// Value of pi used for ellipse angles; outlines match earlier previews.
#[allow(clippy::approx_constant)]
const OUTLINE_PI: f64 = 3.141592;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        found: usize,
    },
}

/// One catalogued source. Positions are 1-based pixels on the full image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogueSource {
    pub x: f32,
    pub y: f32,
    /// `-1`/`-2` stellar, `0` noise, `1`/`2` non-stellar.
    pub classification: Option<f32>,
    pub gaussian_sigma: f32,
    pub ellipticity: f32,
    /// Degrees.
    pub position_angle: f32,
}

/// Catalogue table columns, one value per source.
#[derive(Debug, Clone, Copy)]
pub struct CatalogueColumns<'a> {
    pub x: &'a [f32],
    pub y: &'a [f32],
    pub classification: Option<&'a [f32]>,
    pub gaussian_sigma: &'a [f32],
    pub ellipticity: &'a [f32],
    pub position_angle: &'a [f32],
}

impl CatalogueColumns<'_> {
    /// Sources from the columns, which must all be as long as `x`.
    pub fn sources(&self) -> Result<Vec<CatalogueSource>, CatalogueError> {
        let expected = self.x.len();
        let check = |column: &'static str, values: &[f32]| {
            if values.len() == expected {
                Ok(())
            } else {
                Err(CatalogueError::LengthMismatch {
                    column,
                    expected,
                    found: values.len(),
                })
            }
        };

        check(Y_COLUMN, self.y)?;
        if let Some(classification) = self.classification {
            check(CLASSIFICATION_COLUMN, classification)?;
        }
        check(SIGMA_COLUMN, self.gaussian_sigma)?;
        check(ELLIPTICITY_COLUMN, self.ellipticity)?;
        check(POSITION_ANGLE_COLUMN, self.position_angle)?;

        Ok((0..expected)
            .map(|i| CatalogueSource {
                x: self.x[i],
                y: self.y[i],
                classification: self.classification.map(|c| c[i]),
                gaussian_sigma: self.gaussian_sigma[i],
                ellipticity: self.ellipticity[i],
                position_angle: self.position_angle[i],
            })
            .collect())
    }
}

/// Outline colour of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SourceColour {
    Blue,
    Red,
    Green,
}

impl SourceColour {
    /// Colour of the first outline, before any source sets one.
    pub const INITIAL: SourceColour = SourceColour::Red;

    /// Colour implied by the source, or `None` to keep the previous one.
    ///
    /// Classified sources are coloured by class. Without a class, round
    /// sources (ellipticity up to 0.2) are blue and elongated ones (above
    /// 0.4) red.
    pub fn for_source(source: &CatalogueSource) -> Option<Self> {
        match source.classification {
            Some(class) if class == -1.0 || class == -2.0 => Some(SourceColour::Blue),
            Some(class) if class == 0.0 => Some(SourceColour::Red),
            Some(class) if class == 1.0 || class == 2.0 => Some(SourceColour::Green),
            Some(_) => None,
            None if source.ellipticity <= 0.2 => Some(SourceColour::Blue),
            None if source.ellipticity > 0.4 => Some(SourceColour::Red),
            None => None,
        }
    }

    /// PGPLOT colour index.
    pub fn pgplot_index(self) -> i32 {
        match self {
            SourceColour::Red => 2,
            SourceColour::Green => 3,
            SourceColour::Blue => 4,
        }
    }
}

/// Ellipse outline of `source` in display pixels.
///
/// `offset` is the section offset subtracted from the catalogue position.
/// The semi-major axis is `2.4 · symbol_height · sigma` and the minor axis is
/// shortened by the ellipticity. The outline is open: the last vertex sits
/// one step before the first.
pub fn ellipse_outline(
    source: &CatalogueSource,
    offset: (f32, f32),
    symbol_height: f32,
) -> Vec<(f32, f32)> {
    let major = SIGMA_TO_AXIS * f64::from(symbol_height) * f64::from(source.gaussian_sigma);
    let minor = major * (1.0 - f64::from(source.ellipticity));
    let (sin_pa, cos_pa) = (f64::from(source.position_angle) / 180.0 * OUTLINE_PI).sin_cos();
    let cx = f64::from(source.x - offset.0);
    let cy = f64::from(source.y - offset.1);

    (0..OUTLINE_VERTICES)
        .map(|j| {
            let (sin_t, cos_t) = ((6 * j) as f64 / 180.0 * OUTLINE_PI).sin_cos();
            let x = cx + major * cos_t * cos_pa - minor * sin_t * sin_pa;
            let y = cy + major * cos_t * sin_pa + minor * sin_t * cos_pa;
            (x as f32, y as f32)
        })
        .collect()
}

/// An outline ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMarker {
    pub colour: SourceColour,
    pub outline: Vec<(f32, f32)>,
}

/// Markers for `sources` in table order.
///
/// Sources that imply no colour reuse the colour of the previous marker.
pub fn source_markers(
    sources: &[CatalogueSource],
    offset: (f32, f32),
    symbol_height: f32,
) -> Vec<SourceMarker> {
    let mut colour = SourceColour::INITIAL;
    sources
        .iter()
        .map(|source| {
            colour = SourceColour::for_source(source).unwrap_or(colour);
            SourceMarker {
                colour,
                outline: ellipse_outline(source, offset, symbol_height),
            }
        })
        .collect()
}
