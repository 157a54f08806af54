//! Header keywords describing the image's sky projection.

/// Projection types assumed for survey overlays.
pub const ZPN_CTYPE: [&str; 2] = ["RA---ZPN", "DEC--ZPN"];

/// Default `PV2_1..PV2_5` for a ZPN projection: a pure linear radial term.
pub const DEFAULT_PV: [f64; 5] = [1.0, 0.0, 0.0, 0.0, 0.0];

/// Linear pixel-to-intermediate transformation in degrees per pixel.
///
/// `[[CD1_1, CD1_2], [CD2_1, CD2_2]]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdMatrix(pub [[f64; 2]; 2]);

impl CdMatrix {
    #[inline]
    pub fn determinant(&self) -> f64 {
        let [[cd11, cd12], [cd21, cd22]] = self.0;
        cd11 * cd22 - cd12 * cd21
    }

    /// Mean pixel scale in arcseconds.
    pub fn pixel_scale_arcsec(&self) -> f64 {
        self.determinant().abs().sqrt() * 3600.0
    }

    /// Cone-search radius in arcminutes covering a field whose upper pixel
    /// bounds are `x2` and `y2`.
    pub fn search_radius_arcmin(&self, x2: i64, y2: i64) -> f64 {
        x2.max(y2) as f64 * self.pixel_scale_arcsec() / 60.0 / 1.5
    }
}

/// WCS keywords read from an image header.
#[derive(Debug, Clone, PartialEq)]
pub struct WcsHeader {
    /// Sky position of the reference pixel (CRVAL1, CRVAL2) in degrees.
    pub crval: (f64, f64),
    /// Reference pixel (CRPIX1, CRPIX2).
    pub crpix: (f64, f64),
    pub cd: CdMatrix,
    /// `PV2_1..PV2_5` polynomial coefficients.
    pub pv: [f64; 5],
}

impl WcsHeader {
    /// Build from header keywords.
    ///
    /// `lookup` returns the numeric value of a keyword if present. The
    /// reference values and the CD matrix are required; absent `PV2_m`
    /// keywords take their ZPN defaults.
    pub fn from_keywords(lookup: impl Fn(&str) -> Option<f64>) -> Option<Self> {
        let crval = (lookup("CRVAL1")?, lookup("CRVAL2")?);
        let crpix = (lookup("CRPIX1")?, lookup("CRPIX2")?);
        let cd = CdMatrix([
            [lookup("CD1_1")?, lookup("CD1_2")?],
            [lookup("CD2_1")?, lookup("CD2_2")?],
        ]);

        let mut pv = DEFAULT_PV;
        for (m, coefficient) in pv.iter_mut().enumerate() {
            if let Some(value) = lookup(&format!("PV2_{}", m + 1)) {
                *coefficient = value;
            }
        }

        Some(Self {
            crval,
            crpix,
            cd,
            pv,
        })
    }

    pub fn ctype(&self) -> [&'static str; 2] {
        ZPN_CTYPE
    }
}
