//! Remote survey cone searches for overlaying reference sources.
//!
//! A preview can mark 2MASS or SDSS sources on the image. The field centre is
//! projected to the sky through the image WCS, a cone-search URL is built
//! around it, and the plain-text response is reduced to RA/Dec pairs that are
//! projected back to pixels. Fetching the URL and evaluating the projection
//! are left to the caller.


mod query;
mod response;
mod wcs;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use common::FindSubstring;

pub use query::ConeQuery;
pub use response::{classify_row, parse_response, parse_sky_position, project_rows, RowKind};
pub use wcs::{CdMatrix, WcsHeader, DEFAULT_PV, ZPN_CTYPE};

pub const TWOMASS_URL: &str =
    "http://casu.ast.cam.ac.uk/vistasp/conesearch/twomass?ra=%f&dec=%f&rad=%f";
pub const SDSS_URL: &str = "http://casu.ast.cam.ac.uk/vistasp/conesearch/sdss?ra=%f&dec=%f&rad=%f";

/// Reference survey available for overlays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum Survey {
    #[strum(serialize = "2mass")]
    #[serde(rename = "2mass")]
    TwoMass,
    #[strum(serialize = "sdss")]
    #[serde(rename = "sdss")]
    Sdss,
}

impl Survey {
    /// Survey named anywhere in `selector`; 2MASS wins when both are named.
    pub fn from_selector(selector: &str) -> Option<Self> {
        if selector.contains_bytes("2mass") {
            Some(Survey::TwoMass)
        } else if selector.contains_bytes("sdss") {
            Some(Survey::Sdss)
        } else {
            None
        }
    }

    /// Environment variable overriding this survey's URL template.
    pub fn env_var(self) -> &'static str {
        match self {
            Survey::TwoMass => "TWOMASS_URL",
            Survey::Sdss => "SDSS_URL",
        }
    }

    pub fn default_template(self) -> &'static str {
        match self {
            Survey::TwoMass => TWOMASS_URL,
            Survey::Sdss => SDSS_URL,
        }
    }
}

/// Cone-search URL templates with printf-style `%f` placeholders for RA,
/// Dec and radius, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyEndpoints {
    pub two_mass: String,
    pub sdss: String,
}

impl Default for SurveyEndpoints {
    fn default() -> Self {
        Self {
            two_mass: TWOMASS_URL.to_string(),
            sdss: SDSS_URL.to_string(),
        }
    }
}

impl SurveyEndpoints {
    /// Defaults, overridden by `TWOMASS_URL` and `SDSS_URL` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each survey's
    /// environment variable name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let resolve = |survey: Survey| {
            lookup(survey.env_var()).unwrap_or_else(|| survey.default_template().to_string())
        };
        Self {
            two_mass: resolve(Survey::TwoMass),
            sdss: resolve(Survey::Sdss),
        }
    }

    pub fn template(&self, survey: Survey) -> &str {
        match survey {
            Survey::TwoMass => &self.two_mass,
            Survey::Sdss => &self.sdss,
        }
    }

    /// Fill the survey's template with six-decimal values.
    ///
    /// Placeholders beyond the third are left empty; missing ones simply
    /// drop the corresponding value.
    pub fn query_url(&self, survey: Survey, ra: f64, dec: f64, radius: f64) -> String {
        let values = [ra, dec, radius];
        let mut pieces = self.template(survey).split("%f");
        let mut url = pieces.next().unwrap_or_default().to_string();
        for (i, piece) in pieces.enumerate() {
            if let Some(value) = values.get(i) {
                url.push_str(&format!("{value:.6}"));
            }
            url.push_str(piece);
        }
        url
    }
}

/// Position on the sky in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPosition {
    pub ra: f64,
    pub dec: f64,
}

/// Pixel/sky transformation of an image, supplied by a WCS library.
///
/// Pixel coordinates are 1-based FITS coordinates. `None` marks positions the
/// projection cannot map.
pub trait SkyProjection {
    fn pixel_to_sky(&self, x: f64, y: f64) -> Option<SkyPosition>;
    fn sky_to_pixel(&self, sky: SkyPosition) -> Option<(f64, f64)>;
}
