use crate::section::PixelBounds;

use super::{SkyPosition, SkyProjection, Survey, SurveyEndpoints, WcsHeader};

/// A survey cone search ready to be fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct ConeQuery {
    pub survey: Survey,
    /// Sky position of the displayed field's centre.
    pub centre: SkyPosition,
    pub radius_arcmin: f64,
    pub url: String,
}

impl ConeQuery {
    /// Plan the query for the field described by `bounds`.
    ///
    /// The centre pixel `(x2 / 2, y2 / 2)` is projected to the sky through
    /// `projection`; `None` when the projection cannot map it.
    pub fn plan(
        header: &WcsHeader,
        bounds: &PixelBounds,
        survey: Survey,
        endpoints: &SurveyEndpoints,
        projection: &impl SkyProjection,
    ) -> Option<Self> {
        let radius_arcmin = header.cd.search_radius_arcmin(bounds.x2, bounds.y2);
        let (x, y) = bounds.centre();

        let Some(centre) = projection.pixel_to_sky(x, y) else {
            tracing::warn!(x, y, "Field centre could not be projected to the sky");
            return None;
        };

        let url = endpoints.query_url(survey, centre.ra, centre.dec, radius_arcmin);
        tracing::debug!(%survey, %url, radius_arcmin, "Planned cone search");

        Some(Self {
            survey,
            centre,
            radius_arcmin,
            url,
        })
    }
}
