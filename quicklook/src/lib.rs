//! Quicklook - core of a quick-look preview tool for astronomical images.
//!
//! This library provides the logic behind a FITS preview, independent of any
//! image reader or plotting backend:
//! - Robust background statistics (bisection median and MAD)
//! - Display window selection from header sky levels or pixel samples
//! - Numeric token classification and sexagesimal coordinate parsing
//! - Crop presets, pawprint layouts, catalogue and survey overlays
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use quicklook::{resolve_window, PreviewConfig, SkyLevel};
//!
//! let config = PreviewConfig { autoscale: true, ..Default::default() };
//! let window = resolve_window(None, &pixels, &config);
//! ```

pub mod catalogue;
pub mod config;
pub mod coords;
pub mod display;
pub mod layout;
pub mod math;
pub mod section;
pub mod survey;

// ============================================================================
// Statistics
// ============================================================================

pub use math::{
    robust_stats, robust_stats_with_scratch, torben_median, RobustStats, SampleValue,
};

// ============================================================================
// Display
// ============================================================================

pub use config::{ConfigError, PreviewConfig};
pub use display::{
    estimate_background, random_subsample, resolve_window, BackgroundEstimate, DisplayWindow,
    SkyLevel,
};

// ============================================================================
// Coordinates
// ============================================================================

pub use coords::{
    classify, decimal_places, is_not_number, parse_declination, parse_right_ascension,
    tidy_numeric, try_parse_declination, try_parse_right_ascension, CoordError, NumericKind,
    Sexagesimal,
};

// ============================================================================
// Layout and overlays
// ============================================================================

pub use catalogue::{CatalogueColumns, CatalogueError, CatalogueSource, SourceColour};
pub use layout::PawprintLayout;
pub use section::{CropRegion, PixelBounds};
pub use survey::{ConeQuery, SkyPosition, SkyProjection, Survey, SurveyEndpoints, WcsHeader};
