//! Display intensity window from a random pixel subsample.
//!
//! The preview maps `[z1, z2]` onto the full brightness range, with
//! `z1 = background - k·noise/1.2` and `z2 = background + k·noise` for a
//! contrast factor `k`. Background and noise come from the image header
//! (`SKYLEVEL`/`SKYNOISE`) when available, otherwise from the median and
//! MAD-based sigma of a random pixel subsample.


use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::PreviewConfig;
use crate::math::{robust_stats, RobustStats};

/// The window extends `1.2` times less below the background than above it.
pub const LOWER_SPAN_DIVISOR: f32 = 1.2;

/// Intensity range mapped to the display's brightness scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayWindow {
    pub z1: f32,
    pub z2: f32,
}

impl DisplayWindow {
    /// Window around a known sky level and noise.
    pub fn from_sky(level: f32, noise: f32, contrast: f32) -> Self {
        Self {
            z1: level - contrast * noise / LOWER_SPAN_DIVISOR,
            z2: level + contrast * noise,
        }
    }

    /// Window around a robust background estimate.
    pub fn from_stats(stats: RobustStats<f32>, contrast: f32) -> Self {
        Self::from_sky(stats.center, stats.scale, contrast)
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.z2 - self.z1
    }
}

/// Sky background as recorded in an image header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyLevel {
    /// `SKYLEVEL` keyword.
    pub level: f32,
    /// `SKYNOISE` keyword.
    pub noise: f32,
}

/// Background statistics of a pixel subsample and the window derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundEstimate {
    pub stats: RobustStats<f32>,
    pub window: DisplayWindow,
    /// Number of finite pixels the statistics were computed from.
    pub sample_size: usize,
}

/// Draw `count` pixels uniformly with replacement.
///
/// Non-finite draws (blank pixels) are dropped, so the result can be shorter
/// than `count`. The same `seed` always selects the same pixels; `None`
/// seeds from the operating system.
pub fn random_subsample(pixels: &[f32], count: usize, seed: Option<u64>) -> Vec<f32> {
    if pixels.is_empty() {
        return Vec::new();
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    (0..count)
        .map(|_| pixels[rng.random_range(0..pixels.len())])
        .filter(|v| v.is_finite())
        .collect()
}

/// Estimate the background and display window from a random subsample.
///
/// Returns `None` when no finite pixel was drawn.
pub fn estimate_background(pixels: &[f32], config: &PreviewConfig) -> Option<BackgroundEstimate> {
    let sample = random_subsample(pixels, config.sample_size, config.seed);
    let stats = robust_stats(&sample)?;

    tracing::debug!(
        median = stats.center,
        mad = stats.scale,
        sample_size = sample.len(),
        "Estimated background from pixel subsample"
    );

    Some(BackgroundEstimate {
        stats,
        window: DisplayWindow::from_stats(stats, config.contrast),
        sample_size: sample.len(),
    })
}

/// Pick the display window for one image.
///
/// Header sky values win unless autoscaling is requested or they are
/// missing, in which case the pixels are sampled.
pub fn resolve_window(
    header_sky: Option<SkyLevel>,
    pixels: &[f32],
    config: &PreviewConfig,
) -> Option<DisplayWindow> {
    match header_sky {
        Some(sky) if !config.autoscale => {
            Some(DisplayWindow::from_sky(sky.level, sky.noise, config.contrast))
        }
        _ => {
            let estimate = estimate_background(pixels, config);
            if estimate.is_none() {
                tracing::warn!("No finite pixels to estimate the display window from");
            }
            estimate.map(|e| e.window)
        }
    }
}
