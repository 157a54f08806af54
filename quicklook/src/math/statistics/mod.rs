//! Median and MAD-based scale of a pixel sample.


use num_traits::Float;

use super::selection::torben_median;

/// Floating-point types accepted by the robust estimators.
pub trait SampleValue: Float {
    /// MAD to standard deviation conversion factor.
    ///
    /// For a normal distribution, σ ≈ 1.4826 × MAD.
    const MAD_TO_SIGMA: Self;
}

impl SampleValue for f32 {
    const MAD_TO_SIGMA: f32 = 1.4826;
}

impl SampleValue for f64 {
    const MAD_TO_SIGMA: f64 = 1.4826;
}

/// Robust location and scale of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobustStats<T> {
    /// Lower median of the sample.
    pub center: T,
    /// Median absolute deviation from `center`, scaled by 1.4826.
    pub scale: T,
}

/// Compute the median and MAD-based sigma of `sample`.
///
/// Returns `None` for an empty sample. The sample is left untouched; one
/// deviation buffer of the same length is allocated per call.
pub fn robust_stats<T: SampleValue>(sample: &[T]) -> Option<RobustStats<T>> {
    let mut scratch = Vec::new();
    robust_stats_with_scratch(sample, &mut scratch)
}

/// Same as [`robust_stats`], reusing `scratch` for the deviations.
///
/// Useful when estimating many samples in a row (one per image extension).
pub fn robust_stats_with_scratch<T: SampleValue>(
    sample: &[T],
    scratch: &mut Vec<T>,
) -> Option<RobustStats<T>> {
    let center = torben_median(sample)?;

    scratch.clear();
    scratch.extend(sample.iter().map(|&v| (v - center).abs()));
    let mad = torben_median(scratch.as_slice())?;

    Some(RobustStats {
        center,
        scale: mad * T::MAD_TO_SIGMA,
    })
}
