//! Median by bisection on the value range (Torben's method).
//!
//! The sample is never reordered or copied. Each pass counts how many values
//! fall below, above and on a trial value, then narrows the closed bracket
//! `[min, max]` to the side holding the middle rank. The bracket only ever
//! moves onto sample values, so the loop ends after at most as many passes as
//! there are distinct values, and in practice after a few dozen.
//!
//! The returned value is always the element of rank `(n + 1) / 2` (1-based),
//! i.e. the lower median for even `n`, never the mean of the two middle values.


use num_traits::Float;

/// Result of one counting pass around `guess`.
#[derive(Debug, Clone, Copy)]
struct Partition<T> {
    guess: T,
    less: usize,
    greater: usize,
    equal: usize,
    /// Largest value strictly below `guess`, or the bracket minimum.
    max_below: T,
    /// Smallest value strictly above `guess`, or the bracket maximum.
    min_above: T,
}

/// Median of `sample` without sorting it.
///
/// Returns `None` for an empty sample. Values are expected to be finite;
/// a NaN compares neither below nor above any trial value and is counted as
/// equal, which can make it the result.
pub fn torben_median<T: Float>(sample: &[T]) -> Option<T> {
    let (&first, rest) = sample.split_first()?;

    let (mut min, mut max) = rest.iter().fold((first, first), |(lo, hi), &v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    });

    let half = (sample.len() + 1) / 2;

    loop {
        let p = partition(sample, min, max);

        if p.less <= half && p.greater <= half {
            let median = if p.less >= half {
                p.max_below
            } else if p.less + p.equal >= half {
                p.guess
            } else {
                p.min_above
            };
            return Some(median);
        }

        if p.less > p.greater {
            max = p.max_below;
        } else {
            min = p.min_above;
        }
    }
}

fn partition<T: Float>(sample: &[T], min: T, max: T) -> Partition<T> {
    let guess = midpoint(min, max);
    let mut p = Partition {
        guess,
        less: 0,
        greater: 0,
        equal: 0,
        max_below: min,
        min_above: max,
    };

    for &v in sample {
        if v < guess {
            p.less += 1;
            if v > p.max_below {
                p.max_below = v;
            }
        } else if v > guess {
            p.greater += 1;
            if v < p.min_above {
                p.min_above = v;
            }
        } else {
            p.equal += 1;
        }
    }

    p
}

/// `(a + b) / 2`, halving first when the sum overflows.
///
/// Both forms agree bit for bit whenever the sum is finite and not subnormal,
/// so only values near the type's maximum take the second branch.
#[inline]
fn midpoint<T: Float>(a: T, b: T) -> T {
    let two = T::one() + T::one();
    let sum = a + b;
    if sum.is_finite() {
        sum / two
    } else {
        a / two + b / two
    }
}
