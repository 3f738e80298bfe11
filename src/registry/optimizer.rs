//! Timing adjustment rule
//!
//! Green is stretched by 10% and red shortened by 10%, truncating toward zero.
//! Integer ratios give the same result as `int(x * 1.1)` without float error.

use super::models::SignalTiming;

const GREEN_RATIO: (i128, i128) = (11, 10);
const RED_RATIO: (i128, i128) = (9, 10);

/// Scale `seconds` by `num / den`, truncating toward zero and saturating at the `i64` bounds.
fn scale(seconds: i64, (num, den): (i128, i128)) -> i64 {
    let scaled = i128::from(seconds) * num / den;
    scaled.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

pub fn optimized_green(seconds: i64) -> i64 {
    scale(seconds, GREEN_RATIO)
}

pub fn optimized_red(seconds: i64) -> i64 {
    scale(seconds, RED_RATIO)
}

/// Apply the rule in place. Yellow is never touched.
pub(crate) fn optimize(timing: &mut SignalTiming) {
    timing.green_seconds = optimized_green(timing.green_seconds);
    timing.red_seconds = optimized_red(timing.red_seconds);
}
