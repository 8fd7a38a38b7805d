#![allow(dead_code)]
//! Descriptor sampling utilities.
//!
//! Model:
//! - A KeyframeAnimation pairs ordered values with normalized key times in
//!   [0,1]; the timing curve eases overall progress, segments blend linearly.
//! - Provided for hosts without a native keyframe timeline, and for tests.
//!
//! API:
//! - sample_animation(&KeyframeAnimation, u) where u is normalized time in
//!   [0,1] over the whole animation.

use crate::keyframe::KeyframeAnimation;
use switchkit_api_core::Value;

/// Find the segment [i, i+1] that contains eased time u, and return
/// (i, i+1, local_t) with local_t normalized to [0,1] inside the segment.
/// Edge cases:
/// - If u <= first key time, returns (0, 0, 0) and the caller picks values[0].
/// - If u >= last key time, returns (last, last, 0) and the caller picks
///   values[last].
fn find_segment(key_times: &[f32], u: f32) -> (usize, usize, f32) {
    let n = key_times.len();
    if n == 0 {
        return (0, 0, 0.0);
    }
    if n == 1 || u <= key_times[0] {
        return (0, 0, 0.0);
    }
    if u >= key_times[n - 1] {
        return (n - 1, n - 1, 0.0);
    }
    for i in 0..(n - 1) {
        let t0 = key_times[i];
        let t1 = key_times[i + 1];
        if u >= t0 && u <= t1 {
            let denom = (t1 - t0).max(f32::EPSILON);
            let lt = (u - t0) / denom;
            return (i, i + 1, lt.clamp(0.0, 1.0));
        }
    }
    (n - 1, n - 1, 0.0)
}

/// Sample an animation at normalized time u in [0,1].
pub fn sample_animation(anim: &KeyframeAnimation, u: f32) -> Value {
    let values = &anim.values;
    match values.len() {
        0 => {
            // No keyframes: return a neutral scalar 0.0 (fail-soft).
            Value::Float(0.0)
        }
        1 => values[0],
        _ => {
            let eased = anim.timing.eval(u.clamp(0.0, 1.0));
            let (i0, i1, lt) = find_segment(&anim.key_times, eased);
            if i0 == i1 {
                return values[i0];
            }
            Value::lerp(&values[i0], &values[i1], lt)
        }
    }
}
