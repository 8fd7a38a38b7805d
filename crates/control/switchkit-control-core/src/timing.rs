#![allow(dead_code)]
//! Cubic-bezier timing curves.
//!
//! Curves are descriptor data: hosts with a native keyframe timeline consume
//! the control points directly; `eval` inverts the x-bezier by bisection for
//! hosts (and tests) that need eased progress values themselves.

use serde::{Deserialize, Serialize};

/// Control points (x1, y1, x2, y2) of a unit-domain cubic bezier anchored at
/// (0,0) and (1,1).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingCurve {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl TimingCurve {
    pub const LINEAR: Self = Self::cubic(0.0, 0.0, 1.0, 1.0);
    /// Standard ease: gentle in, gentle out.
    pub const EASE: Self = Self::cubic(0.25, 0.1, 0.25, 1.0);
    pub const EASE_IN: Self = Self::cubic(0.42, 0.0, 1.0, 1.0);
    pub const EASE_OUT: Self = Self::cubic(0.0, 0.0, 0.58, 1.0);

    #[inline]
    pub const fn cubic(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for input t in [0,1], inverting the x bezier via
    /// binary search.
    pub fn eval(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
        if *self == Self::LINEAR {
            return t;
        }
        // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        let mut mid = t;
        for _ in 0..24 {
            let x = cubic_bezier(0.0, self.x1, self.x2, 1.0, mid);
            if (x - t).abs() < 1e-6 {
                break;
            }
            if x < t {
                lo = mid;
            } else {
                hi = mid;
            }
            mid = 0.5 * (lo + hi);
        }
        cubic_bezier(0.0, self.y1, self.y2, 1.0, mid)
    }
}

impl Default for TimingCurve {
    fn default() -> Self {
        Self::LINEAR
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}
