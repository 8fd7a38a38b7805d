#![allow(dead_code)]
//! Keyframe animation descriptors.
//!
//! Immutable value structs constructed fresh per transition and handed to the
//! host via render commands; the host timeline executes them and the core
//! retains nothing once they are emitted.

use serde::{Deserialize, Serialize};

use crate::timing::TimingCurve;
use switchkit_api_core::Value;

/// Layer property a descriptor animates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimatedProperty {
    /// Fraction of the stroked path trimmed from its start.
    StrokeStart,
    /// Fraction of the stroked path kept up to its end.
    StrokeEnd,
    /// Per-axis transform scale around the layer center.
    TransformScale,
    /// The layer's frame rectangle in its parent's coordinates.
    Frame,
}

/// What happens when playback passes the final keyframe.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillPolicy {
    /// Drop the animation and snap back to the model value.
    #[default]
    Remove,
    /// Keep presenting the final keyframe; the animation stays installed.
    Hold,
}

/// A timed interpolation through explicit values at explicit normalized
/// time fractions.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct KeyframeAnimation {
    pub property: AnimatedProperty,
    pub values: Vec<Value>,
    /// Normalized times in [0,1], one per value, non-decreasing.
    pub key_times: Vec<f32>,
    /// Seconds.
    pub duration: f32,
    pub timing: TimingCurve,
    pub fill: FillPolicy,
}

impl KeyframeAnimation {
    /// Validate basic invariants (paired lists, monotonic key times in [0,1],
    /// non-negative duration).
    pub fn validate_basic(&self) -> Result<(), String> {
        if self.values.len() != self.key_times.len() {
            return Err(format!(
                "keyframe animation has {} values but {} key times",
                self.values.len(),
                self.key_times.len()
            ));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err("keyframe animation duration must be finite and >= 0".into());
        }
        let mut last = -f32::INFINITY;
        for t in &self.key_times {
            if !t.is_finite() || *t < 0.0 || *t > 1.0 {
                return Err("key times must be finite and in [0,1]".into());
            }
            if *t < last {
                return Err("key times must be non-decreasing".into());
            }
            last = *t;
        }
        Ok(())
    }

    /// Final keyframe; what a `Hold` animation keeps presenting.
    pub fn destination(&self) -> Option<&Value> {
        self.values.last()
    }
}

/// Concurrent animations presented as one unit on a layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnimationGroup {
    pub animations: Vec<KeyframeAnimation>,
    /// Seconds; spans every member.
    pub duration: f32,
    pub fill: FillPolicy,
}

/// What an `AddAnimation` command attaches to a layer key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum LayerAnimation {
    Keyframe(KeyframeAnimation),
    Group(AnimationGroup),
}

impl LayerAnimation {
    /// Seconds the attachment plays for.
    pub fn duration(&self) -> f32 {
        match self {
            LayerAnimation::Keyframe(k) => k.duration,
            LayerAnimation::Group(g) => g.duration,
        }
    }

    pub fn fill(&self) -> FillPolicy {
        match self {
            LayerAnimation::Keyframe(k) => k.fill,
            LayerAnimation::Group(g) => g.fill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point(values: Vec<Value>, key_times: Vec<f32>) -> KeyframeAnimation {
        KeyframeAnimation {
            property: AnimatedProperty::StrokeStart,
            values,
            key_times,
            duration: 0.4,
            timing: TimingCurve::LINEAR,
            fill: FillPolicy::Hold,
        }
    }

    #[test]
    fn validate_accepts_well_formed_lists() {
        let anim = two_point(vec![Value::f(0.0), Value::f(1.0)], vec![0.0, 1.0]);
        assert!(anim.validate_basic().is_ok());
    }

    #[test]
    fn validate_rejects_mismatched_and_unsorted() {
        let short = two_point(vec![Value::f(0.0)], vec![0.0, 1.0]);
        assert!(short.validate_basic().is_err());

        let unsorted = two_point(vec![Value::f(0.0), Value::f(1.0)], vec![0.6, 0.4]);
        assert!(unsorted.validate_basic().is_err());

        let out_of_range = two_point(vec![Value::f(0.0), Value::f(1.0)], vec![0.0, 1.5]);
        assert!(out_of_range.validate_basic().is_err());
    }

    #[test]
    fn destination_is_last_value() {
        let anim = two_point(vec![Value::f(0.25), Value::f(0.75)], vec![0.0, 1.0]);
        assert_eq!(anim.destination(), Some(&Value::f(0.75)));
    }
}
