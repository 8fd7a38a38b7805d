//! Value: payloads carried by keyframes and animated layer properties.
//! All numeric types use f32.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Vec2};

/// Lightweight kind enum for pattern-matching and quick dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Scale,
    Rect,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// Scalar float (stroke fractions and the like)
    Float(f32),

    /// Per-axis transform scale; identity is (1, 1)
    Scale(Vec2),

    /// Frame rectangle
    Rect(Rect),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Scale(_) => ValueKind::Scale,
            Value::Rect(_) => ValueKind::Rect,
        }
    }

    /// Convenience constructors
    pub fn f(v: f32) -> Self {
        Value::Float(v)
    }

    /// Uniform scale on both axes.
    pub fn scale(s: f32) -> Self {
        Value::Scale(Vec2::splat(s))
    }

    pub fn identity_scale() -> Self {
        Value::Scale(Vec2::splat(1.0))
    }

    pub fn zero_scale() -> Self {
        Value::Scale(Vec2::splat(0.0))
    }

    /// Linear interpolation across kinds. Mismatched kinds prefer the left
    /// value (fail-soft).
    pub fn lerp(a: &Value, b: &Value, t: f32) -> Value {
        match (a, b) {
            (Value::Float(va), Value::Float(vb)) => Value::Float(lerp_f32(*va, *vb, t)),
            (Value::Scale(va), Value::Scale(vb)) => Value::Scale(Vec2::new(
                lerp_f32(va.x, vb.x, t),
                lerp_f32(va.y, vb.y, t),
            )),
            (Value::Rect(ra), Value::Rect(rb)) => Value::Rect(Rect::new(
                lerp_f32(ra.origin.x, rb.origin.x, t),
                lerp_f32(ra.origin.y, rb.origin.y, t),
                lerp_f32(ra.size.width, rb.size.width, t),
                lerp_f32(ra.size.height, rb.size.height, t),
            )),
            _ => *a,
        }
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(Value::f(1.0).kind(), ValueKind::Float);
        assert_eq!(Value::identity_scale().kind(), ValueKind::Scale);
        assert_eq!(Value::Rect(Rect::default()).kind(), ValueKind::Rect);
    }

    #[test]
    fn lerp_midpoints_per_kind() {
        assert_eq!(
            Value::lerp(&Value::f(0.0), &Value::f(1.0), 0.5),
            Value::f(0.5)
        );
        assert_eq!(
            Value::lerp(&Value::zero_scale(), &Value::identity_scale(), 0.5),
            Value::scale(0.5)
        );
        let a = Value::Rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = Value::Rect(Rect::new(10.0, 0.0, 10.0, 10.0));
        assert_eq!(
            Value::lerp(&a, &b, 0.5),
            Value::Rect(Rect::new(5.0, 0.0, 10.0, 10.0))
        );
    }

    #[test]
    fn mismatched_kinds_prefer_left() {
        let a = Value::f(2.0);
        let b = Value::identity_scale();
        assert_eq!(Value::lerp(&a, &b, 0.7), a);
    }

    #[test]
    fn serde_tagged_roundtrip() {
        let v = Value::scale(0.5);
        let s = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v, back);
    }
}
