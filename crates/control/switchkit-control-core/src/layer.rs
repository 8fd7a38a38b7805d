#![allow(dead_code)]
//! Retained shape-layer descriptors.
//!
//! The control keeps its layer tree as plain data and mirrors every mutation
//! into render commands; the host owns the actual drawing surfaces and
//! rasterizes the path data.

use serde::{Deserialize, Serialize};

use crate::ids::LayerId;
use switchkit_api_core::{Color, Rect, Vec2};

/// Path data in layer-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LayerPath {
    /// Straight segment; stroked with the layer's line width and cap.
    Line { from: Vec2, to: Vec2 },
    /// Ellipse inscribed in `rect`.
    Oval { rect: Rect },
}

/// Stroke cap applied to open paths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// The slice of a host layer the control drives. A layer without a path is a
/// plain container for children.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShapeLayer {
    pub id: LayerId,
    /// Parent layer; None means the control's root.
    pub parent: Option<LayerId>,
    pub path: Option<LayerPath>,
    /// Frame in the parent's coordinate space.
    pub frame: Rect,
    /// Anchor position in the parent's coordinate space; hosts that place by
    /// frame alone may ignore it.
    pub position: Vec2,
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub line_width: f32,
    pub line_cap: LineCap,
    pub z_position: f32,
    /// Model x/y scale around the layer center; held animations present on
    /// top of this.
    pub transform_scale: Vec2,
}

impl ShapeLayer {
    pub fn new(id: LayerId) -> Self {
        Self {
            id,
            parent: None,
            path: None,
            frame: Rect::default(),
            position: Vec2::ZERO,
            fill_color: None,
            stroke_color: None,
            line_width: 0.0,
            line_cap: LineCap::default(),
            z_position: 0.0,
            transform_scale: Vec2::splat(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_layer_is_identity_scaled_container() {
        let layer = ShapeLayer::new(LayerId(3));
        assert_eq!(layer.transform_scale, Vec2::splat(1.0));
        assert!(layer.path.is_none());
        assert_eq!(layer.z_position, 0.0);
    }
}
