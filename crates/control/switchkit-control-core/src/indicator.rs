#![allow(dead_code)]
//! Circle indicator: two overlapping circle shapes that swap visibility
//! through a cross-scale animation.
//!
//! The "on" shape starts visible and the "off" shape starts collapsed to zero
//! scale, so a freshly built indicator reads as ON. Each exchange fully
//! re-derives its animation parameters from the target state; a transition
//! re-triggered mid-flight replaces the previous one under the same keys.

use crate::ids::{LayerId, LayerIdAllocator};
use crate::keyframe::{AnimatedProperty, FillPolicy, KeyframeAnimation, LayerAnimation};
use crate::layer::{LayerPath, ShapeLayer};
use crate::outputs::{Outputs, RenderCommand};
use crate::timing::TimingCurve;
use switchkit_api_core::{Color, Rect, Value, Vec2};

/// Animation key installed on the "on" circle shape.
pub const SHAPE_ON_KEY: &str = "shape-on";
/// Animation key installed on the "off" circle shape.
pub const SHAPE_OFF_KEY: &str = "shape-off";

#[derive(Clone, Debug)]
pub struct ExchangeIndicator {
    /// Plain container the circles live in; the slide animation targets it.
    container: ShapeLayer,
    on_layer: ShapeLayer,
    off_layer: ShapeLayer,
}

impl ExchangeIndicator {
    /// Build both circle shapes sized to fit `frame`.
    pub fn new(frame: Rect, ids: &mut LayerIdAllocator) -> Self {
        let container = ShapeLayer::new(ids.alloc());

        let mut off_layer = ShapeLayer::new(ids.alloc());
        off_layer.parent = Some(container.id);
        off_layer.transform_scale = Vec2::splat(0.0);

        let mut on_layer = ShapeLayer::new(ids.alloc());
        on_layer.parent = Some(container.id);

        let mut indicator = Self {
            container,
            on_layer,
            off_layer,
        };
        indicator.layout(frame);
        indicator
    }

    /// Reposition for a control reset: move the container and refit both
    /// circle paths. Re-entrant; safe to call on every geometry change.
    pub fn layout(&mut self, frame: Rect) {
        self.container.frame = frame;
        let diameter = frame.size.min_side();
        let circle = Rect::new(0.0, 0.0, diameter, diameter);
        for layer in [&mut self.off_layer, &mut self.on_layer] {
            layer.frame = circle;
            layer.path = Some(LayerPath::Oval { rect: circle });
        }
    }

    pub fn apply_colors(&mut self, on: Color, off: Color) {
        self.on_layer.fill_color = Some(on);
        self.off_layer.fill_color = Some(off);
    }

    #[inline]
    pub fn id(&self) -> LayerId {
        self.container.id
    }

    #[inline]
    pub fn frame(&self) -> Rect {
        self.container.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.container.frame = frame;
    }

    pub fn on_layer(&self) -> &ShapeLayer {
        &self.on_layer
    }

    pub fn off_layer(&self) -> &ShapeLayer {
        &self.off_layer
    }

    /// Emit upserts for the container and both shapes. The "off" shape goes
    /// first so the "on" shape draws above it until the first exchange
    /// assigns explicit z positions.
    pub fn emit(&self, out: &mut Outputs) {
        out.push(RenderCommand::UpsertLayer {
            layer: self.container.clone(),
        });
        out.push(RenderCommand::UpsertLayer {
            layer: self.off_layer.clone(),
        });
        out.push(RenderCommand::UpsertLayer {
            layer: self.on_layer.clone(),
        });
    }

    /// Cross-scale the two shapes toward `value`. The shape being revealed
    /// renders above the one being hidden and grows from zero to identity on
    /// the ease-in curve; the hidden shape shrinks to zero on the ease-out
    /// curve. Both animations are held after completion.
    pub fn exchange_animate(&mut self, value: bool, duration: f32, out: &mut Outputs) {
        let (reveal, conceal, reveal_key, conceal_key) = if value {
            (&mut self.on_layer, &mut self.off_layer, SHAPE_ON_KEY, SHAPE_OFF_KEY)
        } else {
            (&mut self.off_layer, &mut self.on_layer, SHAPE_OFF_KEY, SHAPE_ON_KEY)
        };

        reveal.z_position = 1.0;
        conceal.z_position = 0.0;
        out.push(RenderCommand::SetZPosition {
            layer: reveal.id,
            z: reveal.z_position,
        });
        out.push(RenderCommand::SetZPosition {
            layer: conceal.id,
            z: conceal.z_position,
        });

        let show = KeyframeAnimation {
            property: AnimatedProperty::TransformScale,
            values: vec![Value::zero_scale(), Value::identity_scale()],
            key_times: vec![0.0, 1.0],
            duration,
            timing: TimingCurve::EASE_IN,
            fill: FillPolicy::Hold,
        };
        let hide = KeyframeAnimation {
            property: AnimatedProperty::TransformScale,
            values: vec![Value::identity_scale(), Value::zero_scale()],
            key_times: vec![0.0, 1.0],
            duration,
            timing: TimingCurve::EASE_OUT,
            fill: FillPolicy::Hold,
        };

        out.push(RenderCommand::AddAnimation {
            layer: reveal.id,
            key: reveal_key.into(),
            animation: LayerAnimation::Keyframe(show),
        });
        out.push(RenderCommand::AddAnimation {
            layer: conceal.id,
            key: conceal_key.into(),
            animation: LayerAnimation::Keyframe(hide),
        });
    }
}
