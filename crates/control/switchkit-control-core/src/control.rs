#![allow(dead_code)]
//! Exchange switch control.
//!
//! Owns the pill track layer and the circle indicator, recomputes derived
//! geometry on every style or bounds mutation, and drives the stroke + slide
//! + exchange choreography on state changes. Every entry point is a visual
//! side effect: no operation fails, degenerate geometry renders best-effort.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::ids::LayerIdAllocator;
use crate::indicator::ExchangeIndicator;
use crate::keyframe::{
    AnimatedProperty, AnimationGroup, FillPolicy, KeyframeAnimation, LayerAnimation,
};
use crate::layer::{LayerPath, LineCap, ShapeLayer};
use crate::outputs::{Outputs, RenderCommand};
use crate::timing::TimingCurve;
use switchkit_api_core::{Color, Rect, Value, Vec2};

/// Animation key installed on the track layer for the stroke group.
pub const TRACK_EXCHANGE_KEY: &str = "track-exchange";
/// Animation key installed on the indicator container for the slide.
pub const INDICATOR_SLIDE_KEY: &str = "indicator-slide";

/// Seconds; used by [`ExchangeSwitch::toggle`].
pub const DEFAULT_DURATION: f32 = 0.4;

/// Style configuration. Each field maps to a setter that performs a full
/// visual reset when mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchStyle {
    pub line_color: Color,
    pub on_color: Color,
    pub off_color: Color,
    /// Logical track thickness; multiplied by the display scale factor.
    pub line_size: f32,
}

impl Default for SwitchStyle {
    fn default() -> Self {
        Self {
            line_color: Color::white(0.95),
            on_color: Color::rgb(0.34, 0.91, 0.51),
            off_color: Color::rgb(0.90, 0.90, 0.90),
            line_size: 20.0,
        }
    }
}

/// Bundled (background, on, off) palette kept for backward compatibility.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchColors {
    pub background: Color,
    pub on: Color,
    pub off: Color,
}

/// The exchange-style toggle switch: two circular indicators swapping places
/// on a pill-shaped track that plays a stroke keyframe animation while the
/// circle slides between its two positions.
#[derive(Debug)]
pub struct ExchangeSwitch {
    on: bool,
    bounds: Rect,
    scale_factor: f32,
    style: SwitchStyle,

    ids: LayerIdAllocator,
    track_layer: ShapeLayer,
    indicator: ExchangeIndicator,

    outputs: Outputs,
}

impl ExchangeSwitch {
    /// Build the control for the given bounds. The default visual state is
    /// ON, matching the indicator's initially visible shape.
    pub fn new(bounds: Rect) -> Self {
        let style = SwitchStyle::default();
        let scale_factor = 1.0;
        let mut ids = LayerIdAllocator::new();
        let track_layer = ShapeLayer::new(ids.alloc());
        let line_width = style.line_size * scale_factor;
        let indicator =
            ExchangeIndicator::new(Self::indicator_frame(bounds, line_width, true), &mut ids);

        let mut control = Self {
            on: true,
            bounds,
            scale_factor,
            style,
            ids,
            track_layer,
            indicator,
            outputs: Outputs::default(),
        };
        control.reset_view();
        control
    }

    // ---- Accessors ----------------------------------------------------

    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn style(&self) -> &SwitchStyle {
        &self.style
    }

    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Effective track thickness: configured line size times the display
    /// scale factor.
    #[inline]
    pub fn line_width(&self) -> f32 {
        self.style.line_size * self.scale_factor
    }

    pub fn track_layer(&self) -> &ShapeLayer {
        &self.track_layer
    }

    pub fn indicator(&self) -> &ExchangeIndicator {
        &self.indicator
    }

    /// Commands accumulated since the last drain.
    pub fn pending(&self) -> &Outputs {
        &self.outputs
    }

    /// Hand the accumulated commands to the host, leaving the buffer empty.
    pub fn drain_output(&mut self) -> Vec<RenderCommand> {
        self.outputs.drain()
    }

    // ---- Host surface -------------------------------------------------

    /// Render callback: the host invokes this whenever geometry changes.
    /// Re-entrant safe; repeated calls reproduce the same layout.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.reset_view();
    }

    /// Device-resolution multiplier applied to logical sizes (default 1.0).
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
        self.reset_view();
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.style.line_color = color;
        self.reset_view();
    }

    pub fn set_on_color(&mut self, color: Color) {
        self.style.on_color = color;
        self.reset_view();
    }

    pub fn set_off_color(&mut self, color: Color) {
        self.style.off_color = color;
        self.reset_view();
    }

    pub fn set_line_size(&mut self, line_size: f32) {
        self.style.line_size = line_size;
        self.reset_view();
    }

    /// Set the bundled (background, on, off) palette. Components are only
    /// forwarded to the individual setters when they differ from the current
    /// value.
    #[deprecated(note = "use set_line_color, set_on_color and set_off_color instead")]
    pub fn set_colors(&mut self, colors: SwitchColors) {
        if colors.background != self.style.line_color {
            self.set_line_color(colors.background);
        }
        if colors.on != self.style.on_color {
            self.set_on_color(colors.on);
        }
        // Legacy quirk: the off component is gated on the current on color.
        if colors.on != self.style.off_color {
            self.set_off_color(colors.off);
        }
    }

    /// The bundled palette as currently configured.
    pub fn colors(&self) -> SwitchColors {
        SwitchColors {
            background: self.style.line_color,
            on: self.style.on_color,
            off: self.style.off_color,
        }
    }

    /// State change entry point: set the target state and replay the full
    /// transition over `duration` seconds.
    pub fn set_on(&mut self, value: bool, duration: f32) {
        self.change_value_animate(value, duration);
    }

    /// Flip the state with the default duration.
    pub fn toggle(&mut self) {
        self.set_on(!self.on, DEFAULT_DURATION);
    }

    // ---- Internals ----------------------------------------------------

    /// Destination frame for the indicator: left inset when off, right inset
    /// when on, always a function of the boolean state alone.
    fn indicator_frame(bounds: Rect, line_width: f32, on: bool) -> Rect {
        let side = bounds.height() - line_width;
        let x = if on {
            bounds.width() - bounds.height() + line_width / 2.0
        } else {
            line_width / 2.0
        };
        Rect::new(x, line_width / 2.0, side, side)
    }

    /// Full visual reset: recompute derived geometry from the current bounds
    /// and style, rebuild the track shape, reposition the indicator, and
    /// reapply colors. Emits replace-style upserts.
    fn reset_view(&mut self) {
        let line_width = self.line_width();
        let height = self.bounds.height();
        let radius = height / 2.0 - line_width;

        let span_start = line_width;
        let span_end = self.bounds.width() - 4.0 * line_width;
        if span_end < span_start {
            debug!(
                "degenerate track span [{span_start}, {span_end}] for bounds {:?}",
                self.bounds
            );
        }

        self.track_layer.path = Some(LayerPath::Line {
            from: Vec2::new(span_start, 0.0),
            to: Vec2::new(span_end, 0.0),
        });
        self.track_layer.position = Vec2::new(radius, radius + line_width);
        self.track_layer.fill_color = Some(self.style.line_color);
        self.track_layer.stroke_color = Some(self.style.line_color);
        self.track_layer.line_width = height;
        self.track_layer.line_cap = LineCap::Round;
        self.track_layer.frame = Rect::new(0.0, 0.0, self.bounds.width(), height);

        self.indicator
            .layout(Self::indicator_frame(self.bounds, line_width, self.on));
        self.indicator
            .apply_colors(self.style.on_color, self.style.off_color);

        self.outputs.push(RenderCommand::UpsertLayer {
            layer: self.track_layer.clone(),
        });
        self.indicator.emit(&mut self.outputs);
        trace!("reset: line_width={line_width} bounds={:?}", self.bounds);
    }

    fn change_value_animate(&mut self, value: bool, duration: f32) {
        self.on = value;
        debug!("state -> {value} over {duration}s");

        let line_width = self.line_width();
        let current = self.indicator.frame();
        let destination = current.with_origin_x(if value {
            self.bounds.width() - self.bounds.height() + line_width / 2.0
        } else {
            line_width / 2.0
        });

        let key_times = vec![0.0, 0.4, 0.6, 1.0];
        let stroke_start = KeyframeAnimation {
            property: AnimatedProperty::StrokeStart,
            values: vec![Value::f(0.0), Value::f(0.45), Value::f(0.45), Value::f(0.0)],
            key_times: key_times.clone(),
            duration,
            timing: TimingCurve::LINEAR,
            fill: FillPolicy::Hold,
        };
        let stroke_end = KeyframeAnimation {
            property: AnimatedProperty::StrokeEnd,
            values: vec![Value::f(1.0), Value::f(0.55), Value::f(0.55), Value::f(1.0)],
            key_times,
            duration,
            timing: TimingCurve::LINEAR,
            fill: FillPolicy::Hold,
        };
        self.outputs.push(RenderCommand::AddAnimation {
            layer: self.track_layer.id,
            key: TRACK_EXCHANGE_KEY.into(),
            animation: LayerAnimation::Group(AnimationGroup {
                animations: vec![stroke_start, stroke_end],
                duration,
                fill: FillPolicy::Hold,
            }),
        });

        self.indicator
            .exchange_animate(value, duration, &mut self.outputs);

        let slide = KeyframeAnimation {
            property: AnimatedProperty::Frame,
            values: vec![Value::Rect(current), Value::Rect(destination)],
            key_times: vec![0.0, 1.0],
            duration,
            timing: TimingCurve::EASE,
            fill: FillPolicy::Hold,
        };
        self.indicator.set_frame(destination);
        self.outputs.push(RenderCommand::SetFrame {
            layer: self.indicator.id(),
            frame: destination,
        });
        self.outputs.push(RenderCommand::AddAnimation {
            layer: self.indicator.id(),
            key: INDICATOR_SLIDE_KEY.into(),
            animation: LayerAnimation::Keyframe(slide),
        });
    }
}
