#![allow(dead_code)]
//! Switchkit Control Core (engine-agnostic)
//!
//! An animated "exchange"-style toggle switch expressed as plain data: style
//! configuration, shape-layer descriptors, keyframe animation descriptors,
//! and the render commands a host applies after each event. The control owns
//! state and geometry; path rasterization and timeline execution belong to
//! the host rendering system.

pub mod control;
pub mod ids;
pub mod indicator;
pub mod keyframe;
pub mod layer;
pub mod outputs;
pub mod sampling;
pub mod timing;

// Re-exports for consumers (host adapters)
pub use control::{
    ExchangeSwitch, SwitchColors, SwitchStyle, DEFAULT_DURATION, INDICATOR_SLIDE_KEY,
    TRACK_EXCHANGE_KEY,
};
pub use ids::{LayerId, LayerIdAllocator};
pub use indicator::{ExchangeIndicator, SHAPE_OFF_KEY, SHAPE_ON_KEY};
pub use keyframe::{
    AnimatedProperty, AnimationGroup, FillPolicy, KeyframeAnimation, LayerAnimation,
};
pub use layer::{LayerPath, LineCap, ShapeLayer};
pub use outputs::{Outputs, RenderCommand};
pub use sampling::sample_animation;
pub use timing::TimingCurve;
pub use switchkit_api_core::{Color, Rect, Size, Value, ValueKind, Vec2};
