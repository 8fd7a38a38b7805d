#![allow(dead_code)]
//! Output contracts from the control core.
//!
//! Commands carry layer mutations and animation attachments for one event, in
//! order. Hosts drain and apply them after each entry point returns; nothing
//! here blocks or calls back.

use serde::{Deserialize, Serialize};

use crate::ids::LayerId;
use crate::keyframe::LayerAnimation;
use crate::layer::ShapeLayer;
use switchkit_api_core::Rect;

/// One host-visible mutation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RenderCommand {
    /// Create the layer, or replace every driven property if it exists.
    UpsertLayer { layer: ShapeLayer },
    /// Move/resize a layer's frame (model value; no implicit animation).
    SetFrame { layer: LayerId, frame: Rect },
    SetZPosition { layer: LayerId, z: f32 },
    /// Attach an animation under `key`. An animation already keyed the same
    /// on the same layer is replaced (last write wins).
    AddAnimation {
        layer: LayerId,
        key: String,
        animation: LayerAnimation,
    },
}

/// Commands produced by one entry point, in application order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub commands: Vec<RenderCommand>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[inline]
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Hand the accumulated commands to the host, leaving the buffer empty.
    #[inline]
    pub fn drain(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }
}
