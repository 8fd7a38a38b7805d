#![allow(dead_code)]
//! Identifiers for layers owned by the control tree.

use serde::{Deserialize, Serialize};

/// Opaque handle a host uses to address one layer across commands.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u32);

/// Monotonic allocator for LayerId.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Default, Debug, Clone)]
pub struct LayerIdAllocator {
    next: u32,
}

impl LayerIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> LayerId {
        let id = LayerId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = LayerIdAllocator::new();
        assert_eq!(alloc.alloc(), LayerId(0));
        assert_eq!(alloc.alloc(), LayerId(1));
        assert_eq!(alloc.alloc(), LayerId(2));
        alloc.reset();
        assert_eq!(alloc.alloc(), LayerId(0));
    }
}
