//! Rectangles

use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::collaborator::Collaborator;

/// A rectangle that only knows its geometry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometricRectangle {
    pub width: u32,
    pub height: u32,
}

impl GeometricRectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

// Offers no capabilities; only its shape
impl Collaborator for GeometricRectangle {
    fn label(&self) -> &str {
        "rectangle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
