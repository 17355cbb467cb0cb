use serde::{Deserialize, Serialize};

/// 2D vector, e.g. texture offsets
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_array(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn from_array([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

vector_ops!(Vec2 { x, y });
