//! Curve shape tags and the shape-tagged payload

use crate::error::{CurveError, Result};
use crate::math::{Vec2, Vec3, Vec4};

/// Payload shape of a curve, fixed while the curve holds control points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveType {
    #[default]
    Scalar,
    Vec2,
    Vec3,
    Vec4,
}

impl CurveType {
    /// Number of `f32` components in a payload of this shape
    pub fn components(self) -> usize {
        match self {
            CurveType::Scalar => 1,
            CurveType::Vec2 => 2,
            CurveType::Vec3 => 3,
            CurveType::Vec4 => 4,
        }
    }

    /// Map the numeric tags used on the JS side (NUMBER=0 .. VEC4=3)
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(CurveType::Scalar),
            1 => Some(CurveType::Vec2),
            2 => Some(CurveType::Vec3),
            3 => Some(CurveType::Vec4),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        self.components() as u32 - 1
    }

    pub fn from_components(count: usize) -> Result<Self> {
        match count {
            1 => Ok(CurveType::Scalar),
            2 => Ok(CurveType::Vec2),
            3 => Ok(CurveType::Vec3),
            4 => Ok(CurveType::Vec4),
            n => Err(CurveError::ComponentCount(n)),
        }
    }
}

/// A curve payload tagged with its shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Scalar(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
}

impl Value {
    pub fn curve_type(&self) -> CurveType {
        match self {
            Value::Scalar(_) => CurveType::Scalar,
            Value::Vec2(_) => CurveType::Vec2,
            Value::Vec3(_) => CurveType::Vec3,
            Value::Vec4(_) => CurveType::Vec4,
        }
    }

    pub fn components(&self) -> Vec<f32> {
        match self {
            Value::Scalar(v) => vec![*v],
            Value::Vec2(v) => v.to_array().to_vec(),
            Value::Vec3(v) => v.to_array().to_vec(),
            Value::Vec4(v) => v.to_array().to_vec(),
        }
    }

    /// Build a payload of the given shape; the slice must match its width exactly
    pub fn from_components(curve_type: CurveType, components: &[f32]) -> Result<Self> {
        if components.len() != curve_type.components() {
            return Err(CurveError::ShapeMismatch {
                expected: curve_type,
                found: CurveType::from_components(components.len())?,
            });
        }
        Ok(Self::padded(curve_type, components))
    }

    /// Reinterpret as another shape, truncating or zero-padding components
    pub fn reshape(&self, curve_type: CurveType) -> Self {
        Self::padded(curve_type, &self.components())
    }

    fn padded(curve_type: CurveType, components: &[f32]) -> Self {
        let c = |i: usize| components.get(i).copied().unwrap_or(0.0);
        match curve_type {
            CurveType::Scalar => Value::Scalar(c(0)),
            CurveType::Vec2 => Value::Vec2(Vec2::new(c(0), c(1))),
            CurveType::Vec3 => Value::Vec3(Vec3::new(c(0), c(1), c(2))),
            CurveType::Vec4 => Value::Vec4(Vec4::new(c(0), c(1), c(2), c(3))),
        }
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Scalar(v)
    }
}

impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self {
        Value::Vec2(v)
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Value::Vec3(v)
    }
}

impl From<Vec4> for Value {
    fn from(v: Vec4) -> Self {
        Value::Vec4(v)
    }
}
