//! Per-shape operations needed to evaluate a cubic segment
//!
//! Each payload shape implements [`Interpolant`]; a [`Track`](super::Track)
//! is generic over it, so the shape is chosen once when the track is created.

use std::fmt::Debug;

use super::value::{CurveType, Value};
use crate::math::{Vec2, Vec3, Vec4};

pub trait Interpolant: Copy + Debug + PartialEq {
    const CURVE_TYPE: CurveType;
    const ZERO: Self;

    /// Move `weight` along `slope` from `self`: `value[i] + slope[i] * weight`
    fn tangent_point(self, slope: Self, weight: f32) -> Self;

    /// Weighted sum of four control values: `Σ weights[k] * points[k]`
    fn blend(weights: [f32; 4], points: [Self; 4]) -> Self;

    fn into_value(self) -> Value;

    fn from_value(value: Value) -> Option<Self>;
}

/// Cubic Bernstein basis at `u`: `(1-u)³, 3u(1-u)², 3u²(1-u), u³`
pub fn bernstein_weights(u: f32) -> [f32; 4] {
    let v = 1.0 - u;
    [v * v * v, 3.0 * u * v * v, 3.0 * u * u * v, u * u * u]
}

impl Interpolant for f32 {
    const CURVE_TYPE: CurveType = CurveType::Scalar;
    const ZERO: Self = 0.0;

    fn tangent_point(self, slope: Self, weight: f32) -> Self {
        self + slope * weight
    }

    fn blend(w: [f32; 4], p: [Self; 4]) -> Self {
        w[0] * p[0] + w[1] * p[1] + w[2] * p[2] + w[3] * p[3]
    }

    fn into_value(self) -> Value {
        Value::Scalar(self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Scalar(v) => Some(v),
            _ => None,
        }
    }
}

/// Vector payloads lean on the componentwise `+` and `* f32` from `math`
macro_rules! vector_interpolant {
    ($($name:ident),+) => {$(
        impl Interpolant for $name {
            const CURVE_TYPE: CurveType = CurveType::$name;
            const ZERO: Self = $name::ZERO;

            fn tangent_point(self, slope: Self, weight: f32) -> Self {
                self + slope * weight
            }

            fn blend(w: [f32; 4], p: [Self; 4]) -> Self {
                p[0] * w[0] + p[1] * w[1] + p[2] * w[2] + p[3] * w[3]
            }

            fn into_value(self) -> Value {
                Value::$name(self)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$name(v) => Some(v),
                    _ => None,
                }
            }
        }
    )+};
}

vector_interpolant!(Vec2, Vec3, Vec4);
