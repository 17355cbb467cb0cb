use super::interpolant::Interpolant;
use super::value::{CurveType, Value};

/// A keyframe: value at `time` plus the incoming and outgoing tangents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint<V> {
    pub time: f32,
    pub value: V,
    /// Slope of the segment ending at this point
    pub in_slope: V,
    /// Slope of the segment starting at this point
    pub out_slope: V,
}

impl<V> ControlPoint<V> {
    pub fn new(time: f32, value: V, in_slope: V, out_slope: V) -> Self {
        Self {
            time,
            value,
            in_slope,
            out_slope,
        }
    }
}

impl<V: Interpolant> ControlPoint<V> {
    /// Keyframe with zero tangents on both sides
    pub fn flat(time: f32, value: V) -> Self {
        Self::new(time, value, V::ZERO, V::ZERO)
    }

    pub fn into_value(self) -> ControlPoint<Value> {
        ControlPoint {
            time: self.time,
            value: self.value.into_value(),
            in_slope: self.in_slope.into_value(),
            out_slope: self.out_slope.into_value(),
        }
    }
}

impl ControlPoint<Value> {
    /// First payload shape that differs from `expected`, if any
    pub fn mismatched_shape(&self, expected: CurveType) -> Option<CurveType> {
        [self.value, self.in_slope, self.out_slope]
            .iter()
            .map(Value::curve_type)
            .find(|&c| c != expected)
    }

    pub fn cast<V: Interpolant>(&self) -> Option<ControlPoint<V>> {
        Some(ControlPoint {
            time: self.time,
            value: V::from_value(self.value)?,
            in_slope: V::from_value(self.in_slope)?,
            out_slope: V::from_value(self.out_slope)?,
        })
    }

    pub fn reshape(&self, curve_type: CurveType) -> Self {
        Self {
            time: self.time,
            value: self.value.reshape(curve_type),
            in_slope: self.in_slope.reshape(curve_type),
            out_slope: self.out_slope.reshape(curve_type),
        }
    }
}
