//! Curve whose payload shape is chosen at runtime
//!
//! Wraps one typed [`Track`] per shape. Callers that know the shape at compile
//! time can use `Track` directly; this type serves loaders and the JS binding,
//! which only learn the shape from data.

use super::control_point::ControlPoint;
use super::interpolant::Interpolant;
use super::settings::{CurveSettings, TypeChangePolicy};
use super::track::Track;
use super::value::{CurveType, Value};
use crate::diagnostics;
use crate::error::{CurveError, Result};
use crate::math::{Vec2, Vec3, Vec4};

#[derive(Debug, Clone, PartialEq)]
enum Tracks {
    Scalar(Track<f32>),
    Vec2(Track<Vec2>),
    Vec3(Track<Vec3>),
    Vec4(Track<Vec4>),
}

/// Run `$body` against whichever typed track is active
macro_rules! with_track {
    ($tracks:expr, $track:ident => $body:expr) => {
        match $tracks {
            Tracks::Scalar($track) => $body,
            Tracks::Vec2($track) => $body,
            Tracks::Vec3($track) => $body,
            Tracks::Vec4($track) => $body,
        }
    };
}

impl Tracks {
    fn empty(curve_type: CurveType) -> Self {
        match curve_type {
            CurveType::Scalar => Tracks::Scalar(Track::new()),
            CurveType::Vec2 => Tracks::Vec2(Track::new()),
            CurveType::Vec3 => Tracks::Vec3(Track::new()),
            CurveType::Vec4 => Tracks::Vec4(Track::new()),
        }
    }

    fn curve_type(&self) -> CurveType {
        with_track!(self, track => track.curve_type())
    }
}

/// Animation curve over scalar or vector payloads
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    tracks: Tracks,
    settings: CurveSettings,
}

impl Default for Curve {
    fn default() -> Self {
        Self::new(CurveType::default())
    }
}

impl Curve {
    pub fn new(curve_type: CurveType) -> Self {
        Self::with_settings(curve_type, CurveSettings::default())
    }

    pub fn with_settings(curve_type: CurveType, settings: CurveSettings) -> Self {
        Self {
            tracks: Tracks::empty(curve_type),
            settings,
        }
    }

    pub fn settings(&self) -> CurveSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: CurveSettings) {
        self.settings = settings;
    }

    pub fn curve_type(&self) -> CurveType {
        self.tracks.curve_type()
    }

    /// Change the payload shape. Always allowed on an empty curve; on a
    /// populated one the settings decide between rejecting and reshaping.
    pub fn set_curve_type(&mut self, curve_type: CurveType) -> Result<()> {
        let current = self.curve_type();
        if current == curve_type {
            return Ok(());
        }

        if !self.is_empty() {
            diagnostics::warn(&format!(
                "Cannot change curve type from {:?} to {:?} when curve is not empty",
                current, curve_type
            ));
            if self.settings.type_change_policy == TypeChangePolicy::Reject {
                return Err(CurveError::InvalidOperation {
                    from: current,
                    to: curve_type,
                });
            }
        }

        let points = self.control_points();
        self.tracks = Tracks::empty(curve_type);
        // reverse keeps the relative order of equal times
        for point in points.into_iter().rev() {
            self.add_control_point(point.reshape(curve_type))?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        with_track!(&mut self.tracks, track => track.clear())
    }

    /// Insert a keyframe whose value and slopes all match the curve type
    pub fn add_control_point(&mut self, point: ControlPoint<Value>) -> Result<()> {
        let expected = self.curve_type();
        let mismatch = || CurveError::ShapeMismatch {
            expected,
            found: point.mismatched_shape(expected).unwrap_or(expected),
        };
        with_track!(&mut self.tracks, track => {
            track.add_control_point(point.cast().ok_or_else(mismatch)?)
        })
    }

    pub fn len(&self) -> usize {
        with_track!(&self.tracks, track => track.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn control_points(&self) -> Vec<ControlPoint<Value>> {
        with_track!(&self.tracks, track => {
            track.control_points().iter().map(|p| p.into_value()).collect()
        })
    }

    pub fn start_time(&self) -> Result<f32> {
        with_track!(&self.tracks, track => track.start_time())
    }

    pub fn end_time(&self) -> Result<f32> {
        with_track!(&self.tracks, track => track.end_time())
    }

    pub fn duration(&self) -> Result<f32> {
        with_track!(&self.tracks, track => track.duration())
    }

    pub fn evaluate(&self, time: f32) -> Result<Value> {
        with_track!(&self.tracks, track => track.evaluate(time).map(Interpolant::into_value))
    }

    pub fn sample(&self, count: usize) -> Result<Vec<Value>> {
        with_track!(&self.tracks, track => {
            Ok(track.sample(count)?.into_iter().map(Interpolant::into_value).collect())
        })
    }
}
