//! Statically typed keyframe track
//!
//! Segments are cubic Hermite curves stored as keyframes with in/out slopes.
//! Evaluation converts the segment to Bézier form: the inner control points
//! sit one third of the segment duration along each tangent.

use super::control_point::ControlPoint;
use super::interpolant::{bernstein_weights, Interpolant};
use super::value::CurveType;
use crate::error::{CurveError, Result};

const EMPTY: &str = "curve has no control points";

/// Keyframes of a single payload shape, kept sorted by time
#[derive(Debug, Clone, PartialEq)]
pub struct Track<V> {
    control_points: Vec<ControlPoint<V>>,
}

impl<V> Default for Track<V> {
    fn default() -> Self {
        Self {
            control_points: Vec::new(),
        }
    }
}

impl<V: Interpolant> Track<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = ControlPoint<V>>) -> Result<Self> {
        let mut track = Self::new();
        for point in points {
            track.add_control_point(point)?;
        }
        Ok(track)
    }

    /// Insert keeping times non-decreasing; a point lands before existing
    /// points with the same time. Non-finite times are rejected.
    pub fn add_control_point(&mut self, point: ControlPoint<V>) -> Result<()> {
        if !point.time.is_finite() {
            return Err(CurveError::InvalidTime(point.time));
        }
        let index = self
            .control_points
            .iter()
            .position(|existing| point.time <= existing.time)
            .unwrap_or(self.control_points.len());
        self.control_points.insert(index, point);
        Ok(())
    }

    pub fn curve_type(&self) -> CurveType {
        V::CURVE_TYPE
    }

    pub fn clear(&mut self) {
        self.control_points.clear();
    }

    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    pub fn control_points(&self) -> &[ControlPoint<V>] {
        &self.control_points
    }

    pub fn start_time(&self) -> Result<f32> {
        self.first().map(|p| p.time)
    }

    pub fn end_time(&self) -> Result<f32> {
        self.last().map(|p| p.time)
    }

    pub fn duration(&self) -> Result<f32> {
        Ok(self.end_time()? - self.start_time()?)
    }

    /// Value of the curve at `time`, clamped to the first and last keyframes
    pub fn evaluate(&self, time: f32) -> Result<V> {
        let first = self.first()?;
        if time.is_nan() {
            return Err(CurveError::InvalidTime(time));
        }
        if time < first.time {
            return Ok(first.value);
        }
        let last = self.last()?;
        if time >= last.time {
            return Ok(last.value);
        }

        // first.time <= time < last.time, so 1 <= to_index < len
        let to_index = self.control_points.partition_point(|p| p.time <= time);
        let from = &self.control_points[to_index - 1];
        let to = &self.control_points[to_index];

        let time_delta = to.time - from.time;
        let u = (time - from.time) / time_delta;

        let p0 = from.value;
        let p1 = from.value.tangent_point(from.out_slope, time_delta / 3.0);
        let p2 = to.value.tangent_point(to.in_slope, -time_delta / 3.0);
        let p3 = to.value;

        Ok(V::blend(bernstein_weights(u), [p0, p1, p2, p3]))
    }

    /// Sample `count` evenly spaced values from start to end time
    pub fn sample(&self, count: usize) -> Result<Vec<V>> {
        let start = self.start_time()?;
        let duration = self.duration()?;
        (0..count)
            .map(|i| {
                let t = i as f32 / (count - 1).max(1) as f32;
                self.evaluate(start + duration * t)
            })
            .collect()
    }

    fn first(&self) -> Result<&ControlPoint<V>> {
        self.control_points.first().ok_or(CurveError::InvalidState(EMPTY))
    }

    fn last(&self) -> Result<&ControlPoint<V>> {
        self.control_points.last().ok_or(CurveError::InvalidState(EMPTY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vec2, Vec3, Vec4};

    const EPS: f32 = 0.0001;

    fn ramp() -> Track<f32> {
        Track::from_points([
            ControlPoint::new(0.0, 0.0, 0.0, 0.0),
            ControlPoint::new(1.0, 10.0, 0.0, 0.0),
        ]).unwrap()
    }

    #[test]
    fn test_scalar_scenario() {
        let track = ramp();
        assert!((track.evaluate(0.0).unwrap() - 0.0).abs() < EPS);
        assert!((track.evaluate(1.0).unwrap() - 10.0).abs() < EPS);
        assert!((track.evaluate(0.5).unwrap() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_clamps_outside_range() {
        let track = ramp();
        assert_eq!(track.evaluate(-1.0).unwrap(), 0.0);
        assert_eq!(track.evaluate(2.0).unwrap(), 10.0);
        assert_eq!(track.evaluate(-1.0).unwrap(), track.evaluate(track.start_time().unwrap()).unwrap());
    }

    #[test]
    fn test_vec2_scenario() {
        let track = Track::from_points([
            ControlPoint::flat(0.0, Vec2::new(0.0, 0.0)),
            ControlPoint::flat(2.0, Vec2::new(4.0, 10.0)),
        ]).unwrap();
        let v = track.evaluate(1.0).unwrap();
        assert!((v.x - 2.0).abs() < EPS);
        assert!((v.y - 5.0).abs() < EPS);
    }

    #[test]
    fn test_clear_then_evaluate_fails() {
        let mut track = ramp();
        track.clear();
        assert!(track.is_empty());
        assert_eq!(track.curve_type(), CurveType::Scalar);
        assert!(matches!(track.evaluate(0.5), Err(CurveError::InvalidState(_))));
    }

    #[test]
    fn test_empty_track_errors() {
        let track: Track<Vec3> = Track::new();
        assert!(matches!(track.evaluate(0.0), Err(CurveError::InvalidState(_))));
        assert!(matches!(track.start_time(), Err(CurveError::InvalidState(_))));
        assert!(matches!(track.end_time(), Err(CurveError::InvalidState(_))));
        assert!(matches!(track.sample(4), Err(CurveError::InvalidState(_))));
    }

    #[test]
    fn test_insertion_keeps_time_order() {
        let times = [3.0, -1.0, 7.5, 0.0, 3.0, 2.0, 10.0, -4.0, 2.0];
        let mut track = Track::new();
        for (i, &t) in times.iter().enumerate() {
            track.add_control_point(ControlPoint::flat(t, i as f32)).unwrap();
        }
        assert_eq!(track.len(), times.len());
        for pair in track.control_points().windows(2) {
            assert!(pair[0].time <= pair[1].time, "{} > {}", pair[0].time, pair[1].time);
        }
        assert_eq!(track.start_time().unwrap(), -4.0);
        assert_eq!(track.end_time().unwrap(), 10.0);
        assert_eq!(track.duration().unwrap(), 14.0);
    }

    #[test]
    fn test_equal_times_insert_before_existing() {
        let mut track = Track::new();
        track.add_control_point(ControlPoint::flat(1.0, 1.0f32)).unwrap();
        track.add_control_point(ControlPoint::flat(1.0, 2.0f32)).unwrap();
        track.add_control_point(ControlPoint::flat(0.0, 0.0f32)).unwrap();
        let values: Vec<f32> = track.control_points().iter().map(|p| p.value).collect();
        assert_eq!(values, vec![0.0, 2.0, 1.0]);
    }

    #[test]
    fn test_hits_every_keyframe_exactly() {
        let track = Track::from_points([
            ControlPoint::new(0.0, Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::new(5.0, -2.0, 1.0)),
            ControlPoint::new(0.7, Vec3::new(-1.0, 4.0, 0.0), Vec3::new(1.0, 1.0, 1.0), Vec3::new(-3.0, 0.5, 2.0)),
            ControlPoint::new(1.9, Vec3::new(2.0, 2.0, 2.0), Vec3::new(0.0, 9.0, 0.0), Vec3::ZERO),
            ControlPoint::new(4.0, Vec3::new(0.0, -8.0, 6.0), Vec3::new(2.0, 2.0, -2.0), Vec3::ZERO),
        ]).unwrap();
        for p in track.control_points() {
            let v = track.evaluate(p.time).unwrap();
            assert!((v.x - p.value.x).abs() < EPS);
            assert!((v.y - p.value.y).abs() < EPS);
            assert!((v.z - p.value.z).abs() < EPS);
        }
    }

    #[test]
    fn test_slopes_shape_the_segment() {
        // out slope 3 over a unit segment ending in a flat key: value rises above linear
        let track = Track::from_points([
            ControlPoint::new(0.0, 0.0f32, 0.0, 3.0),
            ControlPoint::new(1.0, 1.0f32, 0.0, 0.0),
        ]).unwrap();
        // p = [0, 1, 1, 1] at u = 0.5 -> 0.375 + 0.375 + 0.125
        assert!((track.evaluate(0.5).unwrap() - 0.875).abs() < EPS);

        // slope derivative near the start approximates the out slope
        let h = 0.001;
        let d = (track.evaluate(h).unwrap() - track.evaluate(0.0).unwrap()) / h;
        assert!((d - 3.0).abs() < 0.05, "derivative {}", d);
    }

    #[test]
    fn test_components_match_scalar_tracks() {
        let points: [(f32, [f32; 4], [f32; 4], [f32; 4]); 3] = [
            (0.0, [0.0, 1.0, 2.0, 3.0], [0.5, 0.0, -1.0, 2.0], [1.0, -2.0, 0.0, 0.5]),
            (1.5, [4.0, -1.0, 2.5, 0.0], [0.0, 3.0, 1.0, -1.0], [2.0, 0.0, 0.0, 1.0]),
            (2.0, [1.0, 1.0, 1.0, 1.0], [-1.0, 0.5, 0.0, 4.0], [0.0, 0.0, 0.0, 0.0]),
        ];
        let vector = Track::from_points(points.iter().map(|(t, v, i, o)| {
            ControlPoint::new(*t, Vec4::from_array(*v), Vec4::from_array(*i), Vec4::from_array(*o))
        })).unwrap();
        let scalars: Vec<Track<f32>> = (0..4)
            .map(|c| {
                Track::from_points(
                    points
                        .iter()
                        .map(|(t, v, i, o)| ControlPoint::new(*t, v[c], i[c], o[c])),
                ).unwrap()
            })
            .collect();

        for step in -2..=24 {
            let t = step as f32 * 0.1;
            let v = vector.evaluate(t).unwrap().to_array();
            for c in 0..4 {
                let s = scalars[c].evaluate(t).unwrap();
                assert!((v[c] - s).abs() < EPS, "component {} at t={}: {} vs {}", c, t, v[c], s);
            }
        }
    }

    #[test]
    fn test_single_point_is_constant() {
        let track = Track::from_points([ControlPoint::flat(2.0, 7.0f32)]).unwrap();
        assert_eq!(track.evaluate(0.0).unwrap(), 7.0);
        assert_eq!(track.evaluate(2.0).unwrap(), 7.0);
        assert_eq!(track.evaluate(9.0).unwrap(), 7.0);
        assert_eq!(track.duration().unwrap(), 0.0);
    }

    #[test]
    fn test_nan_query_is_rejected() {
        let single = Track::from_points([ControlPoint::flat(1.0, 2.0f32)]).unwrap();
        assert!(matches!(single.evaluate(f32::NAN), Err(CurveError::InvalidTime(t)) if t.is_nan()));
        assert!(matches!(ramp().evaluate(f32::NAN), Err(CurveError::InvalidTime(_))));

        // infinities still clamp
        assert_eq!(ramp().evaluate(f32::NEG_INFINITY).unwrap(), 0.0);
        assert_eq!(ramp().evaluate(f32::INFINITY).unwrap(), 10.0);
    }

    #[test]
    fn test_non_finite_point_is_rejected() {
        let result = Track::from_points([ControlPoint::flat(f32::NAN, 2.0f32)]);
        assert!(matches!(result, Err(CurveError::InvalidTime(t)) if t.is_nan()));

        let mut track = ramp();
        for time in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(matches!(
                track.add_control_point(ControlPoint::flat(time, 5.0)),
                Err(CurveError::InvalidTime(_))
            ));
        }
        assert_eq!(track, ramp());
        assert!((track.evaluate(0.5).unwrap() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_bracket_lookup_with_duplicate_times() {
        // equal keyframe times form a step; the later point starts the next segment
        let track = Track::from_points([
            ControlPoint::flat(0.0, 0.0f32),
            ControlPoint::flat(1.0, 4.0f32),
            ControlPoint::flat(1.0, 1.0f32),
            ControlPoint::flat(2.0, 1.0f32),
        ]).unwrap();
        let values: Vec<f32> = track.control_points().iter().map(|p| p.value).collect();
        assert_eq!(values, vec![0.0, 1.0, 4.0, 1.0]);
        assert_eq!(track.evaluate(1.0).unwrap(), 4.0);
        assert!(track.evaluate(0.999).unwrap() < 1.0);
        assert!((track.evaluate(1.5).unwrap() - 2.5).abs() < EPS);
    }

    #[test]
    fn test_sample() {
        let samples = ramp().sample(5).unwrap();
        assert_eq!(samples.len(), 5);
        assert!((samples[0] - 0.0).abs() < EPS);
        assert!((samples[2] - 5.0).abs() < EPS);
        assert!((samples[4] - 10.0).abs() < EPS);
    }
}
