//! Keyframe animation curves
//!
//! Keyframes carry a value plus Hermite in/out slopes; segments are evaluated
//! as cubic Bézier curves. Payloads are scalars or 2-4 component vectors.

mod control_point;
mod curve;
mod interpolant;
mod settings;
mod track;
mod value;

pub use control_point::ControlPoint;
pub use curve::Curve;
pub use interpolant::{bernstein_weights, Interpolant};
pub use settings::{CurveSettings, TypeChangePolicy};
pub use track::Track;
pub use value::{CurveType, Value};
