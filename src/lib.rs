use wasm_bindgen::prelude::*;

pub mod animation;
pub mod diagnostics;
pub mod error;
pub mod math;

pub use animation::{
    ControlPoint, Curve, CurveSettings, CurveType, Interpolant, Track, TypeChangePolicy, Value,
};
pub use error::CurveError;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Curve exposed to JavaScript. Curve types use the numeric tags
/// NUMBER=0, VEC2=1, VEC3=2, VEC4=3; payloads are plain float arrays.
#[wasm_bindgen(js_name = Curve)]
pub struct JsCurve {
    curve: Curve,
}

#[wasm_bindgen(js_class = Curve)]
impl JsCurve {
    /// Create an empty curve, scalar unless a type tag is given
    #[wasm_bindgen(constructor)]
    pub fn new(curve_type: Option<u32>) -> Result<JsCurve, JsValue> {
        let curve_type = match curve_type {
            Some(index) => curve_type_from_index(index)?,
            None => CurveType::default(),
        };
        Ok(Self {
            curve: Curve::new(curve_type),
        })
    }

    /// Apply settings from a YAML string
    #[wasm_bindgen]
    pub fn configure(&mut self, yaml: &str) -> Result<(), JsValue> {
        let settings = CurveSettings::from_yaml(yaml)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.curve.set_settings(settings);
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = curveType)]
    pub fn curve_type(&self) -> u32 {
        self.curve.curve_type().index()
    }

    /// Change the curve type; throws on a populated curve unless configured
    /// with `type_change_policy: warn-and-apply`
    #[wasm_bindgen(js_name = setCurveType)]
    pub fn set_curve_type(&mut self, curve_type: u32) -> Result<(), JsValue> {
        let curve_type = curve_type_from_index(curve_type)?;
        self.curve
            .set_curve_type(curve_type)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.curve.len()
    }

    #[wasm_bindgen(js_name = startTime)]
    pub fn start_time(&self) -> Result<f32, JsValue> {
        self.curve.start_time().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = endTime)]
    pub fn end_time(&self) -> Result<f32, JsValue> {
        self.curve.end_time().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.curve.clear();
    }

    #[wasm_bindgen(js_name = addControlPoint)]
    pub fn add_control_point(
        &mut self,
        time: f32,
        value: &[f32],
        in_slope: &[f32],
        out_slope: &[f32],
    ) -> Result<(), JsValue> {
        control_point_from_slices(self.curve.curve_type(), time, value, in_slope, out_slope)
            .and_then(|point| self.curve.add_control_point(point))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Sample the curve; the result always has as many components as the curve type
    #[wasm_bindgen]
    pub fn evaluate(&self, time: f32) -> Result<js_sys::Float32Array, JsValue> {
        let value = self
            .curve
            .evaluate(time)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(js_sys::Float32Array::from(&value.components()[..]))
    }
}

fn curve_type_from_index(index: u32) -> Result<CurveType, JsValue> {
    CurveType::from_index(index)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown curve type {}", index)))
}

fn control_point_from_slices(
    curve_type: CurveType,
    time: f32,
    value: &[f32],
    in_slope: &[f32],
    out_slope: &[f32],
) -> error::Result<ControlPoint<Value>> {
    Ok(ControlPoint::new(
        time,
        Value::from_components(curve_type, value)?,
        Value::from_components(curve_type, in_slope)?,
        Value::from_components(curve_type, out_slope)?,
    ))
}
