//! Warning channel for non-fatal contract violations
//!
//! In the browser warnings land in the developer console, natively they go
//! through the `log` facade so the host application picks the sink.

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(message: &str) {
    log::warn!("{}", message);
}
