use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::NavError;
use crate::nav::frame::FrameSource;

/// `requestAnimationFrame` as a `FrameSource`.
pub struct RafFrames {
    window: Window,
}

impl RafFrames {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameSource for RafFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Result<(), NavError> {
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        self.window.request_animation_frame(closure.unchecked_ref())?;
        Ok(())
    }
}
