//! Scoped window `resize` subscription.
//!
//! [`ResizeListener`] registers its callback on construction and removes it
//! when dropped, so a host that owns the guard for the lifetime of its view
//! can never leak a listener into a torn-down view.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

const RESIZE_EVENT: &str = "resize";

/// Owns a registered `resize` listener on the window.
pub struct ResizeListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    /// Register `on_resize` on the window.
    ///
    /// # Errors
    ///
    /// Returns the `JsValue` raised when there is no window or the listener
    /// cannot be added.
    pub fn attach(on_resize: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback(RESIZE_EVENT, callback.as_ref().unchecked_ref())?;
        log::debug!("field: resize listener attached");
        Ok(Self { window, callback })
    }

    /// The window's current inner width in CSS pixels, if known.
    #[must_use]
    pub fn inner_width(&self) -> Option<f64> {
        match self.window.inner_width() {
            Ok(v) => v.as_f64(),
            Err(_) => None,
        }
    }

    /// Current device pixel ratio, at least 1.
    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio().max(1.0)
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(RESIZE_EVENT, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("field: failed to remove resize listener: {err:?}");
        } else {
            log::debug!("field: resize listener removed");
        }
    }
}
