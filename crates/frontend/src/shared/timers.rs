//! Suspension points of the host event loop.

use std::future::Future;
use wasm_bindgen::JsValue;

/// Deferred execution: after a fixed delay, or at the next paint.
pub trait Timers {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;

    /// Resolves right before the browser paints the next frame, after pending
    /// DOM updates have been applied.
    fn next_frame(&self) -> impl Future<Output = ()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        gloo_timers::future::TimeoutFuture::new(ms)
    }

    fn next_frame(&self) -> impl Future<Output = ()> {
        animation_frame()
    }
}

async fn animation_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|window| window.request_animation_frame(&resolve).is_ok())
            .unwrap_or(false);
        if !scheduled {
            // No window (or rAF refused): continue on the next microtask.
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
