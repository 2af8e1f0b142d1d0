use super::{ChartError, SurfaceProvider};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Resolves `<canvas>` elements of the current document to 2D contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasSurfaces;

impl SurfaceProvider for CanvasSurfaces {
    type Surface = CanvasRenderingContext2d;

    fn surface(&self, id: &str) -> Result<CanvasRenderingContext2d, ChartError> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .ok_or_else(|| ChartError::MissingElement(id.to_string()))?;

        element
            .dyn_into::<HtmlCanvasElement>()
            .ok()
            .and_then(|canvas| canvas.get_context("2d").ok().flatten())
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| ChartError::MissingContext(id.to_string()))
    }
}
