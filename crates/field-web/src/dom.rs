use field_core::HostError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Result<web::Document, HostError> {
    web::window()
        .ok_or(HostError::NoWindow)?
        .document()
        .ok_or(HostError::NoDocument)
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Result<web::HtmlCanvasElement, HostError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| HostError::MissingElement(id.to_string()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| HostError::NotACanvas(id.to_string()))
}

/// Match the backing store to CSS size * devicePixelRatio (WebGPU canvas).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Match the backing store to CSS size 1:1, so the node field simulates in
/// CSS pixels regardless of display density.
pub fn sync_canvas_css_size(canvas: &web::HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    canvas.set_width((rect.width() as u32).max(1));
    canvas.set_height((rect.height() as u32).max(1));
}
