use crate::constants::{CANVAS_STYLE, CONTAINER_ID};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn find_container(document: &web::Document) -> Option<web::Element> {
    document.get_element_by_id(CONTAINER_ID)
}

/// Create the render canvas and append it to the container.
pub fn attach_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("create canvas: {:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_attribute("style", CANVAS_STYLE).ok();
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("append canvas: {:?}", e)))?;
    Ok(canvas)
}

/// Window inner size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (width as f32, height as f32)
}

/// Set the canvas backing store to CSS size * devicePixelRatio and return it.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    css_width: f32,
    css_height: f32,
) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let w_px = ((css_width as f64 * dpr) as u32).max(1);
    let h_px = ((css_height as f64 * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}
