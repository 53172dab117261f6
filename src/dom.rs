use crate::constants::MIN_BACKING_PX;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Canvas CSS size, the size `uResolution` and the camera aspect use.
#[inline]
pub fn css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    (canvas.offset_width() as f32, canvas.offset_height() as f32)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let dpr = w.device_pixel_ratio();
        let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), dpr, MIN_BACKING_PX);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

pub fn create_element<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("<{}> has an unexpected type", tag))
}

#[inline]
pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

#[inline]
pub fn set_hidden(el: &web::Element, class: &str, hidden: bool) {
    _ = el.class_list().toggle_with_force(class, hidden);
}
