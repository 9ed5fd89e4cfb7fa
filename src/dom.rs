use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_PIXEL_RATIO;

/// Keep the canvas backing store at CSS size * devicePixelRatio (capped).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else { return };
    let dpr = window.device_pixel_ratio().clamp(1.0, MAX_PIXEL_RATIO);
    let rect = canvas.get_bounding_client_rect();
    let w = (rect.width() * dpr).round() as u32;
    let h = (rect.height() * dpr).round() as u32;
    if w > 0 && h > 0 && (canvas.width() != w || canvas.height() != h) {
        canvas.set_width(w);
        canvas.set_height(h);
    }
}

pub fn add_click_listener(document: &web::Document, id: &str, f: impl FnMut() + 'static) {
    let Some(el) = document.get_element_by_id(id) else {
        log::warn!("missing element #{}", id);
        return;
    };
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_listener(target: &web::EventTarget, event: &str, f: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Coarse-pointer detection; drives drag scaling and camera framing.
pub fn is_touch_device() -> bool {
    web::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false)
}
