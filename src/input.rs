use glam::Vec2;
use web_sys as web;

/// Pointer position in canvas backing-store pixels (CSS position scaled by
/// the backing size).
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / (rect.width() as f32).max(1.0)) * canvas.width() as f32;
    let sy = (y_css / (rect.height() as f32).max(1.0)) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
