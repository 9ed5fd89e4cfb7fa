//! Pointer wiring: down on the canvas, move/up on the window so drags keep
//! tracking outside the canvas bounds.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::app::App;
use crate::input;

pub fn wire_pointer_handlers(app: Rc<RefCell<App>>, canvas: &web::HtmlCanvasElement) {
    wire_pointerdown(app.clone(), canvas);
    wire_pointermove(app.clone(), canvas);
    wire_pointerup(app);
}

fn wire_pointerdown(app: Rc<RefCell<App>>, canvas: &web::HtmlCanvasElement) {
    let canvas_for_closure = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_for_closure);
        let grabbed = app.borrow_mut().pointer_down(
            canvas_for_closure.width() as f32,
            canvas_for_closure.height() as f32,
            pos.x,
            pos.y,
        );
        if grabbed {
            _ = canvas_for_closure.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(app: Rc<RefCell<App>>, canvas: &web::HtmlCanvasElement) {
    let canvas_for_closure = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_for_closure);
        app.borrow_mut().pointer_move(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(app: Rc<RefCell<App>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        app.borrow_mut().pointer_up();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
