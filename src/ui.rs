//! Menu wiring: the start button plus one button per character. Hovering a
//! character button previews the figure; clicking commits the selection.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::app::App;
use crate::constants::{CHARACTER_BUTTON_SELECTOR, CHARACTER_DATA_ATTR, START_BUTTON_ID};
use crate::{dom, overlay};

pub fn wire_start_button(app: Rc<RefCell<App>>, document: &web::Document) {
    let document_for_click = document.clone();
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        app.borrow_mut().start();
        overlay::hide(&document_for_click);
    });
}

pub fn wire_character_buttons(app: Rc<RefCell<App>>, document: &web::Document) {
    let Ok(buttons) = document.query_selector_all(CHARACTER_BUTTON_SELECTOR) else {
        return;
    };
    if buttons.length() == 0 {
        log::warn!("no character buttons matching {:?}", CHARACTER_BUTTON_SELECTOR);
    }
    for i in 0..buttons.length() {
        let Some(node) = buttons.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        let Some(name) = el.get_attribute(CHARACTER_DATA_ATTR) else {
            log::warn!("character button without {}", CHARACTER_DATA_ATTR);
            continue;
        };

        let app_click = app.clone();
        let name_click = name.clone();
        dom::add_listener(el.as_ref(), "click", move || {
            app_click.borrow_mut().select(&name_click);
        });

        let app_enter = app.clone();
        let name_enter = name.clone();
        dom::add_listener(el.as_ref(), "mouseenter", move || {
            app_enter.borrow_mut().preview(&name_enter);
        });

        let app_leave = app.clone();
        dom::add_listener(el.as_ref(), "mouseleave", move || {
            app_leave.borrow_mut().end_preview();
        });
    }
}
