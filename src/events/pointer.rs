use crate::constants::{CARD_SELECTOR, INDEX_ATTR};
use crate::dom;
use crate::frame::{self, Host, SharedHost};
use crate::input;
use showcase_core::Event;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wires pointer, click and scroll listeners on the scroll container and a
/// resize listener on the window. Listeners hold a weak reference, so they go
/// quiet once the host is dropped.
pub fn wire_input_handlers(host: &SharedHost) {
    let viewport = host.borrow().surface.viewport.clone();
    let weak = Rc::downgrade(host);

    wire_pointerdown(&viewport, weak.clone());
    wire_pointer(&viewport, "pointermove", weak.clone(), |ev| Event::PointerMove {
        x: f64::from(ev.client_x()),
        time_ms: ev.time_stamp(),
    });
    wire_pointer(&viewport, "pointerup", weak.clone(), |ev| Event::PointerUp {
        time_ms: ev.time_stamp(),
    });
    wire_pointer(&viewport, "pointercancel", weak.clone(), |ev| {
        Event::PointerCancel {
            time_ms: ev.time_stamp(),
        }
    });
    wire_click(&viewport, weak.clone());
    wire_scroll(&viewport, weak.clone());
    wire_resize(weak);
}

fn wire_pointerdown(viewport: &web::HtmlElement, host: Weak<RefCell<Host>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(host) = host.upgrade() else { return };
        let primary = input::is_drag_button(&ev.pointer_type(), ev.button());
        if primary {
            // Keep the browser from starting a text selection or image drag.
            ev.prevent_default();
        }
        frame::dispatch(
            &host,
            Event::PointerDown {
                x: f64::from(ev.client_x()),
                pointer_id: ev.pointer_id(),
                time_ms: ev.time_stamp(),
                primary,
            },
        );
    }) as Box<dyn FnMut(_)>);
    _ = viewport.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointer(
    viewport: &web::HtmlElement,
    kind: &str,
    host: Weak<RefCell<Host>>,
    to_event: fn(&web::PointerEvent) -> Event,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(host) = host.upgrade() {
            frame::dispatch(&host, to_event(&ev));
        }
    }) as Box<dyn FnMut(_)>);
    _ = viewport.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

// Delegated: one listener resolves the clicked card from `data-index`.
fn wire_click(viewport: &web::HtmlElement, host: Weak<RefCell<Host>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(host) = host.upgrade() else { return };
        let card = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(CARD_SELECTOR).ok().flatten());
        let Some(card) = card else { return };
        let item_count = match host.try_borrow() {
            Ok(h) => h.surface.cards.len(),
            Err(_) => return,
        };
        let attr = card.get_attribute(INDEX_ATTR);
        match input::parse_card_index(attr.as_deref(), item_count) {
            Some(index) => frame::dispatch(
                &host,
                Event::Click {
                    index,
                    time_ms: ev.time_stamp(),
                },
            ),
            None => log::warn!("[dom] card without a usable {}: {:?}", INDEX_ATTR, attr),
        }
    }) as Box<dyn FnMut(_)>);
    _ = viewport.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_scroll(viewport: &web::HtmlElement, host: Weak<RefCell<Host>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(host) = host.upgrade() else { return };
        // Our own scrollTo writes land here too; the core drops those echoes.
        let offset = match host.try_borrow() {
            Ok(h) => h.surface.scroll_left(),
            Err(_) => return,
        };
        frame::dispatch(
            &host,
            Event::Scroll {
                offset,
                time_ms: dom::now_ms(),
            },
        );
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = viewport.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

fn wire_resize(host: Weak<RefCell<Host>>) {
    let closure = Closure::wrap(Box::new(move || {
        let Some(host) = host.upgrade() else { return };
        match host.try_borrow_mut() {
            Ok(mut h) => h.relayout(),
            Err(_) => log::warn!("[dom] host busy, resize dropped"),
        };
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
