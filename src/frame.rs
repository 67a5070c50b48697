use crate::dom::{self, Surface};
use crate::input;
use showcase_core::{Carousel, Effect, Event, FrameHandle, TimerHandle};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedHost = Rc<RefCell<Host>>;

/// Browser side of one mounted carousel: forwards DOM input to the core and
/// carries out the effects it returns.
pub struct Host {
    pub carousel: Carousel,
    pub surface: Surface,
    frame: Option<(FrameHandle, i32)>,
    timer: Option<(TimerHandle, i32)>,
    on_frame: Option<Closure<dyn FnMut(f64)>>,
    on_timer: Option<Closure<dyn FnMut()>>,
}

impl Host {
    /// Wraps the host, installs the persistent frame and timer callbacks and
    /// applies the mount effects (initial offset, active card).
    pub fn spawn(carousel: Carousel, surface: Surface) -> SharedHost {
        let host = Rc::new(RefCell::new(Host {
            carousel,
            surface,
            frame: None,
            timer: None,
            on_frame: None,
            on_timer: None,
        }));
        let on_frame = frame_callback(Rc::downgrade(&host));
        let on_timer = timer_callback(Rc::downgrade(&host));
        {
            let mut h = host.borrow_mut();
            h.on_frame = Some(on_frame);
            h.on_timer = Some(on_timer);
            let fx = h.carousel.initial_effects();
            h.apply(&fx);
        }
        host
    }

    pub fn apply(&mut self, effects: &[Effect]) {
        let Some(window) = web::window() else {
            return;
        };
        for effect in effects {
            match *effect {
                Effect::SetOffset(x) => self.surface.write_offset(x),
                Effect::CapturePointer(id) => self.surface.capture_pointer(id),
                Effect::ReleasePointer(id) => self.surface.release_pointer(id),
                Effect::RequestFrame(handle) => {
                    let Some(cb) = &self.on_frame else { continue };
                    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(id) => self.frame = Some((handle, id)),
                        Err(e) => log::error!("[dom] requestAnimationFrame failed: {:?}", e),
                    }
                }
                Effect::CancelFrame(handle) => {
                    if let Some((pending, id)) = self.frame {
                        if pending == handle {
                            _ = window.cancel_animation_frame(id);
                            self.frame = None;
                        }
                    }
                }
                Effect::StartTimer { handle, delay_ms } => {
                    let Some(cb) = &self.on_timer else { continue };
                    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        input::timeout_ms(delay_ms),
                    ) {
                        Ok(id) => self.timer = Some((handle, id)),
                        Err(e) => log::error!("[dom] setTimeout failed: {:?}", e),
                    }
                }
                Effect::CancelTimer(handle) => {
                    if let Some((pending, id)) = self.timer {
                        if pending == handle {
                            window.clear_timeout_with_handle(id);
                            self.timer = None;
                        }
                    }
                }
                Effect::ActiveChanged { index, base_index } => {
                    if let Some(effect) = self.carousel.display_list().base().get(base_index) {
                        self.surface.mark_active(index, effect);
                    }
                }
            }
        }
    }

    /// Re-measures the strip after a viewport resize.
    pub fn relayout(&mut self) {
        let measured = self.carousel.relayout(&self.surface.geometry());
        match measured {
            Ok(fx) => self.apply(&fx),
            Err(e) => log::warn!("[dom] relayout skipped: {}", e),
        }
    }

    fn cancel_pending(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some((_, id)) = self.frame.take() {
            _ = window.cancel_animation_frame(id);
        }
        if let Some((_, id)) = self.timer.take() {
            window.clear_timeout_with_handle(id);
        }
    }
}

impl Drop for Host {
    // The browser must not call back into closures freed with the host.
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Feeds one event through the core. Events that arrive while the host is
/// already borrowed (a DOM callback fired from inside an effect) are dropped.
pub fn dispatch(host: &SharedHost, event: Event) {
    let Ok(mut h) = host.try_borrow_mut() else {
        log::warn!("[dom] host busy, dropped {:?}", event);
        return;
    };
    let fx = h.carousel.dispatch(event);
    h.apply(&fx);
}

pub fn scroll_to_index(host: &SharedHost, index: usize) {
    let Ok(mut h) = host.try_borrow_mut() else {
        log::warn!("[dom] host busy, dropped scroll_to_index({})", index);
        return;
    };
    let fx = h.carousel.scroll_to_index(index, dom::now_ms());
    h.apply(&fx);
}

/// Unmounts the carousel and releases the frame and timer callbacks.
pub fn teardown(host: &SharedHost) {
    dispatch(host, Event::Unmount);
    if let Ok(mut h) = host.try_borrow_mut() {
        h.cancel_pending();
        h.on_frame = None;
        h.on_timer = None;
    }
}

fn frame_callback(host: Weak<RefCell<Host>>) -> Closure<dyn FnMut(f64)> {
    Closure::wrap(Box::new(move |time_ms: f64| {
        let Some(host) = host.upgrade() else { return };
        let handle = host
            .try_borrow_mut()
            .ok()
            .and_then(|mut h| h.frame.take())
            .map(|(handle, _)| handle);
        if let Some(handle) = handle {
            dispatch(&host, Event::Frame { handle, time_ms });
        }
    }) as Box<dyn FnMut(f64)>)
}

fn timer_callback(host: Weak<RefCell<Host>>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let Some(host) = host.upgrade() else { return };
        let handle = host
            .try_borrow_mut()
            .ok()
            .and_then(|mut h| h.timer.take())
            .map(|(handle, _)| handle);
        if let Some(handle) = handle {
            dispatch(
                &host,
                Event::Timer {
                    handle,
                    time_ms: dom::now_ms(),
                },
            );
        }
    }) as Box<dyn FnMut()>)
}
