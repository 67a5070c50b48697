#![cfg(target_arch = "wasm32")]
use crate::constants::CAROUSEL_ROOT_ID;
use showcase_core::{default_catalog, Carousel, CarouselConfig, DisplayList};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod label;

thread_local! {
    // Keeps the carousel mounted at start alive for the lifetime of the page.
    static AUTO_MOUNTED: RefCell<Option<CarouselHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");

    let has_root = dom::window_document()
        .and_then(|d| d.get_element_by_id(CAROUSEL_ROOT_ID))
        .is_some();
    if !has_root {
        log::info!(
            "[carousel] no #{} on this page, waiting for mount_effects_carousel()",
            CAROUSEL_ROOT_ID
        );
        return Ok(());
    }
    match mount(CAROUSEL_ROOT_ID) {
        Ok(handle) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle)),
        Err(e) => log::error!("[carousel] mount error: {:?}", e),
    }
    Ok(())
}

/// Mounts a carousel inside the element with id `element_id`, replacing its
/// content.
#[wasm_bindgen]
pub fn mount_effects_carousel(element_id: &str) -> Result<CarouselHandle, JsValue> {
    mount(element_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn mount(element_id: &str) -> anyhow::Result<CarouselHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?;

    let config = CarouselConfig::default();
    config.validate()?;
    let catalog = default_catalog();
    let items = DisplayList::new(catalog.clone(), config.clone_count);
    let surface = dom::Surface::build(&document, &root, &items, &config)?;
    let carousel = Carousel::mount(catalog, config, &surface.geometry())?;

    let host = frame::Host::spawn(carousel, surface);
    events::wire_input_handlers(&host);
    Ok(CarouselHandle { host })
}

#[wasm_bindgen]
pub struct CarouselHandle {
    host: frame::SharedHost,
}

#[wasm_bindgen]
impl CarouselHandle {
    /// Animates display item `index` to the center. Ignored mid-drag or when
    /// out of range.
    pub fn scroll_to_index(&self, index: usize) {
        frame::scroll_to_index(&self.host, index);
    }

    pub fn active_index(&self) -> usize {
        self.host.borrow().carousel.active_index()
    }

    pub fn active_name(&self) -> String {
        self.host.borrow().carousel.active_effect().name.clone()
    }

    pub fn active_description(&self) -> String {
        self.host.borrow().carousel.active_effect().description.clone()
    }

    /// Stops all motion and detaches the carousel from its frame and timer
    /// callbacks. Later input is ignored.
    pub fn destroy(&self) {
        frame::teardown(&self.host);
    }
}
