use crate::constants::*;
use crate::input::px;
use crate::label;
use showcase_core::{CarouselConfig, DisplayList, EffectItem, Geometry, Rect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Milliseconds on the same origin as event and animation-frame timestamps.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn create_html(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))?;
    el.set_class_name(class);
    Ok(el)
}

fn set_styles(el: &web::HtmlElement, styles: &[(&str, &str)]) -> anyhow::Result<()> {
    let style = el.style();
    for (name, value) in styles {
        style.set_property(name, value).map_err(js_err)?;
    }
    Ok(())
}

/// Live DOM nodes of one mounted carousel.
pub struct Surface {
    pub viewport: web::HtmlElement,
    pub cards: Vec<web::HtmlElement>,
    pub label: web::Element,
    active: Option<usize>,
}

impl Surface {
    /// Replaces the content of `root` with the scroll container and one card
    /// per display item. Cards are laid out synchronously so they can be
    /// measured right after this returns.
    pub fn build(
        document: &web::Document,
        root: &web::Element,
        items: &DisplayList,
        config: &CarouselConfig,
    ) -> anyhow::Result<Self> {
        root.set_inner_html("");

        let viewport = create_html(document, "div", VIEWPORT_CLASS)?;
        // Positioned so card offsetLeft is measured against the scroll content.
        set_styles(
            &viewport,
            &[
                ("position", "relative"),
                ("overflow-x", "auto"),
                ("overflow-y", "hidden"),
                ("touch-action", "pan-y"),
                ("scrollbar-width", "none"),
                ("scroll-behavior", "auto"),
                ("user-select", "none"),
                ("cursor", "grab"),
            ],
        )?;

        let strip = create_html(document, "div", STRIP_CLASS)?;
        let gap = px(config.gap);
        let padding = format!("0 {}", px(STRIP_PADDING_PX));
        set_styles(
            &strip,
            &[
                ("display", "flex"),
                ("gap", &gap),
                ("padding", &padding),
                ("width", "max-content"),
            ],
        )?;

        let card_width = px(config.card_width);
        let card_height = px(CARD_HEIGHT_PX);
        let mut cards = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let card = create_html(document, "div", CARD_CLASS)?;
            card.set_attribute(CARD_ATTR, "").map_err(js_err)?;
            card.set_attribute(INDEX_ATTR, &i.to_string()).map_err(js_err)?;
            card.set_title(&item.description);
            set_styles(
                &card,
                &[
                    ("flex", &format!("0 0 {}", card_width)),
                    ("width", &card_width),
                    ("height", &card_height),
                ],
            )?;
            let name = create_html(document, "span", CARD_NAME_CLASS)?;
            name.set_text_content(Some(&item.name));
            card.append_child(&name).map_err(js_err)?;
            strip.append_child(&card).map_err(js_err)?;
            cards.push(card);
        }

        viewport.append_child(&strip).map_err(js_err)?;
        root.append_child(&viewport).map_err(js_err)?;

        let label = match document.get_element_by_id(DESCRIPTION_ID) {
            Some(el) => el,
            None => {
                let p = create_html(document, "p", LABEL_CLASS)?;
                root.append_child(&p).map_err(js_err)?;
                p.into()
            }
        };
        label::init(&label);

        log::info!("[dom] built strip with {} cards", cards.len());
        Ok(Self {
            viewport,
            cards,
            label,
            active: None,
        })
    }

    pub fn geometry(&self) -> DomGeometry<'_> {
        DomGeometry {
            viewport: &self.viewport,
            cards: &self.cards,
        }
    }

    pub fn scroll_left(&self) -> f64 {
        f64::from(self.viewport.scroll_left())
    }

    #[inline]
    pub fn write_offset(&self, offset: f64) {
        self.viewport.scroll_to_with_x_and_y(offset, 0.0);
    }

    pub fn capture_pointer(&self, pointer_id: i32) {
        if let Err(e) = self.viewport.set_pointer_capture(pointer_id) {
            log::warn!("[dom] setPointerCapture({}) failed: {:?}", pointer_id, e);
        }
        _ = self.viewport.class_list().add_1(DRAGGING_CLASS);
        _ = self.viewport.style().set_property("cursor", "grabbing");
    }

    pub fn release_pointer(&self, pointer_id: i32) {
        if self.viewport.has_pointer_capture(pointer_id) {
            _ = self.viewport.release_pointer_capture(pointer_id);
        }
        _ = self.viewport.class_list().remove_1(DRAGGING_CLASS);
        _ = self.viewport.style().set_property("cursor", "grab");
    }

    /// Moves the active class from the previous card to `index` and shows
    /// `effect` in the label.
    pub fn mark_active(&mut self, index: usize, effect: &EffectItem) {
        if let Some(prev) = self.active.take() {
            if let Some(card) = self.cards.get(prev) {
                _ = card.class_list().remove_1(ACTIVE_CLASS);
            }
        }
        if let Some(card) = self.cards.get(index) {
            _ = card.class_list().add_1(ACTIVE_CLASS);
            self.active = Some(index);
        }
        label::show(&self.label, effect);
    }
}

/// Card rectangles as laid out by the browser, in scroll-content coordinates.
pub struct DomGeometry<'a> {
    viewport: &'a web::HtmlElement,
    cards: &'a [web::HtmlElement],
}

impl Geometry for DomGeometry<'_> {
    fn item_rects(&self) -> Vec<Rect> {
        self.cards
            .iter()
            .map(|c| Rect::new(f64::from(c.offset_left()), f64::from(c.offset_width())))
            .collect()
    }

    fn viewport_width(&self) -> f64 {
        f64::from(self.viewport.client_width())
    }
}
