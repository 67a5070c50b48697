//! Measurements of the rendered strip.
//!
//! The carousel never talks to a rendering surface directly. It asks a
//! [`Geometry`] for the horizontal extent of every rendered item and for the
//! viewport width; the web front-end measures the DOM, tests and the
//! simulator use [`UniformLayout`].

/// Horizontal extent of one rendered item, in strip coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub width: f64,
}

impl Rect {
    #[inline]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

pub trait Geometry {
    /// One rect per display item, in display order.
    fn item_rects(&self) -> Vec<Rect>;
    fn viewport_width(&self) -> f64;
}

/// Evenly spaced fixed-width items, optionally shifted by a leading `origin`
/// (e.g. container padding).
#[derive(Clone, Debug, PartialEq)]
pub struct UniformLayout {
    pub item_count: usize,
    pub card_width: f64,
    pub gap: f64,
    pub viewport_width: f64,
    pub origin: f64,
}

impl UniformLayout {
    pub fn new(item_count: usize, card_width: f64, gap: f64, viewport_width: f64) -> Self {
        Self {
            item_count,
            card_width,
            gap,
            viewport_width,
            origin: 0.0,
        }
    }

    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = origin;
        self
    }
}

impl Geometry for UniformLayout {
    fn item_rects(&self) -> Vec<Rect> {
        let pitch = self.card_width + self.gap;
        (0..self.item_count)
            .map(|i| Rect::new(self.origin + i as f64 * pitch, self.card_width))
            .collect()
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}

/// Index of the rect whose center is nearest to `point`. Equal distances keep
/// the lower index.
#[inline]
pub fn nearest_index(rects: &[Rect], point: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, rect) in rects.iter().enumerate() {
        let distance = (point - rect.center()).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}
