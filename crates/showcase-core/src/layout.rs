use crate::catalog::EffectItem;

/// The base list repeated `clone_count` times, addressed virtually:
/// display index `i` always resolves to base item `i % base_len`.
#[derive(Clone, Debug)]
pub struct DisplayList {
    base: Vec<EffectItem>,
    clone_count: usize,
}

impl DisplayList {
    pub fn new(base: Vec<EffectItem>, clone_count: usize) -> Self {
        Self { base, clone_count }
    }

    pub fn base(&self) -> &[EffectItem] {
        &self.base
    }

    #[inline]
    pub fn base_len(&self) -> usize {
        self.base.len()
    }

    #[inline]
    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.base.len() * self.clone_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&EffectItem> {
        if index >= self.len() {
            return None;
        }
        self.base.get(index % self.base.len())
    }

    /// Position of a display index within its repetition.
    #[inline]
    pub fn base_index(&self, index: usize) -> usize {
        index.checked_rem(self.base.len()).unwrap_or(0)
    }

    /// Display index of the first item of the middle repetition.
    #[inline]
    pub fn middle_start(&self) -> usize {
        self.base.len() * (self.clone_count / 2)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectItem> + '_ {
        (0..self.clone_count).flat_map(move |_| self.base.iter())
    }
}

/// Horizontal scroll position of the surface. The offset is kept inside
/// `[0, max_offset]` on every write.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    offset: f64,
    viewport_width: f64,
    max_offset: f64,
}

impl ScrollState {
    pub fn new(viewport_width: f64, content_width: f64) -> Self {
        Self {
            offset: 0.0,
            viewport_width,
            max_offset: (content_width - viewport_width).max(0.0),
        }
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    #[inline]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    #[inline]
    pub fn viewport_center(&self) -> f64 {
        self.offset + self.viewport_width / 2.0
    }

    /// Writes a clamped offset and returns the value actually stored.
    pub fn set_offset(&mut self, offset: f64) -> f64 {
        self.offset = if offset.is_nan() {
            self.offset
        } else {
            offset.clamp(0.0, self.max_offset)
        };
        self.offset
    }

    pub fn resize(&mut self, viewport_width: f64, content_width: f64) {
        self.viewport_width = viewport_width;
        self.max_offset = (content_width - viewport_width).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }
}

/// The interior range the offset is kept in, and the jump that brings it back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapBounds {
    segment_width: f64,
    clone_count: usize,
}

impl WrapBounds {
    pub fn new(segment_width: f64, clone_count: usize) -> Self {
        Self {
            segment_width,
            clone_count,
        }
    }

    #[inline]
    pub fn segment_width(&self) -> f64 {
        self.segment_width
    }

    #[inline]
    pub fn lower(&self) -> f64 {
        self.segment_width
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.segment_width * (self.clone_count.saturating_sub(1)) as f64
    }

    /// Whole segments between the first and the middle repetition.
    #[inline]
    pub fn jump(&self) -> f64 {
        self.segment_width * (self.clone_count / 2) as f64
    }

    /// Signed shift that moves `offset` back into `[lower, upper]`; zero when
    /// it is already inside. The shifted offset shows the same content.
    pub fn correction(&self, offset: f64) -> f64 {
        if offset < self.lower() {
            self.jump()
        } else if offset > self.upper() {
            -self.jump()
        } else {
            0.0
        }
    }

    #[inline]
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.lower() && offset <= self.upper()
    }
}
