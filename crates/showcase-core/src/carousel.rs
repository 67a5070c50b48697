//! The infinite carousel state machine.
//!
//! A [`Carousel`] owns the scroll position of a strip that shows the effect
//! catalog `clone_count` times in a row. Hosts feed it [`Event`]s (pointer
//! input, scroll reports, animation frames, timers, item clicks) and apply the
//! [`Effect`]s it returns. The carousel never calls back into the host, so
//! every transition can be driven directly from a test.
//!
//! Phases: `Idle -> Dragging -> (Momentum | SnapPending) -> Idle`. Frame and
//! timer requests carry handles issued here; an event carrying a handle that
//! is no longer pending is ignored, which makes late callbacks harmless.

use crate::catalog::EffectItem;
use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::geometry::{nearest_index, Geometry, Rect};
use crate::layout::{DisplayList, ScrollState, WrapBounds};
use crate::physics::{momentum_step, DragSample, Tween};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Input delivered by the host. Times are milliseconds on one monotonic clock.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// `primary` is false for presses that must not start a drag
    /// (e.g. right or middle mouse buttons).
    PointerDown {
        x: f64,
        pointer_id: i32,
        time_ms: f64,
        primary: bool,
    },
    PointerMove {
        x: f64,
        time_ms: f64,
    },
    PointerUp {
        time_ms: f64,
    },
    PointerCancel {
        time_ms: f64,
    },
    /// Scroll position reported by the surface, either an echo of our own
    /// write or input the carousel did not produce (wheel, trackpad).
    Scroll {
        offset: f64,
        time_ms: f64,
    },
    Frame {
        handle: FrameHandle,
        time_ms: f64,
    },
    Timer {
        handle: TimerHandle,
        time_ms: f64,
    },
    /// Click on display item `index`.
    Click {
        index: usize,
        time_ms: f64,
    },
    Unmount,
}

/// Work the host must carry out, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Write the scroll position of the surface. Never animated.
    SetOffset(f64),
    CapturePointer(i32),
    ReleasePointer(i32),
    /// Deliver `Event::Frame` with this handle on the next display refresh.
    RequestFrame(FrameHandle),
    CancelFrame(FrameHandle),
    /// Deliver `Event::Timer` with this handle after `delay_ms`.
    StartTimer {
        handle: TimerHandle,
        delay_ms: f64,
    },
    CancelTimer(TimerHandle),
    ActiveChanged {
        index: usize,
        base_index: usize,
    },
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    Idle,
    Dragging,
    Momentum,
    SnapPending,
}

#[derive(Clone, Debug)]
struct DragSession {
    pointer_id: i32,
    start_x: f64,
    start_offset: f64,
    last: DragSample,
}

#[derive(Clone, Copy, Debug)]
enum Snap {
    /// Waiting for the strip to stay quiet before snapping.
    Settling(TimerHandle),
    Animating { tween: Tween, frame: FrameHandle },
}

#[derive(Clone, Debug)]
enum Phase {
    Idle,
    Dragging(DragSession),
    Momentum {
        velocity: f64,
        last_ms: f64,
        frame: FrameHandle,
    },
    SnapPending(Snap),
}

pub struct Carousel {
    config: CarouselConfig,
    items: DisplayList,
    rects: Vec<Rect>,
    scroll: ScrollState,
    bounds: WrapBounds,
    active: usize,
    phase: Phase,
    moved: bool,
    next_handle: u64,
    disposed: bool,
}

impl Carousel {
    /// Builds the display list, measures the surface and centers the viewport
    /// on the first card of the middle repetition.
    pub fn mount(
        catalog: Vec<EffectItem>,
        config: CarouselConfig,
        geometry: &dyn Geometry,
    ) -> Result<Self, CarouselError> {
        if catalog.is_empty() {
            return Err(CarouselError::EmptyCatalog);
        }
        config.validate()?;
        let items = DisplayList::new(catalog, config.clone_count);
        let bounds = WrapBounds::new(items.base_len() as f64 * config.pitch(), config.clone_count);
        let mut carousel = Self {
            config,
            items,
            rects: Vec::new(),
            scroll: ScrollState::default(),
            bounds,
            active: 0,
            phase: Phase::Idle,
            moved: false,
            next_handle: 0,
            disposed: false,
        };
        carousel.measure(geometry)?;
        let start = carousel.centering_offset(carousel.items.middle_start());
        carousel.scroll.set_offset(start);
        carousel.active = carousel.compute_active();
        log::info!(
            "[carousel] mounted items={} clones={} segment={:.0}px offset={:.1} active={}",
            carousel.items.base_len(),
            carousel.items.clone_count(),
            carousel.bounds.segment_width(),
            carousel.scroll.offset(),
            carousel.active
        );
        Ok(carousel)
    }

    /// Effects that bring a freshly mounted surface in line with the carousel.
    pub fn initial_effects(&self) -> Effects {
        let mut fx = Effects::new();
        fx.push(Effect::SetOffset(self.scroll.offset()));
        fx.push(Effect::ActiveChanged {
            index: self.active,
            base_index: self.items.base_index(self.active),
        });
        fx
    }

    /// Re-reads the geometry after the surface changed size. The active item
    /// stays centered unless a drag is in progress.
    pub fn relayout(&mut self, geometry: &dyn Geometry) -> Result<Effects, CarouselError> {
        let mut fx = Effects::new();
        if self.disposed {
            return Ok(fx);
        }
        let before = self.scroll.offset();
        self.measure(geometry)?;
        if !matches!(self.phase, Phase::Dragging(_)) {
            self.cancel_animation(&mut fx);
            self.phase = Phase::Idle;
            self.scroll.set_offset(self.centering_offset(self.active));
        }
        self.reposition();
        if self.scroll.offset() != before {
            fx.push(Effect::SetOffset(self.scroll.offset()));
        }
        self.refresh_active(&mut fx);
        log::debug!(
            "[carousel] relayout viewport={:.0} offset={:.1}",
            self.scroll.viewport_width(),
            self.scroll.offset()
        );
        Ok(fx)
    }

    pub fn dispatch(&mut self, event: Event) -> Effects {
        let mut fx = Effects::new();
        if self.disposed {
            log::trace!("[carousel] ignoring {:?} after unmount", event);
            return fx;
        }
        match event {
            Event::PointerDown {
                x,
                pointer_id,
                time_ms,
                primary,
            } => self.on_pointer_down(x, pointer_id, time_ms, primary, &mut fx),
            Event::PointerMove { x, time_ms } => self.on_pointer_move(x, time_ms, &mut fx),
            Event::PointerUp { time_ms } | Event::PointerCancel { time_ms } => {
                self.on_release(time_ms, &mut fx)
            }
            Event::Scroll { offset, .. } => self.on_scroll(offset, &mut fx),
            Event::Frame { handle, time_ms } => self.on_frame(handle, time_ms, &mut fx),
            Event::Timer { handle, time_ms } => self.on_timer(handle, time_ms, &mut fx),
            Event::Click { index, time_ms } => {
                if self.moved {
                    log::debug!("[click] item {} ignored, pointer session was a drag", index);
                } else {
                    self.go_to(index, time_ms, &mut fx);
                }
            }
            Event::Unmount => self.unmount(&mut fx),
        }
        fx
    }

    /// Smoothly centers display item `index`. Ignored while dragging and for
    /// indices outside the display list.
    pub fn scroll_to_index(&mut self, index: usize, now_ms: f64) -> Effects {
        let mut fx = Effects::new();
        if !self.disposed {
            self.go_to(index, now_ms, &mut fx);
        }
        fx
    }

    // ---------------- Queries ----------------

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.items
    }

    pub fn offset(&self) -> f64 {
        self.scroll.offset()
    }

    pub fn max_offset(&self) -> f64 {
        self.scroll.max_offset()
    }

    pub fn viewport_width(&self) -> f64 {
        self.scroll.viewport_width()
    }

    pub fn segment_width(&self) -> f64 {
        self.bounds.segment_width()
    }

    pub fn wrap_bounds(&self) -> WrapBounds {
        self.bounds
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_base_index(&self) -> usize {
        self.items.base_index(self.active)
    }

    pub fn active_effect(&self) -> &EffectItem {
        &self.items.base()[self.items.base_index(self.active)]
    }

    /// Center of display item `index` in strip coordinates.
    pub fn item_center(&self, index: usize) -> Option<f64> {
        self.rects.get(index).map(Rect::center)
    }

    pub fn phase(&self) -> PhaseKind {
        match self.phase {
            Phase::Idle => PhaseKind::Idle,
            Phase::Dragging(_) => PhaseKind::Dragging,
            Phase::Momentum { .. } => PhaseKind::Momentum,
            Phase::SnapPending(_) => PhaseKind::SnapPending,
        }
    }

    /// Whether the latest pointer session moved far enough to count as a drag.
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Current fling velocity, zero outside momentum.
    pub fn momentum_velocity(&self) -> f64 {
        match self.phase {
            Phase::Momentum { velocity, .. } => velocity,
            _ => 0.0,
        }
    }

    pub fn is_snap_animating(&self) -> bool {
        matches!(self.phase, Phase::SnapPending(Snap::Animating { .. }))
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // ---------------- Transitions ----------------

    fn on_pointer_down(
        &mut self,
        x: f64,
        pointer_id: i32,
        time_ms: f64,
        primary: bool,
        fx: &mut Effects,
    ) {
        if !primary {
            log::trace!("[drag] ignoring non-primary press");
            return;
        }
        if matches!(self.phase, Phase::Dragging(_)) {
            log::trace!("[drag] ignoring pointer {} while dragging", pointer_id);
            return;
        }
        self.cancel_animation(fx);
        self.moved = false;
        self.phase = Phase::Dragging(DragSession {
            pointer_id,
            start_x: x,
            start_offset: self.scroll.offset(),
            last: DragSample::new(x, time_ms),
        });
        fx.push(Effect::CapturePointer(pointer_id));
        log::debug!("[drag] start x={:.1} offset={:.1}", x, self.scroll.offset());
    }

    fn on_pointer_move(&mut self, x: f64, time_ms: f64, fx: &mut Effects) {
        let (target, delta_x) = match &mut self.phase {
            Phase::Dragging(session) => {
                session.last = session
                    .last
                    .advance(x, time_ms, self.config.min_sample_dt_ms);
                let delta_x = x - session.start_x;
                (
                    session.start_offset - delta_x * self.config.drag_multiplier,
                    delta_x,
                )
            }
            _ => return,
        };
        if delta_x.abs() > self.config.moved_threshold_px {
            self.moved = true;
        }
        let shift = self.move_to(target, fx);
        if shift != 0.0 {
            if let Phase::Dragging(session) = &mut self.phase {
                session.start_offset += shift;
            }
        }
    }

    fn on_release(&mut self, time_ms: f64, fx: &mut Effects) {
        let (pointer_id, velocity) = match &self.phase {
            Phase::Dragging(session) => (session.pointer_id, session.last.velocity),
            _ => return,
        };
        fx.push(Effect::ReleasePointer(pointer_id));
        if velocity.abs() < self.config.min_velocity {
            log::debug!("[drag] release v={:.4}px/ms, settling", velocity);
            self.settle(fx);
            return;
        }
        let frame = self.issue_frame();
        self.phase = Phase::Momentum {
            velocity,
            last_ms: time_ms,
            frame,
        };
        fx.push(Effect::RequestFrame(frame));
        log::debug!("[momentum] start v={:.4}px/ms", velocity);
    }

    fn on_scroll(&mut self, offset: f64, fx: &mut Effects) {
        if (offset - self.scroll.offset()).abs() <= self.config.scroll_echo_tolerance_px {
            return;
        }
        self.scroll.set_offset(offset);
        if self.reposition() != 0.0 {
            fx.push(Effect::SetOffset(self.scroll.offset()));
        }
        self.refresh_active(fx);
        match self.phase {
            // The gesture owns the offset until it ends.
            Phase::Dragging(_) | Phase::Momentum { .. } => {}
            Phase::Idle | Phase::SnapPending(_) => {
                self.cancel_animation(fx);
                self.settle(fx);
            }
        }
    }

    fn on_frame(&mut self, handle: FrameHandle, now_ms: f64, fx: &mut Effects) {
        match self.phase {
            Phase::Momentum {
                velocity,
                last_ms,
                frame,
            } if frame == handle => self.step_momentum(velocity, last_ms, now_ms, fx),
            Phase::SnapPending(Snap::Animating { tween, frame }) if frame == handle => {
                self.step_tween(tween, now_ms, fx)
            }
            _ => log::trace!("[carousel] stale frame {:?}", handle),
        }
    }

    fn on_timer(&mut self, handle: TimerHandle, now_ms: f64, fx: &mut Effects) {
        match self.phase {
            Phase::SnapPending(Snap::Settling(timer)) if timer == handle => {
                match nearest_index(&self.rects, self.scroll.viewport_center()) {
                    Some(index) => self.animate_to(index, now_ms, fx),
                    None => self.phase = Phase::Idle,
                }
            }
            _ => log::trace!("[carousel] stale timer {:?}", handle),
        }
    }

    fn step_momentum(&mut self, velocity: f64, last_ms: f64, now_ms: f64, fx: &mut Effects) {
        let dt = (now_ms - last_ms).clamp(0.0, self.config.max_frame_dt_ms);
        let step = momentum_step(velocity, dt, &self.config);
        self.move_to(self.scroll.offset() + step.offset_delta, fx);
        log::trace!(
            "[momentum] dt={:.1} v={:.4} offset={:.1}",
            dt,
            step.velocity,
            self.scroll.offset()
        );
        if step.velocity.abs() < self.config.min_velocity {
            log::debug!("[momentum] done at offset={:.1}", self.scroll.offset());
            self.settle(fx);
            return;
        }
        let frame = self.issue_frame();
        self.phase = Phase::Momentum {
            velocity: step.velocity,
            last_ms: now_ms,
            frame,
        };
        fx.push(Effect::RequestFrame(frame));
    }

    fn step_tween(&mut self, tween: Tween, now_ms: f64, fx: &mut Effects) {
        let shift = self.move_to(tween.sample(now_ms), fx);
        if tween.is_done(now_ms) {
            self.phase = Phase::Idle;
            log::debug!(
                "[snap] done offset={:.1} active={}",
                self.scroll.offset(),
                self.active
            );
            return;
        }
        let frame = self.issue_frame();
        self.phase = Phase::SnapPending(Snap::Animating {
            tween: tween.shifted(shift),
            frame,
        });
        fx.push(Effect::RequestFrame(frame));
    }

    fn go_to(&mut self, index: usize, now_ms: f64, fx: &mut Effects) {
        if index >= self.rects.len() {
            log::debug!("[carousel] scroll_to_index({}) out of range", index);
            return;
        }
        if matches!(self.phase, Phase::Dragging(_)) {
            log::debug!("[carousel] scroll_to_index({}) ignored while dragging", index);
            return;
        }
        self.cancel_animation(fx);
        self.animate_to(index, now_ms, fx);
    }

    /// Starts the tween that centers `index`. Assumes no frame or timer is
    /// pending.
    fn animate_to(&mut self, index: usize, now_ms: f64, fx: &mut Effects) {
        let from = self.scroll.offset();
        let to = self.centering_offset(index);
        if (to - from).abs() < self.config.snap_epsilon_px {
            self.move_to(to, fx);
            self.phase = Phase::Idle;
            return;
        }
        let frame = self.issue_frame();
        self.phase = Phase::SnapPending(Snap::Animating {
            tween: Tween::new(from, to, now_ms, self.config.snap_duration_ms),
            frame,
        });
        fx.push(Effect::RequestFrame(frame));
        log::debug!("[snap] to item {} ({:.1} -> {:.1})", index, from, to);
    }

    /// Arms the quiet-period timer that leads to a snap.
    fn settle(&mut self, fx: &mut Effects) {
        let timer = self.issue_timer();
        self.phase = Phase::SnapPending(Snap::Settling(timer));
        fx.push(Effect::StartTimer {
            handle: timer,
            delay_ms: self.config.snap_delay_ms,
        });
    }

    /// Cancels whatever frame or timer the current phase is waiting on. The
    /// caller decides the next phase.
    fn cancel_animation(&mut self, fx: &mut Effects) {
        match self.phase {
            Phase::Momentum { frame, .. } => fx.push(Effect::CancelFrame(frame)),
            Phase::SnapPending(Snap::Settling(timer)) => fx.push(Effect::CancelTimer(timer)),
            Phase::SnapPending(Snap::Animating { frame, .. }) => {
                fx.push(Effect::CancelFrame(frame))
            }
            Phase::Idle | Phase::Dragging(_) => {}
        }
    }

    fn unmount(&mut self, fx: &mut Effects) {
        self.cancel_animation(fx);
        if let Phase::Dragging(session) = &self.phase {
            fx.push(Effect::ReleasePointer(session.pointer_id));
        }
        self.phase = Phase::Idle;
        self.disposed = true;
        log::info!("[carousel] unmounted");
    }

    // ---------------- Offset bookkeeping ----------------

    /// Wraps `target`, writes it, and reports the change. Returns the wrap
    /// shift so callers can move their anchors by the same amount.
    ///
    /// The correction is taken on the unclamped target: clamping first would
    /// drop an overshoot past either end and show the wrong content.
    fn move_to(&mut self, target: f64, fx: &mut Effects) -> f64 {
        let before = self.scroll.offset();
        let correction = self.bounds.correction(target);
        self.scroll.set_offset(target + correction);
        let shift = correction + self.reposition();
        if self.scroll.offset() != before {
            fx.push(Effect::SetOffset(self.scroll.offset()));
        }
        self.refresh_active(fx);
        shift
    }

    /// Silent wraparound: keeps the offset within the interior segments.
    fn reposition(&mut self) -> f64 {
        let before = self.scroll.offset();
        let correction = self.bounds.correction(before);
        if correction == 0.0 {
            return 0.0;
        }
        let after = self.scroll.set_offset(before + correction);
        log::trace!("[carousel] wrap {:.1} -> {:.1}", before, after);
        after - before
    }

    fn refresh_active(&mut self, fx: &mut Effects) {
        let active = self.compute_active();
        if active != self.active {
            self.active = active;
            fx.push(Effect::ActiveChanged {
                index: active,
                base_index: self.items.base_index(active),
            });
        }
    }

    fn compute_active(&self) -> usize {
        nearest_index(&self.rects, self.scroll.viewport_center()).unwrap_or(0)
    }

    fn centering_offset(&self, index: usize) -> f64 {
        self.rects
            .get(index)
            .map(|r| r.center() - self.scroll.viewport_width() / 2.0)
            .unwrap_or_else(|| self.scroll.offset())
    }

    fn measure(&mut self, geometry: &dyn Geometry) -> Result<(), CarouselError> {
        let viewport = geometry.viewport_width();
        if !(viewport > 0.0 && viewport.is_finite()) {
            return Err(CarouselError::InvalidViewport(viewport));
        }
        let rects = geometry.item_rects();
        if rects.len() != self.items.len() {
            return Err(CarouselError::GeometryMismatch {
                expected: self.items.len(),
                measured: rects.len(),
            });
        }
        let content = self.items.len() as f64 * self.config.pitch();
        self.rects = rects;
        self.scroll.resize(viewport, content);
        Ok(())
    }

    fn issue_frame(&mut self) -> FrameHandle {
        self.next_handle += 1;
        FrameHandle(self.next_handle)
    }

    fn issue_timer(&mut self) -> TimerHandle {
        self.next_handle += 1;
        TimerHandle(self.next_handle)
    }
}
