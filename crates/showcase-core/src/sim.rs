//! Headless host with a synthetic clock.
//!
//! `SimHost` applies carousel effects the way a browser would: offset writes
//! land on a surface value, frame requests fire one frame interval later,
//! timers fire at their deadline, and (optionally) every write is echoed back
//! as a rounded scroll report. It backs the simulator binary and the tests.

use crate::carousel::{Carousel, Effect, Effects, Event, FrameHandle, PhaseKind, TimerHandle};
use crate::catalog::default_catalog;
use crate::config::CarouselConfig;
use crate::constants::SIM_FRAME_INTERVAL_MS;
use crate::error::CarouselError;
use crate::geometry::UniformLayout;

pub const SIM_POINTER_ID: i32 = 1;

pub struct SimHost {
    carousel: Carousel,
    now_ms: f64,
    surface_offset: f64,
    frame: Option<(FrameHandle, f64)>,
    timer: Option<(TimerHandle, f64)>,
    captured: Option<i32>,
    frame_interval_ms: f64,
    frames_run: usize,
    echo_scrolls: bool,
}

impl SimHost {
    pub fn new(carousel: Carousel) -> Self {
        let mut host = Self {
            carousel,
            now_ms: 0.0,
            surface_offset: 0.0,
            frame: None,
            timer: None,
            captured: None,
            frame_interval_ms: SIM_FRAME_INTERVAL_MS,
            frames_run: 0,
            echo_scrolls: false,
        };
        let fx = host.carousel.initial_effects();
        host.apply(&fx);
        host
    }

    /// Default catalog and tuning on a uniform strip of the given viewport width.
    pub fn reference(viewport_width: f64) -> Result<Self, CarouselError> {
        let config = CarouselConfig::default();
        let catalog = default_catalog();
        let layout = UniformLayout::new(
            catalog.len() * config.clone_count,
            config.card_width,
            config.gap,
            viewport_width,
        );
        Ok(Self::new(Carousel::mount(catalog, config, &layout)?))
    }

    /// Echo every offset write back as a whole-pixel scroll report, like the DOM.
    pub fn with_scroll_echo(mut self, enabled: bool) -> Self {
        self.echo_scrolls = enabled;
        self
    }

    pub fn with_frame_interval(mut self, interval_ms: f64) -> Self {
        self.frame_interval_ms = interval_ms.max(1.0);
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn surface_offset(&self) -> f64 {
        self.surface_offset
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_some()
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn captured_pointer(&self) -> Option<i32> {
        self.captured
    }

    pub fn frames_run(&self) -> usize {
        self.frames_run
    }

    pub fn dispatch(&mut self, event: Event) -> Effects {
        let fx = self.carousel.dispatch(event);
        self.apply(&fx);
        fx
    }

    pub fn pointer_down(&mut self, x: f64) -> Effects {
        self.dispatch(Event::PointerDown {
            x,
            pointer_id: SIM_POINTER_ID,
            time_ms: self.now_ms,
            primary: true,
        })
    }

    /// Lets `after_ms` pass, then moves the pointer to `x`.
    pub fn pointer_move(&mut self, x: f64, after_ms: f64) -> Effects {
        self.advance(after_ms);
        self.dispatch(Event::PointerMove {
            x,
            time_ms: self.now_ms,
        })
    }

    pub fn pointer_up(&mut self) -> Effects {
        self.dispatch(Event::PointerUp {
            time_ms: self.now_ms,
        })
    }

    pub fn click(&mut self, index: usize) -> Effects {
        self.dispatch(Event::Click {
            index,
            time_ms: self.now_ms,
        })
    }

    /// Scroll input that bypasses the pointer handlers.
    pub fn wheel(&mut self, delta: f64) -> Effects {
        let max = self.carousel.max_offset();
        self.surface_offset = (self.surface_offset + delta).clamp(0.0, max);
        self.dispatch(Event::Scroll {
            offset: self.surface_offset,
            time_ms: self.now_ms,
        })
    }

    pub fn unmount(&mut self) -> Effects {
        self.dispatch(Event::Unmount)
    }

    /// Runs the clock forward, firing due frames and timers in deadline order.
    pub fn advance(&mut self, ms: f64) {
        let end = self.now_ms + ms.max(0.0);
        loop {
            let frame_due = self.frame.map(|(_, due)| due).filter(|due| *due <= end);
            let timer_due = self.timer.map(|(_, due)| due).filter(|due| *due <= end);
            match (frame_due, timer_due) {
                (Some(f), Some(t)) if t < f => self.fire_timer(),
                (Some(_), _) => self.fire_frame(),
                (None, Some(_)) => self.fire_timer(),
                (None, None) => break,
            }
        }
        self.now_ms = end;
    }

    /// Advances until nothing is pending and the carousel is idle. Returns
    /// false if that did not happen within `max_ms`.
    pub fn run_until_idle(&mut self, max_ms: f64) -> bool {
        let deadline = self.now_ms + max_ms;
        while self.now_ms < deadline {
            if self.is_settled() {
                return true;
            }
            self.advance(self.frame_interval_ms);
        }
        self.is_settled()
    }

    pub fn is_settled(&self) -> bool {
        self.frame.is_none()
            && self.timer.is_none()
            && self.carousel.phase() == PhaseKind::Idle
    }

    fn fire_frame(&mut self) {
        if let Some((handle, due)) = self.frame.take() {
            self.now_ms = due;
            self.frames_run += 1;
            self.dispatch(Event::Frame {
                handle,
                time_ms: due,
            });
        }
    }

    fn fire_timer(&mut self) {
        if let Some((handle, due)) = self.timer.take() {
            self.now_ms = due;
            self.dispatch(Event::Timer {
                handle,
                time_ms: due,
            });
        }
    }

    fn apply(&mut self, fx: &Effects) {
        let mut wrote = false;
        for effect in fx {
            match *effect {
                Effect::SetOffset(offset) => {
                    self.surface_offset = offset;
                    wrote = true;
                }
                Effect::CapturePointer(id) => self.captured = Some(id),
                Effect::ReleasePointer(id) => {
                    if self.captured == Some(id) {
                        self.captured = None;
                    }
                }
                Effect::RequestFrame(handle) => {
                    self.frame = Some((handle, self.now_ms + self.frame_interval_ms))
                }
                Effect::CancelFrame(handle) => {
                    if self.frame.map(|(h, _)| h) == Some(handle) {
                        self.frame = None;
                    }
                }
                Effect::StartTimer { handle, delay_ms } => {
                    self.timer = Some((handle, self.now_ms + delay_ms))
                }
                Effect::CancelTimer(handle) => {
                    if self.timer.map(|(h, _)| h) == Some(handle) {
                        self.timer = None;
                    }
                }
                Effect::ActiveChanged { .. } => {}
            }
        }
        if wrote && self.echo_scrolls && !self.carousel.is_disposed() {
            let echo = self.carousel.dispatch(Event::Scroll {
                offset: self.surface_offset.round(),
                time_ms: self.now_ms,
            });
            if !echo.is_empty() {
                self.apply(&echo);
            }
        }
    }
}
