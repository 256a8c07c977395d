// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machine: single-pointer pan, two-pointer pinch and wheel zoom.
//!
//! ```text
//!            down (1 pointer)             down (2nd pointer)
//!   Idle ───────────────────▶ Panning ─────────────────────▶ Pinching
//!    ▲                           │                               │
//!    └──────── up / cancel ──────┘◀─── fewer than 2 pointers ────┘ (to Idle)
//! ```
//!
//! Only one interpretation is active at a time, so panning is blocked simply
//! by being in [`GesturePhase::Pinching`]. When a pinch ends with one finger
//! still down, that finger does not resume panning; a fresh press is needed.
//! Wheel events are stateless and do not touch the pointer cache.

use kurbo::Point;
use understory_panzoom_geometry::{Geometry, PanZoomState, ZoomLevel};

use crate::drag::DragSession;
use crate::input::{GestureInput, WheelDelta, wheel_zoom_factor};
use crate::pointers::PointerCache;

/// Observable phase of a [`GestureTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A single pointer is dragging the content.
    Panning,
    /// Two pointers are pinching.
    Pinching,
}

/// Snapshot taken when a pinch starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchBaseline {
    /// Zoom and offset at the start of the pinch.
    pub state: PanZoomState,
    /// Distance between the two pointers.
    pub distance: f64,
    /// Midpoint between the two pointers.
    pub midpoint: Point,
}

/// What a handled input changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Change {
    /// The zoom factor was recomputed.
    pub zoom: bool,
    /// The offset was recomputed.
    pub pan: bool,
}

impl Change {
    /// Nothing changed.
    pub const NONE: Self = Self {
        zoom: false,
        pan: false,
    };
    /// Only the offset changed.
    pub const PAN: Self = Self {
        zoom: false,
        pan: true,
    };
    /// Only the zoom changed.
    pub const ZOOM: Self = Self {
        zoom: true,
        pan: false,
    };
    /// Zoom and offset changed together.
    pub const ZOOM_AND_PAN: Self = Self {
        zoom: true,
        pan: true,
    };

    /// Returns `true` if nothing changed.
    pub fn is_none(self) -> bool {
        !self.zoom && !self.pan
    }
}

#[derive(Clone, Copy, Debug)]
enum Phase<K> {
    Idle,
    Panning(DragSession<K>),
    Pinching(PinchBaseline),
}

/// Interprets pointer and wheel input as pan and zoom updates.
///
/// `K` is the pointer identity type supplied by the host.
#[derive(Clone, Debug)]
pub struct GestureTracker<K> {
    pointers: PointerCache<K>,
    phase: Phase<K>,
}

impl<K> Default for GestureTracker<K> {
    fn default() -> Self {
        Self {
            pointers: PointerCache::default(),
            phase: Phase::Idle,
        }
    }
}

impl<K: Copy + PartialEq> GestureTracker<K> {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        match self.phase {
            Phase::Idle => GesturePhase::Idle,
            Phase::Panning(_) => GesturePhase::Panning,
            Phase::Pinching(_) => GesturePhase::Pinching,
        }
    }

    /// Returns `true` while single-pointer panning is suppressed by a pinch.
    pub fn is_pan_blocked(&self) -> bool {
        matches!(self.phase, Phase::Pinching(_))
    }

    /// The active drag, if panning.
    pub fn drag(&self) -> Option<&DragSession<K>> {
        match &self.phase {
            Phase::Panning(drag) => Some(drag),
            _ => None,
        }
    }

    /// The pinch baseline, if pinching.
    pub fn pinch_baseline(&self) -> Option<&PinchBaseline> {
        match &self.phase {
            Phase::Pinching(baseline) => Some(baseline),
            _ => None,
        }
    }

    /// Currently tracked pointers.
    pub fn pointers(&self) -> &PointerCache<K> {
        &self.pointers
    }

    /// Drops all pointers and returns to idle.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.set_idle();
    }

    /// Handles one input event, updating `state` in place.
    ///
    /// Pointer bookkeeping always happens; `state` is only modified when
    /// `geometry` is available. The returned [`Change`] tells the caller what
    /// to commit and notify.
    pub fn handle(
        &mut self,
        input: &GestureInput<K>,
        geometry: Option<&Geometry<'_>>,
        state: &mut PanZoomState,
    ) -> Change {
        match *input {
            GestureInput::Down { pointer, position } => self.pointer_down(pointer, position, state),
            GestureInput::Move { pointer, position } => {
                self.pointer_move(pointer, position, geometry, state)
            }
            GestureInput::Up { pointer } | GestureInput::Cancel { pointer } => {
                self.pointer_up(pointer);
                Change::NONE
            }
            GestureInput::Leave { pointer } => {
                self.pointer_leave(pointer);
                Change::NONE
            }
            GestureInput::Wheel { position, delta } => match geometry {
                Some(geometry) => wheel(geometry, position, delta, state),
                None => Change::NONE,
            },
        }
    }

    fn pointer_down(&mut self, pointer: K, position: Point, state: &PanZoomState) -> Change {
        if !self.pointers.insert(pointer, position) {
            return Change::NONE;
        }
        match self.pointers.pair() {
            Some((a, b)) => {
                if !matches!(self.phase, Phase::Pinching(_)) {
                    log::trace!("gesture: pinch started");
                }
                self.phase = Phase::Pinching(PinchBaseline {
                    state: *state,
                    distance: a.distance(b),
                    midpoint: a.midpoint(b),
                });
            }
            None => {
                log::trace!("gesture: pan started");
                self.phase = Phase::Panning(DragSession::start(pointer, position));
            }
        }
        Change::NONE
    }

    fn pointer_move(
        &mut self,
        pointer: K,
        position: Point,
        geometry: Option<&Geometry<'_>>,
        state: &mut PanZoomState,
    ) -> Change {
        let tracked = self.pointers.update(pointer, position);
        match &mut self.phase {
            Phase::Panning(drag) if drag.pointer() == pointer => {
                let delta = drag.update(position);
                if geometry.is_none() {
                    return Change::NONE;
                }
                state.translate(delta);
                Change::PAN
            }
            Phase::Pinching(baseline) if tracked => {
                let (Some(geometry), Some((a, b))) = (geometry, self.pointers.pair()) else {
                    return Change::NONE;
                };
                pinch(geometry, baseline, a, b, state)
            }
            _ => Change::NONE,
        }
    }

    fn pointer_up(&mut self, pointer: K) {
        self.pointers.remove(pointer);
        match self.phase {
            Phase::Panning(drag) if drag.pointer() == pointer => self.set_idle(),
            Phase::Pinching(_) if self.pointers.len() < 2 => self.set_idle(),
            _ => {}
        }
    }

    fn pointer_leave(&mut self, pointer: K) {
        // A drag outlives its pointer leaving the viewport; only the cache
        // entry goes away.
        self.pointers.remove(pointer);
        if matches!(self.phase, Phase::Pinching(_)) && self.pointers.len() < 2 {
            self.set_idle();
        }
    }

    fn set_idle(&mut self) {
        if !matches!(self.phase, Phase::Idle) {
            log::trace!("gesture: idle");
        }
        self.phase = Phase::Idle;
    }
}

fn pinch(
    geometry: &Geometry<'_>,
    baseline: &PinchBaseline,
    a: Point,
    b: Point,
    state: &mut PanZoomState,
) -> Change {
    let config = geometry.config();
    let content_width = geometry.metrics().content.width;
    let midpoint = a.midpoint(b);
    let distance_delta = a.distance(b) - baseline.distance;
    let pinch_percent = 1.0 + distance_delta / content_width * config.zoom_speed_pinch;
    let next_zoom = geometry.sanitize_zoom(ZoomLevel::Value(baseline.state.zoom * pinch_percent));

    *state = baseline.state;
    state.translate(midpoint - baseline.midpoint);
    geometry.zoom_about(next_zoom, Some(midpoint), state);
    Change::ZOOM_AND_PAN
}

fn wheel(
    geometry: &Geometry<'_>,
    position: Point,
    delta: WheelDelta,
    state: &mut PanZoomState,
) -> Change {
    let delta_y = delta.to_pixels(geometry.metrics().viewport.height);
    let factor = wheel_zoom_factor(delta_y, geometry.config().zoom_speed_wheel);
    if factor == 1.0 {
        return Change::NONE;
    }
    let next_zoom = geometry.sanitize_zoom(ZoomLevel::Value(state.zoom * factor));
    geometry.zoom_about(next_zoom, Some(position), state);
    Change::ZOOM_AND_PAN
}
