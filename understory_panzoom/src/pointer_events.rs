// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from `ui_events` pointer events to [`GestureInput`].
//!
//! Positions are taken in logical pixels and must already be relative to the
//! viewport. Pointers are identified by their optional [`PointerId`], so
//! hosts that do not report ids still get single-pointer panning.

use ui_events::ScrollDelta;
use ui_events::pointer::{PointerEvent, PointerId, PointerScrollEvent, PointerUpdate};
use understory_panzoom_gesture::{GestureInput, WheelDelta};

use crate::observer::Observer;
use crate::panzoom::PanZoom;
use crate::surface::{ContentSurface, Surface};

/// Pointer identity used for `ui_events` input.
pub type UiPointer = Option<PointerId>;

/// Translates a pointer event into gesture input.
///
/// Enter and gesture events have no pan/zoom meaning and yield `None`.
pub fn gesture_input(event: &PointerEvent) -> Option<GestureInput<UiPointer>> {
    match event {
        PointerEvent::Down(e) => Some(GestureInput::Down {
            pointer: e.pointer.pointer_id,
            position: e.state.logical_point(),
        }),
        PointerEvent::Move(PointerUpdate {
            pointer, current, ..
        }) => Some(GestureInput::Move {
            pointer: pointer.pointer_id,
            position: current.logical_point(),
        }),
        PointerEvent::Up(e) => Some(GestureInput::Up {
            pointer: e.pointer.pointer_id,
        }),
        PointerEvent::Cancel(info) => Some(GestureInput::Cancel {
            pointer: info.pointer_id,
        }),
        PointerEvent::Leave(info) => Some(GestureInput::Leave {
            pointer: info.pointer_id,
        }),
        PointerEvent::Scroll(e) => Some(GestureInput::Wheel {
            position: e.state.logical_point(),
            delta: wheel_delta(e),
        }),
        _ => None,
    }
}

/// Vertical component of a scroll, keeping its delta mode.
///
/// Line and page deltas are scaled by the tracker: lines by a fixed line
/// height and pages by the viewport height.
pub fn wheel_delta(event: &PointerScrollEvent) -> WheelDelta {
    scroll_delta(&event.delta, event.state.scale_factor)
}

fn scroll_delta(delta: &ScrollDelta, scale_factor: f64) -> WheelDelta {
    match delta {
        ScrollDelta::PixelDelta(pos) => {
            let logical = pos.to_logical(scale_factor);
            WheelDelta::pixels(logical.y)
        }
        ScrollDelta::LineDelta(_, y) => WheelDelta::lines(f64::from(*y)),
        ScrollDelta::PageDelta(_, y) => WheelDelta::pages(f64::from(*y)),
    }
}

impl<V, C, O> PanZoom<V, C, O, UiPointer>
where
    V: Surface,
    C: ContentSurface,
    O: Observer,
{
    /// Feeds a `ui_events` pointer event through the gesture tracker.
    ///
    /// Returns `true` if a transform was committed.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        gesture_input(event).is_some_and(|input| self.handle_input(&input))
    }
}
