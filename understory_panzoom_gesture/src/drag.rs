// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: movement deltas for one pointer from press to release.
//!
//! A session is started explicitly on pointer-down and dropped on the
//! terminating event. It keeps tracking its pointer even after the pointer
//! leaves the viewport, so hosts should keep delivering that pointer's moves
//! (for example via pointer capture) while [`DragSession`] is alive.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_panzoom_gesture::drag::DragSession;
//!
//! let mut drag = DragSession::start(7_u32, Point::new(10.0, 20.0));
//! assert_eq!(drag.pointer(), 7);
//!
//! // Move to (15, 25) - delta is (5, 5)
//! let delta = drag.update(Point::new(15.0, 25.0));
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(delta.y, 5.0);
//! assert_eq!(drag.last_pos(), Point::new(15.0, 25.0));
//! ```

use kurbo::{Point, Vec2};

/// An active drag of a single pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession<K> {
    pointer: K,
    last_pos: Point,
}

impl<K: Copy> DragSession<K> {
    /// Starts a drag of `pointer` at `pos`.
    pub fn start(pointer: K, pos: Point) -> Self {
        Self {
            pointer,
            last_pos: pos,
        }
    }

    /// The pointer driving this drag.
    pub fn pointer(&self) -> K {
        self.pointer
    }

    /// Last recorded position.
    pub fn last_pos(&self) -> Point {
        self.last_pos
    }

    /// Records a new position, returning the movement since the last one.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        delta
    }
}
