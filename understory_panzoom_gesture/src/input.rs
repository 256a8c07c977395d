// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Pixels per line for line-based wheel deltas.
pub const LINE_DELTA_PIXELS: f64 = 16.0;

/// Largest zoom change a single wheel event may cause, as a fraction.
pub const MAX_WHEEL_STEP: f64 = 0.25;

/// Unit of a wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeltaMode {
    /// Delta is in pixels.
    #[default]
    Pixel,
    /// Delta is in lines.
    Line,
    /// Delta is in pages (one viewport height).
    Page,
}

/// Vertical wheel movement.
///
/// Negative values scroll up, which zooms in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelDelta {
    /// Vertical delta in `mode` units.
    pub y: f64,
    /// Unit of `y`.
    pub mode: DeltaMode,
}

impl WheelDelta {
    /// A delta in pixels.
    pub fn pixels(y: f64) -> Self {
        Self {
            y,
            mode: DeltaMode::Pixel,
        }
    }

    /// A delta in lines.
    pub fn lines(y: f64) -> Self {
        Self {
            y,
            mode: DeltaMode::Line,
        }
    }

    /// A delta in pages.
    pub fn pages(y: f64) -> Self {
        Self {
            y,
            mode: DeltaMode::Page,
        }
    }

    /// Converts the delta to pixels, using `page_height` for page deltas.
    pub fn to_pixels(self, page_height: f64) -> f64 {
        match self.mode {
            DeltaMode::Pixel => self.y,
            DeltaMode::Line => self.y * LINE_DELTA_PIXELS,
            DeltaMode::Page => self.y * page_height,
        }
    }
}

/// Multiplicative zoom factor for a wheel delta in pixels.
///
/// The change is proportional to `speed * delta_y / 128` and capped at
/// [`MAX_WHEEL_STEP`] in either direction. A zero delta yields `1.0`.
pub fn wheel_zoom_factor(delta_y: f64, speed: f64) -> f64 {
    let sign = if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        return 1.0;
    };
    let step = (speed * delta_y / 128.0).abs().min(MAX_WHEEL_STEP);
    1.0 - sign * step
}

/// One input event, with positions in viewport coordinates.
///
/// Touches are delivered as pointers, one identity per finger. `K` is the
/// host's pointer identity type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureInput<K> {
    /// A pointer was pressed or a touch started.
    Down {
        /// Pointer identity.
        pointer: K,
        /// Position of the press.
        position: Point,
    },
    /// A pointer moved.
    Move {
        /// Pointer identity.
        pointer: K,
        /// New position.
        position: Point,
    },
    /// A pointer was released or a touch ended.
    Up {
        /// Pointer identity.
        pointer: K,
    },
    /// The platform cancelled a pointer.
    Cancel {
        /// Pointer identity.
        pointer: K,
    },
    /// A pointer left the viewport.
    Leave {
        /// Pointer identity.
        pointer: K,
    },
    /// The wheel was turned over the viewport.
    Wheel {
        /// Cursor position, used as the zoom anchor.
        position: Point,
        /// Wheel movement.
        delta: WheelDelta,
    },
}

#[cfg(test)]
mod tests {
    use super::{DeltaMode, WheelDelta, wheel_zoom_factor};

    #[test]
    fn wheel_up_zooms_in_capped() {
        assert_eq!(wheel_zoom_factor(-120.0, 1.0), 1.25);
        assert_eq!(wheel_zoom_factor(120.0, 1.0), 0.75);
    }

    #[test]
    fn small_wheel_steps_are_proportional() {
        assert_eq!(wheel_zoom_factor(-16.0, 1.0), 1.125);
        assert_eq!(wheel_zoom_factor(16.0, 0.5), 0.9375);
        assert_eq!(wheel_zoom_factor(0.0, 1.0), 1.0);
    }

    #[test]
    fn delta_modes_convert_to_pixels() {
        assert_eq!(WheelDelta::pixels(3.0).to_pixels(600.0), 3.0);
        assert_eq!(WheelDelta::lines(-3.0).to_pixels(600.0), -48.0);
        assert_eq!(WheelDelta::pages(1.0).to_pixels(600.0), 600.0);
        assert_eq!(WheelDelta::pages(1.0).mode, DeltaMode::Page);
    }
}
