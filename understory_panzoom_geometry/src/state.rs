// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Current zoom factor and pixel offset of the content surface.
///
/// `x` and `y` are the translation of the content relative to the viewport's
/// layout origin. Scaling happens about the content's own center, so the
/// content center sits at `(x + width / 2, y + height / 2)` in viewport
/// coordinates regardless of zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomState {
    /// Uniform zoom factor.
    pub zoom: f64,
    /// Horizontal offset in pixels.
    pub x: f64,
    /// Vertical offset in pixels.
    pub y: f64,
}

impl Default for PanZoomState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

impl PanZoomState {
    /// Creates a state from a zoom factor and pixel offsets.
    #[must_use]
    pub fn new(zoom: f64, x: f64, y: f64) -> Self {
        Self { zoom, x, y }
    }

    /// Returns the pixel offset as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Translates the content by `delta` pixels.
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Returns `true` when all components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.zoom.is_finite() && self.x.is_finite() && self.y.is_finite()
    }
}

/// Measured sizes of the viewport and of the unscaled content.
///
/// Metrics are measured on demand by the host; they are never cached by the
/// geometry engine because layout can change between calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    /// Size of the visible viewport.
    pub viewport: Size,
    /// Natural (zoom `1.0`) size of the content.
    pub content: Size,
}

impl SurfaceMetrics {
    /// Creates metrics from the viewport and natural content sizes.
    #[must_use]
    pub fn new(viewport: Size, content: Size) -> Self {
        Self { viewport, content }
    }

    /// Returns `true` if any dimension is zero, negative or not finite.
    ///
    /// Geometry derived from degenerate metrics would divide by zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        !(usable(self.viewport.width)
            && usable(self.viewport.height)
            && usable(self.content.width)
            && usable(self.content.height))
    }

    /// Center of the viewport in viewport coordinates.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width * 0.5, self.viewport.height * 0.5)
    }
}

/// Pan position expressed in percent of the scaled content.
///
/// `(50, 50)` means the content center sits at the viewport center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanPercent {
    /// Horizontal position, `0..=100` across the content width.
    pub x: f64,
    /// Vertical position, `0..=100` across the content height.
    pub y: f64,
}

impl PanPercent {
    /// Centered pan.
    pub const CENTER: Self = Self { x: 50.0, y: 50.0 };

    /// Creates a pan position from percentages.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{PanZoomState, SurfaceMetrics};

    #[test]
    fn degenerate_metrics_are_detected() {
        let ok = SurfaceMetrics::new(Size::new(800.0, 600.0), Size::new(400.0, 300.0));
        assert!(!ok.is_degenerate());

        let zero_viewport = SurfaceMetrics::new(Size::new(0.0, 600.0), Size::new(400.0, 300.0));
        assert!(zero_viewport.is_degenerate());

        let negative_content =
            SurfaceMetrics::new(Size::new(800.0, 600.0), Size::new(400.0, -1.0));
        assert!(negative_content.is_degenerate());

        let nan_content = SurfaceMetrics::new(Size::new(800.0, 600.0), Size::new(f64::NAN, 1.0));
        assert!(nan_content.is_degenerate());
    }

    #[test]
    fn translate_accumulates() {
        let mut state = PanZoomState::default();
        state.translate(Vec2::new(5.0, -3.0));
        state.translate(Vec2::new(1.0, 1.0));
        assert_eq!(state.offset(), Vec2::new(6.0, -2.0));
        assert_eq!(state.zoom, 1.0);
    }
}
