// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::config::{Config, Fit, ZoomLevel};
use crate::state::{PanPercent, PanZoomState, SurfaceMetrics};

/// Pan/zoom geometry for one measurement of the viewport and content.
///
/// A `Geometry` pairs the resolved [`Config`] with a fresh [`SurfaceMetrics`]
/// measurement. It only exists for non-degenerate metrics, so every ratio it
/// computes is finite; callers treat a failed [`Geometry::new`] as "skip this
/// update".
///
/// The content is positioned by translating it by `(x, y)` and scaling it by
/// `zoom` about its own center, which gives the following per-axis limits
/// when bounds are enabled:
///
/// - `upper = content / 2 * (zoom - 1)`
/// - `lower = viewport - content - upper`
#[derive(Clone, Copy, Debug)]
pub struct Geometry<'a> {
    config: &'a Config,
    metrics: SurfaceMetrics,
}

impl<'a> Geometry<'a> {
    /// Creates geometry for the given measurement.
    ///
    /// Returns `None` if any surface dimension is zero, negative or not
    /// finite.
    #[must_use]
    pub fn new(config: &'a Config, metrics: SurfaceMetrics) -> Option<Self> {
        if metrics.is_degenerate() {
            return None;
        }
        Some(Self { config, metrics })
    }

    /// Returns the configuration this geometry was created with.
    #[must_use]
    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Returns the measurement this geometry was created with.
    #[must_use]
    pub fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    /// Zoom factor that fits the content to the viewport, ignoring limits.
    #[must_use]
    pub fn fit_zoom(&self, fit: Fit) -> f64 {
        let SurfaceMetrics { viewport, content } = self.metrics;
        let sx = viewport.width / content.width;
        let sy = viewport.height / content.height;
        match fit {
            Fit::Contain => sx.min(sy),
            Fit::Cover => sx.max(sy),
        }
    }

    /// Resolves a requested zoom level into a zoom factor within the limits.
    ///
    /// Symbolic levels are computed from the unscaled content size, which
    /// does not depend on the current offset; callers re-center the content
    /// (see [`Geometry::centered_offset`]) when applying them.
    #[must_use]
    pub fn sanitize_zoom(&self, level: ZoomLevel) -> f64 {
        match level {
            ZoomLevel::Value(zoom) => self.config.clamp_zoom(zoom),
            ZoomLevel::Fit(fit) => self.config.clamp_zoom(self.fit_zoom(fit)),
        }
    }

    /// Minimum zoom required by the configured bounds mode.
    ///
    /// The result is never below the configured minimum and never above the
    /// configured maximum.
    #[must_use]
    pub fn min_zoom_for_bounds(&self) -> f64 {
        let min_zoom = self.config.min_zoom;
        match self.config.bounds.fit() {
            Some(fit) => min_zoom.max(self.fit_zoom(fit)).min(self.config.max_zoom),
            None => min_zoom,
        }
    }

    /// Offset that centers the content in the viewport.
    ///
    /// Scaling is about the content center, so this does not depend on zoom.
    #[must_use]
    pub fn centered_offset(&self) -> Vec2 {
        let SurfaceMetrics { viewport, content } = self.metrics;
        Vec2::new(
            (viewport.width - content.width) * 0.5,
            (viewport.height - content.height) * 0.5,
        )
    }

    /// Allowed offset range on each axis at the given zoom, as `(min, max)`.
    #[must_use]
    pub fn offset_limits(&self, zoom: f64) -> (Vec2, Vec2) {
        let SurfaceMetrics { viewport, content } = self.metrics;
        let (x0, x1) = axis_limits(content.width, viewport.width, zoom);
        let (y0, y1) = axis_limits(content.height, viewport.height, zoom);
        (Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// Clamps the offsets of `state` to the bounds, if bounds are enabled.
    ///
    /// When the scaled content is smaller than the viewport on an axis, any
    /// offset that keeps it inside the viewport is accepted. When it is
    /// larger, the offset is limited so that no empty space is revealed.
    pub fn clamp_offsets(&self, state: &mut PanZoomState) {
        if !self.config.bounds.is_enabled() {
            return;
        }
        let (min, max) = self.offset_limits(state.zoom);
        state.x = state.x.clamp(min.x, max.x);
        state.y = state.y.clamp(min.y, max.y);
    }

    /// Vector from `anchor` to the current content center.
    ///
    /// `anchor` is in viewport coordinates; `None` uses the viewport center.
    #[must_use]
    pub fn offset_to_center(&self, anchor: Option<Point>, state: &PanZoomState) -> Vec2 {
        let anchor = anchor.unwrap_or_else(|| self.metrics.viewport_center());
        self.content_center(state) - anchor
    }

    /// Moves `state` so that the anchor `offset` away from the content center
    /// stays put when zooming to `new_zoom`.
    ///
    /// The anchor is limited to half the scaled content size on each axis.
    /// This only adjusts the position; the caller stores `new_zoom`.
    pub fn adjust_position_for_zoom(&self, new_zoom: f64, offset: Vec2, state: &mut PanZoomState) {
        let zoom = state.zoom.max(f64::MIN_POSITIVE);
        let growth = (new_zoom - zoom) / zoom;
        let limit_x = self.metrics.content.width * 0.5 * zoom;
        let limit_y = self.metrics.content.height * 0.5 * zoom;
        state.x += offset.x.clamp(-limit_x, limit_x) * growth;
        state.y += offset.y.clamp(-limit_y, limit_y) * growth;
    }

    /// Zooms to `new_zoom` keeping `anchor` stationary.
    ///
    /// `new_zoom` is expected to be sanitized already.
    pub fn zoom_about(&self, new_zoom: f64, anchor: Option<Point>, state: &mut PanZoomState) {
        let offset = self.offset_to_center(anchor, state);
        self.adjust_position_for_zoom(new_zoom, offset, state);
        state.zoom = new_zoom;
    }

    /// Converts a pan percentage into pixel offsets at the given zoom.
    #[must_use]
    pub fn pan_to_percent(&self, pan: PanPercent, zoom: f64) -> Vec2 {
        let SurfaceMetrics { viewport, content } = self.metrics;
        Vec2::new(
            percent_to_offset(pan.x, content.width, viewport.width, zoom),
            percent_to_offset(pan.y, content.height, viewport.height, zoom),
        )
    }

    /// Reads the current pan of `state` as a percentage.
    #[must_use]
    pub fn pan_percent(&self, state: &PanZoomState) -> PanPercent {
        let SurfaceMetrics { viewport, content } = self.metrics;
        PanPercent::new(
            offset_to_percent(state.x, content.width, viewport.width, state.zoom),
            offset_to_percent(state.y, content.height, viewport.height, state.zoom),
        )
    }

    /// Center of the content in viewport coordinates.
    #[must_use]
    pub fn content_center(&self, state: &PanZoomState) -> Point {
        let content = self.metrics.content;
        Point::new(
            state.x + content.width * 0.5,
            state.y + content.height * 0.5,
        )
    }

    /// Rectangle covered by the scaled content, in viewport coordinates.
    #[must_use]
    pub fn content_rect(&self, state: &PanZoomState) -> Rect {
        let content = self.metrics.content;
        Rect::from_center_size(self.content_center(state), content * state.zoom)
    }
}

fn axis_limits(content: f64, viewport: f64, zoom: f64) -> (f64, f64) {
    let upper = content * 0.5 * (zoom - 1.0);
    let lower = -upper + viewport - content;
    (upper.min(lower), upper.max(lower))
}

fn percent_to_offset(percent: f64, content: f64, viewport: f64, zoom: f64) -> f64 {
    -(content * zoom * percent / 100.0) + (zoom - 1.0) * content * 0.5 + viewport * 0.5
}

fn offset_to_percent(offset: f64, content: f64, viewport: f64, zoom: f64) -> f64 {
    let scaled = (content * zoom).max(f64::MIN_POSITIVE);
    ((zoom - 1.0) * content * 0.5 + viewport * 0.5 - offset) / scaled * 100.0
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::Geometry;
    use crate::config::{BoundsMode, Config, Fit, ZoomLevel};
    use crate::state::{PanPercent, PanZoomState, SurfaceMetrics};

    fn metrics(vw: f64, vh: f64, cw: f64, ch: f64) -> SurfaceMetrics {
        SurfaceMetrics::new(Size::new(vw, vh), Size::new(cw, ch))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn degenerate_metrics_have_no_geometry() {
        let config = Config::default();
        assert!(Geometry::new(&config, metrics(0.0, 600.0, 100.0, 100.0)).is_none());
        assert!(Geometry::new(&config, metrics(800.0, 600.0, 100.0, 0.0)).is_none());
        assert!(Geometry::new(&config, metrics(800.0, 600.0, 100.0, 100.0)).is_some());
    }

    #[test]
    fn fit_zoom_contain_and_cover() {
        let config = Config::default();
        let geometry = Geometry::new(&config, metrics(800.0, 600.0, 1600.0, 800.0)).unwrap();
        assert!(close(geometry.fit_zoom(Fit::Contain), 0.5));
        assert!(close(geometry.fit_zoom(Fit::Cover), 0.75));
    }

    #[test]
    fn sanitize_clamps_numeric_and_symbolic_levels() {
        let mut config = Config::default();
        config.set_zoom_limits(1.0, 4.0);
        let geometry = Geometry::new(&config, metrics(800.0, 600.0, 1600.0, 1200.0)).unwrap();

        assert_eq!(geometry.sanitize_zoom(ZoomLevel::Value(0.2)), 1.0);
        assert_eq!(geometry.sanitize_zoom(ZoomLevel::Value(9.0)), 4.0);
        assert_eq!(geometry.sanitize_zoom(ZoomLevel::Value(2.0)), 2.0);
        // Contain would be 0.5, which is below the limit.
        assert_eq!(geometry.sanitize_zoom(ZoomLevel::CONTAIN), 1.0);
    }

    #[test]
    fn min_zoom_for_bounds_raises_minimum() {
        let mut config = Config::default();
        let m = metrics(800.0, 600.0, 400.0, 400.0);

        config.bounds = BoundsMode::Contain;
        let geometry = Geometry::new(&config, m).unwrap();
        assert!(close(geometry.min_zoom_for_bounds(), 1.5));

        config.bounds = BoundsMode::Cover;
        let geometry = Geometry::new(&config, m).unwrap();
        assert!(close(geometry.min_zoom_for_bounds(), 2.0));

        config.bounds = BoundsMode::Off;
        let geometry = Geometry::new(&config, m).unwrap();
        assert!(close(geometry.min_zoom_for_bounds(), 0.1));
    }

    #[test]
    fn min_zoom_for_bounds_never_exceeds_maximum() {
        let mut config = Config {
            bounds: BoundsMode::Cover,
            ..Config::default()
        };
        config.set_zoom_limits(1.0, 1.0);
        let geometry = Geometry::new(&config, metrics(800.0, 600.0, 100.0, 100.0)).unwrap();
        assert_eq!(geometry.min_zoom_for_bounds(), 1.0);
    }

    #[test]
    fn clamp_keeps_large_content_over_viewport() {
        let config = Config::default();
        let geometry = Geometry::new(&config, metrics(800.0, 600.0, 800.0, 600.0)).unwrap();
        let mut state = PanZoomState::new(2.0, 10_000.0, -10_000.0);
        geometry.clamp_offsets(&mut state);

        let rect = geometry.content_rect(&state);
        assert!(rect.x0 <= 1e-9);
        assert!(rect.x1 >= 800.0 - 1e-9);
        assert!(rect.y0 <= 1e-9);
        assert!(rect.y1 >= 600.0 - 1e-9);
    }

    #[test]
    fn clamp_keeps_small_content_inside_viewport() {
        let config = Config::default();
        let geometry = Geometry::new(&config, metrics(800.0, 600.0, 200.0, 100.0)).unwrap();

        // Anywhere inside the window is accepted as is.
        let mut state = PanZoomState::new(1.0, 100.0, 50.0);
        geometry.clamp_offsets(&mut state);
        assert_eq!((state.x, state.y), (100.0, 50.0));

        let mut state = PanZoomState::new(1.0, 5_000.0, -5_000.0);
        geometry.clamp_offsets(&mut state);
        let rect = geometry.content_rect(&state);
        assert!(close(rect.x1, 800.0));
        assert!(close(rect.y0, 0.0));
    }

    #[test]
    fn clamp_is_skipped_without_bounds() {
        let config = Config {
            bounds: BoundsMode::Off,
            ..Config::default()
        };
        let geometry = Geometry::new(&config, metrics(800.0, 600.0, 800.0, 600.0)).unwrap();
        let mut state = PanZoomState::new(1.0, 5_000.0, 5_000.0);
        geometry.clamp_offsets(&mut state);
        assert_eq!((state.x, state.y), (5_000.0, 5_000.0));
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let config = Config {
            bounds: BoundsMode::Off,
            ..Config::default()
        };
        let geometry = Geometry::new(&config, metrics(800.0, 600.0, 800.0, 600.0)).unwrap();
        let mut state = PanZoomState::new(1.0, 0.0, 0.0);
        let anchor = Point::new(200.0, 150.0);

        // Content-local point under the anchor before zooming.
        let local = |s: &PanZoomState| {
            let center = geometry.content_center(s);
            (anchor - center) / s.zoom
        };
        let before = local(&state);
        geometry.zoom_about(2.0, Some(anchor), &mut state);
        let after = local(&state);

        assert_eq!(state.zoom, 2.0);
        assert!(close(before.x, after.x));
        assert!(close(before.y, after.y));
    }

    #[test]
    fn adjust_position_limits_far_anchors() {
        let config = Config::default();
        let geometry = Geometry::new(&config, metrics(800.0, 600.0, 100.0, 100.0)).unwrap();
        let mut state = PanZoomState::new(1.0, 0.0, 0.0);
        geometry.adjust_position_for_zoom(2.0, Vec2::new(10_000.0, -10_000.0), &mut state);
        // Growth is 1.0 and the anchor is capped at 50px from the center.
        assert_eq!((state.x, state.y), (50.0, -50.0));
    }

    #[test]
    fn centered_pan_reads_fifty_percent() {
        let config = Config::default();
        let geometry = Geometry::new(&config, metrics(800.0, 600.0, 1600.0, 1200.0)).unwrap();
        for zoom in [0.5, 1.0, 3.0] {
            let offset = geometry.centered_offset();
            let state = PanZoomState::new(zoom, offset.x, offset.y);
            let pan = geometry.pan_percent(&state);
            assert!(close(pan.x, 50.0));
            assert!(close(pan.y, 50.0));
            assert_eq!(geometry.pan_to_percent(PanPercent::CENTER, zoom), offset);
        }
    }

    #[test]
    fn pan_percent_edges() {
        let config = Config::default();
        let geometry = Geometry::new(&config, metrics(400.0, 400.0, 400.0, 400.0)).unwrap();
        // At zoom 2, 0% puts the content's left edge at the viewport center.
        let offset = geometry.pan_to_percent(PanPercent::new(0.0, 100.0), 2.0);
        let state = PanZoomState::new(2.0, offset.x, offset.y);
        let rect = geometry.content_rect(&state);
        assert!(close(rect.x0, 200.0));
        assert!(close(rect.y1, 200.0));
    }
}
