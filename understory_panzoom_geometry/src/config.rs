// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// How content is scaled to fit the viewport.
///
/// `Contain` keeps the whole content visible (the viewport may show margins),
/// `Cover` fills the whole viewport (the content may overflow).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Fit {
    /// Largest zoom at which the content fits entirely inside the viewport.
    Contain,
    /// Smallest zoom at which the content covers the entire viewport.
    Cover,
}

/// Constraint on how far the content may be shrunk and moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BoundsMode {
    /// No constraint; the content may move and shrink freely.
    Off,
    /// The content can never be smaller than its contained size and never
    /// separates from the viewport edges.
    #[default]
    Contain,
    /// The content always covers the viewport.
    Cover,
}

impl BoundsMode {
    /// Returns the fit this bounds mode enforces, if any.
    #[must_use]
    pub fn fit(self) -> Option<Fit> {
        match self {
            Self::Off => None,
            Self::Contain => Some(Fit::Contain),
            Self::Cover => Some(Fit::Cover),
        }
    }

    /// Returns `true` unless the mode is [`BoundsMode::Off`].
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::Off
    }
}

/// A requested zoom level: either an explicit factor or a symbolic fit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum ZoomLevel {
    /// Explicit zoom factor, where `1.0` is the content's natural size.
    Value(f64),
    /// Zoom computed from the viewport and content sizes.
    Fit(Fit),
}

impl ZoomLevel {
    /// Zoom that fits the content inside the viewport.
    pub const CONTAIN: Self = Self::Fit(Fit::Contain);
    /// Zoom that makes the content cover the viewport.
    pub const COVER: Self = Self::Fit(Fit::Cover);
}

impl From<f64> for ZoomLevel {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<Fit> for ZoomLevel {
    fn from(fit: Fit) -> Self {
        Self::Fit(fit)
    }
}

/// Resolved, read-only pan/zoom configuration.
///
/// Percent-valued fields (`pan_step`, `zoom_step`, `initial_pan_x`,
/// `initial_pan_y`) are expressed on a `0..=100` scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Bounds policy applied on every commit.
    pub bounds: BoundsMode,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// Default step for `pan_left`/`pan_right`/`pan_up`/`pan_down`, in percent.
    pub pan_step: f64,
    /// Default step for `zoom_in`/`zoom_out`, in percent.
    pub zoom_step: f64,
    /// Wheel zoom sensitivity multiplier.
    pub zoom_speed_wheel: f64,
    /// Pinch zoom sensitivity multiplier.
    pub zoom_speed_pinch: f64,
    /// Zoom applied at initialization.
    pub initial_zoom: ZoomLevel,
    /// Initial horizontal pan in percent, if any.
    pub initial_pan_x: Option<f64>,
    /// Initial vertical pan in percent, if any.
    pub initial_pan_y: Option<f64>,
    /// Center the content at initialization when no initial pan is given.
    pub center: bool,
    /// Duration of animated transitions.
    pub transition: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: BoundsMode::Contain,
            min_zoom: 0.1,
            max_zoom: 10.0,
            pan_step: 10.0,
            zoom_step: 50.0,
            zoom_speed_wheel: 1.0,
            zoom_speed_pinch: 4.0,
            initial_zoom: ZoomLevel::CONTAIN,
            initial_pan_x: None,
            initial_pan_y: None,
            center: true,
            transition: Duration::from_millis(400),
        }
    }
}

impl Config {
    /// Clamps a numeric zoom factor into `[min_zoom, max_zoom]`.
    ///
    /// `NaN` resolves to `min_zoom`.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        if zoom.is_nan() {
            return self.min_zoom;
        }
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Sets the zoom limits, normalizing them so that `min_zoom <= max_zoom`.
    ///
    /// Non-finite or non-positive limits are ignored in favor of the
    /// current ones.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let min_zoom = positive_or(min_zoom, self.min_zoom);
        let max_zoom = positive_or(max_zoom, self.max_zoom);
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
    }

    /// Returns the initial pan in percent, if one is configured.
    ///
    /// A missing axis falls back to `50`. When neither axis is configured,
    /// `center` decides between a centered pan and none at all.
    #[must_use]
    pub fn initial_pan(&self) -> Option<(f64, f64)> {
        match (self.initial_pan_x, self.initial_pan_y) {
            (None, None) if !self.center => None,
            (x, y) => Some((x.unwrap_or(50.0), y.unwrap_or(50.0))),
        }
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
