// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::time::Duration;

use understory_panzoom_geometry::{BoundsMode, Config, ZoomLevel};

use crate::error::PanZoomError;
use crate::surface::SurfaceRole;

/// User-supplied options, merged over [`Config::default`] by
/// [`PanZoomOptions::resolve`].
///
/// Every field is optional. Field names deserialize in camelCase, so the
/// options can be read from JSON-shaped host configuration:
///
/// ```rust
/// use understory_panzoom::{BoundsMode, PanZoomOptions};
///
/// let options: PanZoomOptions = serde_json::from_str(
///     r##"{ "viewport": "#viewer", "content": "#image", "bounds": "cover", "maxZoom": 4 }"##,
/// )
/// .unwrap();
/// let config = options.resolve();
/// assert_eq!(config.bounds, BoundsMode::Cover);
/// assert_eq!(config.max_zoom, 4.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanZoomOptions {
    /// Identifier of the viewport surface.
    pub viewport: Option<String>,
    /// Identifier of the content surface.
    pub content: Option<String>,
    /// Bounds policy.
    pub bounds: Option<BoundsMode>,
    /// Minimum zoom factor.
    pub min_zoom: Option<f64>,
    /// Maximum zoom factor.
    pub max_zoom: Option<f64>,
    /// Pan step in percent.
    pub pan_step: Option<f64>,
    /// Zoom step in percent.
    pub zoom_step: Option<f64>,
    /// Wheel zoom sensitivity.
    pub zoom_speed_wheel: Option<f64>,
    /// Pinch zoom sensitivity.
    pub zoom_speed_pinch: Option<f64>,
    /// Initial zoom, numeric or `"contain"`/`"cover"`.
    pub initial_zoom: Option<ZoomLevel>,
    /// Initial horizontal pan in percent.
    pub initial_pan_x: Option<f64>,
    /// Initial vertical pan in percent.
    pub initial_pan_y: Option<f64>,
    /// Center the content when no initial pan is given.
    pub center: Option<bool>,
    /// Transition duration in milliseconds.
    pub transition_speed: Option<u64>,
}

impl PanZoomOptions {
    /// Options naming the two surfaces, everything else defaulted.
    pub fn new(viewport: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            viewport: Some(viewport.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Returns the viewport and content identifiers.
    ///
    /// Absent and empty identifiers are reported as
    /// [`PanZoomError::MissingSurface`].
    pub fn surface_ids(&self) -> Result<(&str, &str), PanZoomError> {
        Ok((
            surface_id(self.viewport.as_deref(), SurfaceRole::Viewport)?,
            surface_id(self.content.as_deref(), SurfaceRole::Content)?,
        ))
    }

    /// Merges these options over the defaults.
    ///
    /// Zoom limits are normalized so that `min_zoom <= max_zoom`. Speeds,
    /// steps and numeric initial zooms that are not finite and positive fall
    /// back to their defaults, as do non-finite initial pans.
    pub fn resolve(&self) -> Config {
        let mut config = Config::default();
        if let Some(bounds) = self.bounds {
            config.bounds = bounds;
        }
        config.set_zoom_limits(
            self.min_zoom.unwrap_or(config.min_zoom),
            self.max_zoom.unwrap_or(config.max_zoom),
        );
        config.pan_step = positive_or(self.pan_step, config.pan_step);
        config.zoom_step = positive_or(self.zoom_step, config.zoom_step);
        config.zoom_speed_wheel = positive_or(self.zoom_speed_wheel, config.zoom_speed_wheel);
        config.zoom_speed_pinch = positive_or(self.zoom_speed_pinch, config.zoom_speed_pinch);
        match self.initial_zoom {
            Some(ZoomLevel::Value(zoom)) if zoom.is_finite() && zoom > 0.0 => {
                config.initial_zoom = ZoomLevel::Value(zoom);
            }
            Some(level @ ZoomLevel::Fit(_)) => config.initial_zoom = level,
            _ => {}
        }
        config.initial_pan_x = self.initial_pan_x.filter(|x| x.is_finite());
        config.initial_pan_y = self.initial_pan_y.filter(|y| y.is_finite());
        if let Some(center) = self.center {
            config.center = center;
        }
        if let Some(ms) = self.transition_speed {
            config.transition = Duration::from_millis(ms);
        }
        config
    }
}

fn surface_id(id: Option<&str>, role: SurfaceRole) -> Result<&str, PanZoomError> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(PanZoomError::MissingSurface(role)),
    }
}

fn positive_or(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => fallback,
    }
}
