// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_panzoom_geometry --heading-base-level=0

//! Understory Pan/Zoom Geometry: the coordinate math behind pan and zoom.
//!
//! This crate models a *content* surface that is translated and scaled inside
//! a fixed *viewport* surface. It focuses on:
//! - The resolved pan/zoom [`Config`] (zoom limits, steps, speeds, bounds).
//! - The mutable [`PanZoomState`] (`zoom`, `x`, `y`).
//! - [`Geometry`]: zoom sanitizing, bounds clamping, zoom-about-a-point and
//!   conversions between pixel offsets and pan percentages.
//!
//! It does **not** track pointers or apply transforms to anything. Callers
//! measure their surfaces into a [`SurfaceMetrics`] on every update (layout
//! may have changed since the last one) and create a [`Geometry`] from it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_panzoom_geometry::{Config, Geometry, PanZoomState, SurfaceMetrics, ZoomLevel};
//!
//! let config = Config::default();
//! let metrics = SurfaceMetrics::new(Size::new(800.0, 600.0), Size::new(1600.0, 1200.0));
//! let geometry = Geometry::new(&config, metrics).expect("non-degenerate metrics");
//!
//! // Fit the content into the viewport and center it.
//! let mut state = PanZoomState::default();
//! let centered = geometry.centered_offset();
//! state.x = centered.x;
//! state.y = centered.y;
//! state.zoom = geometry.sanitize_zoom(ZoomLevel::CONTAIN);
//! geometry.clamp_offsets(&mut state);
//!
//! assert_eq!(state.zoom, 0.5);
//! let pan = geometry.pan_percent(&state);
//! assert!((pan.x - 50.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and applied about the content's own center.
//! - Degenerate metrics (zero or negative sizes) never produce a
//!   [`Geometry`], so no computation can yield non-finite state.
//! - Out-of-range requests are clamped, never rejected.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod geometry;
mod state;

pub use config::{BoundsMode, Config, Fit, ZoomLevel};
pub use geometry::Geometry;
pub use state::{PanPercent, PanZoomState, SurfaceMetrics};
