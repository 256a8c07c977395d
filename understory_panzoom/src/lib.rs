// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_panzoom --heading-base-level=0

//! Understory Pan/Zoom: pan and zoom a content surface inside a viewport.
//!
//! [`PanZoom`] ties together the geometry from
//! [`understory_panzoom_geometry`] and the gesture state machine from
//! [`understory_panzoom_gesture`]:
//!
//! - Surfaces are abstract: anything implementing [`Surface`] can be the
//!   viewport, anything implementing [`ContentSurface`] receives the
//!   resulting [`ContentTransform`].
//! - Options are merged over defaults by [`PanZoomOptions::resolve`] and can
//!   be deserialized with `serde`.
//! - Input is delivered as [`GestureInput`] (or, with the
//!   `ui_events_adapter` feature, as `ui_events` pointer events).
//! - Every committed update notifies an [`Observer`] on the `change`
//!   channel, followed by `zoom` and/or `pan`.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_panzoom::{
//!     Config, ContentSurface, ContentTransform, GestureInput, PanZoom, Surface, Transition,
//!     WheelDelta,
//! };
//!
//! struct Viewport(Size);
//!
//! impl Surface for Viewport {
//!     fn size(&self) -> Size {
//!         self.0
//!     }
//! }
//!
//! struct Image {
//!     size: Size,
//!     css: String,
//! }
//!
//! impl Surface for Image {
//!     fn size(&self) -> Size {
//!         self.size
//!     }
//! }
//!
//! impl ContentSurface for Image {
//!     fn set_transition(&mut self, _transition: Transition) {}
//!
//!     fn set_transform(&mut self, transform: &ContentTransform) {
//!         self.css = transform.to_string();
//!     }
//! }
//!
//! let viewport = Viewport(Size::new(800.0, 600.0));
//! let image = Image { size: Size::new(1600.0, 1200.0), css: String::new() };
//! let mut panzoom: PanZoom<_, _> = PanZoom::with_surfaces(viewport, image, Config::default(), ());
//!
//! // The content is contained and centered.
//! assert_eq!(panzoom.zoom(), 0.5);
//! assert_eq!(panzoom.content().unwrap().css, "translate(-400px, -300px) scale(0.5)");
//!
//! // Wheel up over the center zooms in.
//! panzoom.handle_input(&GestureInput::Wheel {
//!     position: Point::new(400.0, 300.0),
//!     delta: WheelDelta::pixels(-120.0),
//! });
//! assert_eq!(panzoom.zoom(), 0.625);
//!
//! // Mutators chain.
//! panzoom.zoom_to(2.0, true).center(true);
//! assert_eq!(panzoom.zoom(), 2.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to Kurbo and the core crates.
//! - `libm`: `no_std` math for Kurbo.
//! - `ui_events_adapter` (default): [`PanZoom::handle_pointer_event`] and
//!   the [`pointer_events`] module.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod emitter;
mod error;
pub mod observer;
mod options;
mod panzoom;
#[cfg(feature = "ui_events_adapter")]
pub mod pointer_events;
mod surface;

pub use emitter::ContentTransform;
pub use error::PanZoomError;
pub use observer::{Callbacks, Channel, Notification, Observer};
pub use options::PanZoomOptions;
pub use panzoom::PanZoom;
pub use surface::{ContentSurface, Surface, SurfaceResolver, SurfaceRole, Transition};

pub use understory_panzoom_geometry::{
    BoundsMode, Config, Fit, PanPercent, PanZoomState, SurfaceMetrics, ZoomLevel,
};
pub use understory_panzoom_gesture::{DeltaMode, GestureInput, GesturePhase, WheelDelta};
