// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_panzoom_gesture --heading-base-level=0

//! Understory Pan/Zoom Gesture: turn pointer and wheel input into pan/zoom updates.
//!
//! This crate provides the stateful half of pan/zoom interaction:
//!
//! - [`pointers`]: a bounded cache of active pointers in press order
//! - [`drag`]: a single-pointer drag session with movement deltas
//! - [`GestureTracker`]: one state machine (`Idle`, `Panning`, `Pinching`)
//!   that feeds deltas into [`understory_panzoom_geometry::Geometry`]
//!
//! The tracker does not listen to any platform. Hosts translate their events
//! into [`GestureInput`] (positions in viewport coordinates, one identity per
//! pointer or finger) and then commit the updated state however they like.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_panzoom_geometry::{Config, Geometry, PanZoomState, SurfaceMetrics};
//! use understory_panzoom_gesture::{GestureInput, GesturePhase, GestureTracker};
//!
//! let config = Config::default();
//! let metrics = SurfaceMetrics::new(Size::new(800.0, 600.0), Size::new(1600.0, 1200.0));
//! let geometry = Geometry::new(&config, metrics);
//!
//! let mut tracker = GestureTracker::new();
//! let mut state = PanZoomState::default();
//!
//! tracker.handle(
//!     &GestureInput::Down { pointer: 1_u32, position: Point::new(10.0, 10.0) },
//!     geometry.as_ref(),
//!     &mut state,
//! );
//! assert_eq!(tracker.phase(), GesturePhase::Panning);
//!
//! let change = tracker.handle(
//!     &GestureInput::Move { pointer: 1, position: Point::new(30.0, 10.0) },
//!     geometry.as_ref(),
//!     &mut state,
//! );
//! assert!(change.pan);
//! assert_eq!(state.x, 20.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
mod input;
pub mod pointers;
mod tracker;

pub use input::{
    DeltaMode, GestureInput, LINE_DELTA_PIXELS, MAX_WHEEL_STEP, WheelDelta, wheel_zoom_factor,
};
pub use tracker::{Change, GesturePhase, GestureTracker, PinchBaseline};
