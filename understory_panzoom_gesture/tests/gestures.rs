// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture sequences driven through `GestureTracker` with real geometry.

use kurbo::{Point, Size};
use understory_panzoom_geometry::{BoundsMode, Config, Geometry, PanZoomState, SurfaceMetrics};
use understory_panzoom_gesture::{
    Change, DeltaMode, GestureInput, GesturePhase, GestureTracker, WheelDelta,
};

fn down(pointer: u8, x: f64, y: f64) -> GestureInput<u8> {
    GestureInput::Down {
        pointer,
        position: Point::new(x, y),
    }
}

fn moved(pointer: u8, x: f64, y: f64) -> GestureInput<u8> {
    GestureInput::Move {
        pointer,
        position: Point::new(x, y),
    }
}

#[test]
fn pinch_scenario_zooms_in_with_pan_blocked_throughout() {
    let config = Config {
        bounds: BoundsMode::Off,
        ..Config::default()
    };
    let metrics = SurfaceMetrics::new(Size::new(800.0, 600.0), Size::new(800.0, 600.0));
    let geometry = Geometry::new(&config, metrics).unwrap();
    let mut tracker = GestureTracker::new();
    let mut state = PanZoomState::default();

    tracker.handle(&down(1, 100.0, 100.0), Some(&geometry), &mut state);
    assert!(!tracker.is_pan_blocked());
    tracker.handle(&down(2, 200.0, 100.0), Some(&geometry), &mut state);
    assert!(tracker.is_pan_blocked());

    tracker.handle(&moved(1, 80.0, 100.0), Some(&geometry), &mut state);
    assert!(tracker.is_pan_blocked());
    assert!(state.zoom > 1.0);
    tracker.handle(&moved(2, 220.0, 100.0), Some(&geometry), &mut state);
    assert!(tracker.is_pan_blocked());
    // 40px of spread over 800px of content at pinch speed 4.
    assert!((state.zoom - 1.2).abs() < 1e-9);
}

#[test]
fn diagonal_pinch_uses_euclidean_distance() {
    let config = Config {
        bounds: BoundsMode::Off,
        ..Config::default()
    };
    let metrics = SurfaceMetrics::new(Size::new(800.0, 600.0), Size::new(800.0, 600.0));
    let geometry = Geometry::new(&config, metrics).unwrap();
    let mut tracker = GestureTracker::new();
    let mut state = PanZoomState::default();

    tracker.handle(&down(1, 0.0, 0.0), Some(&geometry), &mut state);
    tracker.handle(&down(2, 30.0, 40.0), Some(&geometry), &mut state);
    assert_eq!(tracker.pinch_baseline().unwrap().distance, 50.0);

    // Vertical spread changes the distance even though x is unchanged.
    tracker.handle(&moved(2, 30.0, 140.0), Some(&geometry), &mut state);
    assert!(state.zoom > 1.0);
}

#[test]
fn third_pointer_is_ignored() {
    let mut tracker = GestureTracker::new();
    let mut state = PanZoomState::default();

    tracker.handle(&down(1, 0.0, 0.0), None, &mut state);
    tracker.handle(&down(2, 10.0, 0.0), None, &mut state);
    let change = tracker.handle(&down(3, 20.0, 0.0), None, &mut state);
    assert_eq!(change, Change::NONE);
    assert_eq!(tracker.pointers().len(), 2);
    assert!(!tracker.pointers().contains(3));
    assert_eq!(tracker.pinch_baseline().unwrap().distance, 10.0);

    // Releasing the ignored pointer does not end the pinch.
    tracker.handle(&GestureInput::Up { pointer: 3 }, None, &mut state);
    assert_eq!(tracker.phase(), GesturePhase::Pinching);
}

#[test]
fn leaving_during_a_pinch_ends_it() {
    let mut tracker = GestureTracker::new();
    let mut state = PanZoomState::default();

    tracker.handle(&down(1, 0.0, 0.0), None, &mut state);
    tracker.handle(&down(2, 10.0, 0.0), None, &mut state);
    tracker.handle(&GestureInput::Leave { pointer: 2 }, None, &mut state);
    assert_eq!(tracker.phase(), GesturePhase::Idle);
    assert_eq!(tracker.pointers().len(), 1);
}

#[test]
fn cancel_ends_a_drag() {
    let mut tracker = GestureTracker::new();
    let mut state = PanZoomState::default();

    tracker.handle(&down(1, 0.0, 0.0), None, &mut state);
    assert_eq!(tracker.phase(), GesturePhase::Panning);
    tracker.handle(&GestureInput::Cancel { pointer: 1 }, None, &mut state);
    assert_eq!(tracker.phase(), GesturePhase::Idle);
    assert!(tracker.drag().is_none());
}

#[test]
fn line_wheel_deltas_are_scaled_before_zooming() {
    let config = Config {
        bounds: BoundsMode::Off,
        ..Config::default()
    };
    let metrics = SurfaceMetrics::new(Size::new(800.0, 600.0), Size::new(800.0, 600.0));
    let geometry = Geometry::new(&config, metrics).unwrap();
    let mut tracker = GestureTracker::<u8>::new();
    let mut state = PanZoomState::default();

    // One line is 16px, which is 16/128 of a step.
    let wheel = GestureInput::Wheel {
        position: Point::new(400.0, 300.0),
        delta: WheelDelta {
            y: 1.0,
            mode: DeltaMode::Line,
        },
    };
    tracker.handle(&wheel, Some(&geometry), &mut state);
    assert_eq!(state.zoom, 0.875);
}
