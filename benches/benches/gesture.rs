// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_panzoom::{ContentSurface, ContentTransform, PanZoom, Surface, Transition};
use understory_panzoom_geometry::{Config, Geometry, PanZoomState, SurfaceMetrics};
use understory_panzoom_gesture::{GestureInput, GestureTracker, WheelDelta};

struct FixedSurface(Size);

impl Surface for FixedSurface {
    fn size(&self) -> Size {
        self.0
    }
}

impl ContentSurface for FixedSurface {
    fn set_transition(&mut self, transition: Transition) {
        black_box(transition);
    }

    fn set_transform(&mut self, transform: &ContentTransform) {
        black_box(transform.affine());
    }
}

/// A pinch that spreads two fingers apart and back, `steps` moves each way.
fn pinch_sequence(steps: u32) -> Vec<GestureInput<u32>> {
    let mut events = vec![
        GestureInput::Down {
            pointer: 1,
            position: Point::new(300.0, 300.0),
        },
        GestureInput::Down {
            pointer: 2,
            position: Point::new(500.0, 300.0),
        },
    ];
    let spreads = (0..steps).chain((0..steps).rev());
    for step in spreads {
        let spread = f64::from(step) * 2.0;
        events.push(GestureInput::Move {
            pointer: 1,
            position: Point::new(300.0 - spread, 300.0 + spread * 0.5),
        });
        events.push(GestureInput::Move {
            pointer: 2,
            position: Point::new(500.0 + spread, 300.0 - spread * 0.5),
        });
    }
    events.push(GestureInput::Up { pointer: 2 });
    events.push(GestureInput::Up { pointer: 1 });
    events
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_panzoom_gesture");

    let config = Config::default();
    let metrics = SurfaceMetrics::new(Size::new(800.0, 600.0), Size::new(1600.0, 1200.0));
    let events = pinch_sequence(64);

    group.bench_function("tracker_pinch(moves=256)", |b| {
        b.iter_batched(
            GestureTracker::<u32>::new,
            |mut tracker| {
                let geometry = Geometry::new(&config, metrics);
                let mut state = PanZoomState::default();
                for event in &events {
                    tracker.handle(event, geometry.as_ref(), &mut state);
                    if let Some(geometry) = &geometry {
                        geometry.clamp_offsets(&mut state);
                    }
                }
                black_box(state);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("panzoom_pinch_commit(moves=256)", |b| {
        b.iter_batched(
            || -> PanZoom<FixedSurface, FixedSurface, (), u32> {
                PanZoom::with_surfaces(
                    FixedSurface(metrics.viewport),
                    FixedSurface(metrics.content),
                    config.clone(),
                    (),
                )
            },
            |mut panzoom| {
                for event in &events {
                    panzoom.handle_input(event);
                }
                black_box(panzoom.zoom());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("panzoom_wheel_commit", |b| {
        let mut panzoom: PanZoom<_, _> = PanZoom::with_surfaces(
            FixedSurface(metrics.viewport),
            FixedSurface(metrics.content),
            config.clone(),
            (),
        );
        let mut up = true;
        b.iter(|| {
            let delta = if up { -40.0 } else { 40.0 };
            up = !up;
            panzoom.handle_input(&GestureInput::Wheel {
                position: Point::new(200.0, 150.0),
                delta: WheelDelta::pixels(black_box(delta)),
            });
        });
        black_box(panzoom.zoom());
    });

    group.finish();
}

criterion_group!(benches, bench_gesture);
criterion_main!(benches);
