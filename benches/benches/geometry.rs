// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_panzoom_geometry::{
    BoundsMode, Config, Geometry, PanPercent, PanZoomState, SurfaceMetrics, ZoomLevel,
};

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_panzoom_geometry");

    let metrics = SurfaceMetrics::new(Size::new(1280.0, 720.0), Size::new(4000.0, 3000.0));
    for bounds in [BoundsMode::Off, BoundsMode::Contain, BoundsMode::Cover] {
        let config = Config {
            bounds,
            ..Config::default()
        };

        group.bench_function(format!("zoom_about_and_clamp({bounds:?})"), |b| {
            let mut state = PanZoomState::new(1.0, -1000.0, -800.0);
            let mut zoom_in = true;
            b.iter(|| {
                let geometry = Geometry::new(&config, black_box(metrics)).unwrap();
                let factor = if zoom_in { 1.1 } else { 1.0 / 1.1 };
                zoom_in = !zoom_in;
                let next = geometry.sanitize_zoom(ZoomLevel::Value(state.zoom * factor));
                geometry.zoom_about(next, Some(Point::new(300.0, 200.0)), &mut state);
                geometry.clamp_offsets(&mut state);
                black_box(state);
            });
        });
    }

    let config = Config::default();
    group.bench_function("pan_percent_round_trip", |b| {
        let geometry = Geometry::new(&config, metrics).unwrap();
        let mut state = PanZoomState::new(2.5, 0.0, 0.0);
        let mut percent = 0.0;
        b.iter(|| {
            percent = (percent + 7.0) % 100.0;
            let offset = geometry.pan_to_percent(PanPercent::new(percent, 100.0 - percent), 2.5);
            state.x = offset.x;
            state.y = offset.y;
            black_box(geometry.pan_percent(black_box(&state)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_geometry);
criterion_main!(benches);
