// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_gantt::{
    Addressing, GanttChart, GridConfig, LayoutMetrics, RasterCache, ShapeRasterizer, Task,
    TaskShape, Viewport,
};
use understory_text_fit::{FontMetrics, MonospaceMeasure, TextFitter};
use understory_timeline::PeriodType;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_range_u64(&mut self, upper_exclusive: u64) -> u64 {
        if upper_exclusive == 0 {
            return 0;
        }
        u64::from(self.next_u32()) % upper_exclusive
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 17).unwrap()
}

/// Tasks scattered over roughly a year around `today`, some outside the grid window.
fn build_tasks(n: usize, seed: u64) -> Arc<[Task]> {
    let mut rng = Lcg::new(seed);
    let origin = today().checked_sub_days(Days::new(180)).unwrap();
    (0..n)
        .map(|i| {
            let start = origin.checked_add_days(Days::new(rng.gen_range_u64(360))).unwrap();
            let end = start.checked_add_days(Days::new(rng.gen_range_u64(60))).unwrap();
            Task::new(format!("Task {i} with a fairly long name"), start, end)
        })
        .collect::<Vec<_>>()
        .into()
}

fn build_chart(tasks: Arc<[Task]>, period_type: PeriodType, addressing: Addressing) -> GanttChart {
    let config = GridConfig {
        period_type,
        ..GridConfig::default()
    };
    let mut chart =
        GanttChart::with_config(today(), config, LayoutMetrics::default(), addressing).unwrap();
    chart.set_viewport(Viewport::new(1_280.0, 720.0));
    chart.set_tasks(tasks);
    chart
}

struct NullRasterizer;

impl ShapeRasterizer for NullRasterizer {
    type Raster = usize;

    fn rasterize(&mut self, _size: Size, shapes: &[TaskShape]) -> usize {
        shapes.len()
    }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_gantt");
    group.sample_size(50);

    for &n in &[16_usize, 64, 256] {
        for (period_type, addressing) in [
            (PeriodType::Month, Addressing::Discrete),
            (PeriodType::Week, Addressing::Discrete),
            (PeriodType::Month, Addressing::Continuous),
        ] {
            let tasks = build_tasks(n, 0x6A77_0000_0000_0001);
            group.bench_function(
                format!("resize_recompute(n={n},{period_type:?},{addressing:?})"),
                |b| {
                    b.iter_batched(
                        || build_chart(Arc::clone(&tasks), period_type, addressing),
                        |mut chart| {
                            chart.set_viewport(Viewport::new(1_024.0, 720.0));
                            black_box(chart.snapshot());
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }

        let tasks = build_tasks(n, 0x6A77_0000_0000_0002);
        let mut chart = build_chart(tasks, PeriodType::Month, Addressing::Discrete);
        let snapshot = chart.snapshot();
        let fitter = TextFitter::new(MonospaceMeasure::new(7.0, FontMetrics::new(-11.0, 3.0)));
        group.bench_function(format!("task_draws(n={n})"), |b| {
            b.iter(|| black_box(snapshot.task_draws(&fitter)));
        });

        // Cached raster: after the first call every frame is a revision check.
        let mut cache = RasterCache::new();
        let mut rasterizer = NullRasterizer;
        group.bench_function(format!("raster_cache_hit(n={n})"), |b| {
            b.iter(|| black_box(cache.get_or_rasterize(&snapshot, &mut rasterizer).copied()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
