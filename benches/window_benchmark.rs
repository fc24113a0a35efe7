//! Windowing and render-pass benchmarks.
//!
//! Measures page computation over large collections, sorted and unsorted,
//! and the effect of the window cache on repeated render passes.
//!
//! Run with: cargo bench --bench window_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dataview::model::{FieldPath, Layout, PageEvent, PageState, SortOrder, SortSpec, WindowMode};
use dataview::state::{DataView, DataViewProps};
use dataview::view_state::{compute_window, WindowRequest};
use serde_json::{json, Value};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const ROWS: usize = 50;

fn records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|id| {
            json!({
                "id": id,
                "name": format!("record-{}", (id * 7919) % count),
                "score": (id * 31) % 997,
            })
        })
        .collect()
}

fn bench_compute_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_window");
    let sort = SortSpec::new(FieldPath::parse("name").expect("valid path"), SortOrder::Ascending);

    for size in SIZES {
        let data = records(size);
        let unsorted = WindowRequest {
            page: PageState::new(size / 2, ROWS),
            mode: WindowMode::paginated(),
            ..WindowRequest::default()
        };
        let sorted = WindowRequest {
            sort: sort.clone(),
            ..unsorted.clone()
        };

        group.bench_with_input(BenchmarkId::new("unsorted", size), &data, |b, data| {
            b.iter(|| compute_window(black_box(data), black_box(&unsorted)))
        });
        group.bench_with_input(BenchmarkId::new("sorted", size), &data, |b, data| {
            b.iter(|| compute_window(black_box(data), black_box(&sorted)))
        });
    }

    group.finish();
}

fn build_view(size: usize) -> DataView<Value, String> {
    let props = DataViewProps::new()
        .with_value(records(size))
        .with_paginator(true)
        .with_rows(ROWS)
        .with_sort(FieldPath::parse("score").expect("valid path"), SortOrder::Descending)
        .with_item_template(|record: &Value, _: Layout| record["id"].to_string());
    DataView::new(props).expect("template supplied")
}

fn bench_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");

    for size in SIZES {
        // Same inputs every iteration: served from the window cache
        group.bench_function(BenchmarkId::new("cached", size), |b| {
            let mut view = build_view(size);
            b.iter(|| black_box(view.render().items().len()))
        });

        // A page change invalidates the cached plan
        group.bench_function(BenchmarkId::new("after_page_change", size), |b| {
            b.iter_batched(
                || build_view(size),
                |mut view| {
                    view.page_change(PageEvent::new(ROWS, ROWS));
                    let visible = view.render().items().len();
                    black_box(visible)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_window, bench_render_pass);
criterion_main!(benches);
