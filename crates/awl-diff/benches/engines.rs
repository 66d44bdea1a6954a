//! Benchmarks for the two diff engines.
//!
//! Performance-critical paths:
//! - `diff_lines`: positional comparison, linear in the longer buffer
//! - `diff_values`: recursive walk with equality short-circuiting

use awl_diff::{diff_lines, diff_values};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use std::hint::black_box;

fn make_buffer(lines: usize, edit_every: usize) -> (String, String) {
    let old: String = (0..lines)
        .map(|i| format!("line {i}\n"))
        .collect();
    let new: String = (0..lines)
        .map(|i| {
            if i % edit_every == 0 {
                format!("edited {i}\n")
            } else {
                format!("line {i}\n")
            }
        })
        .collect();
    (old, new)
}

fn bench_diff_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_lines");

    for lines in [100usize, 1_000, 10_000] {
        let (old, new) = make_buffer(lines, 7);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{lines}_lines")),
            &lines,
            |b, _| b.iter(|| diff_lines(black_box(&old), black_box(&new))),
        );
    }

    group.finish();
}

fn make_tree(width: usize, depth: usize, edit: bool) -> Value {
    if depth == 0 {
        return json!(if edit { "edited" } else { "leaf" });
    }
    let mut map = serde_json::Map::new();
    for i in 0..width {
        // Divergence only down the first branch; the rest short-circuit
        // on equality.
        let child_edit = edit && i == 0;
        map.insert(format!("k{i}"), make_tree(width, depth - 1, child_edit));
    }
    Value::Object(map)
}

fn bench_diff_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_values");

    for depth in [3usize, 5, 7] {
        let old = make_tree(4, depth, false);
        let new = make_tree(4, depth, true);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("depth_{depth}")),
            &depth,
            |b, _| b.iter(|| diff_values(black_box(&old), black_box(&new)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_diff_lines, bench_diff_values);
criterion_main!(benches);
