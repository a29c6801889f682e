// Copyright 2026 the Dubins Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of shortest path synthesis.

#![expect(missing_docs, reason = "criterion emits undocumented functions")]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use dubins::{DubinsPath, NormalizedBoundary, PathType, Pose};

fn goals() -> [(&'static str, Pose); 3] {
    [
        ("straight", Pose::new(10.0, 0.0, 0.0)),
        ("u-turn", Pose::new(0.0, 0.0, core::f64::consts::PI)),
        ("oblique", Pose::new(3.0, -7.0, 2.5)),
    ]
}

fn bench_shortest(cc: &mut Criterion) {
    let start = Pose::new(0.0, 0.0, 0.0);
    for (name, goal) in goals() {
        cc.bench_with_input(BenchmarkId::new("shortest", name), &goal, |bb, goal| {
            bb.iter(|| DubinsPath::shortest(black_box(start), black_box(*goal), 1.0));
        });
    }
}

fn bench_words(cc: &mut Criterion) {
    let boundary = NormalizedBoundary::new(0.4, 2.1, 3.3);
    for word in PathType::ALL {
        cc.bench_with_input(BenchmarkId::new("solve", word), &word, |bb, word| {
            bb.iter(|| black_box(*word).solve(black_box(&boundary)));
        });
    }
}

fn bench_candidates(cc: &mut Criterion) {
    let start = Pose::new(0.0, 0.0, 0.0);
    let goal = Pose::new(3.0, -7.0, 2.5);
    cc.bench_function("candidates", |bb| {
        bb.iter(|| DubinsPath::candidates(black_box(start), black_box(goal), 1.0));
    });
}

criterion_group!(benches, bench_shortest, bench_words, bench_candidates);
criterion_main!(benches);
