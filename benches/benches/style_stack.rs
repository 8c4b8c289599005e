// Copyright 2025 the Reticle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use reticle_style::{CSS_CURSOR_STYLES, StyleKey, StyleStack};

fn populated(keys: usize) -> (StyleStack, Vec<StyleKey>) {
    let mut stack = StyleStack::new();
    let keys: Vec<StyleKey> = (0..keys).map(|_| stack.register_key()).collect();
    for (i, key) in keys.iter().enumerate() {
        let _ = stack.set_style(*key, CSS_CURSOR_STYLES[i % CSS_CURSOR_STYLES.len()]);
    }
    (stack, keys)
}

fn bench_requests(c: &mut Criterion) {
    let mut group = c.benchmark_group("style_stack");
    for &n in &[4usize, 32, 256] {
        group.bench_function(format!("churn_n{}", n), |b| {
            b.iter_batched(
                || populated(n),
                |(mut stack, keys)| {
                    for (i, key) in keys.iter().enumerate() {
                        let style = CSS_CURSOR_STYLES[(i * 7) % CSS_CURSOR_STYLES.len()];
                        let _ = stack.set_style(*key, style);
                    }
                    for key in keys.iter().step_by(2) {
                        stack.clear_style(*key);
                    }
                    black_box(stack.effective_style().len());
                },
                BatchSize::SmallInput,
            )
        });

        let (mut stack, keys) = populated(n);
        group.bench_function(format!("rerequest_same_n{}", n), |b| {
            b.iter(|| {
                for key in &keys {
                    let style = stack.get_style(*key).unwrap_or("default").to_owned();
                    let _ = stack.set_style(*key, &style);
                }
                black_box(stack.len())
            })
        });
    }

    let mut stack = StyleStack::new();
    let key = stack.register_key();
    stack.set_change_handler(|style| {
        black_box(style);
    });
    group.bench_function("hover_toggle_with_handler", |b| {
        b.iter(|| {
            let _ = stack.set_style(key, "pointer");
            stack.clear_style(key);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_requests);
criterion_main!(benches);
