// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation.
//!
//! Measures the performance of:
//! - Step navigation with transition churn (every request supersedes the last)
//! - Autoplay catching up after a long time jump
//! - Layer computation for each transition effect

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_carousel::domain::item::normalize;
use iced_carousel::domain::{AutoplayInterval, Item, TransitionDuration, TransitionKind};
use iced_carousel::engine::{Carousel, CarouselOptions, ImageTransition, Message};
use std::hint::black_box;
use std::time::Duration;

fn items(count: usize) -> Vec<Item> {
    normalize((0..count).map(|i| format!("{i}.png")))
}

/// Rapid next requests, each superseding the in-flight transition.
fn bench_transition_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    for count in [3usize, 50, 1_000] {
        group.bench_with_input(BenchmarkId::new("churn", count), &count, |b, &count| {
            b.iter(|| {
                let mut carousel = Carousel::new(items(count), CarouselOptions::default());
                for step in 0..100u64 {
                    black_box(carousel.update(Message::Next));
                    black_box(carousel.update(Message::Tick(Duration::from_millis(step * 10))));
                }
                black_box(carousel.current_index());
            });
        });
    }

    group.finish();
}

/// One tick covering an hour of autoplay at the minimum interval.
fn bench_autoplay_catch_up(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    let options = CarouselOptions {
        autoplay: true,
        autoplay_interval: AutoplayInterval::new(100),
        pause_on_hover: false,
        ..CarouselOptions::default()
    };

    group.bench_function("autoplay_catch_up", |b| {
        b.iter(|| {
            let mut carousel = Carousel::new(items(20), options.clone());
            let out = carousel.update(Message::Tick(Duration::from_secs(3_600)));
            black_box(out.len());
        });
    });

    group.finish();
}

/// Layer poses mid-transition for every effect.
fn bench_layers(c: &mut Criterion) {
    let mut group = c.benchmark_group("layers");

    for kind in TransitionKind::ALL {
        let mut transition = ImageTransition::new(kind, TransitionDuration::new(300), 0);
        transition.set_index(1);
        transition.frame();
        transition.advance(Duration::from_millis(120));

        group.bench_function(kind.as_str(), |b| {
            b.iter(|| black_box(transition.layers()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_transition_churn,
    bench_autoplay_catch_up,
    bench_layers
);
criterion_main!(benches);
