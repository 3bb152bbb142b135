//! Benchmarks for the events filter and carousel centering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cs_branch::carousel::StripMetrics;
use cs_branch::catalog::{Catalog, Event, EventCategory, EventDomain};
use cs_branch::filter::EventFilter;

fn create_test_events(count: usize) -> Vec<Event> {
    Catalog::builtin()
        .events
        .iter()
        .cycle()
        .take(count)
        .cloned()
        .collect()
}

fn bench_event_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_filter");

    for size in [4, 100, 10000] {
        let events = create_test_events(size);
        group.throughput(Throughput::Elements(size as u64));

        let upcoming = EventFilter::default();
        group.bench_function(format!("upcoming_{}", size), |b| {
            b.iter(|| upcoming.apply(black_box(&events)).len())
        });

        let mut combined = EventFilter::unfiltered();
        combined.set_search("work");
        combined.toggle_category(EventCategory::Workshop);
        combined.toggle_domain(EventDomain::WebDevelopment);
        combined.toggle_domain(EventDomain::AiMl);
        group.bench_function(format!("combined_{}", size), |b| {
            b.iter(|| combined.apply(black_box(&events)).len())
        });
    }

    group.finish();
}

fn bench_carousel(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel");

    for size in [4, 50] {
        let strip = StripMetrics::uniform(size, 400.0, 24.0, 32.0, 1280.0);
        let middle = strip.scrolled_to(strip.max_scroll() / 2.0);

        group.bench_function(format!("centered_index_{}", size), |b| {
            b.iter(|| black_box(&middle).centered_index())
        });

        group.bench_function(format!("advance_target_{}", size), |b| {
            b.iter(|| black_box(&middle).advance_target())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_event_filter, bench_carousel);
criterion_main!(benches);
