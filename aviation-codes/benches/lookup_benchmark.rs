use std::hint::black_box;

use aviation_codes::{Airlines, Airports, SearchOptions};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const AIRPORTS: &str = include_str!("../tests/data/airports.dat");
const AIRLINES: &str = include_str!("../tests/data/airlines.dat");

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.throughput(Throughput::Bytes(AIRPORTS.len() as u64));
    group.bench_function("airports", |b| {
        b.iter(|| Airports::from_openflights(black_box(AIRPORTS)))
    });

    group.throughput(Throughput::Bytes(AIRLINES.len() as u64));
    group.bench_function("airlines", |b| {
        b.iter(|| Airlines::from_openflights(black_box(AIRLINES)))
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let airports = Airports::from_openflights(AIRPORTS);

    c.bench_function("iata is", |b| b.iter(|| airports.iata().is(black_box("lax"))));

    c.bench_function("icao get", |b| {
        b.iter(|| airports.icao().get(black_box("KJFK")))
    });

    c.bench_function("detect parse", |b| b.iter(|| airports.parse(black_box("KLAX"))));

    c.bench_function("unknown length", |b| {
        b.iter(|| airports.parse(black_box("Los Angeles")))
    });
}

/// Benchmark the linear scan, which is worst when nothing matches
fn bench_search(c: &mut Criterion) {
    let airports = Airports::from_openflights(AIRPORTS);
    let airlines = Airlines::from_openflights(AIRLINES);

    c.bench_function("search first match", |b| {
        b.iter(|| airports.search(black_box("Los Angeles"), SearchOptions::default().with_limit(1)))
    });

    c.bench_function("search no match", |b| {
        b.iter(|| airports.search(black_box("Atlantis"), SearchOptions::default()))
    });

    c.bench_function("search active airlines", |b| {
        b.iter(|| airlines.search(black_box("us"), SearchOptions::default().only_active()))
    });
}

criterion_group!(benches, bench_build, bench_lookup, bench_search);
criterion_main!(benches);
