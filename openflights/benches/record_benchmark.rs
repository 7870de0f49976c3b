use std::fs;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use openflights::records::{Airline, Airport};
use openflights::Lines;

const AIRPORT: &str = r#"3484,"Los Angeles International Airport","Los Angeles","United States","LAX","KLAX",33.94250107,-118.4079971,125,-8,"A","America/Los_Angeles","airport","OurAirports""#;
const AIRLINE: &str = r#"24,"American Airlines",\N,"AA","AAL","AMERICAN","United States","Y""#;

fn bench_records(c: &mut Criterion) {
    c.bench_function("split", |b| b.iter(|| openflights::split(black_box(AIRPORT))));

    c.bench_function("airport", |b| b.iter(|| Airport::try_from(black_box(AIRPORT))));

    c.bench_function("airline", |b| b.iter(|| Airline::try_from(black_box(AIRLINE))));
}

/// Benchmark to own a field and to parse a lenient number
fn bench_to_owned(c: &mut Criterion) {
    c.bench_function("field to String", |b| {
        b.iter(|| {
            let arpt = Airport::try_from(black_box(AIRPORT)).expect("airport should parse");
            let _: String = arpt.name.into();
        })
    });

    c.bench_function("field to f64", |b| {
        b.iter(|| {
            let arpt = Airport::try_from(black_box(AIRPORT)).expect("airport should parse");
            let _: f64 = arpt.latitude.as_f64_lenient();
        })
    });
}

/// Benchmark parsing the complete OpenFlights airports table
fn bench_airports_dat(c: &mut Criterion) {
    // Load file once
    let data = fs::read_to_string("../aviation-codes/tests/data/airports.dat")
        .expect("airports.dat should be readable");
    let mut group = c.benchmark_group("airports.dat");

    group.throughput(Throughput::Bytes(data.len() as u64));

    // Benchmark: Just iterate over lines (baseline)
    group.bench_function("baseline", |b| {
        b.iter(|| {
            let count = Lines::new(&data).count();
            black_box(count)
        })
    });

    group.bench_function("airports", |b| {
        b.iter(|| {
            let count = Lines::new(&data)
                .filter(|line| Airport::try_from(*line).is_ok())
                .count();
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_records, bench_to_owned, bench_airports_dat);
criterion_main!(benches);
