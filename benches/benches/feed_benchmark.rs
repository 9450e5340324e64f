//! Feed decoding, parsing and calendar benchmarks.
//!
//! Run with: `cargo bench --package kursd-bench`

use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use encoding_rs::WINDOWS_1251;
use kursd_bench::synthetic_feed;
use kursd_calendar::HolidayCalendar;
use kursd_feed::{decode_feed, parse_snapshot};

fn trading_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_snapshot");

    for count in [10usize, 50, 200] {
        let doc = synthetic_feed(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &doc, |b, doc| {
            b.iter(|| parse_snapshot(black_box(doc), trading_date()));
        });
    }

    group.finish();
}

fn decode_benchmark(c: &mut Criterion) {
    let doc = synthetic_feed(50);
    let (encoded, _, _) = WINDOWS_1251.encode(&doc);
    let encoded = encoded.into_owned();

    let mut group = c.benchmark_group("decode_feed");
    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("windows_1251", |b| {
        b.iter(|| decode_feed(black_box(&encoded)));
    });
    group.finish();
}

fn calendar_benchmark(c: &mut Criterion) {
    let calendar = HolidayCalendar::global();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let dates: Vec<NaiveDate> = (0..365)
        .map(|offset| start + chrono::Duration::days(offset))
        .collect();

    c.bench_function("last_working_day_year", |b| {
        b.iter(|| {
            for date in &dates {
                black_box(calendar.last_working_day(*date));
            }
        });
    });
}

criterion_group!(benches, parse_benchmark, decode_benchmark, calendar_benchmark);
criterion_main!(benches);
