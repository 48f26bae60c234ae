use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use humanid::{Codec, RawId, dehumanize, humanize, parse_legacy};

// Number of ids processed per benchmark iteration.
const TOTAL_IDS: u32 = 4096;

fn sample_ids() -> Vec<u32> {
    // spread across every display length
    (0..TOTAL_IDS).map(|i| i.wrapping_mul(1_048_583)).collect()
}

fn bench_encode(c: &mut Criterion) {
    let ids = sample_ids();
    let codec = Codec::new();

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(u64::from(TOTAL_IDS)));

    group.bench_function(format!("to_buf/{TOTAL_IDS}"), |b| {
        let mut buf = <u32 as RawId>::DisplayArray::default();
        b.iter(|| {
            for &id in &ids {
                black_box(codec.encode_to_buf(id, &mut buf).len());
            }
        });
    });

    group.bench_function(format!("formatter/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for &id in &ids {
                black_box(codec.encode(id));
            }
        });
    });

    group.bench_function(format!("string/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for &id in &ids {
                black_box(humanize(id));
            }
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let encoded: Vec<String> = sample_ids().into_iter().map(humanize).collect();
    let decimal: Vec<String> = sample_ids().into_iter().map(|id| id.to_string()).collect();
    let canonical = Codec::new().with_canonical(true);

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(u64::from(TOTAL_IDS)));

    group.bench_function(format!("default/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for s in &encoded {
                black_box(dehumanize::<u32>(s).ok());
            }
        });
    });

    group.bench_function(format!("canonical/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for s in &encoded {
                black_box(canonical.decode::<u32>(s).ok());
            }
        });
    });

    group.bench_function(format!("legacy_decimal/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for s in &decimal {
                black_box(parse_legacy::<u32>(s).ok());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
