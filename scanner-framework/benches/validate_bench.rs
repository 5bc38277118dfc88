use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use scanner_framework::{is_valid_date_time, Validator};

// --- Data Generation ---

fn generate_valid(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| {
            format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}\n",
                1970 + i % 100,
                1 + i % 12,
                1 + i % 31,
                i % 24,
                i % 60,
                (i * 7) % 60,
                if i % 2 == 0 { "Z".to_string() } else { format!("+{:02}:30", i % 24) }
            )
            .into_bytes()
        })
        .collect()
}

fn generate_invalid(count: usize) -> Vec<Vec<u8>> {
    let samples: [&[u8]; 6] = [
        b"2024-13-01T00:00:00Z\n",
        b"2024-01-01T00:00:00\n",
        b"2024-01-01T00:00:00Zx\n",
        b"not a date at all\n",
        b"\n",
        b"2024-01-01T00:00:00+99:00\n",
    ];
    (0..count).map(|i| samples[i % samples.len()].to_vec()).collect()
}

fn bench_validator(c: &mut Criterion) {
    let mut group = c.benchmark_group("validator");

    let valid = generate_valid(10_000);
    let invalid = generate_invalid(10_000);
    let validator = Validator::new();

    group.throughput(Throughput::Elements(valid.len() as u64));
    group.bench_function("valid_10k", |b| {
        b.iter(|| {
            for line in &valid {
                black_box(validator.is_valid(line));
            }
        })
    });

    group.throughput(Throughput::Elements(invalid.len() as u64));
    group.bench_function("invalid_10k", |b| {
        b.iter(|| {
            for line in &invalid {
                black_box(validator.is_valid(line));
            }
        })
    });

    group.throughput(Throughput::Elements(valid.len() as u64));
    group.bench_function("free_function_10k", |b| {
        b.iter(|| {
            for line in &valid {
                black_box(is_valid_date_time(line, line.len()));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_validator);
criterion_main!(benches);
