// Criterion benchmarks for the IPv4 validator.
// Compares cost across input shapes: the validator is linear in input
// length, so the overlong case should dominate.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use testing_patterns::ip::is_ipv4;

fn benchmark_is_ipv4(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_ipv4");

    let inputs: &[(&str, &str)] = &[
        ("valid", "192.168.0.1"),
        ("out_of_range", "256.168.0.1"),
        ("non_digit", "192.168.x.1"),
        ("wrong_arity", "192.168.0"),
        ("overlong", "111111111111111111111111111111.1.1.1"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| is_ipv4(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_is_ipv4);
criterion_main!(benches);
