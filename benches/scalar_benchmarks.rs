use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use polyrat::modules::scalar::Scalar;
use num_bigint::BigInt;
use rand::Rng;

fn generate_random_scalar() -> Scalar {
    let mut rng = rand::thread_rng();
    Scalar::from(BigInt::from(rng.gen::<u64>()))
}

fn generate_random_ratio() -> Scalar {
    let mut rng = rand::thread_rng();
    Scalar::ratio(rng.gen::<i32>() as i64, rng.gen_range(1..1_000_000))
}

fn bench_scalar_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_arithmetic");

    let a = generate_random_scalar();
    let b = generate_random_scalar();

    group.bench_function("addition", |bench| {
        bench.iter(|| {
            black_box(a.clone() + b.clone())
        })
    });

    group.bench_function("subtraction", |bench| {
        bench.iter(|| {
            black_box(a.clone() - b.clone())
        })
    });

    group.bench_function("multiplication", |bench| {
        bench.iter(|| {
            black_box(a.clone() * b.clone())
        })
    });

    group.bench_function("division", |bench| {
        bench.iter(|| {
            black_box(a.clone() / b.clone())
        })
    });

    group.bench_function("negation", |bench| {
        bench.iter(|| {
            black_box(-a.clone())
        })
    });

    group.finish();
}

fn bench_rational_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("rational_arithmetic");

    let a = generate_random_ratio();
    let b = generate_random_ratio();

    group.bench_function("addition", |bench| {
        bench.iter(|| {
            black_box(a.clone() + b.clone())
        })
    });

    group.bench_function("multiplication", |bench| {
        bench.iter(|| {
            black_box(a.clone() * b.clone())
        })
    });

    // mixed-kind operands exercise the promotion path
    let int = generate_random_scalar();
    group.bench_function("mixed_addition", |bench| {
        bench.iter(|| {
            black_box(a.clone() + int.clone())
        })
    });

    group.finish();
}

fn bench_scalar_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_power");

    let base = generate_random_scalar();
    let exponents = vec![2usize, 4, 8, 16, 32, 64, 128, 256, 1024];

    for exp in exponents {
        group.bench_with_input(
            BenchmarkId::new("pow", exp),
            &exp,
            |b, &exponent| {
                b.iter(|| {
                    black_box(base.pow(black_box(exponent)))
                })
            },
        );
    }

    group.finish();
}

fn bench_scalar_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_comparison");

    let elements = (0..100).map(|_| generate_random_scalar()).collect::<Vec<_>>();

    group.bench_function("equality", |b| {
        let mut idx = 0;
        b.iter(|| {
            let a = &elements[idx % elements.len()];
            let b = &elements[(idx + 1) % elements.len()];
            idx += 1;
            black_box(a == b)
        })
    });

    group.finish();
}

fn bench_scalar_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_serialization");

    let element = generate_random_ratio();

    group.bench_function("to_string", |b| {
        b.iter(|| {
            black_box(element.to_string())
        })
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| {
            black_box(serde_json::to_string(&element).unwrap())
        })
    });

    let serialized = serde_json::to_string(&element).unwrap();
    group.bench_function("json_deserialize", |b| {
        b.iter(|| {
            black_box(serde_json::from_str::<Scalar>(&serialized).unwrap())
        })
    });

    group.finish();
}

fn bench_scalar_batch_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_batch_operations");

    let sizes = vec![10, 100, 1000];

    for size in sizes {
        let elements = (0..size).map(|_| generate_random_scalar()).collect::<Vec<_>>();

        group.bench_with_input(
            BenchmarkId::new("batch_addition", size),
            &size,
            |b, _| {
                b.iter(|| {
                    let mut sum = Scalar::from(0);
                    for elem in &elements {
                        sum = sum + elem.clone();
                    }
                    black_box(sum)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("batch_multiplication", size),
            &size,
            |b, _| {
                b.iter(|| {
                    let mut product = Scalar::from(1);
                    for elem in &elements {
                        product = product * elem.clone();
                    }
                    black_box(product)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalar_arithmetic,
    bench_rational_arithmetic,
    bench_scalar_power,
    bench_scalar_comparison,
    bench_scalar_serialization,
    bench_scalar_batch_operations
);
criterion_main!(benches);
