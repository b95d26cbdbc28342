use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use erpseed_core::{GenContext, GeneratorConfig};
use erpseed_parties::generate_customers;
use erpseed_products::generate_materials;
use erpseed_sales::generate_orders;

fn config(orders: u64) -> GeneratorConfig {
    GeneratorConfig {
        orders,
        ..GeneratorConfig::default()
    }
}

fn bench_master_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("master_data");
    let config = config(0);
    let schedule = config.validate().unwrap();

    group.throughput(Throughput::Elements(config.customers));
    group.bench_function("customers", |b| {
        b.iter(|| {
            let mut ctx = GenContext::from_seed(black_box(config.seed));
            black_box(generate_customers(&mut ctx, &config, &schedule).unwrap());
        });
    });

    group.throughput(Throughput::Elements(config.materials));
    group.bench_function("materials", |b| {
        b.iter(|| {
            let mut ctx = GenContext::from_seed(black_box(config.seed));
            black_box(generate_materials(&mut ctx, &config, &schedule).unwrap());
        });
    });

    group.finish();
}

fn bench_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("orders");

    for orders in [100u64, 2_000, 20_000].iter() {
        let config = config(*orders);
        let schedule = config.validate().unwrap();
        let mut ctx = GenContext::from_seed(config.seed);
        let customers = generate_customers(&mut ctx, &config, &schedule).unwrap();
        let materials = generate_materials(&mut ctx, &config, &schedule).unwrap();

        group.throughput(Throughput::Elements(*orders));
        group.bench_with_input(BenchmarkId::new("generate", orders), orders, |b, _| {
            b.iter(|| {
                let mut ctx = GenContext::from_seed(config.seed);
                black_box(
                    generate_orders(&mut ctx, &config, &schedule, &customers, &materials).unwrap(),
                );
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_master_data, bench_orders);
criterion_main!(benches);
