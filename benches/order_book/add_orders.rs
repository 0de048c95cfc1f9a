use criterion::{BenchmarkId, Criterion};
use matchbook_rs::{OrderBook, Price, Quantity, Side, TimeInForce};
use std::hint::black_box;

/// Register all benchmarks for adding orders to an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    // Benchmark adding non-crossing limit orders
    group.bench_function("add_limit_orders", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = black_box(order_book.submit_limit(
                    i + 1,
                    Price::from_units(1000 + i as i64),
                    Quantity::from_units(10),
                    Side::Buy,
                    TimeInForce::Gtc,
                ));
            }
        })
    });

    // Benchmark stacking orders onto a single price level
    group.bench_function("add_orders_single_level", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = black_box(order_book.submit_limit(
                    i + 1,
                    Price::from_units(1000),
                    Quantity::from_units(10),
                    Side::Sell,
                    TimeInForce::Gtc,
                ));
            }
        })
    });

    // Parametrized benchmark with different order counts
    for order_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("order_count_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let mut order_book = OrderBook::new("TEST-SYMBOL");
                    for i in 0..order_count {
                        let _ = black_box(order_book.submit_limit(
                            i + 1,
                            Price::from_units(1000 + (i % 16) as i64),
                            Quantity::from_units(10),
                            Side::Buy,
                            TimeInForce::Gtc,
                        ));
                    }
                })
            },
        );
    }

    group.finish();
}
