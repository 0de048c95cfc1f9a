use criterion::Criterion;
use matchbook_rs::{OrderBook, Price, Quantity, Side, TimeInForce};
use std::hint::black_box;

fn seeded_book(levels: i64, orders_per_level: u64) -> OrderBook {
    let mut order_book = OrderBook::new("TEST-SYMBOL");
    let mut id = 0u64;
    for level in 0..levels {
        for _ in 0..orders_per_level {
            id += 1;
            order_book.submit_limit(
                id,
                Price::from_units(1000 + level),
                Quantity::from_units(10),
                Side::Sell,
                TimeInForce::Gtc,
            );
        }
    }
    order_book
}

/// Register all benchmarks for matching against resting depth
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Match Orders");

    // Benchmark a crossing limit order consuming one maker
    group.bench_function("match_single_maker", |b| {
        b.iter_with_setup(
            || seeded_book(1, 1),
            |mut order_book| {
                let _ = black_box(order_book.submit_limit(
                    9_999,
                    Price::from_units(1000),
                    Quantity::from_units(10),
                    Side::Buy,
                    TimeInForce::Gtc,
                ));
            },
        )
    });

    // Benchmark a market order sweeping several price levels
    group.bench_function("market_sweep_five_levels", |b| {
        b.iter_with_setup(
            || seeded_book(5, 4),
            |mut order_book| {
                let _ = black_box(order_book.submit_market(
                    9_999,
                    Quantity::from_units(200),
                    Side::Buy,
                    TimeInForce::Gtc,
                ));
            },
        )
    });

    // Benchmark the read-only fill-through estimate used by FOK orders
    group.bench_function("peek_match_ten_levels", |b| {
        let order_book = seeded_book(10, 4);
        b.iter(|| {
            black_box(order_book.peek_match(
                Side::Buy,
                Quantity::from_units(300),
                Some(Price::from_units(1010)),
            ))
        })
    });

    group.finish();
}
