use criterion::Criterion;
use matchbook_rs::{OrderBook, Price, Quantity, Side, TimeInForce};
use std::hint::black_box;

/// Register all benchmarks for cancelling and modifying resting orders
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Cancel Orders");

    group.bench_function("cancel_from_deep_level", |b| {
        b.iter_with_setup(
            || {
                let mut order_book = OrderBook::new("TEST-SYMBOL");
                for i in 0..100u64 {
                    order_book.submit_limit(
                        i + 1,
                        Price::from_units(1000),
                        Quantity::from_units(10),
                        Side::Buy,
                        TimeInForce::Gtc,
                    );
                }
                order_book
            },
            |mut order_book| {
                // Somewhere in the middle of the queue
                let _ = black_box(order_book.cancel_order(50));
            },
        )
    });

    group.bench_function("modify_quantity_in_place", |b| {
        b.iter_with_setup(
            || {
                let mut order_book = OrderBook::new("TEST-SYMBOL");
                order_book.submit_limit(
                    1,
                    Price::from_units(1000),
                    Quantity::from_units(10),
                    Side::Buy,
                    TimeInForce::Gtc,
                );
                order_book
            },
            |mut order_book| {
                let _ = black_box(order_book.modify_order(
                    1,
                    None,
                    Some(Quantity::from_units(5)),
                ));
            },
        )
    });

    group.finish();
}
