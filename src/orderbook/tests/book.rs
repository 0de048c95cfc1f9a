#[cfg(test)]
mod tests {
    use crate::pricelevel::{Price, Quantity, Side, TimeInForce};
    use crate::{Match, OrderBook};
    use std::sync::atomic::{AtomicU64, Ordering};

    fn price(value: f64) -> Price {
        Price::from_f64(value)
    }

    fn qty(units: i64) -> Quantity {
        Quantity::from_units(units)
    }

    #[test]
    fn test_empty_book_queries() {
        let book = OrderBook::new("TEST");
        assert_eq!(book.symbol(), "TEST");
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
        assert_eq!(book.spread(), None);
        assert_eq!(book.midpoint(), None);
        assert_eq!(book.last_trade_price(), None);
        assert_eq!(book.order_count(), 0);
        assert_eq!(book.bid_level_count(), 0);
        assert_eq!(book.ask_level_count(), 0);
        assert_eq!(book.total_bid_quantity(), Quantity::ZERO);
        assert_eq!(book.total_ask_quantity(), Quantity::ZERO);
        assert!(book.bid_prices().is_empty());
        assert!(book.ask_prices().is_empty());
    }

    #[test]
    fn test_best_prices_and_spread() {
        let mut book = OrderBook::new("TEST");
        book.submit_limit(1, price(99.0), qty(10), Side::Buy, TimeInForce::Gtc);
        book.submit_limit(2, price(100.0), qty(5), Side::Buy, TimeInForce::Gtc);
        book.submit_limit(3, price(102.0), qty(8), Side::Sell, TimeInForce::Gtc);
        book.submit_limit(4, price(103.0), qty(4), Side::Sell, TimeInForce::Gtc);

        assert_eq!(book.best_bid(), Some(price(100.0)));
        assert_eq!(book.best_ask(), Some(price(102.0)));
        assert_eq!(book.spread(), Some(price(2.0)));
        assert_eq!(book.midpoint(), Some(price(101.0)));
    }

    #[test]
    fn test_midpoint_truncates_toward_zero() {
        let mut book = OrderBook::new("TEST");
        book.submit_limit(1, Price::new(1_000_000), qty(1), Side::Buy, TimeInForce::Gtc);
        book.submit_limit(2, Price::new(1_000_001), qty(1), Side::Sell, TimeInForce::Gtc);

        // (1_000_000 + 1_000_001) / 2 = 1_000_000 on the raw value.
        assert_eq!(book.midpoint(), Some(Price::new(1_000_000)));
    }

    #[test]
    fn test_price_ladders_are_best_first() {
        let mut book = OrderBook::new("TEST");
        book.submit_limit(1, price(98.0), qty(1), Side::Buy, TimeInForce::Gtc);
        book.submit_limit(2, price(100.0), qty(1), Side::Buy, TimeInForce::Gtc);
        book.submit_limit(3, price(99.0), qty(1), Side::Buy, TimeInForce::Gtc);
        book.submit_limit(4, price(103.0), qty(1), Side::Sell, TimeInForce::Gtc);
        book.submit_limit(5, price(101.0), qty(1), Side::Sell, TimeInForce::Gtc);
        book.submit_limit(6, price(102.0), qty(1), Side::Sell, TimeInForce::Gtc);

        assert_eq!(
            book.bid_prices(),
            vec![price(100.0), price(99.0), price(98.0)],
            "bids descend from the best"
        );
        assert_eq!(
            book.ask_prices(),
            vec![price(101.0), price(102.0), price(103.0)],
            "asks ascend from the best"
        );
    }

    #[test]
    fn test_depth_maps_and_per_level_queries() {
        let mut book = OrderBook::new("TEST");
        book.submit_limit(1, price(100.0), qty(5), Side::Buy, TimeInForce::Gtc);
        book.submit_limit(2, price(100.0), qty(3), Side::Buy, TimeInForce::Gtc);
        book.submit_limit(3, price(102.0), qty(8), Side::Sell, TimeInForce::Gtc);

        assert_eq!(book.quantity_at_price(price(100.0), Side::Buy), qty(8));
        assert_eq!(
            book.quantity_at_price(price(50.0), Side::Buy),
            Quantity::ZERO
        );

        let at_level = book.orders_at_price(price(100.0), Side::Buy);
        assert_eq!(at_level.len(), 2);
        assert_eq!(at_level[0].id(), 1, "priority order");
        assert_eq!(at_level[1].id(), 2);

        let bids = book.bids_snapshot();
        assert_eq!(bids.get(&price(100.0)), Some(&qty(8)));
        let asks = book.asks_snapshot();
        assert_eq!(asks.get(&price(102.0)), Some(&qty(8)));
    }

    #[test]
    fn test_get_order() {
        let mut book = OrderBook::new("TEST");
        book.submit_limit(7, price(100.0), qty(5), Side::Buy, TimeInForce::Gtc);

        let resting = book.get_order(7).expect("order 7 rests");
        assert_eq!(resting.id(), 7);
        assert_eq!(resting.price(), price(100.0));
        assert_eq!(resting.remaining_quantity(), qty(5));

        assert!(book.get_order(42).is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut book = OrderBook::new("TEST");
        book.submit_limit(1, price(100.0), qty(5), Side::Buy, TimeInForce::Gtc);
        book.submit_limit(2, price(102.0), qty(5), Side::Sell, TimeInForce::Gtc);
        book.submit_limit(3, price(102.0), qty(2), Side::Buy, TimeInForce::Gtc);
        assert!(book.last_trade_price().is_some());

        book.clear();

        assert_eq!(book.order_count(), 0);
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
        assert_eq!(book.total_bid_quantity(), Quantity::ZERO);
        assert_eq!(book.total_ask_quantity(), Quantity::ZERO);
        assert_eq!(book.last_trade_price(), None);
        assert_eq!(book.symbol(), "TEST", "identity survives the reset");
    }

    #[test]
    fn test_display_renders_none_for_missing_sides() {
        let mut book = OrderBook::new("TEST");
        let rendered = book.to_string();
        assert!(rendered.contains("symbol=TEST"));
        assert!(rendered.contains("best_bid=none"));
        assert!(rendered.contains("best_ask=none"));
        assert!(rendered.contains("spread=none"));

        book.submit_limit(1, price(100.0), qty(5), Side::Buy, TimeInForce::Gtc);
        assert!(book.to_string().contains("best_bid=100.0000"));
    }

    #[test]
    fn test_match_listener_sees_every_fill() {
        static SEEN: AtomicU64 = AtomicU64::new(0);
        fn listener(fill: &Match) {
            SEEN.fetch_add(fill.quantity.raw_value() as u64, Ordering::SeqCst);
        }

        let mut book = OrderBook::with_match_listener("TEST", listener);
        book.submit_limit(1, price(102.0), qty(8), Side::Sell, TimeInForce::Gtc);
        book.submit_limit(2, price(103.0), qty(5), Side::Buy, TimeInForce::Gtc);

        assert_eq!(SEEN.load(Ordering::SeqCst), qty(5).raw_value() as u64);
        assert_eq!(book.last_trade_price(), Some(price(102.0)));
    }
}
