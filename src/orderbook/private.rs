use crate::orderbook::OrderBookError;
use crate::orderbook::book::OrderBook;
use crate::pricelevel::{Order, OrderType, Price, PriceLevel, Quantity, Side};
use tracing::trace;

impl OrderBook {
    /// Classify a submission before it is allowed to touch the book.
    pub(super) fn validate_submission(&self, order: &Order) -> Result<(), OrderBookError> {
        if !order.is_valid() {
            return Err(OrderBookError::InvalidOrderId);
        }
        if self.order_locations.contains_key(&order.id()) {
            return Err(OrderBookError::DuplicateOrderId(order.id()));
        }
        if order.quantity() <= Quantity::ZERO {
            return Err(OrderBookError::InvalidQuantity(order.quantity()));
        }
        if order.order_type() == OrderType::Limit && order.price() <= Price::ZERO {
            return Err(OrderBookError::InvalidPrice(order.price()));
        }
        Ok(())
    }

    /// Put a limit remainder to rest at its price, creating the level on
    /// first use, and index it for O(1) lookup. The matching walk has
    /// already consumed all marketable opposite depth, so resting here can
    /// never cross the book.
    pub(super) fn rest_order(&mut self, order: Order) {
        let side = order.side();
        let price = order.price();
        let remaining = order.remaining_quantity();

        match side {
            Side::Buy => self.total_bid_quantity += remaining,
            Side::Sell => self.total_ask_quantity += remaining,
        }
        self.order_locations.insert(order.id(), (price, side));

        let level = self
            .side_levels_mut(side)
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price));
        level.add_order(order);

        trace!(
            "Order book {}: resting {} {} at {}",
            self.symbol(),
            side,
            remaining,
            price
        );
    }

    /// Drop a price level the moment it holds no live orders.
    pub(super) fn remove_level_if_empty(&mut self, price: Price, side: Side) {
        let levels = self.side_levels_mut(side);
        if levels.get(&price).is_some_and(PriceLevel::is_empty) {
            levels.remove(&price);
        }
    }
}
