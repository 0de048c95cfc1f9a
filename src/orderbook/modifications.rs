//! Cancelling and modifying resting orders.

use crate::orderbook::OrderBookError;
use crate::orderbook::book::OrderBook;
use crate::orderbook::matching::Match;
use crate::pricelevel::{Order, OrderId, OrderStatus, Price, Quantity, Side};
use tracing::{debug, trace};

impl OrderBook {
    /// Cancel a resting order by id.
    ///
    /// Removes the order from its level and the index, adjusts the side
    /// total by the order's remaining quantity, marks it `Cancelled`, and
    /// drops the level if that emptied it. Returns `false` when no such
    /// order is resting.
    pub fn cancel_order(&mut self, order_id: OrderId) -> bool {
        let Some(&(price, side)) = self.order_locations.get(&order_id) else {
            trace!(
                "Order book {}: cancel ignored: {}",
                self.symbol(),
                OrderBookError::OrderNotFound(order_id)
            );
            return false;
        };

        let removed = match self.side_levels_mut(side).get_mut(&price) {
            Some(level) => level.remove_order(order_id),
            None => None,
        };
        let Some(mut order) = removed else {
            return false;
        };

        match side {
            Side::Buy => self.total_bid_quantity -= order.remaining_quantity(),
            Side::Sell => self.total_ask_quantity -= order.remaining_quantity(),
        }
        order.cancel();
        self.order_locations.remove(&order_id);
        self.remove_level_if_empty(price, side);

        trace!(
            "Order book {}: cancelled order {} at {}",
            self.symbol(),
            order_id,
            price
        );
        true
    }

    /// Modify a resting order's price and/or quantity.
    ///
    /// A quantity-only change that does not increase the total is applied
    /// in place, preserving the order's queue position, and marks the order
    /// `Replaced`; no matches can result. Every other change is a cancel
    /// and replace: the order is pulled, rebuilt with the new terms, and
    /// resubmitted at the back of the queue, so it loses time priority and
    /// may match immediately. Passing neither field, or an unknown id, is
    /// a no-op returning no matches.
    pub fn modify_order(
        &mut self,
        order_id: OrderId,
        new_price: Option<Price>,
        new_quantity: Option<Quantity>,
    ) -> Vec<Match> {
        if new_price.is_none() && new_quantity.is_none() {
            return Vec::new();
        }

        let Some(&(price, side)) = self.order_locations.get(&order_id) else {
            trace!(
                "Order book {}: modify ignored: {}",
                self.symbol(),
                OrderBookError::OrderNotFound(order_id)
            );
            return Vec::new();
        };

        // Quantity-only decrease keeps the queue position.
        if new_price.is_none() {
            if let Some(new_qty) = new_quantity {
                let current = match self.get_order(order_id) {
                    Some(order) => order.quantity(),
                    None => return Vec::new(),
                };
                if new_qty <= current {
                    return self.modify_quantity_in_place(order_id, price, side, new_qty);
                }
            }
        }

        // Cancel and replace: the replacement is a fresh order with fresh
        // timestamps, so it goes to the back of the queue at its price.
        let Some(existing) = self.get_order(order_id) else {
            return Vec::new();
        };
        let symbol = existing.symbol().to_owned();
        let order_side = existing.side();
        let order_type = existing.order_type();
        let time_in_force = existing.time_in_force();
        let replace_quantity = new_quantity.unwrap_or(existing.quantity());
        let replace_price = new_price.unwrap_or(existing.price());

        if !self.cancel_order(order_id) {
            return Vec::new();
        }

        trace!(
            "Order book {}: replacing order {} with {} at {}",
            self.symbol(),
            order_id,
            replace_quantity,
            replace_price
        );
        let mut replacement = Order::new(
            order_id,
            symbol,
            order_side,
            order_type,
            replace_quantity,
            replace_price,
            time_in_force,
        );
        self.submit(&mut replacement)
    }

    /// Shrink a resting order where it stands. The side total moves by the
    /// change in the order's remainder; the level never empties here
    /// because the remainder stays positive.
    fn modify_quantity_in_place(
        &mut self,
        order_id: OrderId,
        price: Price,
        side: Side,
        new_quantity: Quantity,
    ) -> Vec<Match> {
        let (old_remaining, new_remaining) = {
            let Some(level) = self.side_levels_mut(side).get_mut(&price) else {
                return Vec::new();
            };
            let Some(order) = level.get_order(order_id) else {
                return Vec::new();
            };
            let old_remaining = order.remaining_quantity();
            let executed = order.executed_quantity();

            if !level.modify_order_quantity(order_id, new_quantity) {
                debug!(
                    "Modify refused for order {} at {}: {}",
                    order_id,
                    price,
                    OrderBookError::QuantityBelowExecuted {
                        requested: new_quantity,
                        executed,
                    }
                );
                return Vec::new();
            }

            let Some(order) = level.get_order_mut(order_id) else {
                return Vec::new();
            };
            order.set_status(OrderStatus::Replaced);
            (old_remaining, order.remaining_quantity())
        };

        match side {
            Side::Buy => {
                self.total_bid_quantity = self.total_bid_quantity - old_remaining + new_remaining;
            }
            Side::Sell => {
                self.total_ask_quantity = self.total_ask_quantity - old_remaining + new_remaining;
            }
        }

        trace!(
            "Order book {}: order {} quantity now {}",
            self.symbol(),
            order_id,
            new_quantity
        );
        Vec::new()
    }
}
