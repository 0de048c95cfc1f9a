//! Order book operations for submitting orders

use super::book::OrderBook;
use super::matching::Match;
use crate::pricelevel::{
    Order, OrderId, OrderStatus, OrderType, Price, Quantity, Side, TimeInForce,
};
use tracing::{debug, trace};

impl OrderBook {
    /// Submit an order, returning the matches it produced in fill order.
    ///
    /// The caller keeps the handle: on return the order's executed quantity
    /// and status reflect whatever happened to it, whether or not it ended
    /// up resting. A resting remainder is copied into the book, and from
    /// then on the book's copy (visible through [`OrderBook::get_order`])
    /// is the authoritative one.
    ///
    /// Invalid submissions (id 0, an id already resting, a non-positive
    /// quantity, a limit order without a positive price) are refused
    /// without touching the order or the book; the refusal is logged and
    /// the match list comes back empty.
    pub fn submit(&mut self, order: &mut Order) -> Vec<Match> {
        trace!("Order book {}: submit {}", self.symbol(), order);

        if let Err(err) = self.validate_submission(order) {
            debug!(
                "Order book {}: rejected order {}: {}",
                self.symbol(),
                order.id(),
                err
            );
            return Vec::new();
        }

        order.set_status(OrderStatus::Accepted);

        // Fill-or-kill is decided before anything mutates: if the walk
        // could not satisfy the whole order, kill it and leave the book
        // exactly as it was.
        if order.time_in_force() == TimeInForce::Fok {
            let price_limit = match order.order_type() {
                OrderType::Limit => Some(order.price()),
                OrderType::Market => None,
            };
            let requested = order.remaining_quantity();
            let available = self.peek_match(order.side(), requested, price_limit);
            if available < requested {
                debug!(
                    "Order book {}: killed order {}: {}",
                    self.symbol(),
                    order.id(),
                    super::OrderBookError::InsufficientLiquidity {
                        side: order.side(),
                        requested,
                        available,
                    }
                );
                order.cancel();
                return Vec::new();
            }
        }

        let matches = self.match_against_book(order);

        // A limit remainder rests unless the order was immediate-or-cancel.
        // Market remainders are always discarded.
        if order.order_type() == OrderType::Limit
            && !order.is_filled()
            && order.time_in_force() != TimeInForce::Ioc
        {
            self.rest_order(order.clone());
        }

        matches
    }

    /// Build and submit a limit order in one call
    pub fn submit_limit(
        &mut self,
        id: OrderId,
        price: Price,
        quantity: Quantity,
        side: Side,
        time_in_force: TimeInForce,
    ) -> Vec<Match> {
        trace!(
            "Order book {}: submit limit {} {} {} {} {}",
            self.symbol(),
            id,
            side,
            quantity,
            price,
            time_in_force
        );
        let mut order = Order::new(
            id,
            self.symbol().to_owned(),
            side,
            OrderType::Limit,
            quantity,
            price,
            time_in_force,
        );
        self.submit(&mut order)
    }

    /// Build and submit a market order in one call
    pub fn submit_market(
        &mut self,
        id: OrderId,
        quantity: Quantity,
        side: Side,
        time_in_force: TimeInForce,
    ) -> Vec<Match> {
        trace!(
            "Order book {}: submit market {} {} {} {}",
            self.symbol(),
            id,
            side,
            quantity,
            time_in_force
        );
        let mut order = Order::new(
            id,
            self.symbol().to_owned(),
            side,
            OrderType::Market,
            quantity,
            Price::ZERO,
            time_in_force,
        );
        self.submit(&mut order)
    }
}
