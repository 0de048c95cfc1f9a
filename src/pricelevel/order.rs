//! The order record: immutable identity plus mutable execution state.

use crate::pricelevel::{OrderStatus, OrderType, Price, Quantity, Side, TimeInForce};
use crate::utils::current_time_nanos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order identifier, unique within the lifetime of a book.
pub type OrderId = u64;

/// Reserved id meaning "no order".
pub const INVALID_ORDER_ID: OrderId = 0;

/// A single order: who it is, what it wants, and how much of it has
/// executed so far.
///
/// Identity fields (id, symbol, side, type, time in force, creation time)
/// never change after construction. Price changes only through the book's
/// modify path, quantity and status only through the execution accessors,
/// so the executed amount can never exceed the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    symbol: String,
    side: Side,
    order_type: OrderType,
    quantity: Quantity,
    executed_quantity: Quantity,
    price: Price,
    time_in_force: TimeInForce,
    status: OrderStatus,
    created_at: i64,
    last_update: i64,
}

impl Order {
    /// Creates a new order in status `New`, timestamped from the clock.
    pub fn new(
        id: OrderId,
        symbol: impl Into<String>,
        side: Side,
        order_type: OrderType,
        quantity: Quantity,
        price: Price,
        time_in_force: TimeInForce,
    ) -> Self {
        let now = current_time_nanos();
        Order {
            id,
            symbol: symbol.into(),
            side,
            order_type,
            quantity,
            executed_quantity: Quantity::ZERO,
            price,
            time_in_force,
            status: OrderStatus::New,
            created_at: now,
            last_update: now,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn executed_quantity(&self) -> Quantity {
        self.executed_quantity
    }

    /// Quantity still open: total minus executed.
    pub fn remaining_quantity(&self) -> Quantity {
        self.quantity - self.executed_quantity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn time_in_force(&self) -> TimeInForce {
        self.time_in_force
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Creation timestamp, nanoseconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Timestamp of the last status or execution change, nanoseconds.
    pub fn last_update(&self) -> i64 {
        self.last_update
    }

    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.last_update = current_time_nanos();
    }

    /// Executes up to `exec_qty` of the order, clamped to the remainder,
    /// and moves the status to `PartiallyFilled` or `Filled` accordingly.
    pub fn execute(&mut self, exec_qty: Quantity) {
        let exec = exec_qty.min(self.remaining_quantity());
        self.executed_quantity += exec;

        if self.executed_quantity == self.quantity {
            self.status = OrderStatus::Filled;
        } else if self.executed_quantity > Quantity::ZERO {
            self.status = OrderStatus::PartiallyFilled;
        }
        self.last_update = current_time_nanos();
    }

    /// Cancels the order unless it already reached a terminal status.
    pub fn cancel(&mut self) {
        if !self.status.is_terminal() {
            self.set_status(OrderStatus::Cancelled);
        }
    }

    /// Whether the order can still execute.
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            OrderStatus::New | OrderStatus::Accepted | OrderStatus::PartiallyFilled
        )
    }

    /// Whether the order is completely executed.
    pub fn is_filled(&self) -> bool {
        self.executed_quantity == self.quantity || self.status == OrderStatus::Filled
    }

    /// Whether the order carries a usable id.
    pub fn is_valid(&self) -> bool {
        self.id != INVALID_ORDER_ID
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order[id={}, symbol={}, side={}, type={}, qty={}, exec_qty={}, price={}, tif={}, status={}, time={}, last_update={}]",
            self.id,
            self.symbol,
            self.side,
            self.order_type,
            self.quantity,
            self.executed_quantity,
            self.price,
            self.time_in_force,
            self.status,
            self.created_at,
            self.last_update
        )
    }
}
