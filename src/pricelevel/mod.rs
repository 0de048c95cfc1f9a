//! Price-level domain: fixed-point numbers, order records, and the FIFO
//! price bucket the book is built from.

mod error;
mod fixed;
mod level;
mod order;
mod order_type;
mod side;
mod status;
mod time_in_force;

#[cfg(test)]
mod tests;

pub use error::PriceLevelError;
pub use fixed::{Price, Quantity, SCALE_FACTOR};
pub use level::{LevelMatch, PriceLevel};
pub use order::{INVALID_ORDER_ID, Order, OrderId};
pub use order_type::OrderType;
pub use side::Side;
pub use status::OrderStatus;
pub use time_in_force::TimeInForce;
