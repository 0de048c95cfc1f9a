//! Order book error types

use crate::pricelevel::{OrderId, Price, PriceLevelError, Quantity, Side};
use std::fmt;

/// Ways an operation can be refused.
///
/// The mutating API never surfaces these as return values: an invalid
/// submission yields an empty match list and an unknown id yields `false`
/// or an empty list. The classification exists for internal validation and
/// for the log, so a host can see why an order went nowhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// The reserved id 0 was used for a live order
    InvalidOrderId,

    /// Submitted order has no positive quantity
    InvalidQuantity(Quantity),

    /// Limit order without a positive price
    InvalidPrice(Price),

    /// An order with this id is already resting
    DuplicateOrderId(OrderId),

    /// No resting order with this id
    OrderNotFound(OrderId),

    /// In-place modify would cut quantity to or below what already executed
    QuantityBelowExecuted {
        /// The quantity the modify asked for
        requested: Quantity,
        /// Quantity already executed
        executed: Quantity,
    },

    /// Fill-or-kill order cannot be completely filled
    InsufficientLiquidity {
        /// The side of the starving order
        side: Side,
        /// Quantity requested
        requested: Quantity,
        /// Quantity available
        available: Quantity,
    },

    /// Error from the underlying price level domain
    PriceLevel(PriceLevelError),
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::InvalidOrderId => write!(f, "Order id 0 is reserved"),
            OrderBookError::InvalidQuantity(quantity) => {
                write!(f, "Order quantity must be positive, got {}", quantity)
            }
            OrderBookError::InvalidPrice(price) => {
                write!(f, "Limit price must be positive, got {}", price)
            }
            OrderBookError::DuplicateOrderId(id) => {
                write!(f, "Order id already resting: {}", id)
            }
            OrderBookError::OrderNotFound(id) => write!(f, "Order not found: {}", id),
            OrderBookError::QuantityBelowExecuted {
                requested,
                executed,
            } => {
                write!(
                    f,
                    "New quantity {} does not exceed executed quantity {}",
                    requested, executed
                )
            }
            OrderBookError::InsufficientLiquidity {
                side,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Insufficient liquidity for {} order: requested {}, available {}",
                    side, requested, available
                )
            }
            OrderBookError::PriceLevel(err) => write!(f, "Price level error: {}", err),
        }
    }
}

impl std::error::Error for OrderBookError {}

impl From<PriceLevelError> for OrderBookError {
    fn from(err: PriceLevelError) -> Self {
        OrderBookError::PriceLevel(err)
    }
}
