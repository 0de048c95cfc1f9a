use serde::{Deserialize, Serialize};
use std::fmt;

/// Current state of an order.
///
/// `New` orders become `Accepted` on submission. Execution moves an order
/// to `PartiallyFilled` and then `Filled`; `cancel` moves any non-terminal
/// order to `Cancelled`; an in-place quantity modify marks the order
/// `Replaced` without moving it in its queue. `Rejected` exists for hosts
/// that screen orders before submission; the book itself never sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Created but not yet processed.
    New,
    /// Accepted by the book.
    Accepted,
    /// Refused outside the book; never set here.
    Rejected,
    /// Completely executed.
    Filled,
    /// Executed in part, with a positive remainder.
    PartiallyFilled,
    /// Cancelled before completion.
    Cancelled,
    /// Modified in place, keeping its queue position.
    Replaced,
}

impl OrderStatus {
    /// Terminal statuses are never mutated again.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrderStatus::Filled | OrderStatus::Cancelled | OrderStatus::Rejected
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::New => f.write_str("NEW"),
            OrderStatus::Accepted => f.write_str("ACCEPTED"),
            OrderStatus::Rejected => f.write_str("REJECTED"),
            OrderStatus::Filled => f.write_str("FILLED"),
            OrderStatus::PartiallyFilled => f.write_str("PARTIALLY_FILLED"),
            OrderStatus::Cancelled => f.write_str("CANCELLED"),
            OrderStatus::Replaced => f.write_str("REPLACED"),
        }
    }
}
