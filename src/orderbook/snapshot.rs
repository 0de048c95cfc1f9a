//! Order book snapshot for market data

use crate::orderbook::book::OrderBook;
use crate::pricelevel::{Price, PriceLevel, Quantity};
use crate::utils::current_time_nanos;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Depth view of a single price level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// The level's price
    pub price: Price,
    /// Number of live orders at the level
    pub order_count: usize,
    /// Sum of the remaining quantities at the level
    pub total_quantity: Quantity,
}

impl From<&PriceLevel> for LevelSnapshot {
    fn from(level: &PriceLevel) -> Self {
        LevelSnapshot {
            price: level.price(),
            order_count: level.order_count(),
            total_quantity: level.total_quantity(),
        }
    }
}

/// A snapshot of the order book state at a specific point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// When the snapshot was created (nanoseconds since epoch)
    pub timestamp: i64,

    /// Bid levels, best (highest price) first
    pub bids: Vec<LevelSnapshot>,

    /// Ask levels, best (lowest price) first
    pub asks: Vec<LevelSnapshot>,
}

impl OrderBookSnapshot {
    /// Get the best bid price and quantity
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids
            .first()
            .map(|level| (level.price, level.total_quantity))
    }

    /// Get the best ask price and quantity
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks
            .first()
            .map(|level| (level.price, level.total_quantity))
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(ask - bid),
            _ => None,
        }
    }

    /// Midpoint of the best prices, truncating toward zero on the raw value
    pub fn midpoint(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => {
                Some(Price::new((bid.raw_value() + ask.raw_value()) / 2))
            }
            _ => None,
        }
    }

    /// Total quantity across the captured bid levels
    pub fn total_bid_quantity(&self) -> Quantity {
        self.bids
            .iter()
            .fold(Quantity::ZERO, |acc, level| acc + level.total_quantity)
    }

    /// Total quantity across the captured ask levels
    pub fn total_ask_quantity(&self) -> Quantity {
        self.asks
            .iter()
            .fold(Quantity::ZERO, |acc, level| acc + level.total_quantity)
    }
}

impl OrderBook {
    /// Capture the book's depth, best-first, truncated to `depth` levels
    /// per side.
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        trace!("Order book {}: snapshot depth {}", self.symbol(), depth);

        let bids = self
            .bids
            .values()
            .rev()
            .take(depth)
            .map(LevelSnapshot::from)
            .collect();
        let asks = self
            .asks
            .values()
            .take(depth)
            .map(LevelSnapshot::from)
            .collect();

        OrderBookSnapshot {
            symbol: self.symbol().to_owned(),
            timestamp: current_time_nanos(),
            bids,
            asks,
        }
    }
}
