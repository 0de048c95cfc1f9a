//! Core OrderBook implementation for managing price levels and orders

use crate::orderbook::matching::MatchListener;
use crate::pricelevel::{Order, OrderId, Price, PriceLevel, Quantity, Side};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::trace;

/// The OrderBook holds both sides of the depth-of-book for one symbol and
/// matches incoming orders against resting ones.
///
/// It is a single-writer structure: mutating operations take `&mut self`,
/// perform no locking and no I/O, and complete in time bounded by the
/// levels walked plus the fills produced. Hosts that want concurrent
/// readers wrap the book in their own reader-writer discipline.
#[derive(Debug)]
pub struct OrderBook {
    /// The symbol or identifier for this order book
    symbol: String,

    /// Bid side price levels; iteration in reverse yields best (highest) first
    pub(super) bids: BTreeMap<Price, PriceLevel>,

    /// Ask side price levels; iteration yields best (lowest) first
    pub(super) asks: BTreeMap<Price, PriceLevel>,

    /// Map from order id to (price, side) for O(1) lookups without
    /// searching through all price levels
    pub(super) order_locations: HashMap<OrderId, (Price, Side)>,

    /// Sum of remaining quantities across all bid levels
    pub(super) total_bid_quantity: Quantity,

    /// Sum of remaining quantities across all ask levels
    pub(super) total_ask_quantity: Quantity,

    /// The last price at which a trade occurred
    pub(super) last_trade_price: Option<Price>,

    /// Callback invoked once per match as it is created
    pub(super) match_listener: Option<MatchListener>,
}

impl OrderBook {
    /// Create a new order book for the given symbol
    pub fn new(symbol: &str) -> Self {
        Self::build(symbol, None)
    }

    /// Create a new order book that reports every match to `listener`
    pub fn with_match_listener(symbol: &str, listener: MatchListener) -> Self {
        Self::build(symbol, Some(listener))
    }

    fn build(symbol: &str, match_listener: Option<MatchListener>) -> Self {
        OrderBook {
            symbol: symbol.to_string(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            order_locations: HashMap::new(),
            total_bid_quantity: Quantity::ZERO,
            total_ask_quantity: Quantity::ZERO,
            last_trade_price: None,
            match_listener,
        }
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the best (highest) bid price, if any
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// Get the best (lowest) ask price, if any
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// Get the spread (best ask - best bid); `None` when either side is empty
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Midpoint of the best prices, truncating toward zero on the raw value
    pub fn midpoint(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(Price::new((bid.raw_value() + ask.raw_value()) / 2)),
            _ => None,
        }
    }

    /// The last price at which a trade occurred, if any
    pub fn last_trade_price(&self) -> Option<Price> {
        self.last_trade_price
    }

    /// All live orders at a price level, in priority order
    pub fn orders_at_price(&self, price: Price, side: Side) -> Vec<&Order> {
        match self.side_levels(side).get(&price) {
            Some(level) => level.all_orders(),
            None => Vec::new(),
        }
    }

    /// Total remaining quantity at a price level
    pub fn quantity_at_price(&self, price: Price, side: Side) -> Quantity {
        self.side_levels(side)
            .get(&price)
            .map(PriceLevel::total_quantity)
            .unwrap_or(Quantity::ZERO)
    }

    /// Bid prices, best (highest) first
    pub fn bid_prices(&self) -> Vec<Price> {
        self.bids.keys().rev().copied().collect()
    }

    /// Ask prices, best (lowest) first
    pub fn ask_prices(&self) -> Vec<Price> {
        self.asks.keys().copied().collect()
    }

    /// Bid depth as a price -> total remaining quantity map
    pub fn bids_snapshot(&self) -> BTreeMap<Price, Quantity> {
        self.bids
            .iter()
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Ask depth as a price -> total remaining quantity map
    pub fn asks_snapshot(&self) -> BTreeMap<Price, Quantity> {
        self.asks
            .iter()
            .map(|(price, level)| (*price, level.total_quantity()))
            .collect()
    }

    /// Sum of remaining quantities across all bid levels
    pub fn total_bid_quantity(&self) -> Quantity {
        self.total_bid_quantity
    }

    /// Sum of remaining quantities across all ask levels
    pub fn total_ask_quantity(&self) -> Quantity {
        self.total_ask_quantity
    }

    /// Number of price levels on the bid side
    pub fn bid_level_count(&self) -> usize {
        self.bids.len()
    }

    /// Number of price levels on the ask side
    pub fn ask_level_count(&self) -> usize {
        self.asks.len()
    }

    /// Number of orders resting in the book
    pub fn order_count(&self) -> usize {
        self.order_locations.len()
    }

    /// Get a resting order by id
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        let &(price, side) = self.order_locations.get(&order_id)?;
        self.side_levels(side).get(&price)?.get_order(order_id)
    }

    /// Drop every resting order and reset the totals. Statuses of the
    /// dropped orders are not transitioned; this is an administrative
    /// reset, not a mass cancel.
    pub fn clear(&mut self) {
        trace!("Order book {}: clearing all state", self.symbol);
        self.bids.clear();
        self.asks.clear();
        self.order_locations.clear();
        self.total_bid_quantity = Quantity::ZERO;
        self.total_ask_quantity = Quantity::ZERO;
        self.last_trade_price = None;
    }

    pub(super) fn side_levels(&self, side: Side) -> &BTreeMap<Price, PriceLevel> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(super) fn side_levels_mut(&mut self, side: Side) -> &mut BTreeMap<Price, PriceLevel> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Best price on one side: highest bid or lowest ask
    pub(super) fn best_of(&self, side: Side) -> Option<Price> {
        match side {
            Side::Buy => self.best_bid(),
            Side::Sell => self.best_ask(),
        }
    }
}

impl fmt::Display for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OrderBook[symbol={}, bids={}, asks={}, orders={}, bid_qty={}, ask_qty={}",
            self.symbol,
            self.bid_level_count(),
            self.ask_level_count(),
            self.order_count(),
            self.total_bid_quantity,
            self.total_ask_quantity
        )?;

        match self.best_bid() {
            Some(price) => write!(f, ", best_bid={}", price)?,
            None => write!(f, ", best_bid=none")?,
        }
        match self.best_ask() {
            Some(price) => write!(f, ", best_ask={}", price)?,
            None => write!(f, ", best_ask=none")?,
        }
        match self.spread() {
            Some(spread) => write!(f, ", spread={}", spread)?,
            None => write!(f, ", spread=none")?,
        }

        write!(f, "]")
    }
}
