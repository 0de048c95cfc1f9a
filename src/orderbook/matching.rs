//! Match records and the price-time priority matching walk.

use crate::orderbook::book::OrderBook;
use crate::pricelevel::{Order, OrderId, OrderType, Price, PriceLevel, Quantity, Side};
use crate::utils::current_time_nanos;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One fill between a resting maker and an incoming taker.
///
/// The price is always the maker's level price, so any price improvement
/// goes to the taker. The quantity is strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The resting order that provided the liquidity
    pub maker_order_id: OrderId,
    /// The incoming order that took it
    pub taker_order_id: OrderId,
    /// Price the fill executed at: the maker's limit price
    pub price: Price,
    /// Quantity exchanged
    pub quantity: Quantity,
    /// When the match occurred, nanoseconds
    pub timestamp: i64,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Match[maker={}, taker={}, price={}, qty={}, time={}]",
            self.maker_order_id, self.taker_order_id, self.price, self.quantity, self.timestamp
        )
    }
}

/// Callback invoked for every match as it is created
pub type MatchListener = fn(&Match);

impl OrderBook {
    /// Walk the side opposite `taker`, consuming best-priced levels in
    /// priority order until the taker is satisfied, the book runs dry, or
    /// (for a limit taker) the best opposite price stops being marketable.
    ///
    /// Emits the matches in fill order, keeps the side totals and the order
    /// index in step, drops levels the walk empties, and finally books the
    /// consumed quantity against the taker itself.
    pub(super) fn match_against_book(&mut self, taker: &mut Order) -> Vec<Match> {
        let mut matches = Vec::new();
        let initial_remaining = taker.remaining_quantity();
        let mut remaining = initial_remaining;

        let opposite = taker.side().opposite();
        let limit_price = match taker.order_type() {
            OrderType::Limit => Some(taker.price()),
            OrderType::Market => None,
        };

        while remaining > Quantity::ZERO {
            let Some(best_price) = self.best_of(opposite) else {
                break;
            };

            if let Some(limit) = limit_price {
                match taker.side() {
                    Side::Buy if best_price > limit => break,
                    Side::Sell if best_price < limit => break,
                    _ => {}
                }
            }

            let (outcome, level_empty) = {
                let levels = self.side_levels_mut(opposite);
                let Some(level) = levels.get_mut(&best_price) else {
                    break;
                };
                let outcome = level.consume(remaining);
                (outcome, level.is_empty())
            };

            if level_empty {
                self.side_levels_mut(opposite).remove(&best_price);
            }
            if outcome.fills.is_empty() {
                break;
            }

            for &(maker_id, quantity) in &outcome.fills {
                let fill = self.record_match(maker_id, taker.id(), best_price, quantity);
                matches.push(fill);
                remaining -= quantity;
                match opposite {
                    Side::Buy => self.total_bid_quantity -= quantity,
                    Side::Sell => self.total_ask_quantity -= quantity,
                }
            }
            for maker_id in outcome.filled_order_ids {
                self.order_locations.remove(&maker_id);
            }
        }

        taker.execute(initial_remaining - remaining);
        matches
    }

    /// Read-only fill-through estimate: how much of `quantity` the side
    /// opposite `side` could supply within the optional price bound. Used
    /// to decide the fate of fill-or-kill orders before anything mutates.
    pub fn peek_match(&self, side: Side, quantity: Quantity, price_limit: Option<Price>) -> Quantity {
        let levels = self.side_levels(side.opposite());
        if levels.is_empty() {
            return Quantity::ZERO;
        }

        let price_iter: Box<dyn Iterator<Item = (&Price, &PriceLevel)> + '_> = match side {
            // A buy matches asks, best (lowest) first.
            Side::Buy => Box::new(levels.iter()),
            // A sell matches bids, best (highest) first.
            Side::Sell => Box::new(levels.iter().rev()),
        };

        let mut matched = Quantity::ZERO;
        for (&price, level) in price_iter {
            if matched >= quantity {
                break;
            }
            if let Some(limit) = price_limit {
                match side {
                    Side::Buy if price > limit => break,
                    Side::Sell if price < limit => break,
                    _ => {}
                }
            }

            let needed = quantity - matched;
            matched += needed.min(level.total_quantity());
        }

        matched
    }

    /// Build a match record, remember the trade price, and report the fill
    /// to the debug log and the listener, if one is installed.
    fn record_match(
        &mut self,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        price: Price,
        quantity: Quantity,
    ) -> Match {
        let fill = Match {
            maker_order_id,
            taker_order_id,
            price,
            quantity,
            timestamp: current_time_nanos(),
        };

        self.last_trade_price = Some(price);
        debug!("Order book {}: {}", self.symbol(), fill);
        if let Some(listener) = self.match_listener {
            listener(&fill);
        }

        fill
    }
}
