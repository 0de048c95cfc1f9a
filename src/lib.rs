//! # Single-Symbol Limit Order Book
//!
//! An in-memory limit order book implementation written in Rust, built around
//! a price-time priority matching engine with exact fixed-point arithmetic
//! for prices and quantities.
//!
//! ## Key Features
//!
//! - **Price-Time Priority Matching**: Strict best-price-first across levels
//!   and strict FIFO within a level, for limit and market orders.
//!
//! - **Fixed-Point Numerics**: Prices and quantities are scaled 64-bit
//!   integers with four decimal digits of precision, so arithmetic and
//!   ordering are exact and deterministic.
//!
//! - **Time-In-Force Semantics**: GTC orders rest, IOC remainders are
//!   discarded, and FOK orders are checked for full fillability before any
//!   state is touched, so a killed order leaves the book untouched.
//!
//! - **Constant-Time Book Maintenance**: Each price level pairs a FIFO queue
//!   with an id index, giving O(1) insertion, cancellation, and head
//!   consumption; modify-down keeps queue position.
//!
//! - **Single-Writer Core**: No internal locking and no I/O. All mutating
//!   operations are synchronous and complete in time bounded by the levels
//!   walked and fills produced; the host serializes writers.
//!
//! ## Design Goals
//!
//! 1. **Determinism**: The same sequence of order intents always produces the
//!    same sequence of matches and the same final book.
//! 2. **Correctness**: Side totals, level totals, and the order index stay
//!    consistent across every operation, including partial fills and
//!    cancel-replace modifies.
//! 3. **Observability**: Every match is emitted through `tracing` and an
//!    optional listener callback; the book never depends on either being
//!    wired up.

mod orderbook;
mod pricelevel;
mod utils;

pub use orderbook::{LevelSnapshot, Match, MatchListener, OrderBook, OrderBookError, OrderBookSnapshot};
pub use pricelevel::{
    INVALID_ORDER_ID, LevelMatch, Order, OrderId, OrderStatus, OrderType, Price, PriceLevel,
    PriceLevelError, Quantity, SCALE_FACTOR, Side, TimeInForce,
};
pub use utils::current_time_nanos;
