//! A single price level: the FIFO queue of live orders at one price.

use crate::pricelevel::{Order, OrderId, Price, Quantity};
use std::collections::{HashMap, VecDeque};
use std::fmt;

/// Outcome of consuming quantity from the head of a level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMatch {
    /// `(maker id, fill quantity)` pairs in consumption order.
    pub fills: Vec<(OrderId, Quantity)>,
    /// Makers that filled completely and left the level.
    pub filled_order_ids: Vec<OrderId>,
    /// Portion of the request this level could not supply.
    pub remaining: Quantity,
}

/// One price bucket of the book.
///
/// Orders live in `orders` keyed by id; `queue` holds arrival order. A
/// removal detaches the order from the map in O(1) and leaves a stale id in
/// the queue; traversals skip ids with no map entry and `consume` pops them
/// once they surface at the head. `total_quantity` is kept equal to the sum
/// of the remaining quantities of the live orders.
#[derive(Debug, Default)]
pub struct PriceLevel {
    price: Price,
    total_quantity: Quantity,
    queue: VecDeque<OrderId>,
    orders: HashMap<OrderId, Order>,
}

impl PriceLevel {
    /// Creates an empty level at the given price.
    pub fn new(price: Price) -> Self {
        PriceLevel {
            price,
            total_quantity: Quantity::ZERO,
            queue: VecDeque::new(),
            orders: HashMap::new(),
        }
    }

    /// The price shared by every order at this level.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Sum of the remaining quantities of the live orders here.
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Number of live orders at this level.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Whether the level holds no live orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Appends an order at the tail of the queue. An order whose price does
    /// not match the level is ignored.
    pub fn add_order(&mut self, order: Order) {
        if order.price() != self.price {
            return;
        }
        self.total_quantity += order.remaining_quantity();
        self.queue.push_back(order.id());
        self.orders.insert(order.id(), order);
    }

    /// Detaches an order from the level in O(1), handing it back to the
    /// caller. Returns `None` when the id is not here.
    pub fn remove_order(&mut self, order_id: OrderId) -> Option<Order> {
        let order = self.orders.remove(&order_id)?;
        self.total_quantity -= order.remaining_quantity();
        // The queue keeps a stale id until it reaches the head.
        Some(order)
    }

    /// Changes an order's total quantity in place, preserving its queue
    /// position. Fails when the id is unknown or when the new quantity
    /// would leave no positive remainder over what already executed.
    pub fn modify_order_quantity(&mut self, order_id: OrderId, new_quantity: Quantity) -> bool {
        let Some(order) = self.orders.get_mut(&order_id) else {
            return false;
        };
        if new_quantity <= order.executed_quantity() {
            return false;
        }

        let old_remaining = order.remaining_quantity();
        order.set_quantity(new_quantity);
        let new_remaining = order.remaining_quantity();
        self.total_quantity = self.total_quantity - old_remaining + new_remaining;
        true
    }

    /// The earliest-arriving live order, next in line to fill.
    pub fn front_order(&self) -> Option<&Order> {
        self.queue.iter().find_map(|id| self.orders.get(id))
    }

    /// Looks up a live order by id.
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.get(&order_id)
    }

    pub(crate) fn get_order_mut(&mut self, order_id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&order_id)
    }

    /// Fills up to `quantity` against the head of the queue, FIFO.
    ///
    /// Each head order executes `min(request, head remaining)`; a head that
    /// fills completely is popped and reported in `filled_order_ids`. Stops
    /// when the request is satisfied or the level runs dry.
    pub fn consume(&mut self, quantity: Quantity) -> LevelMatch {
        let mut outcome = LevelMatch {
            remaining: quantity,
            ..LevelMatch::default()
        };
        if quantity <= Quantity::ZERO {
            return outcome;
        }

        while outcome.remaining > Quantity::ZERO {
            let Some(&head_id) = self.queue.front() else {
                break;
            };
            let Some(head) = self.orders.get_mut(&head_id) else {
                // Stale id left behind by a removal.
                self.queue.pop_front();
                continue;
            };

            let exec = outcome.remaining.min(head.remaining_quantity());
            head.execute(exec);
            let head_filled = head.is_filled();

            outcome.fills.push((head_id, exec));
            outcome.remaining -= exec;
            self.total_quantity -= exec;

            if head_filled {
                self.orders.remove(&head_id);
                self.queue.pop_front();
                outcome.filled_order_ids.push(head_id);
            }
        }

        outcome
    }

    /// All live orders at this level in priority order.
    pub fn all_orders(&self) -> Vec<&Order> {
        self.queue
            .iter()
            .filter_map(|id| self.orders.get(id))
            .collect()
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PriceLevel[price={}, orders={}, quantity={}]",
            self.price,
            self.order_count(),
            self.total_quantity
        )
    }
}
