// ============================================================================
// Order Domain Model
// ============================================================================

use crate::numeric::{Price, Quantity};
use std::sync::Arc;

/// Side of the book an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The side an incoming order matches against.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderType {
    Limit,
    /// Matched identically to `Limit`: the order's `price` acts as an
    /// ordinary bound, so a market order with a non-crossing price rests in
    /// the book instead of filling at the best available price.
    Market,
}

/// An immutable order value.
///
/// An order is identified by its (participant, price, timestamp) fields.
/// Partial fills never mutate quantity in place; they produce a reduced copy
/// via [`Order::with_quantity`] that keeps the identity fields (and therefore
/// the original queue priority) intact.
///
/// `timestamp` is a monotonically comparable integer supplied by the order
/// source. It is used only to break price ties in the book, not for
/// wall-clock correctness.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub order_type: OrderType,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    pub participant: Arc<String>,
    pub timestamp: i64,
}

impl Order {
    pub fn new(
        order_type: OrderType,
        side: Side,
        price: Price,
        quantity: Quantity,
        participant: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            order_type,
            side,
            price,
            quantity,
            participant: Arc::new(participant.into()),
            timestamp,
        }
    }

    /// Copy of this order with a different quantity and the same identity
    /// fields. Used to reinsert the unfilled remainder of a partially
    /// consumed order.
    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            participant: Arc::clone(&self.participant),
            ..*self
        }
    }

    /// Whether this order's price crosses a resting order on the opposite
    /// side: a buy crosses asks priced at or below it, a sell crosses bids
    /// priced at or above it.
    #[inline]
    pub fn crosses(&self, resting_price: Price) -> bool {
        match self.side {
            Side::Buy => self.price >= resting_price,
            Side::Sell => self.price <= resting_price,
        }
    }
}
