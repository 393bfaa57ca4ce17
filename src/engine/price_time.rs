// ============================================================================
// Price/Time Priority Matching
// ============================================================================

use crate::domain::{Order, OrderBook, Side, Trade};
use crate::numeric::Quantity;
use std::sync::Arc;

/// Outcome of matching one incoming order against the book.
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    /// Trades generated, in consumption order
    pub trades: Vec<Trade>,

    /// Quantity of the incoming order left resting in its own side, if any
    pub resting_quantity: Option<Quantity>,
}

/// Match one incoming order under price-time priority.
///
/// The opposite side is consumed best-first while its price still crosses
/// the incoming order's price and the incoming order has quantity left.
/// Every trade executes at the price quoted by the sell-side order of that
/// match: a buy aggressor pays each resting ask's price (taking any price
/// improvement), a sell aggressor receives its own price. Since a cross
/// requires bid price >= ask price, this is min(bid, ask) for every pair.
///
/// A partially consumed resting order is reinserted as a reduced copy with
/// its original price and timestamp, preserving its queue priority. Any
/// unfilled remainder of the incoming order (including the whole order
/// when nothing crosses) is inserted into its own side before returning.
///
/// The book is left fully committed in all cases; emitting the returned
/// trades is the caller's concern.
pub fn match_order(book: &mut OrderBook, incoming: Order) -> MatchOutcome {
    let mut trades = Vec::new();
    let mut remaining = incoming.quantity;
    let opposite = incoming.side.opposite();

    while remaining.is_positive() {
        let crosses = match book.best(opposite) {
            Some(resting) => incoming.crosses(resting.price),
            None => false,
        };
        if !crosses {
            break;
        }

        let Some(resting) = book.remove_best(opposite) else {
            break;
        };

        let consumed = remaining.min(resting.quantity);
        let (price, seller, buyer) = match incoming.side {
            Side::Buy => (
                resting.price,
                Arc::clone(&resting.participant),
                Arc::clone(&incoming.participant),
            ),
            Side::Sell => (
                incoming.price,
                Arc::clone(&incoming.participant),
                Arc::clone(&resting.participant),
            ),
        };
        trades.push(Trade::new(price, consumed, seller, buyer));

        let leftover = resting.quantity.saturating_sub(consumed);
        if leftover.is_positive() {
            // The resting order outlives the incoming one: reinsert the
            // remainder with its original price and timestamp.
            book.insert(resting.with_quantity(leftover));
            remaining = Quantity::ZERO;
        } else {
            remaining = remaining.saturating_sub(consumed);
        }
    }

    let resting_quantity = remaining.is_positive().then_some(remaining);
    if let Some(quantity) = resting_quantity {
        book.insert(incoming.with_quantity(quantity));
    }

    MatchOutcome {
        trades,
        resting_quantity,
    }
}
