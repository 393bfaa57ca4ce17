// ============================================================================
// Matchbook
// Single-instrument limit order matching engine
// ============================================================================

//! # Matchbook
//!
//! A single-instrument limit order matching engine with price-time priority.
//!
//! Incoming orders are consumed one at a time from a bounded channel and
//! matched against a resting order book; trades are produced on a bounded
//! outbound channel. Matching follows price-time priority with a sell-side
//! pricing rule: every trade executes at the price quoted by the sell-side
//! order, so buyers keep any available price improvement and sellers always
//! receive at least their limit.
//!
//! ## Design
//!
//! - **Integer ticks**: prices and quantities are whole `i64` counts; no
//!   floating point anywhere.
//! - **Immutable orders**: partial fills replace an order with a
//!   reduced-quantity copy that keeps its queue priority; nothing is
//!   mutated in place.
//! - **Single worker**: the engine owns its book exclusively and is driven
//!   by one thread; channel endpoints are injected by the caller.
//! - **Fail-fast emission**: a full outbound trade channel is an error,
//!   never a blocking put.
//!
//! ## Example
//!
//! ```rust
//! use matchbook::numeric::{Price, Quantity};
//! use matchbook::prelude::*;
//!
//! let (mut engine, order_tx, trade_rx) =
//!     MatchingEngineBuilder::new("BTC-USD").build().unwrap();
//!
//! let sell = Order::new(
//!     OrderType::Limit,
//!     Side::Sell,
//!     Price::from_ticks(100).unwrap(),
//!     Quantity::from_units(1).unwrap(),
//!     "seller",
//!     1,
//! );
//! let buy = Order::new(
//!     OrderType::Limit,
//!     Side::Buy,
//!     Price::from_ticks(102).unwrap(),
//!     Quantity::from_units(1).unwrap(),
//!     "buyer",
//!     2,
//! );
//!
//! order_tx.send(sell).unwrap();
//! engine.process_one().unwrap();
//! order_tx.send(buy).unwrap();
//! engine.process_one().unwrap();
//!
//! // The buyer takes the resting ask's price, not its own bid
//! let trade = trade_rx.try_recv().unwrap();
//! assert_eq!(trade.price.ticks(), 100);
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Order, OrderBook, OrderType, Side, Trade};
    pub use crate::engine::{
        create_from_config, match_order, EngineConfig, EngineError, EngineResult, MatchOutcome,
        MatchReport, MatchingEngine, MatchingEngineBuilder,
    };
    pub use crate::numeric::{NumericError, NumericResult, Price, Quantity};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::numeric::{Price, Quantity};

    fn order(side: Side, price: i64, quantity: i64, participant: &str, timestamp: i64) -> Order {
        Order::new(
            OrderType::Limit,
            side,
            Price::from_ticks(price).unwrap(),
            Quantity::from_units(quantity).unwrap(),
            participant,
            timestamp,
        )
    }

    #[test]
    fn test_end_to_end_scenario() {
        let (mut engine, order_tx, trade_rx) =
            MatchingEngineBuilder::new("BTC-USD").build().unwrap();

        let mut submit = |o: Order| {
            order_tx.send(o).unwrap();
            engine.process_one().unwrap()
        };

        // Two bids rest with no asks to cross
        submit(order(Side::Buy, 100, 1, "alice", 1));
        submit(order(Side::Buy, 99, 1, "alice", 2));

        // Two asks above the best bid rest as well
        submit(order(Side::Sell, 101, 1, "carol", 3));
        submit(order(Side::Sell, 102, 1, "carol", 4));
        assert!(trade_rx.try_recv().is_err());

        // A sell at 98 crosses both bids; both trades print at the seller's
        // price and the leftover 2 units rest as the new best ask
        let report = submit(order(Side::Sell, 98, 4, "carol", 5));
        assert_eq!(report.trades_emitted, 2);
        assert_eq!(report.resting_quantity.unwrap().units(), 2);

        let first = trade_rx.try_recv().unwrap();
        assert_eq!(first.price.ticks(), 98);
        assert_eq!(first.quantity.units(), 1);
        assert_eq!(first.buy_participant.as_str(), "alice");
        assert_eq!(first.sell_participant.as_str(), "carol");

        let second = trade_rx.try_recv().unwrap();
        assert_eq!(second.price.ticks(), 98);
        assert_eq!(second.quantity.units(), 1);

        // Book: no bids, asks [98x2, 101x1, 102x1]

        // A buy at 102 sweeps all three ask levels, best price first, paying
        // each resting ask's quote
        let report = submit(order(Side::Buy, 102, 4, "dave", 6));
        assert_eq!(report.trades_emitted, 3);
        assert!(report.resting_quantity.is_none());

        let sweep: Vec<(i64, i64)> = (0..3)
            .map(|_| trade_rx.try_recv().unwrap())
            .map(|t| (t.price.ticks(), t.quantity.units()))
            .collect();
        assert_eq!(sweep, vec![(98, 2), (101, 1), (102, 1)]);

        assert!(engine.book().is_empty());
        assert!(trade_rx.try_recv().is_err());
    }

    #[test]
    fn test_opposite_side_empty_is_a_pure_insert() {
        let (mut engine, order_tx, trade_rx) =
            MatchingEngineBuilder::new("BTC-USD").build().unwrap();

        order_tx.send(order(Side::Buy, 100, 3, "alice", 1)).unwrap();
        let report = engine.process_one().unwrap();

        assert_eq!(report.trades_emitted, 0);
        assert_eq!(report.resting_quantity.unwrap().units(), 3);
        assert!(trade_rx.try_recv().is_err());

        let rested = engine.best_bid().unwrap();
        assert_eq!(rested.price.ticks(), 100);
        assert_eq!(rested.quantity.units(), 3);
        assert_eq!(rested.participant.as_str(), "alice");
    }

    #[test]
    fn test_worker_thread_fills_a_ladder() {
        let (mut engine, order_tx, trade_rx) =
            MatchingEngineBuilder::new("BTC-USD").build().unwrap();

        for i in 0..25 {
            order_tx
                .send(order(Side::Sell, 100 + i, 1, "maker", i))
                .unwrap();
        }
        for i in 0..25 {
            order_tx
                .send(order(Side::Buy, 130, 1, "taker", 25 + i))
                .unwrap();
        }
        drop(order_tx);

        let worker = std::thread::spawn(move || {
            let result = engine.run();
            (engine, result)
        });
        let (engine, result) = worker.join().unwrap();
        result.unwrap();

        // Each taker lifts the lowest remaining ask, so prices come back in
        // ladder order
        let prices: Vec<i64> = trade_rx.try_iter().map(|t| t.price.ticks()).collect();
        let expected: Vec<i64> = (100..125).collect();
        assert_eq!(prices, expected);
        assert!(engine.book().is_empty());
    }
}
