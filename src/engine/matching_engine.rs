// ============================================================================
// Matching Engine
// One order in, zero or more trades out, at most one book mutation
// ============================================================================

use crate::domain::{Order, OrderBook, Trade};
use crate::engine::errors::{EngineError, EngineResult};
use crate::engine::price_time;
use crate::numeric::Quantity;
use crossbeam::channel::{Receiver, Sender, TrySendError};
use std::sync::Arc;

/// Summary of one completed engine invocation.
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// Trades emitted onto the outbound channel
    pub trades_emitted: usize,

    /// Quantity of the incoming order left resting in the book, if any
    pub resting_quantity: Option<Quantity>,
}

/// Single-instrument matching engine.
///
/// The engine owns exactly one [`OrderBook`] and borrows nothing else: the
/// inbound order channel and outbound trade channel are injected at
/// construction and their lifecycle belongs to the caller. It is designed
/// for one dedicated worker repeatedly invoking [`process_one`] (or
/// [`run`], which does exactly that); neither the engine nor its book is
/// safe for concurrent use.
///
/// Each invocation is a complete transaction: take one order, match it
/// against the opposite side under price-time priority, rest any remainder,
/// emit the resulting trades. The only suspension point is the blocking
/// receive on an empty inbound channel. Trade emission is non-blocking by
/// design: a full outbound channel is an error, not backpressure (see
/// [`EngineError::TradeChannelFull`]).
///
/// [`process_one`]: MatchingEngine::process_one
/// [`run`]: MatchingEngine::run
pub struct MatchingEngine {
    instrument: Arc<String>,
    book: OrderBook,
    orders: Receiver<Order>,
    trades: Sender<Trade>,
}

impl MatchingEngine {
    pub fn new(instrument: String, orders: Receiver<Order>, trades: Sender<Trade>) -> Self {
        Self {
            instrument: Arc::new(instrument),
            book: OrderBook::new(),
            orders,
            trades,
        }
    }

    /// Process exactly one incoming order.
    ///
    /// Blocks until an order arrives. The order is validated, matched with
    /// the book fully committed (residual rested, partially consumed
    /// resting orders reinserted), and the generated trades are then pushed
    /// onto the outbound channel with a non-blocking send each.
    ///
    /// # Errors
    /// - [`EngineError::OrderChannelClosed`] once all producers are gone.
    /// - [`EngineError::InvalidOrder`] for non-positive price or quantity;
    ///   the book is untouched.
    /// - [`EngineError::TradeChannelFull`] / [`EngineError::TradeChannelClosed`]
    ///   when a trade cannot be delivered. Book mutations performed by this
    ///   invocation stand; the undelivered trades are dropped.
    pub fn process_one(&mut self) -> EngineResult<MatchReport> {
        let incoming = self
            .orders
            .recv()
            .map_err(|_| EngineError::OrderChannelClosed)?;

        self.validate(&incoming)?;

        let outcome = price_time::match_order(&mut self.book, incoming);
        let generated = outcome.trades.len();

        for (emitted, trade) in outcome.trades.into_iter().enumerate() {
            match self.trades.try_send(trade) {
                Ok(()) => {},
                Err(TrySendError::Full(_)) => {
                    return Err(EngineError::TradeChannelFull {
                        undelivered: generated - emitted,
                    });
                },
                Err(TrySendError::Disconnected(_)) => {
                    return Err(EngineError::TradeChannelClosed);
                },
            }
        }

        tracing::debug!(
            "{}: {} trade(s), resting {:?}",
            self.instrument,
            generated,
            outcome.resting_quantity
        );

        Ok(MatchReport {
            trades_emitted: generated,
            resting_quantity: outcome.resting_quantity,
        })
    }

    /// Dedicated-worker loop around [`process_one`](Self::process_one).
    ///
    /// Invalid orders are logged and skipped. The loop ends cleanly with
    /// `Ok(())` once the inbound channel disconnects: dropping all order
    /// senders is the shutdown signal, and stopping between invocations is
    /// always safe. Trade-channel failures are fatal and propagate.
    pub fn run(&mut self) -> EngineResult<()> {
        loop {
            match self.process_one() {
                Ok(_) => {},
                Err(EngineError::OrderChannelClosed) => return Ok(()),
                Err(EngineError::InvalidOrder(reason)) => {
                    tracing::warn!("{}: rejected order: {}", self.instrument, reason);
                },
                Err(err) => return Err(err),
            }
        }
    }

    /// Peek the best resting bid.
    pub fn best_bid(&self) -> Option<&Order> {
        self.book.best_bid()
    }

    /// Peek the best resting ask.
    pub fn best_ask(&self) -> Option<&Order> {
        self.book.best_ask()
    }

    /// The resting book.
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// The instrument label this engine was created with.
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    fn validate(&self, order: &Order) -> EngineResult<()> {
        if !order.quantity.is_positive() {
            return Err(EngineError::InvalidOrder(
                "quantity must be positive".to_string(),
            ));
        }
        if !order.price.is_positive() {
            return Err(EngineError::InvalidOrder(
                "price must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
