// ============================================================================
// Engine Factory
// Creates matching engines wired to their channel pair
// ============================================================================

use crate::domain::{Order, Trade};
use crate::engine::MatchingEngine;
use crossbeam::channel::{bounded, Receiver, Sender};

/// Default capacity for both channels
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Configuration for a matching engine and its channel pair.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The trading instrument (e.g., "BTC-USD", "AAPL")
    pub instrument: String,

    /// Capacity of the bounded inbound order channel
    pub order_queue_capacity: usize,

    /// Capacity of the bounded outbound trade channel
    pub trade_queue_capacity: usize,
}

impl EngineConfig {
    /// Create a configuration with the default channel capacities.
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            order_queue_capacity: DEFAULT_QUEUE_CAPACITY,
            trade_queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Builder method: set the inbound order channel capacity
    pub fn with_order_queue_capacity(mut self, capacity: usize) -> Self {
        self.order_queue_capacity = capacity;
        self
    }

    /// Builder method: set the outbound trade channel capacity
    pub fn with_trade_queue_capacity(mut self, capacity: usize) -> Self {
        self.trade_queue_capacity = capacity;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.instrument.is_empty() {
            return Err("Instrument cannot be empty".to_string());
        }
        if self.order_queue_capacity == 0 {
            return Err("Order queue capacity must be positive".to_string());
        }
        if self.trade_queue_capacity == 0 {
            return Err("Trade queue capacity must be positive".to_string());
        }
        Ok(())
    }
}

/// Creates a matching engine from configuration.
///
/// Builds the bounded channel pair and hands the engine its consuming and
/// producing endpoints. The returned order sender and trade receiver are the
/// caller's: order producers clone the sender, and dropping every sender is
/// the engine's shutdown signal.
///
/// # Example
/// ```
/// use matchbook::engine::factory::{create_from_config, EngineConfig};
///
/// let config = EngineConfig::new("BTC-USD");
/// let (engine, order_tx, trade_rx) = create_from_config(config).unwrap();
/// assert_eq!(engine.instrument(), "BTC-USD");
/// # drop((order_tx, trade_rx));
/// ```
pub fn create_from_config(
    config: EngineConfig,
) -> Result<(MatchingEngine, Sender<Order>, Receiver<Trade>), String> {
    config.validate()?;

    let (order_tx, order_rx) = bounded(config.order_queue_capacity);
    let (trade_tx, trade_rx) = bounded(config.trade_queue_capacity);

    let engine = MatchingEngine::new(config.instrument, order_rx, trade_tx);

    Ok((engine, order_tx, trade_rx))
}

/// Builder for creating matching engines with a fluent API.
///
/// # Example
/// ```
/// use matchbook::engine::factory::MatchingEngineBuilder;
///
/// let (engine, order_tx, trade_rx) = MatchingEngineBuilder::new("BTC-USD")
///     .order_queue_capacity(256)
///     .trade_queue_capacity(256)
///     .build()
///     .unwrap();
/// # drop((engine, order_tx, trade_rx));
/// ```
pub struct MatchingEngineBuilder {
    config: EngineConfig,
}

impl MatchingEngineBuilder {
    /// Create a new builder for the specified instrument
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            config: EngineConfig::new(instrument),
        }
    }

    /// Set the inbound order channel capacity
    pub fn order_queue_capacity(mut self, capacity: usize) -> Self {
        self.config.order_queue_capacity = capacity;
        self
    }

    /// Set the outbound trade channel capacity
    pub fn trade_queue_capacity(mut self, capacity: usize) -> Self {
        self.config.trade_queue_capacity = capacity;
        self
    }

    /// Build the matching engine and its channel endpoints
    pub fn build(self) -> Result<(MatchingEngine, Sender<Order>, Receiver<Trade>), String> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &EngineConfig {
        &self.config
    }
}
