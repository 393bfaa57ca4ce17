// ============================================================================
// Engine Errors
// Error types for matching engine invocations
// ============================================================================

use std::fmt;

/// Errors surfaced by a single engine invocation.
///
/// There is no retry logic anywhere in the engine: every failure is reported
/// to the invocation's caller, never swallowed or retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The outbound trade channel was full. Emission is fail-fast: the
    /// invocation aborts with `undelivered` trades dropped and any book
    /// mutations already performed left standing.
    TradeChannelFull { undelivered: usize },

    /// Every consumer of the outbound trade channel has been dropped.
    TradeChannelClosed,

    /// Every producer of the inbound order channel has been dropped. This is
    /// the clean-shutdown signal for the worker loop.
    OrderChannelClosed,

    /// The order failed the engine's preconditions and never reached the
    /// book.
    InvalidOrder(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::TradeChannelFull { undelivered } => {
                write!(f, "trade channel full: {} trade(s) undelivered", undelivered)
            },
            EngineError::TradeChannelClosed => {
                write!(f, "trade channel closed: all consumers disconnected")
            },
            EngineError::OrderChannelClosed => {
                write!(f, "order channel closed: all producers disconnected")
            },
            EngineError::InvalidOrder(reason) => write!(f, "invalid order: {}", reason),
        }
    }
}

impl std::error::Error for EngineError {}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EngineError::TradeChannelFull { undelivered: 2 }.to_string(),
            "trade channel full: 2 trade(s) undelivered"
        );
        assert_eq!(
            EngineError::InvalidOrder("quantity must be positive".to_string()).to_string(),
            "invalid order: quantity must be positive"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EngineError::OrderChannelClosed,
            EngineError::OrderChannelClosed
        );
        assert_ne!(
            EngineError::OrderChannelClosed,
            EngineError::TradeChannelClosed
        );
    }
}
