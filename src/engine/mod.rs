// ============================================================================
// Engine Module
// Contains the core matching engine business logic
// ============================================================================

mod errors;
mod matching_engine;
mod price_time;

pub mod factory;

pub use errors::{EngineError, EngineResult};
pub use factory::{create_from_config, EngineConfig, MatchingEngineBuilder};
pub use matching_engine::{MatchReport, MatchingEngine};
pub use price_time::{match_order, MatchOutcome};
