// ============================================================================
// Numeric Module
// Integer tick arithmetic for order matching
// ============================================================================
//
// This module provides:
// - Price: whole tick counts (smallest price increment)
// - Quantity: whole instrument units
// - NumericError: error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Values are non-negative by construction

mod errors;
mod tick;

pub use errors::{NumericError, NumericResult};
pub use tick::{Price, Quantity};
