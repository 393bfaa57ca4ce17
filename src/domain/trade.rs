// ============================================================================
// Trade Domain Model
// ============================================================================

use crate::numeric::{Price, Quantity};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// One matched quantity slice between a buyer and a seller.
///
/// Trades are pure records: created exactly once per match, appended to the
/// outbound stream, and never referenced again by the engine. The timestamp
/// is the time of the match, not of either originating order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trade {
    /// Unique trade identifier
    pub id: Uuid,

    /// Execution price, always the sell-side order's quoted price
    pub price: Price,

    /// Executed quantity
    pub quantity: Quantity,

    /// Participant on the sell side of the match
    pub sell_participant: Arc<String>,

    /// Participant on the buy side of the match
    pub buy_participant: Arc<String>,

    /// Time of the match
    pub timestamp: DateTime<Utc>,
}

impl Trade {
    pub fn new(
        price: Price,
        quantity: Quantity,
        sell_participant: Arc<String>,
        buy_participant: Arc<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            price,
            quantity,
            sell_participant,
            buy_participant,
            timestamp: Utc::now(),
        }
    }
}
