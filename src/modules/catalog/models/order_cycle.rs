use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A time-boxed coordination window grouping exchanges between
/// producers, a coordinator, and distributors
///
/// Coordinator fees attach directly to the cycle and apply across the
/// whole cycle rather than to a single transfer leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCycle {
    pub id: Uuid,
    pub coordinator_id: Uuid,
    pub coordinator_fee_ids: Vec<Uuid>,
}

impl OrderCycle {
    pub fn new(coordinator_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            coordinator_id,
            coordinator_fee_ids: Vec::new(),
        }
    }

    pub fn with_coordinator_fees(mut self, coordinator_fee_ids: Vec<Uuid>) -> Self {
        self.coordinator_fee_ids = coordinator_fee_ids;
        self
    }

    pub fn has_coordinator_fee(&self, fee_id: Uuid) -> bool {
        self.coordinator_fee_ids.contains(&fee_id)
    }
}
