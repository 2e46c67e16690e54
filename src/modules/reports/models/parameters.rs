use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::orders::models::Order;

/// Report-level filters narrowing the order set before aggregation
///
/// All filters are optional; the default matches every completed order.
/// Empty id lists are treated as "no filter", not "match nothing".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameters {
    /// Orders completed at or after this instant (inclusive)
    pub completed_at_from: Option<DateTime<Utc>>,
    /// Orders completed at or before this instant (inclusive)
    pub completed_at_to: Option<DateTime<Utc>>,
    pub order_cycle_ids: Vec<Uuid>,
    pub distributor_ids: Vec<Uuid>,
}

impl Parameters {
    /// Validate that the filters describe a satisfiable order set
    ///
    /// # Errors
    /// Returns a validation error when the completion window is inverted.
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.completed_at_from, self.completed_at_to) {
            if start > end {
                return Err(AppError::validation(format!(
                    "completed_at_from ({}) must be before or equal to completed_at_to ({})",
                    start, end
                )));
            }
        }

        Ok(())
    }

    /// Whether an order falls inside every configured filter
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(start) = self.completed_at_from {
            if order.completed_at < start {
                return false;
            }
        }
        if let Some(end) = self.completed_at_to {
            if order.completed_at > end {
                return false;
            }
        }
        if !self.order_cycle_ids.is_empty() && !self.order_cycle_ids.contains(&order.order_cycle_id)
        {
            return false;
        }
        if !self.distributor_ids.is_empty() && !self.distributor_ids.contains(&order.distributor_id)
        {
            return false;
        }

        true
    }
}
