use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::money;
use crate::modules::reports::models::{FeePlacement, FeeType};

/// One aggregated report row: the sum of every fee charge sharing the
/// same seven-field grouping key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeTotal {
    pub fee_type: FeeType,
    pub enterprise_name: String,
    pub fee_name: String,
    pub customer_name: String,
    pub fee_placement: Option<FeePlacement>,
    pub fee_calculated_on_transfer_through_name: Option<String>,
    pub tax_category_name: Option<String>,
    /// Sum of contributing charge amounts, rounded to two decimals
    pub total_amount: Decimal,
}

impl FeeTotal {
    /// Total rendered with exactly two decimal places, for display layers
    pub fn formatted_total(&self) -> String {
        money::format_amount(self.total_amount)
    }
}

/// Data-integrity fault found on a single order during extraction
///
/// Attributable and non-fatal: the order's charges are skipped, the
/// rest of the report still aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDataError {
    pub order_id: Uuid,
    pub message: String,
}

/// The finished report: fully sorted totals plus any per-order errors
/// encountered while extracting charges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeTotalsList {
    pub list: Vec<FeeTotal>,
    pub errors: Vec<OrderDataError>,
}

impl FeeTotalsList {
    pub fn new(list: Vec<FeeTotal>, errors: Vec<OrderDataError>) -> Self {
        Self { list, errors }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Grand total across every row
    pub fn total(&self) -> Decimal {
        self.list.iter().map(|row| row.total_amount).sum()
    }
}
