use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::core::{money, AppError, Result};
use crate::modules::reports::models::{FeePlacement, FeeRecord, FeeTotal, FeeType};

/// Grouping key: the seven non-amount fields of a fee record
///
/// Two absent values compare equal to each other and unequal to any
/// present value, which plain `Option` equality already gives us.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    fee_type: FeeType,
    enterprise_name: String,
    fee_name: String,
    customer_name: String,
    fee_placement: Option<FeePlacement>,
    fee_calculated_on_transfer_through_name: Option<String>,
    tax_category_name: Option<String>,
}

impl GroupKey {
    fn of(record: &FeeRecord) -> Self {
        Self {
            fee_type: record.fee_type,
            enterprise_name: record.enterprise_name.clone(),
            fee_name: record.fee_name.clone(),
            customer_name: record.customer_name.clone(),
            fee_placement: record.fee_placement,
            fee_calculated_on_transfer_through_name: record
                .fee_calculated_on_transfer_through_name
                .clone(),
            tax_category_name: record.tax_category_name.clone(),
        }
    }
}

/// Groups fee records by their seven-field key and sums the amounts
///
/// Output order is unspecified here; the sorter establishes it.
pub struct FeeTotalsAggregator;

impl FeeTotalsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    /// Returns an overflow error when a running total leaves the
    /// representable decimal range; that aborts the report run.
    pub fn aggregate(&self, records: &[FeeRecord]) -> Result<Vec<FeeTotal>> {
        let mut groups: HashMap<GroupKey, Decimal> = HashMap::new();

        for record in records {
            let total = groups.entry(GroupKey::of(record)).or_insert(Decimal::ZERO);
            *total = total.checked_add(record.amount).ok_or_else(|| {
                AppError::overflow(format!(
                    "total for fee {} of {} exceeds representable range",
                    record.fee_name, record.enterprise_name
                ))
            })?;
        }

        let totals = groups
            .into_iter()
            .map(|(key, total)| FeeTotal {
                fee_type: key.fee_type,
                enterprise_name: key.enterprise_name,
                fee_name: key.fee_name,
                customer_name: key.customer_name,
                fee_placement: key.fee_placement,
                fee_calculated_on_transfer_through_name: key
                    .fee_calculated_on_transfer_through_name,
                tax_category_name: key.tax_category_name,
                total_amount: money::round_amount(total),
            })
            .collect();

        Ok(totals)
    }
}

impl Default for FeeTotalsAggregator {
    fn default() -> Self {
        Self::new()
    }
}
