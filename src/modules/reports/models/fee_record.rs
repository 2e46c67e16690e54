use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of fee a report row describes
///
/// Rows sort by the display label; see the report sorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeType {
    Admin,
    PaymentTransaction,
    Sales,
    Shipment,
}

impl FeeType {
    pub fn label(&self) -> &'static str {
        match self {
            FeeType::Admin => "Admin",
            FeeType::PaymentTransaction => "Payment Transaction",
            FeeType::Sales => "Sales",
            FeeType::Shipment => "Shipment",
        }
    }
}

/// Where in the supply chain an enterprise fee was incurred
///
/// Absent for payment and shipment charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeePlacement {
    Coordinator,
    Incoming,
    Outgoing,
}

impl FeePlacement {
    pub fn label(&self) -> &'static str {
        match self {
            FeePlacement::Coordinator => "Coordinator",
            FeePlacement::Incoming => "Incoming",
            FeePlacement::Outgoing => "Outgoing",
        }
    }
}

/// One normalized fee charge on one completed order
///
/// Ephemeral: built fresh per report invocation and discarded after
/// aggregation. The seven non-amount fields form the grouping key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRecord {
    pub fee_type: FeeType,
    pub enterprise_name: String,
    pub fee_name: String,
    pub customer_name: String,
    pub fee_placement: Option<FeePlacement>,
    pub fee_calculated_on_transfer_through_name: Option<String>,
    pub tax_category_name: Option<String>,
    pub amount: Decimal,
}
