use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The completed payment on an order, with the transaction fee its
/// payment method charged
///
/// The fee amount is computed upstream by the method's calculator; the
/// report only aggregates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub method_name: String,
    pub transaction_fee: Decimal,
}

impl Payment {
    pub fn new(method_name: impl Into<String>, transaction_fee: Decimal) -> Self {
        Self {
            method_name: method_name.into(),
            transaction_fee,
        }
    }
}
