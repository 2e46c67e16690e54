use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The shipment on an order, with the fee its shipping method charged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub method_name: String,
    pub fee: Decimal,
    /// Explicit tax category of the shipping method, when it has one
    pub tax_category_id: Option<Uuid>,
}

impl Shipment {
    pub fn new(method_name: impl Into<String>, fee: Decimal) -> Self {
        Self {
            method_name: method_name.into(),
            fee,
            tax_category_id: None,
        }
    }

    pub fn with_tax_category(mut self, tax_category_id: Uuid) -> Self {
        self.tax_category_id = Some(tax_category_id);
        self
    }
}
