use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sellable product variant as the report needs to see it
///
/// Only the product's tax category is carried here; it is what an
/// inherits-tax-category fee resolves to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: Uuid,
    pub product_tax_category_id: Option<Uuid>,
}

impl Variant {
    pub fn new(product_tax_category_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_tax_category_id,
        }
    }
}
