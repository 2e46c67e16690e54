use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category an enterprise assigns to one of its fees
///
/// The report displays the capitalized label ("Admin" / "Sales").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeCategory {
    Admin,
    Sales,
}

impl FeeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FeeCategory::Admin => "Admin",
            FeeCategory::Sales => "Sales",
        }
    }
}

/// A fee definition owned by an enterprise
///
/// A definition on its own never produces a charge; it must be attached
/// to an order cycle (as a coordinator fee) or to an exchange before any
/// order can incur it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnterpriseFee {
    pub id: Uuid,
    pub enterprise_id: Uuid,
    pub name: String,
    pub category: FeeCategory,
    /// Explicit tax treatment; takes precedence over inheritance
    pub tax_category_id: Option<Uuid>,
    /// When set, the fee's tax treatment follows the taxed product's
    /// own tax category
    pub inherits_tax_category: bool,
}

impl EnterpriseFee {
    pub fn new(enterprise_id: Uuid, name: impl Into<String>, category: FeeCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            enterprise_id,
            name: name.into(),
            category,
            tax_category_id: None,
            inherits_tax_category: false,
        }
    }

    pub fn with_tax_category(mut self, tax_category_id: Uuid) -> Self {
        self.tax_category_id = Some(tax_category_id);
        self
    }

    pub fn with_inherited_tax_category(mut self) -> Self {
        self.inherits_tax_category = true;
        self
    }
}
