use uuid::Uuid;

use crate::modules::catalog::models::EnterpriseFee;
use crate::modules::catalog::repositories::Catalog;
use crate::modules::orders::models::Shipment;

/// Platform-wide tax label for shipping methods without an explicit
/// tax category
pub const SHIPPING_TAX_RATE_LABEL: &str = "Platform Rate";

/// Determines the display tax-category name for a fee charge
pub struct TaxCategoryResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> TaxCategoryResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolution order for enterprise fees, first match wins:
    /// explicit fee category, inherited product category, absent.
    pub fn resolve_enterprise_fee(
        &self,
        fee: &EnterpriseFee,
        variant_id: Option<Uuid>,
    ) -> Option<String> {
        if let Some(tax_category_id) = fee.tax_category_id {
            return self
                .catalog
                .tax_category_name(tax_category_id)
                .map(str::to_string);
        }

        if fee.inherits_tax_category {
            let variant = variant_id.and_then(|id| self.catalog.variant(id))?;
            let product_category_id = variant.product_tax_category_id?;
            return self
                .catalog
                .tax_category_name(product_category_id)
                .map(str::to_string);
        }

        None
    }

    /// Shipment charges: explicit method category, else the platform
    /// default label. Never absent.
    pub fn resolve_shipment(&self, shipment: &Shipment) -> String {
        shipment
            .tax_category_id
            .and_then(|id| self.catalog.tax_category_name(id))
            .unwrap_or(SHIPPING_TAX_RATE_LABEL)
            .to_string()
    }
}
