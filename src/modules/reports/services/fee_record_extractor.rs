use tracing::debug;

use crate::core::money;
use crate::modules::catalog::models::FeeCategory;
use crate::modules::catalog::repositories::Catalog;
use crate::modules::orders::models::{FeeAdjustment, Order};
use crate::modules::reports::models::{FeeRecord, FeeType, OrderDataError};
use crate::modules::reports::services::placement_resolver::PlacementResolver;
use crate::modules::reports::services::tax_category_resolver::TaxCategoryResolver;

/// Records and per-order faults produced by one extraction pass
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<FeeRecord>,
    pub errors: Vec<OrderDataError>,
}

/// Walks completed orders and emits one normalized `FeeRecord` per
/// actual monetary charge: enterprise-fee adjustments, the payment
/// transaction fee, and the shipment fee.
///
/// Pure read over the order set and the catalog. A missing optional
/// association (no payment, no shipment) simply contributes no record;
/// missing required data is reported against the offending order and
/// the rest of the extraction continues.
pub struct FeeRecordExtractor<'a> {
    catalog: &'a Catalog,
    placement_resolver: PlacementResolver<'a>,
    tax_resolver: TaxCategoryResolver<'a>,
}

impl<'a> FeeRecordExtractor<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            placement_resolver: PlacementResolver::new(catalog),
            tax_resolver: TaxCategoryResolver::new(catalog),
        }
    }

    pub fn extract(&self, orders: &[Order]) -> Extraction {
        let mut extraction = Extraction::default();

        for order in orders {
            self.extract_order(order, &mut extraction);
        }

        debug!(
            records = extraction.records.len(),
            errors = extraction.errors.len(),
            "extracted fee records"
        );

        extraction
    }

    fn extract_order(&self, order: &Order, extraction: &mut Extraction) {
        let customer_name = match order.customer_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                extraction.errors.push(OrderDataError {
                    order_id: order.id,
                    message: "order has no customer".to_string(),
                });
                return;
            }
        };

        for adjustment in &order.fee_adjustments {
            match self.enterprise_fee_record(order, customer_name, adjustment) {
                Ok(record) => extraction.records.push(record),
                Err(message) => extraction.errors.push(OrderDataError {
                    order_id: order.id,
                    message,
                }),
            }
        }

        match self.catalog.enterprise_name(order.distributor_id) {
            Some(distributor_name) => {
                if let Some(payment) = &order.payment {
                    extraction.records.push(FeeRecord {
                        fee_type: FeeType::PaymentTransaction,
                        enterprise_name: distributor_name.to_string(),
                        fee_name: payment.method_name.clone(),
                        customer_name: customer_name.to_string(),
                        fee_placement: None,
                        fee_calculated_on_transfer_through_name: None,
                        tax_category_name: None,
                        amount: payment.transaction_fee,
                    });
                }

                if let Some(shipment) = &order.shipment {
                    extraction.records.push(FeeRecord {
                        fee_type: FeeType::Shipment,
                        enterprise_name: distributor_name.to_string(),
                        fee_name: shipment.method_name.clone(),
                        customer_name: customer_name.to_string(),
                        fee_placement: None,
                        fee_calculated_on_transfer_through_name: None,
                        tax_category_name: Some(self.tax_resolver.resolve_shipment(shipment)),
                        amount: shipment.fee,
                    });
                }
            }
            None => {
                if order.payment.is_some() || order.shipment.is_some() {
                    extraction.errors.push(OrderDataError {
                        order_id: order.id,
                        message: format!("unknown distributor {}", order.distributor_id),
                    });
                }
            }
        }
    }

    fn enterprise_fee_record(
        &self,
        order: &Order,
        customer_name: &str,
        adjustment: &FeeAdjustment,
    ) -> Result<FeeRecord, String> {
        let fee = self
            .catalog
            .fee(adjustment.enterprise_fee_id)
            .ok_or_else(|| format!("unknown enterprise fee {}", adjustment.enterprise_fee_id))?;

        let enterprise_name = self.catalog.enterprise_name(fee.enterprise_id).ok_or_else(|| {
            format!("unknown enterprise {} for fee {}", fee.enterprise_id, fee.name)
        })?;

        money::validate_amount(adjustment.amount)
            .map_err(|message| format!("fee {}: {}", fee.name, message))?;

        let resolved = self
            .placement_resolver
            .resolve(order.order_cycle_id, adjustment);
        let (fee_placement, transfer_through) = match resolved {
            Some(resolved) => (Some(resolved.placement), Some(resolved.transfer_through)),
            None => (None, None),
        };

        Ok(FeeRecord {
            fee_type: fee_type_of(fee.category),
            enterprise_name: enterprise_name.to_string(),
            fee_name: fee.name.clone(),
            customer_name: customer_name.to_string(),
            fee_placement,
            fee_calculated_on_transfer_through_name: transfer_through,
            tax_category_name: self
                .tax_resolver
                .resolve_enterprise_fee(fee, adjustment.variant_id),
            amount: adjustment.amount,
        })
    }
}

fn fee_type_of(category: FeeCategory) -> FeeType {
    match category {
        FeeCategory::Admin => FeeType::Admin,
        FeeCategory::Sales => FeeType::Sales,
    }
}
