use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::orders::models::{Payment, Shipment};

/// A single product line on an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub variant_id: Uuid,
}

/// One actual enterprise-fee charge occurrence on an order
///
/// Amounts are computed upstream by the fee's calculator. A fee
/// attached to several exchanges an order's line items pass through
/// produces one adjustment per occurrence; occurrences are never
/// deduplicated by fee identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeAdjustment {
    pub enterprise_fee_id: Uuid,
    /// Variant the charge was calculated against, when the fee applies
    /// to a specific line item rather than the whole cycle
    pub variant_id: Option<Uuid>,
    pub amount: Decimal,
}

impl FeeAdjustment {
    pub fn new(enterprise_fee_id: Uuid, variant_id: Option<Uuid>, amount: Decimal) -> Self {
        Self {
            enterprise_fee_id,
            variant_id,
            amount,
        }
    }
}

/// A completed order as supplied by the input collaborator
///
/// `customer_name` is required data; it is modeled as an Option so a
/// missing customer surfaces as a per-order data error instead of
/// aborting the whole report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: Option<String>,
    pub distributor_id: Uuid,
    pub order_cycle_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub line_items: Vec<LineItem>,
    pub fee_adjustments: Vec<FeeAdjustment>,
    pub payment: Option<Payment>,
    pub shipment: Option<Shipment>,
}

impl Order {
    pub fn new(
        customer_name: impl Into<String>,
        distributor_id: Uuid,
        order_cycle_id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: Some(customer_name.into()),
            distributor_id,
            order_cycle_id,
            completed_at,
            line_items: Vec::new(),
            fee_adjustments: Vec::new(),
            payment: None,
            shipment: None,
        }
    }

    pub fn with_line_item(mut self, variant_id: Uuid) -> Self {
        self.line_items.push(LineItem { variant_id });
        self
    }

    pub fn with_fee_adjustment(mut self, adjustment: FeeAdjustment) -> Self {
        self.fee_adjustments.push(adjustment);
        self
    }

    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payment = Some(payment);
        self
    }

    pub fn with_shipment(mut self, shipment: Shipment) -> Self {
        self.shipment = Some(shipment);
        self
    }
}
