use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed transfer of variants between two enterprises within an
/// order cycle
///
/// Incoming exchanges move goods producer → coordinator; outgoing
/// exchanges move them coordinator → distributor. Enterprise fees
/// attached here are charged on every order whose line items pass
/// through the exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub id: Uuid,
    pub order_cycle_id: Uuid,
    pub incoming: bool,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub variant_ids: Vec<Uuid>,
    pub enterprise_fee_ids: Vec<Uuid>,
}

impl Exchange {
    pub fn new(order_cycle_id: Uuid, incoming: bool, sender_id: Uuid, receiver_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_cycle_id,
            incoming,
            sender_id,
            receiver_id,
            variant_ids: Vec::new(),
            enterprise_fee_ids: Vec::new(),
        }
    }

    pub fn with_variants(mut self, variant_ids: Vec<Uuid>) -> Self {
        self.variant_ids = variant_ids;
        self
    }

    pub fn with_fees(mut self, enterprise_fee_ids: Vec<Uuid>) -> Self {
        self.enterprise_fee_ids = enterprise_fee_ids;
        self
    }

    pub fn carries_fee(&self, fee_id: Uuid) -> bool {
        self.enterprise_fee_ids.contains(&fee_id)
    }

    pub fn carries_variant(&self, variant_id: Uuid) -> bool {
        self.variant_ids.contains(&variant_id)
    }
}
