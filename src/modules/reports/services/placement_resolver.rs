use uuid::Uuid;

use crate::modules::catalog::repositories::Catalog;
use crate::modules::orders::models::FeeAdjustment;
use crate::modules::reports::models::FeePlacement;

/// Transfer-through label for coordinator fees, which apply across the
/// whole order cycle rather than a single transfer leg
pub const TRANSFER_THROUGH_ALL: &str = "All";

/// Placement of an enterprise-fee charge, with the enterprise the goods
/// were moving through when the fee was calculated
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlacement {
    pub placement: FeePlacement,
    pub transfer_through: String,
}

/// Derives where in the supply chain an enterprise-fee charge was
/// incurred, from the order cycle's coordinator-fee list and exchanges
pub struct PlacementResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> PlacementResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolve one charge occurrence against its order cycle
    ///
    /// Coordinator fees win over exchange attachments; exchange
    /// attachments are scanned incoming legs first, and must carry the
    /// adjustment's variant when one is named. Returns `None` when the
    /// fee is not on any tracked attachment point, in which case the
    /// caller emits the record with both placement fields absent.
    pub fn resolve(
        &self,
        order_cycle_id: Uuid,
        adjustment: &FeeAdjustment,
    ) -> Option<ResolvedPlacement> {
        let order_cycle = self.catalog.order_cycle(order_cycle_id)?;

        if order_cycle.has_coordinator_fee(adjustment.enterprise_fee_id) {
            return Some(ResolvedPlacement {
                placement: FeePlacement::Coordinator,
                transfer_through: TRANSFER_THROUGH_ALL.to_string(),
            });
        }

        // Incoming exchanges sort first in the catalog, so a fee
        // attached to both legs resolves to the incoming one.
        self.catalog
            .exchanges_of_cycle(order_cycle_id)
            .iter()
            .filter(|exchange| exchange.carries_fee(adjustment.enterprise_fee_id))
            .filter(|exchange| match adjustment.variant_id {
                Some(variant_id) => exchange.carries_variant(variant_id),
                None => true,
            })
            .find_map(|exchange| {
                let sender_name = self.catalog.enterprise_name(exchange.sender_id)?;
                let placement = if exchange.incoming {
                    FeePlacement::Incoming
                } else {
                    FeePlacement::Outgoing
                };
                Some(ResolvedPlacement {
                    placement,
                    transfer_through: sender_name.to_string(),
                })
            })
    }
}
