use std::collections::HashMap;

use uuid::Uuid;

use crate::modules::catalog::models::{
    Enterprise, EnterpriseFee, Exchange, OrderCycle, TaxCategory, Variant,
};

/// Immutable snapshot of the reference data a report run resolves
/// against: enterprises, fee definitions, tax categories, variants,
/// order cycles, and their exchanges.
///
/// Built once per invocation from data supplied by the input
/// collaborator; the engine never mutates it.
#[derive(Debug, Default)]
pub struct Catalog {
    enterprises: HashMap<Uuid, Enterprise>,
    fees: HashMap<Uuid, EnterpriseFee>,
    tax_categories: HashMap<Uuid, TaxCategory>,
    variants: HashMap<Uuid, Variant>,
    order_cycles: HashMap<Uuid, OrderCycle>,
    /// Exchanges grouped by their order cycle, incoming before outgoing
    exchanges_by_cycle: HashMap<Uuid, Vec<Exchange>>,
}

impl Catalog {
    pub fn new(
        enterprises: Vec<Enterprise>,
        fees: Vec<EnterpriseFee>,
        tax_categories: Vec<TaxCategory>,
        variants: Vec<Variant>,
        order_cycles: Vec<OrderCycle>,
        exchanges: Vec<Exchange>,
    ) -> Self {
        let mut exchanges_by_cycle: HashMap<Uuid, Vec<Exchange>> = HashMap::new();
        for exchange in exchanges {
            exchanges_by_cycle
                .entry(exchange.order_cycle_id)
                .or_default()
                .push(exchange);
        }
        // Placement resolution scans incoming exchanges first
        for cycle_exchanges in exchanges_by_cycle.values_mut() {
            cycle_exchanges.sort_by_key(|exchange| !exchange.incoming);
        }

        Self {
            enterprises: enterprises.into_iter().map(|e| (e.id, e)).collect(),
            fees: fees.into_iter().map(|f| (f.id, f)).collect(),
            tax_categories: tax_categories.into_iter().map(|t| (t.id, t)).collect(),
            variants: variants.into_iter().map(|v| (v.id, v)).collect(),
            order_cycles: order_cycles.into_iter().map(|c| (c.id, c)).collect(),
            exchanges_by_cycle,
        }
    }

    pub fn fee(&self, fee_id: Uuid) -> Option<&EnterpriseFee> {
        self.fees.get(&fee_id)
    }

    pub fn enterprise(&self, enterprise_id: Uuid) -> Option<&Enterprise> {
        self.enterprises.get(&enterprise_id)
    }

    pub fn enterprise_name(&self, enterprise_id: Uuid) -> Option<&str> {
        self.enterprises
            .get(&enterprise_id)
            .map(|enterprise| enterprise.name.as_str())
    }

    pub fn tax_category_name(&self, tax_category_id: Uuid) -> Option<&str> {
        self.tax_categories
            .get(&tax_category_id)
            .map(|category| category.name.as_str())
    }

    pub fn variant(&self, variant_id: Uuid) -> Option<&Variant> {
        self.variants.get(&variant_id)
    }

    pub fn order_cycle(&self, order_cycle_id: Uuid) -> Option<&OrderCycle> {
        self.order_cycles.get(&order_cycle_id)
    }

    /// Exchanges belonging to an order cycle, incoming legs first
    pub fn exchanges_of_cycle(&self, order_cycle_id: Uuid) -> &[Exchange] {
        self.exchanges_by_cycle
            .get(&order_cycle_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
