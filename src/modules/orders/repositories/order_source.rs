use crate::core::Result;
use crate::modules::orders::models::Order;
use crate::modules::reports::models::Parameters;

/// Supplies the completed orders a report run aggregates over
///
/// Implementations own the bulk read and the parameter filtering; the
/// report engine itself performs no I/O. A database-backed source and
/// the in-memory snapshot below are interchangeable behind this trait.
pub trait OrderSource {
    fn completed_orders(&self, parameters: &Parameters) -> Result<Vec<Order>>;
}

/// Order source over an in-memory snapshot of completed orders
///
/// Filters by completion time range, order cycle, and distributor;
/// empty id filters match every order.
#[derive(Debug, Default)]
pub struct InMemoryOrderSource {
    orders: Vec<Order>,
}

impl InMemoryOrderSource {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

impl OrderSource for InMemoryOrderSource {
    fn completed_orders(&self, parameters: &Parameters) -> Result<Vec<Order>> {
        let matching = self
            .orders
            .iter()
            .filter(|order| parameters.matches(order))
            .cloned()
            .collect();

        Ok(matching)
    }
}
