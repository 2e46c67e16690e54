use tracing::{info, warn};

use crate::core::Result;
use crate::modules::catalog::repositories::Catalog;
use crate::modules::orders::repositories::OrderSource;
use crate::modules::reports::models::{FeeTotalsList, Parameters};
use crate::modules::reports::services::fee_record_extractor::FeeRecordExtractor;
use crate::modules::reports::services::fee_totals_aggregator::FeeTotalsAggregator;
use crate::modules::reports::services::report_sorter::ReportSorter;

/// Orchestrates the fee-summary pipeline end to end: fetch completed
/// orders, extract normalized fee records, aggregate, sort.
///
/// Pure function of the catalog snapshot, the order source, and the
/// parameters; identical inputs always yield an identical list.
/// Invocations share no mutable state, so concurrent runs need no
/// coordination.
pub struct ReportService<S: OrderSource> {
    catalog: Catalog,
    order_source: S,
}

impl<S: OrderSource> ReportService<S> {
    pub fn new(catalog: Catalog, order_source: S) -> Self {
        Self {
            catalog,
            order_source,
        }
    }

    /// Generate the consolidated fee-summary report
    ///
    /// # Errors
    /// Returns a validation error for an inverted completion window,
    /// or an overflow error when a total leaves the representable
    /// range. Per-order data faults do not abort the run; they are
    /// attached to the returned list.
    pub fn enterprise_fee_type_totals(&self, parameters: &Parameters) -> Result<FeeTotalsList> {
        parameters.validate()?;

        let orders = self.order_source.completed_orders(parameters)?;
        info!(orders = orders.len(), "generating enterprise fee summary");

        let extraction = FeeRecordExtractor::new(&self.catalog).extract(&orders);
        for error in &extraction.errors {
            warn!(order_id = %error.order_id, "skipping order data: {}", error.message);
        }

        let mut totals = FeeTotalsAggregator::new().aggregate(&extraction.records)?;
        ReportSorter::new().sort(&mut totals);

        info!(rows = totals.len(), "enterprise fee summary generated");
        Ok(FeeTotalsList::new(totals, extraction.errors))
    }
}
