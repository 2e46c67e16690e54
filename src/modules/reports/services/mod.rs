pub mod fee_record_extractor;
pub mod fee_totals_aggregator;
pub mod placement_resolver;
pub mod report_service;
pub mod report_sorter;
pub mod tax_category_resolver;

pub use fee_record_extractor::{Extraction, FeeRecordExtractor};
pub use fee_totals_aggregator::FeeTotalsAggregator;
pub use placement_resolver::{PlacementResolver, ResolvedPlacement, TRANSFER_THROUGH_ALL};
pub use report_service::ReportService;
pub use report_sorter::ReportSorter;
pub use tax_category_resolver::{TaxCategoryResolver, SHIPPING_TAX_RATE_LABEL};
