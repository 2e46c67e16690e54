pub mod models;
pub mod repositories;

pub use models::{Enterprise, EnterpriseFee, Exchange, FeeCategory, OrderCycle, TaxCategory, Variant};
pub use repositories::Catalog;
