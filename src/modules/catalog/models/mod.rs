pub mod enterprise;
pub mod enterprise_fee;
pub mod exchange;
pub mod order_cycle;
pub mod tax_category;
pub mod variant;

pub use enterprise::Enterprise;
pub use enterprise_fee::{EnterpriseFee, FeeCategory};
pub use exchange::Exchange;
pub use order_cycle::OrderCycle;
pub use tax_category::TaxCategory;
pub use variant::Variant;
