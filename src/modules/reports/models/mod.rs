pub mod fee_record;
pub mod fee_total;
pub mod parameters;

pub use fee_record::{FeePlacement, FeeRecord, FeeType};
pub use fee_total::{FeeTotal, FeeTotalsList, OrderDataError};
pub use parameters::Parameters;
