pub mod models;
pub mod services;

pub use models::{FeePlacement, FeeRecord, FeeTotal, FeeTotalsList, FeeType, Parameters};
pub use services::ReportService;
