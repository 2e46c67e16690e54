//! Enterprise fee summary report engine
//!
//! Normalizes the fee charges on completed orders (enterprise fees on
//! order cycles and exchanges, payment transaction fees, shipment
//! fees) into uniform records, aggregates them by a seven-field key,
//! and returns a deterministically sorted list of totals.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::catalog;
pub use modules::orders;
pub use modules::reports;
