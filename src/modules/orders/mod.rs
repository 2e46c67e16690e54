pub mod models;
pub mod repositories;

pub use models::{FeeAdjustment, LineItem, Order, Payment, Shipment};
pub use repositories::{InMemoryOrderSource, OrderSource};
