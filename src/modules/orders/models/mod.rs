pub mod order;
pub mod payment;
pub mod shipment;

pub use order::{FeeAdjustment, LineItem, Order};
pub use payment::Payment;
pub use shipment::Shipment;
