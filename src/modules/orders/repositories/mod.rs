pub mod order_source;

pub use order_source::{InMemoryOrderSource, OrderSource};
