use uuid::Uuid;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for report parameters and business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// A running total exceeded the representable amount range
    #[error("Amount overflow: {0}")]
    Overflow(String),

    /// Data-integrity fault attributable to a single order
    #[error("Order data error for order {order_id}: {message}")]
    OrderData { order_id: Uuid, message: String },
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        AppError::Overflow(msg.into())
    }

    pub fn order_data(order_id: Uuid, message: impl Into<String>) -> Self {
        AppError::OrderData {
            order_id,
            message: message.into(),
        }
    }
}
