use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named tax treatment that fees and products can reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxCategory {
    pub id: Uuid,
    pub name: String,
}

impl TaxCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
