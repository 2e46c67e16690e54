use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A business entity capable of levying fees: producer, coordinator,
/// or distributor. The role is positional (who sends/receives an
/// exchange, who coordinates a cycle), not a property of the enterprise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enterprise {
    pub id: Uuid,
    pub name: String,
}

impl Enterprise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
