use serde::{Deserialize, Serialize};

/// A restaurant the catalog knows about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    /// Postal code the restaurant delivers from
    pub plz: String,
}

impl Restaurant {
    pub fn new(id: i64, name: impl Into<String>, plz: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            plz: plz.into(),
        }
    }
}
