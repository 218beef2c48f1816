//! Course record type.

use serde::{Deserialize, Serialize};

/// A single course record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier, assigned by the store on creation. Immutable.
    pub id: u64,

    /// Display name. At least 3 characters after trimming.
    pub name: String,
}
