//! The admin document written to Firestore.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role value stored on every record this tool creates.
pub const ROLE_ADMIN: &str = "admin";

/// One admin document, shaped like the Firestore `admins/<uid>` entry.
///
/// Field names serialize in camelCase to match the document schema the
/// app reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRecord {
    pub email: String,
    pub name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl AdminRecord {
    /// Build a record from collected inputs, stamped with the current
    /// time. Values are stored verbatim; this tool does not validate
    /// operator input.
    pub fn new(email: String, name: String) -> Self {
        Self {
            email,
            name,
            role: ROLE_ADMIN.to_string(),
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
