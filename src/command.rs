//! Builds the Firebase CLI invocation the operator copy-pastes.

use crate::record::AdminRecord;
use anyhow::Result;

/// Firestore collection that holds admin documents.
pub const ADMINS_COLLECTION: &str = "admins";

/// Render the `firebase firestore:set` command for one record.
///
/// The record is embedded as compact JSON and shell-quoted so the line
/// can be pasted into a shell as-is. The uid goes into the document
/// path unchanged, whatever the operator typed.
pub fn firestore_set(uid: &str, record: &AdminRecord) -> Result<String> {
    let json = serde_json::to_string(record)?;
    Ok(format!(
        "firebase firestore:set {}/{} {}",
        ADMINS_COLLECTION,
        uid,
        shell_words::quote(&json)
    ))
}
