//! fireadmin - operator tools for a Firestore-backed app
//!
//! This library backs the `fireadmin` and `fireadmin-rules` binaries:
//! the admin record model, the interactive prompt flow, the Firebase
//! CLI command builder, and the static rules-deployment notice.

pub mod command;
pub mod prompts;
pub mod record;
pub mod rules;
