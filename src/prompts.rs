//! Interactive collection of the admin account fields.
//!
//! The prompt sequence is a fixed, ordered configuration rather than
//! ad-hoc questions: each field has a stable key and the label shown
//! to the operator.

use rustyline::DefaultEditor;
use std::collections::HashMap;

/// A single required input field.
#[derive(Debug, Clone, Copy)]
pub struct PromptField {
    pub key: &'static str,
    pub label: &'static str,
}

/// The fields needed to assemble an admin record, in prompt order.
pub const ADMIN_FIELDS: &[PromptField] = &[
    PromptField {
        key: "uid",
        label: "Enter your Firebase User ID (UID)",
    },
    PromptField {
        key: "email",
        label: "Enter your email",
    },
    PromptField {
        key: "name",
        label: "Enter your name",
    },
];

/// Fields from `fields`, in order, that have no answer yet.
pub fn missing_fields<'a>(
    fields: &'a [PromptField],
    answers: &HashMap<String, String>,
) -> Vec<&'a PromptField> {
    fields
        .iter()
        .filter(|f| !answers.contains_key(f.key))
        .collect()
}

/// Prompt for every unanswered field and store the responses.
///
/// Answers are kept verbatim apart from trimming; empty input is
/// accepted. Interrupt or EOF cancels the whole sequence.
pub fn fill_missing(
    fields: &[PromptField],
    answers: &mut HashMap<String, String>,
    rl: &mut DefaultEditor,
) -> Result<(), String> {
    for field in missing_fields(fields, answers) {
        let line = match rl.readline(&format!("{}: ", field.label)) {
            Ok(line) => line.trim().to_string(),
            Err(_) => return Err("Input cancelled".to_string()),
        };
        answers.insert(field.key.to_string(), line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_fields_order() {
        let keys: Vec<&str> = ADMIN_FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["uid", "email", "name"]);
    }

    #[test]
    fn test_missing_fields_empty_answers() {
        let answers = HashMap::new();
        let missing = missing_fields(ADMIN_FIELDS, &answers);
        assert_eq!(missing.len(), 3);
        assert_eq!(missing[0].key, "uid");
    }

    #[test]
    fn test_missing_fields_preserves_order() {
        let mut answers = HashMap::new();
        answers.insert("email".to_string(), "a@b.com".to_string());
        let missing = missing_fields(ADMIN_FIELDS, &answers);
        let keys: Vec<&str> = missing.iter().map(|f| f.key).collect();
        assert_eq!(keys, vec!["uid", "name"]);
    }

    #[test]
    fn test_missing_fields_all_answered() {
        let mut answers = HashMap::new();
        for field in ADMIN_FIELDS {
            answers.insert(field.key.to_string(), String::new());
        }
        assert!(missing_fields(ADMIN_FIELDS, &answers).is_empty());
    }

    #[test]
    fn test_empty_answer_counts_as_answered() {
        let mut answers = HashMap::new();
        answers.insert("uid".to_string(), String::new());
        let missing = missing_fields(ADMIN_FIELDS, &answers);
        assert!(!missing.iter().any(|f| f.key == "uid"));
    }
}
