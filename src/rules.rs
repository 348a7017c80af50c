//! Static text for the security-rules remediation notice.
//!
//! The notice is a fixed template rendered from constants; the binary
//! prints it verbatim, so output is identical on every run.

/// Firebase console entry point.
pub const CONSOLE_URL: &str = "https://console.firebase.google.com/";

/// Firebase project the rules belong to.
pub const PROJECT: &str = "proplanet";

/// Local file holding the updated rule set.
pub const RULES_FILE: &str = "firestore_security_rules_updated.rules";

/// CLI alternative to the console flow.
pub const DEPLOY_COMMAND: &str = "firebase deploy --only firestore:rules";

/// Render the full remediation notice.
pub fn render_notice() -> String {
    format!(
        "🚨 URGENT: Update Firestore Security Rules

The app is failing to save daily points due to PERMISSION_DENIED errors.

To fix this:
1. Go to Firebase Console: {}
2. Select your project: {}
3. Go to Firestore Database → Rules
4. Replace current rules with content from: {}
5. Click Publish

Or use Firebase CLI:
{}

After updating rules, restart your Flutter app and daily points will work!
",
        CONSOLE_URL, PROJECT, RULES_FILE, DEPLOY_COMMAND
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_is_deterministic() {
        assert_eq!(render_notice(), render_notice());
    }

    #[test]
    fn test_notice_contains_required_steps() {
        let notice = render_notice();
        assert!(notice.contains("Go to Firebase Console"));
        assert!(notice.contains("Click Publish"));
    }

    #[test]
    fn test_notice_names_project_and_rules_file() {
        let notice = render_notice();
        assert!(notice.contains(PROJECT));
        assert!(notice.contains(RULES_FILE));
        assert!(notice.contains(DEPLOY_COMMAND));
        assert!(notice.contains(CONSOLE_URL));
    }
}
