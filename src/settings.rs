/// Settings stored in browser.storage.local
use serde::{Deserialize, Serialize};

use crate::email::build_labeled_email;
use crate::label::DomainMode;

/// Number of recently copied addresses kept in history
pub const MAX_HISTORY_ITEMS: usize = 3;

/// Keys read from storage when loading `Settings`
pub const STORAGE_KEYS: &[&str] = &[
    "email",
    "domainMode",
    "showHistory",
    "showFloatingIcon",
    "emailHistory",
];

fn default_true() -> bool {
    true
}

/// Root storage structure. Every key is optional in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub domain_mode: DomainMode,
    #[serde(default = "default_true")]
    pub show_history: bool,
    #[serde(default = "default_true")]
    pub show_floating_icon: bool,
    #[serde(default)]
    pub email_history: Vec<String>,
}

/// Everything the options page edits, leaving history alone
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub email: String,
    pub domain_mode: DomainMode,
    pub show_history: bool,
    pub show_floating_icon: bool,
}

impl Settings {
    pub fn new() -> Self {
        Settings {
            email: String::new(),
            domain_mode: DomainMode::Main,
            show_history: true,
            show_floating_icon: true,
            email_history: Vec::new(),
        }
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            email: self.email.clone(),
            domain_mode: self.domain_mode,
            show_history: self.show_history,
            show_floating_icon: self.show_floating_icon,
        }
    }

    pub fn trimmed_email(&self) -> &str {
        self.email.trim()
    }

    /// Labeled address for a hostname using the stored email and mode
    pub fn labeled_email_for(&self, hostname: &str) -> String {
        build_labeled_email(self.trimmed_email(), hostname, self.domain_mode)
    }

    /// Move `address` to the front of the history, dropping duplicates and
    /// anything past `MAX_HISTORY_ITEMS`
    pub fn record_copied(&mut self, address: &str) {
        self.email_history.retain(|item| item != address);
        self.email_history.insert(0, address.to_string());
        self.email_history.truncate(MAX_HISTORY_ITEMS);
    }

    /// History entries to display, honoring `show_history`
    pub fn visible_history(&self) -> &[String] {
        if self.show_history {
            &self.email_history
        } else {
            &[]
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_new() {
        let settings = Settings::new();
        assert_eq!(settings.email, "");
        assert_eq!(settings.domain_mode, DomainMode::Main);
        assert!(settings.show_history);
        assert!(settings.show_floating_icon);
        assert!(settings.email_history.is_empty());
    }

    #[test]
    fn test_deserialize_empty_storage() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::new());
    }

    #[test]
    fn test_deserialize_partial_storage() {
        let json = r#"{"email": " user@example.com ", "domainMode": "short", "showHistory": false}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.trimmed_email(), "user@example.com");
        assert_eq!(settings.domain_mode, DomainMode::Short);
        assert!(!settings.show_history);
        assert!(settings.show_floating_icon);
    }

    #[test]
    fn test_deserialize_unknown_mode() {
        let settings: Settings = serde_json::from_str(r#"{"domainMode": "subdomain"}"#).unwrap();
        assert_eq!(settings.domain_mode, DomainMode::Full);
    }

    #[test]
    fn test_serialization_keys() {
        let mut settings = Settings::new();
        settings.email = "user@example.com".to_string();
        settings.domain_mode = DomainMode::Full;

        let value = serde_json::to_value(&settings).unwrap();

        assert_eq!(value["email"], "user@example.com");
        assert_eq!(value["domainMode"], "full");
        assert_eq!(value["showHistory"], true);
        assert_eq!(value["showFloatingIcon"], true);
        assert!(value["emailHistory"].as_array().unwrap().is_empty());
        for key in STORAGE_KEYS {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_preferences_leave_history_out() {
        let mut settings = Settings::new();
        settings.email = "user@example.com".to_string();
        settings.show_floating_icon = false;
        settings.record_copied("user+github.com@example.com");

        let value = serde_json::to_value(settings.preferences()).unwrap();

        assert_eq!(value["email"], "user@example.com");
        assert_eq!(value["domainMode"], "main");
        assert_eq!(value["showFloatingIcon"], false);
        assert!(value.get("emailHistory").is_none());
    }

    #[test]
    fn test_labeled_email_for() {
        let mut settings = Settings::new();
        settings.email = "  user@example.com".to_string();

        assert_eq!(
            settings.labeled_email_for("www.example.co.uk"),
            "user+example.co.uk@example.com"
        );
        assert_eq!(settings.labeled_email_for(""), "user@example.com");
    }

    #[test]
    fn test_record_copied_most_recent_first() {
        let mut settings = Settings::new();
        settings.record_copied("a+1@x.com");
        settings.record_copied("a+2@x.com");

        assert_eq!(settings.email_history, vec!["a+2@x.com", "a+1@x.com"]);
    }

    #[test]
    fn test_record_copied_moves_duplicate_to_front() {
        let mut settings = Settings::new();
        settings.record_copied("a+1@x.com");
        settings.record_copied("a+2@x.com");
        settings.record_copied("a+1@x.com");

        assert_eq!(settings.email_history, vec!["a+1@x.com", "a+2@x.com"]);
    }

    #[test]
    fn test_record_copied_truncates() {
        let mut settings = Settings::new();
        for i in 0..5 {
            settings.record_copied(&format!("a+{}@x.com", i));
        }

        assert_eq!(settings.email_history.len(), MAX_HISTORY_ITEMS);
        assert_eq!(settings.email_history[0], "a+4@x.com");
        assert_eq!(settings.email_history[2], "a+2@x.com");
    }

    #[test]
    fn test_visible_history() {
        let mut settings = Settings::new();
        settings.record_copied("a+1@x.com");
        assert_eq!(settings.visible_history().len(), 1);

        settings.show_history = false;
        assert!(settings.visible_history().is_empty());
    }
}
