/// Label derivation: hostname + domain mode → email-safe label
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::suffix::suffix_len;

/// How much of the hostname becomes the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainMode {
    /// Registrable domain: `mail.google.co.uk` → `google.co.uk`
    #[default]
    Main,
    /// Second-to-last part only: `mail.google.com` → `google`
    Short,
    /// Whole hostname
    Full,
}

impl DomainMode {
    pub const ALL: [DomainMode; 3] = [DomainMode::Main, DomainMode::Short, DomainMode::Full];

    pub fn as_str(self) -> &'static str {
        match self {
            DomainMode::Main => "main",
            DomainMode::Short => "short",
            DomainMode::Full => "full",
        }
    }

    /// Read a stored mode value. Missing/empty means `main`; anything that is
    /// not a known mode falls through to `full`.
    pub fn from_setting(value: &str) -> DomainMode {
        match value {
            "" | "main" => DomainMode::Main,
            "short" => DomainMode::Short,
            _ => DomainMode::Full,
        }
    }
}

impl fmt::Display for DomainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DomainMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DomainMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(DomainMode::from_setting(value.as_deref().unwrap_or("")))
    }
}

/// Derive the label for a hostname
///
/// Algorithm:
/// 1. Split hostname by "."
/// 2. short: second-to-last part (whole hostname if there is only one part)
/// 3. full: whole hostname
/// 4. main: last 2 parts, or last 3 when the second-to-last part is a
///    second-level category of the TLD (see `suffix`)
/// 5. Sanitize the result
///
/// Examples:
/// - www.amazon.com, main → amazon.com
/// - www.example.co.uk, main → example.co.uk
/// - mail.google.com, short → google
/// - foo.bar, full → foo.bar
pub fn derive_label(hostname: &str, mode: DomainMode) -> String {
    if hostname.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = hostname.split('.').collect();

    let label = match mode {
        DomainMode::Short if parts.len() >= 2 => parts[parts.len() - 2].to_string(),
        DomainMode::Main if parts.len() >= 2 => {
            let num_parts = suffix_len(&parts) + 1;
            parts[parts.len() - num_parts..].join(".")
        }
        _ => hostname.to_string(),
    };

    sanitize_label(&label)
}

/// Keep only `[A-Za-z0-9.-]`, lower-cased
pub fn sanitize_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
