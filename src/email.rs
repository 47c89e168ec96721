/// Plus-addressing: embed a site label into the user's base address
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::label::{DomainMode, derive_label};

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Why a stored base address can't be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email address missing")]
    Missing,

    #[error("Invalid email format")]
    Invalid,
}

impl EmailError {
    /// Follow-up hint shown under the error title
    pub fn hint(self) -> &'static str {
        match self {
            EmailError::Missing => "Please set your email address in the extension preferences.",
            EmailError::Invalid => "Please check your email address in the extension preferences.",
        }
    }
}

/// `local@domain.tld` shape check: no whitespace, exactly one `@`, a dot in
/// the domain part
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Trim and validate a stored base address
pub fn check_email(raw: &str) -> Result<&str, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Missing);
    }
    if !is_valid_email(email) {
        return Err(EmailError::Invalid);
    }
    Ok(email)
}

/// Split at the last `@`; `None` when there is no `@` or the local part is empty
fn split_address(email: &str) -> Option<(&str, &str)> {
    match email.rfind('@') {
        Some(0) | None => None,
        Some(at) => Some((&email[..at], &email[at + 1..])),
    }
}

/// Build `local+label@domain` for the given hostname
///
/// Returns the address unchanged when it has no usable `@` or when the
/// hostname yields an empty label.
pub fn build_labeled_email(email: &str, hostname: &str, mode: DomainMode) -> String {
    let Some((local, domain)) = split_address(email) else {
        return email.to_string();
    };

    let label = derive_label(hostname, mode);
    if label.is_empty() {
        return email.to_string();
    }

    format!("{}+{}@{}", local, label, domain)
}
