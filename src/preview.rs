/// Sample-site preview shown on the options page
use crate::email::build_labeled_email;
use crate::label::DomainMode;

/// (hostname, display name)
pub const SAMPLE_SITES: &[(&str, &str)] = &[
    ("github.com", "GitHub"),
    ("www.amazon.com", "Amazon"),
    ("mail.google.com", "Gmail"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    pub site: String,
    pub address: String,
}

/// One row per sample site, or nothing until the email has an `@`
pub fn preview_rows(email: &str, mode: DomainMode) -> Vec<PreviewRow> {
    let email = email.trim();
    if !email.contains('@') {
        return Vec::new();
    }

    SAMPLE_SITES
        .iter()
        .map(|(hostname, name)| PreviewRow {
            site: name.to_string(),
            address: build_labeled_email(email, hostname, mode),
        })
        .collect()
}
