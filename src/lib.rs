/// Plus Label - browser extension for per-site plus addresses
/// Built with Rust + WASM + Yew

pub mod email;
pub mod hostname;
pub mod label;
pub mod preview;
pub mod settings;
pub mod suffix;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::label::DomainMode;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::debug!("Suffix table v{}", suffix::SUFFIX_TABLE_VERSION);
}

// Re-export the label engine for the popup/options loaders and any other page
// script that imports the module. `mode` is the stored setting string.
#[wasm_bindgen]
pub fn derive_label(hostname: &str, mode: &str) -> String {
    label::derive_label(hostname, DomainMode::from_setting(mode))
}

#[wasm_bindgen]
pub fn build_labeled_email(email: &str, hostname: &str, mode: &str) -> String {
    email::build_labeled_email(email, hostname, DomainMode::from_setting(mode))
}

#[wasm_bindgen]
pub fn hostname_from_url(url: &str) -> String {
    hostname::hostname_from_url(url)
}

#[wasm_bindgen]
pub fn is_valid_email(email: &str) -> bool {
    email::is_valid_email(email)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Start the Yew app for the options page
#[wasm_bindgen]
pub fn start_options() {
    yew::Renderer::<ui::options::OptionsPage>::new().render();
}
