/// Options page: base email, domain mode and display toggles

use patternfly_yew::prelude::{Alert, AlertType, Spinner};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::email::is_valid_email;
use crate::label::DomainMode;
use crate::preview::preview_rows;
use crate::settings::{Preferences, Settings};
use crate::ui::bridge::{delay, load_settings, save_preferences};
use crate::ui::components::{PreviewList, SaveIndicator};

/// How long the "Saved" indicator stays visible
const SAVED_INDICATOR_MS: u32 = 1500;

#[derive(Clone, Debug, PartialEq)]
enum PageState {
    Loading,
    Ready,
    LoadFailed(String),
    SaveFailed(String),
}

impl PageState {
    /// Stored settings were read successfully, so the form holds real values
    fn is_loaded(&self) -> bool {
        matches!(self, PageState::Ready | PageState::SaveFailed(_))
    }
}

/// Preferences to write, or `None` while the form still holds defaults
fn preferences_to_save(state: &PageState, settings: &Settings) -> Option<Preferences> {
    state.is_loaded().then(|| settings.preferences())
}

fn mode_description(mode: DomainMode) -> &'static str {
    match mode {
        DomainMode::Main => "Main domain (google.com)",
        DomainMode::Short => "Short name (google)",
        DomainMode::Full => "Full hostname (mail.google.com)",
    }
}

#[function_component(OptionsPage)]
pub fn options_page() -> Html {
    let state = use_state(|| PageState::Loading);
    let settings = use_state(Settings::new);
    let email_input = use_state(String::new);
    let email_invalid = use_state(|| false);
    let saved = use_state(|| false);

    // Load settings on mount
    {
        let state = state.clone();
        let settings = settings.clone();
        let email_input = email_input.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_settings().await {
                    Ok(data) => {
                        email_input.set(data.email.clone());
                        settings.set(data);
                        state.set(PageState::Ready);
                    }
                    Err(e) => {
                        log::error!("{}", e);
                        state.set(PageState::LoadFailed(format!("Failed to load: {}", e)));
                    }
                }
            });
            || ()
        });
    }

    // Persist and flash the indicator
    let persist = {
        let settings = settings.clone();
        let state = state.clone();
        let saved = saved.clone();

        Callback::from(move |new_settings: Settings| {
            let Some(preferences) = preferences_to_save(&state, &new_settings) else {
                log::warn!("Settings not loaded, refusing to save");
                return;
            };
            settings.set(new_settings);

            let state = state.clone();
            let saved = saved.clone();
            spawn_local(async move {
                match save_preferences(&preferences).await {
                    Ok(_) => {
                        saved.set(true);
                        delay(SAVED_INDICATOR_MS).await;
                        saved.set(false);
                    }
                    Err(e) => {
                        log::error!("{}", e);
                        state.set(PageState::SaveFailed(format!("Failed to save: {}", e)));
                    }
                }
            });
        })
    };

    // Live preview while typing
    let on_email_input = {
        let email_input = email_input.clone();
        let email_invalid = email_invalid.clone();

        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                email_input.set(input.value());
                email_invalid.set(false);
            }
        })
    };

    // Validate and save once the field is committed; invalid addresses are
    // never written, an empty one clears the setting
    let on_email_change = {
        let settings = settings.clone();
        let email_invalid = email_invalid.clone();
        let persist = persist.clone();

        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let value = input.value().trim().to_string();
                if !value.is_empty() && !is_valid_email(&value) {
                    email_invalid.set(true);
                    return;
                }

                email_invalid.set(false);
                let mut new_settings = (*settings).clone();
                new_settings.email = value;
                persist.emit(new_settings);
            }
        })
    };

    let on_mode_change = {
        let settings = settings.clone();
        let persist = persist.clone();

        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut new_settings = (*settings).clone();
                new_settings.domain_mode = DomainMode::from_setting(&select.value());
                persist.emit(new_settings);
            }
        })
    };

    let on_show_history_change = {
        let settings = settings.clone();
        let persist = persist.clone();

        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut new_settings = (*settings).clone();
                new_settings.show_history = input.checked();
                persist.emit(new_settings);
            }
        })
    };

    let on_floating_icon_change = {
        let settings = settings.clone();
        let persist = persist.clone();

        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut new_settings = (*settings).clone();
                new_settings.show_floating_icon = input.checked();
                persist.emit(new_settings);
            }
        })
    };

    let rows = preview_rows(&email_input, settings.domain_mode);
    let email_class = if *email_invalid { "email-input invalid" } else { "email-input" };

    html! {
        <div class="container">
            <h1 class="main-title">{"Preferences"}</h1>

            {match &*state {
                PageState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                PageState::LoadFailed(err) | PageState::SaveFailed(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                PageState::Ready => html! {}
            }}

            if state.is_loaded() {
                <div class="form-group">
                    <label for="email">{"Email address"}</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        value={(*email_input).clone()}
                        oninput={on_email_input}
                        onchange={on_email_change}
                        class={email_class}
                    />
                    if *email_invalid {
                        <p class="field-error">{"Enter an address like you@example.com"}</p>
                    }
                </div>

                <div class="form-group">
                    <label for="domainMode">{"Label"}</label>
                    <select id="domainMode" onchange={on_mode_change}>
                        {for DomainMode::ALL.iter().map(|mode| html! {
                            <option
                                value={mode.as_str()}
                                selected={*mode == settings.domain_mode}
                            >
                                {mode_description(*mode)}
                            </option>
                        })}
                    </select>
                </div>

                <PreviewList rows={rows} />

                <div class="form-group checkbox-group">
                    <label>
                        <input
                            id="showHistory"
                            type="checkbox"
                            checked={settings.show_history}
                            onchange={on_show_history_change}
                        />
                        {"Show recent addresses in the popup"}
                    </label>
                    <label>
                        <input
                            id="showFloatingIcon"
                            type="checkbox"
                            checked={settings.show_floating_icon}
                            onchange={on_floating_icon_change}
                        />
                        {"Show the fill icon next to email fields"}
                    </label>
                </div>

                <SaveIndicator visible={*saved} />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_settings() -> Settings {
        let mut settings = Settings::new();
        settings.email = "user@example.com".to_string();
        settings.domain_mode = DomainMode::Short;
        settings
    }

    #[test]
    fn test_no_save_before_load() {
        let mut defaults = Settings::new();
        defaults.show_history = false;

        assert_eq!(preferences_to_save(&PageState::Loading, &defaults), None);
        assert_eq!(
            preferences_to_save(&PageState::LoadFailed("boom".to_string()), &defaults),
            None
        );
    }

    #[test]
    fn test_save_after_load() {
        let settings = stored_settings();

        let preferences = preferences_to_save(&PageState::Ready, &settings).unwrap();
        assert_eq!(preferences.email, "user@example.com");
        assert_eq!(preferences.domain_mode, DomainMode::Short);

        // a failed save doesn't make the loaded values stale
        let retry = preferences_to_save(&PageState::SaveFailed("quota".to_string()), &settings);
        assert_eq!(retry, Some(settings.preferences()));
    }
}
