/// Popup UI: copy the labeled address for the active tab

use patternfly_yew::prelude::{Alert, AlertType, Button, ButtonVariant, Spinner};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::email::{EmailError, build_labeled_email, check_email};
use crate::hostname::hostname_from_url;
use crate::settings::Settings;
use crate::ui::bridge::{
    active_tab_url, close_window, copy_to_clipboard, delay, load_settings, open_options_page,
    save_history,
};
use crate::ui::components::{HistoryList, StatusCard};

/// How long the popup stays open after copying
const AUTO_CLOSE_MS: u32 = 4000;

#[derive(Clone, PartialEq)]
enum PopupState {
    Loading,
    Copied(String),
    CopyFailed(String),
    Error(EmailError),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| PopupState::Loading);
    let settings = use_state(Settings::new);
    let copied_from_history = use_state(|| None::<String>);

    // Copy on open
    {
        let state = state.clone();
        let settings = settings.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let (loaded, outcome) = copy_for_active_tab().await;
                settings.set(loaded);
                state.set(outcome);

                delay(AUTO_CLOSE_MS).await;
                close_window();
            });
            || ()
        });
    }

    // Copy an address from history
    let on_copy_history = {
        let copied_from_history = copied_from_history.clone();

        Callback::from(move |address: String| {
            let copied_from_history = copied_from_history.clone();

            spawn_local(async move {
                match copy_to_clipboard(&address).await {
                    Ok(_) => copied_from_history.set(Some(address)),
                    Err(e) => log::error!("Failed to copy from history: {}", e),
                }
            });
        })
    };

    // Settings button
    let on_open_settings = Callback::from(move |_| {
        spawn_local(async move {
            if let Err(e) = open_options_page().await {
                log::error!("{}", e);
            }
        });
    });

    html! {
        <div class="padding-20">
            {match &*state {
                PopupState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                PopupState::Copied(address) => html! {
                    <StatusCard
                        title={"✅ Email address copied"}
                        subtitle={format!("{} • Ready to paste", address)}
                    />
                },
                PopupState::CopyFailed(address) => html! {
                    <div>
                        <StatusCard
                            title={"⚠️ Copy failed"}
                            subtitle={format!("Email: {}", address)}
                            error={true}
                        />
                        <Alert r#type={AlertType::Warning} title={"Clipboard unavailable"} inline={true}>
                            {"Select the address above and copy it manually."}
                        </Alert>
                    </div>
                },
                PopupState::Error(err) => html! {
                    <StatusCard
                        title={format!("❌ {}", err)}
                        subtitle={err.hint()}
                        error={true}
                    />
                },
            }}

            <HistoryList
                items={settings.visible_history().to_vec()}
                copied={(*copied_from_history).clone()}
                on_copy={on_copy_history}
            />

            <div class="popup-actions">
                <Button onclick={on_open_settings} variant={ButtonVariant::Secondary}>
                    {"⚙️ Settings"}
                </Button>
            </div>
        </div>
    }
}

// Helper functions

/// Build and copy the labeled address; returns the settings (with updated
/// history on success) and the state to show
async fn copy_for_active_tab() -> (Settings, PopupState) {
    let mut settings = match load_settings().await {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            Settings::new()
        }
    };

    let hostname = match active_tab_url().await {
        Ok(url) if !url.is_empty() => hostname_from_url(&url),
        Ok(_) => String::new(),
        Err(e) => {
            log::warn!("{}", e);
            String::new()
        }
    };

    let email = match check_email(&settings.email) {
        Ok(email) => email.to_string(),
        Err(err) => return (settings, PopupState::Error(err)),
    };

    let labeled = build_labeled_email(&email, &hostname, settings.domain_mode);

    if let Err(e) = copy_to_clipboard(&labeled).await {
        log::error!("{}", e);
        return (settings, PopupState::CopyFailed(labeled));
    }

    log::info!("Copied labeled address for {:?}", hostname);
    settings.record_copied(&labeled);
    if let Err(e) = save_history(&settings).await {
        log::error!("{}", e);
    }

    (settings, PopupState::Copied(labeled))
}
