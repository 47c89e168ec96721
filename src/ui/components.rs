/// Reusable UI components

use yew::prelude::*;

use crate::preview::PreviewRow;

#[derive(Properties, PartialEq)]
pub struct StatusCardProps {
    pub title: String,
    pub subtitle: String,
    #[prop_or(false)]
    pub error: bool,
}

/// Title + subtitle card at the top of the popup
#[function_component(StatusCard)]
pub fn status_card(props: &StatusCardProps) -> Html {
    let subtitle_class = if props.error { "card-subtitle error" } else { "card-subtitle" };

    html! {
        <div class="status-card">
            <h1 class="card-title">{&props.title}</h1>
            <p class={subtitle_class}>{&props.subtitle}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    pub items: Vec<String>,
    /// Address most recently copied from this list
    #[prop_or_default]
    pub copied: Option<String>,
    pub on_copy: Callback<String>,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    if props.items.is_empty() {
        return html! {};
    }

    html! {
        <div class="history-section">
            <h2 class="history-title">{"Recent"}</h2>
            <div class="history-list">
                {for props.items.iter().map(|address| {
                    let is_copied = props.copied.as_ref() == Some(address);
                    let on_click = props.on_copy.reform({
                        let address = address.clone();
                        move |_: MouseEvent| address.clone()
                    });

                    html! {
                        <div key={address.clone()} class="history-item">
                            <span class="history-email">{address}</span>
                            <button class="history-copy-btn" onclick={on_click}>
                                {if is_copied { "✓" } else { "Copy" }}
                            </button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PreviewListProps {
    pub rows: Vec<PreviewRow>,
}

#[function_component(PreviewList)]
pub fn preview_list(props: &PreviewListProps) -> Html {
    if props.rows.is_empty() {
        return html! {};
    }

    html! {
        <div class="preview-group">
            <label class="preview-heading">{"Preview"}</label>
            <div class="email-preview">
                {for props.rows.iter().map(|row| html! {
                    <div key={row.site.clone()} class="preview-item">
                        <span class="preview-label">{format!("{}:", row.site)}</span>
                        <span class="preview-email">{&row.address}</span>
                    </div>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SaveIndicatorProps {
    pub visible: bool,
}

#[function_component(SaveIndicator)]
pub fn save_indicator(props: &SaveIndicatorProps) -> Html {
    let class = if props.visible { "save-indicator show" } else { "save-indicator" };

    html! {
        <div class={class}>{"✓ Saved"}</div>
    }
}
