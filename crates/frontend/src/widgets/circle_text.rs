use crate::shared::config::use_site_config;
use contracts::widgets::rotated_chars;
use leptos::prelude::*;

/// Text laid out around a circle, one rotated span per character.
#[component]
pub fn CircleText(
    #[prop(into)] text: String,
    /// Degrees between characters; defaults to the configured spacing.
    #[prop(optional)]
    spacing_deg: Option<f64>,
) -> impl IntoView {
    let spacing = spacing_deg.unwrap_or_else(|| use_site_config().circle_text.spacing_deg);

    view! {
        <div class="text" aria-label=text.clone()>
            {rotated_chars(&text, spacing)
                .into_iter()
                .map(|rc| {
                    view! {
                        <span style=format!("transform:rotate({}deg)", rc.degrees)>{rc.ch.to_string()}</span>
                    }
                })
                .collect_view()}
        </div>
    }
}
