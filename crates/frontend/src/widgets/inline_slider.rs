use crate::shared::config::use_site_config;
use contracts::widgets::SlideCycle;
use leptos::prelude::*;
use std::time::Duration;

/// Words stacked vertically, cycling upward on a fixed interval.
#[component]
pub fn InlineSlider(words: Vec<&'static str>) -> impl IntoView {
    let config = use_site_config().inline_slider.clone();
    let cycle = RwSignal::new(SlideCycle::new(words.len()));
    let step_px = config.step_px;

    match set_interval_with_handle(
        move || cycle.update(|c| {
            c.advance();
        }),
        Duration::from_millis(u64::from(config.interval_ms)),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::error!("Failed to start inline slider: {:?}", err),
    }

    let transform = move || format!("transform: translateY({}px);", cycle.get().offset_px(step_px));

    view! {
        <span class="cta-inline-slider-wrapper">
            <span class="cta-inline-slider" style=transform>
                {words.into_iter().map(|word| view! { <span>{word}</span> }).collect_view()}
            </span>
        </span>
    }
}
