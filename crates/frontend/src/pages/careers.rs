use crate::animations::use_page_animations;
use crate::careers::{career_tab_registry, CareerTabs};
use contracts::tabs::TabSwitcher;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn CareerDetailsPage() -> impl IntoView {
    use_page_animations();

    let tabs = match career_tab_registry() {
        Ok(registry) => {
            let switcher = TabSwitcher::new(Arc::new(registry));
            view! { <CareerTabs switcher=switcher /> }.into_any()
        }
        Err(err) => {
            log::error!("Career tabs unavailable: {}", err);
            view! { <p class="tabs-error">"This job posting is unavailable."</p> }.into_any()
        }
    };

    view! {
        <section class="career-details">
            <h1 class="reveal-text-2">"Senior Frontend Engineer"</h1>
            <p class="career-details__meta">"Remote · Full time"</p>
            {tabs}
        </section>
    }
}
