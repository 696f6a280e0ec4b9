use crate::animations;
use crate::routes::AppRoutes;
use crate::shared::config::{load_site_config, provide_site_config, use_site_config};
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_site_config(load_site_config());

    // Header, pointer and the shared tickers exist once for the whole app.
    Effect::new(move |_| {
        animations::init_global(&use_site_config());
    });

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
