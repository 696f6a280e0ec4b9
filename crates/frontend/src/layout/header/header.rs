use super::menu::{site_menu, Menu};
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header id="header" class="header">
            <div class="header__content">
                <a href="/" class="header__logo">"Studio"</a>
                <div class="header__actions">
                    <ThemeToggle />
                    <Menu groups=site_menu() />
                </div>
            </div>
        </header>
    }
}
