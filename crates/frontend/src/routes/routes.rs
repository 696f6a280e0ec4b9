use crate::layout::Shell;
use crate::pages::{CareerDetailsPage, HomePage, PricingPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to home"</a>
        </section>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/career-details") view=CareerDetailsPage />
                    <Route path=path!("/pricing") view=PricingPage />
                </Routes>
            </Shell>
        </Router>
    }
}
