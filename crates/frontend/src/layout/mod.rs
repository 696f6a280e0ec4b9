pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Page shell: sticky header, routed content, footer.
///
/// ```text
/// +------------------------------+
/// |  Header (#header, Headroom)  |
/// +------------------------------+
/// |           content            |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="pointer"></div>
        <header::Header />
        <main class="main-content">
            {children()}
        </main>
        <footer::Footer />
    }
}
