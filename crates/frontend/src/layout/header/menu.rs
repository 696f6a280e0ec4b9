use crate::shared::config::use_site_config;
use crate::shared::dom;
use crate::shared::interop::gsap::{self, Timeline};
use crate::shared::interop::{library_available, to_js};
use contracts::widgets::MenuState;
use leptos::html;
use leptos::prelude::*;
use serde_json::json;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub struct MenuLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A top-level menu entry, optionally expanding into a dropdown.
#[derive(Debug, Clone)]
pub struct MenuGroup {
    pub label: &'static str,
    pub href: &'static str,
    pub children: Vec<MenuLink>,
}

pub fn site_menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Home",
            href: "/",
            children: Vec::new(),
        },
        MenuGroup {
            label: "Company",
            href: "#",
            children: vec![
                MenuLink { label: "Careers", href: "/career-details" },
                MenuLink { label: "Pricing", href: "/pricing" },
            ],
        },
        MenuGroup {
            label: "Services",
            href: "#",
            children: vec![
                MenuLink { label: "Branding", href: "/#services" },
                MenuLink { label: "Web Design", href: "/#services" },
                MenuLink { label: "Development", href: "/#services" },
            ],
        },
    ]
}

/// Builds the paused open/close timeline over the rendered menu.
fn build_timeline() -> Timeline {
    let menu: JsValue = JsValue::from_str(".menu");
    let overflow = JsValue::from_str(".menu-overflow");
    let items = JsValue::from_str(".menu-list");
    let open_btn = JsValue::from_str(".menu-open");
    let close_btn = JsValue::from_str(".menu-close");

    gsap::set(&menu, &to_js(&json!({ "pointerEvents": "none", "autoAlpha": 0 })));
    gsap::set(
        &overflow,
        &to_js(&json!({ "pointerEvents": "none", "autoAlpha": 0, "y": -30, "rotate": -1, "scale": 0.98 })),
    );
    gsap::set(&items, &to_js(&json!({ "autoAlpha": 0, "y": -10, "scale": 0.95 })));
    gsap::set(&close_btn, &to_js(&json!({ "autoAlpha": 0, "y": -10, "scale": 0.95 })));

    let timeline = gsap::timeline(&to_js(&json!({
        "paused": true,
        "defaults": { "ease": "custom", "duration": 0.8 }
    })));
    timeline.to(
        &menu,
        &to_js(&json!({ "autoAlpha": 1, "pointerEvents": "auto", "duration": 0.5, "ease": "power2.out" })),
        0.0,
    );
    timeline.to(
        &overflow,
        &to_js(&json!({
            "autoAlpha": 1, "pointerEvents": "auto", "y": 0, "rotate": 0, "scale": 1,
            "duration": 0.6, "ease": "custom"
        })),
        0.1,
    );
    timeline.to(
        &items,
        &to_js(&json!({
            "autoAlpha": 1, "y": 0, "scale": 1,
            "stagger": { "amount": 0.4, "ease": "power2.out" },
            "duration": 0.7, "ease": "custom"
        })),
        0.2,
    );
    timeline.to(
        &close_btn,
        &to_js(&json!({ "autoAlpha": 1, "y": 0, "scale": 1, "duration": 0.5, "ease": "back.out(1.7)" })),
        0.3,
    );
    timeline.to(
        &open_btn,
        &to_js(&json!({
            "autoAlpha": 0, "y": -10, "scale": 0.95, "duration": 0.5, "delay": 0.3,
            "ease": "back.out(1.7)"
        })),
        0.1,
    );
    timeline.to(
        &JsValue::from_str("body"),
        &to_js(&json!({ "overflow": "hidden", "pointerEvents": "none", "duration": 0.1 })),
        0.0,
    );
    timeline
}

/// Full-screen overlay menu with dropdown groups.
///
/// Open/close state is tracked in [`MenuState`]; the GSAP timeline only
/// animates it. Without GSAP the overlay still toggles through the
/// `menu-visible` class.
#[component]
pub fn Menu(groups: Vec<MenuGroup>) -> impl IntoView {
    let desktop_min_width = use_site_config().menu.desktop_min_width;
    let state = RwSignal::new(MenuState::new(groups.len()));
    let timeline = StoredValue::new_local(None::<Timeline>);
    let menu_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        if menu_ref.get().is_none() || !library_available("gsap") {
            return;
        }
        if timeline.with_value(Option::is_none) {
            timeline.set_value(Some(build_timeline()));
        }
    });

    let open = move |_| {
        state.update(MenuState::open);
        timeline.with_value(|tl| {
            if let Some(tl) = tl {
                gsap::set(&JsValue::from_str(".menu-overflow"), &to_js(&json!({ "scale": 0.98 })));
                tl.set_time_scale(1.0);
                tl.play();
            }
        });
    };

    let close = move |_| {
        state.update(MenuState::close);
        timeline.with_value(|tl| {
            if let Some(tl) = tl {
                gsap::to(
                    &JsValue::from_str(".menu-open"),
                    &to_js(&json!({
                        "autoAlpha": 1, "y": 0, "scale": 1, "duration": 0.5, "delay": 0.5,
                        "ease": "back.out(1.7)"
                    })),
                );
                tl.set_time_scale(1.2);
                tl.reverse();
            }
        });
    };

    view! {
        <button class="menu-open" aria-label="Open menu" on:click=open>
            <span></span>
            <span></span>
        </button>
        <div
            node_ref=menu_ref
            class="menu"
            class:menu-visible=move || state.with(MenuState::is_open)
            style:pointer-events=move || if state.with(MenuState::is_open) { "auto" } else { "none" }
        >
            <div class="menu-overflow">
                <button class="menu-close" aria-label="Close menu" on:click=close>"×"</button>
                <nav>
                    {groups
                        .into_iter()
                        .enumerate()
                        .map(|(index, group)| {
                            let has_dropdown = !group.children.is_empty();
                            let on_anchor = move |_| {
                                state.update(|s| {
                                    s.click_dropdown(index, dom::viewport_width(), desktop_min_width)
                                });
                            };
                            view! {
                                <ul class="menu-list">
                                    <li class="menu-list-item">
                                        {if has_dropdown {
                                            view! {
                                                <button
                                                    class="menu-list-item-anchor"
                                                    class:active=move || state.with(|s| s.is_dropdown_active(index))
                                                    on:click=on_anchor
                                                >
                                                    {group.label}
                                                </button>
                                                <ul class="menu-dropdown">
                                                    {group
                                                        .children
                                                        .into_iter()
                                                        .map(|link| view! {
                                                            <li><a href=link.href>{link.label}</a></li>
                                                        })
                                                        .collect_view()}
                                                </ul>
                                            }
                                                .into_any()
                                        } else {
                                            view! { <a href=group.href>{group.label}</a> }.into_any()
                                        }}
                                    </li>
                                </ul>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_menu_links_known_routes() {
        let menu = site_menu();
        let hrefs: Vec<&str> = menu
            .iter()
            .flat_map(|group| group.children.iter().map(|link| link.href))
            .collect();
        assert!(hrefs.contains(&"/career-details"));
        assert!(hrefs.contains(&"/pricing"));
    }

    #[test]
    fn test_home_has_no_dropdown() {
        let menu = site_menu();
        assert_eq!(menu[0].href, "/");
        assert!(menu[0].children.is_empty());
    }
}
