use super::dom_surface::DomTabSurface;
use crate::shared::config::use_site_config;
use crate::shared::dom;
use contracts::tabs::{TabId, TabSwitcher};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Whether the active tab belongs in the URL. A plain visit that stays on
/// the landing tab keeps its URL; after the first write every switch is
/// mirrored, including a switch back to the landing tab.
fn should_mirror(active: &TabId, landing: &TabId, requested_in_url: bool, mirrored: bool) -> bool {
    requested_in_url || mirrored || active != landing
}

/// Tab bar plus content container for the job-details page.
///
/// Buttons are rendered with a static class so that the active marker is
/// owned by [`TabSwitcher`] alone; the container is left empty for the
/// switcher to fill. The active tab is mirrored into `?tab=` and read back
/// from it on load.
#[component]
pub fn CareerTabs(switcher: TabSwitcher) -> impl IntoView {
    let config = use_site_config();
    let container_id = config.careers.container_id.clone();
    let query_param = StoredValue::new(config.careers.query_param.clone());

    let requested = query_param.with_value(|param| dom::query_param(param));
    let initial = switcher.resolve_initial(requested.as_deref(), &config.careers.default_tab);

    let buttons: Vec<(TabId, String)> = switcher
        .registry()
        .entries()
        .iter()
        .map(|entry| (entry.id.clone(), entry.label.clone()))
        .collect();

    let active = RwSignal::new(None::<TabId>);
    let switcher = StoredValue::new(switcher);
    let surface_container = StoredValue::new(container_id.clone());

    let activate = Callback::new(move |id: String| {
        let Some(mut surface) = surface_container.with_value(|cid| DomTabSurface::new(cid.clone()))
        else {
            return;
        };
        match switcher.with_value(|s| s.switch_to(&mut surface, &id)) {
            Ok(tab) => {
                log::debug!("Switched to tab '{}'", tab);
                active.set(Some(tab));
            }
            Err(err) => log::error!("Tab switch failed: {}", err),
        }
    });

    let requested_in_url = requested.is_some();
    let landing_tab = initial.clone();

    // Mount the initial tab once the buttons and container are in the DOM.
    Effect::new(move |_| {
        let initial = initial.to_string();
        spawn_local(async move {
            let _ = JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL)).await;
            activate.run(initial);
        });
    });

    Effect::new(move |mirrored: Option<bool>| {
        let mirrored = mirrored.unwrap_or(false);
        let Some(tab) = active.get() else {
            return mirrored;
        };
        if !should_mirror(&tab, &landing_tab, requested_in_url, mirrored) {
            return false;
        }
        query_param.with_value(|param| dom::replace_query_param(param, tab.as_str()));
        true
    });

    view! {
        <div class="career-tabs">
            <div class="flex justify-center gap-4 mb-14" role="tablist">
                {buttons
                    .into_iter()
                    .map(|(id, label)| {
                        let tab_id = id.to_string();
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=DomTabSurface::BUTTON_CLASS
                                attr:data-tab-id=id.to_string()
                                on:click=move |_| activate.run(tab_id.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div id=container_id class="tab-content-container"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: &str) -> TabId {
        TabId::from(id)
    }

    #[test]
    fn test_plain_visit_keeps_url() {
        assert!(!should_mirror(&tab("Overview"), &tab("Overview"), false, false));
    }

    #[test]
    fn test_requested_tab_is_mirrored() {
        assert!(should_mirror(&tab("Overview"), &tab("Overview"), true, false));
    }

    #[test]
    fn test_switch_away_and_back_is_mirrored() {
        assert!(should_mirror(&tab("Apply"), &tab("Overview"), false, false));
        assert!(should_mirror(&tab("Overview"), &tab("Overview"), false, true));
    }
}
