//! Count-up statistics, started the first time the section scrolls into view.

use crate::shared::config::use_site_config;
use contracts::widgets::{CounterStat, CounterTicker};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Clone)]
struct CounterSlot {
    stat: CounterStat,
    value: RwSignal<u64>,
    revealed: RwSignal<bool>,
}

fn wrapper_style(revealed: bool) -> &'static str {
    if revealed {
        "transition: all 0.7s ease; opacity: 1; transform: translateY(0);"
    } else {
        "opacity: 0; transform: translateY(20px);"
    }
}

/// Calls `on_visible` once, the first time `target` is at least `threshold`
/// visible, then stops observing.
fn observe_once(target: &web_sys::Element, threshold: f64, on_visible: impl Fn() + 'static) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .get(0)
                .dyn_into::<IntersectionObserverEntry>()
                .map(|entry| entry.is_intersecting())
                .unwrap_or(false);
            if intersecting {
                observer.disconnect();
                on_visible();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            // The observer holds the only JS reference to the callback.
            callback.forget();
        }
        Err(err) => log::error!("IntersectionObserver unavailable: {:?}", err),
    }
}

#[component]
pub fn CounterSection(stats: Vec<CounterStat>) -> impl IntoView {
    let config = use_site_config().counter.clone();
    let section_ref = NodeRef::<leptos::html::Div>::new();
    let started = RwSignal::new(false);

    let slots: Vec<CounterSlot> = stats
        .into_iter()
        .map(|stat| CounterSlot {
            stat,
            value: RwSignal::new(0),
            revealed: RwSignal::new(false),
        })
        .collect();

    let threshold = config.threshold;
    Effect::new(move |observing: Option<bool>| {
        if observing == Some(true) {
            return true;
        }
        match section_ref.get() {
            Some(section) => {
                observe_once(&section, threshold, move || started.set(true));
                true
            }
            None => false,
        }
    });

    let run_slots = slots.clone();
    Effect::new(move |_| {
        if !started.get() {
            return;
        }
        log::debug!("Counter section visible, starting {} counters", run_slots.len());
        for (index, slot) in run_slots.iter().enumerate() {
            let (steps, tick_ms, stagger_ms) = (config.steps, config.tick_ms, config.stagger_ms);
            let (target, value, revealed) = (slot.stat.value, slot.value, slot.revealed);
            spawn_local(async move {
                let mut ticker = CounterTicker::new(target, steps);
                value.set(0);
                while ticker.tick() {
                    value.set(ticker.value());
                    TimeoutFuture::new(tick_ms).await;
                }
            });
            spawn_local(async move {
                TimeoutFuture::new(stagger_ms * index as u32).await;
                revealed.set(true);
            });
        }
    });

    view! {
        <div id="counter" node_ref=section_ref class="grid grid-cols-2 gap-10 md:grid-cols-4">
            {slots
                .into_iter()
                .map(|slot| {
                    let value = slot.value;
                    let revealed = slot.revealed;
                    view! {
                        <div style=move || wrapper_style(revealed.get())>
                            <h2>
                                <span class="counter" attr:data-value=slot.stat.value.to_string()>
                                    {move || value.get().to_string()}
                                </span>
                                {slot.stat.suffix}
                            </h2>
                            <p>{slot.stat.label}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_fades_in_when_revealed() {
        assert!(wrapper_style(false).contains("opacity: 0"));
        assert!(wrapper_style(true).contains("opacity: 1"));
    }
}
