use crate::shared::dom;
use crate::shared::interop::gsap::{self, Tween};
use crate::shared::interop::{library_available, set_property, to_js};
use contracts::widgets::{loop_offsets, ScrollTracker};
use leptos::ev;
use leptos::prelude::*;
use serde_json::json;
use wasm_bindgen::prelude::*;

/// Horizontal marquee whose direction follows the page scroll.
///
/// The content is rendered three times so the loop never shows a gap.
#[component]
pub fn ScrollingMarquee(children: ChildrenFn) -> impl IntoView {
    let inner_ref = NodeRef::<leptos::html::Div>::new();
    let tween = StoredValue::new_local(None::<Tween>);
    let reset_x = StoredValue::new(0.0_f64);
    let tracker = StoredValue::new(ScrollTracker::new(dom::scroll_y()));

    Effect::new(move |_| {
        let Some(inner) = inner_ref.get() else {
            return;
        };
        if !library_available("gsap") || tween.with_value(|t| t.is_some()) {
            return;
        }

        let (to_x, back_x) = loop_offsets(f64::from(inner.offset_width()));
        reset_x.set_value(back_x);

        let target: JsValue = inner.into();
        let vars = to_js(&json!({ "x": to_x, "duration": 30, "ease": "none", "repeat": -1 }));
        let repeat_target = target.clone();
        let on_repeat = Closure::<dyn Fn()>::new(move || {
            gsap::set(&repeat_target, &to_js(&json!({ "x": reset_x.get_value() })));
        });
        set_property(&vars, "onRepeat", on_repeat.as_ref());
        on_repeat.forget();

        tween.set_value(Some(gsap::to(&target, &vars)));
    });

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let direction = tracker
            .try_update_value(|t| t.observe(dom::scroll_y()))
            .flatten();
        if let Some(direction) = direction {
            tween.with_value(|t| {
                if let Some(t) = t {
                    t.time_scale(direction.time_scale());
                }
            });
        }
    });

    let resize_handle = window_event_listener(ev::resize, move |_| {
        let Some(inner) = inner_ref.get_untracked() else {
            return;
        };
        let (to_x, back_x) = loop_offsets(f64::from(inner.offset_width()));
        reset_x.set_value(back_x);
        tween.with_value(|t| {
            if let Some(t) = t {
                set_property(&t.vars(), "x", &JsValue::from_f64(to_x));
                gsap::set(&inner.clone().into(), &to_js(&json!({ "x": back_x })));
                t.invalidate();
                t.restart();
            }
        });
    });

    on_cleanup(move || {
        scroll_handle.remove();
        resize_handle.remove();
    });

    view! {
        <div class="marquee overflow-hidden">
            <div class="marquee-inner flex w-max" node_ref=inner_ref>
                {children()}
                {children()}
                {children()}
            </div>
        </div>
    }
}
