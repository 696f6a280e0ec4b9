//! Page animation bootstrap.
//!
//! All motion is delegated to GSAP/ScrollTrigger, Lenis, Swiper, Headroom and
//! InfiniteMarquee; this module only wires them to the rendered markup.
//! `init_global` runs once per app, `init_page` after every route render.

pub mod presets;
pub mod sliders;

use crate::shared::dom;
use crate::shared::interop::gsap;
use crate::shared::interop::headroom::Headroom;
use crate::shared::interop::lenis::Lenis;
use crate::shared::interop::{library_available, set_property, to_js};
use contracts::shared::SiteConfig;
use contracts::widgets::custom_ease;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::MouseEvent;

/// Lenis smooth scrolling, driven by the GSAP ticker and feeding ScrollTrigger.
fn init_smooth_scrolling() {
    if !library_available("Lenis") {
        return;
    }
    let lenis = Lenis::new(&to_js(&json!({ "lerp": 0.1, "smoothWheel": true })));

    let on_scroll = Closure::<dyn FnMut()>::new(gsap::scroll_trigger_update);
    lenis.on("scroll", &on_scroll);
    on_scroll.forget();

    // The ticker reports seconds, Lenis wants milliseconds.
    let on_tick = Closure::<dyn FnMut(f64)>::new(move |time: f64| lenis.raf(time * 1000.0));
    gsap::ticker_add(&on_tick);
    on_tick.forget();

    gsap::ticker_lag_smoothing(0.0);
}

fn register_custom_ease() {
    let ease = Closure::<dyn Fn(f64) -> f64>::new(custom_ease);
    gsap::register_ease("custom", &ease);
    ease.forget();
}

fn init_headroom() {
    if !library_available("Headroom") {
        return;
    }
    if let Some(header) = dom::element_by_id("header") {
        Headroom::new(&header).init();
    }
}

/// Custom cursor follower, desktop only.
fn init_pointer(min_width: u32) {
    if dom::viewport_width() < min_width {
        return;
    }
    let (Some(pointer), Some(document)) = (dom::query(".pointer"), dom::document()) else {
        return;
    };
    let pointer: JsValue = pointer.into();
    let follow = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        gsap::to(
            &pointer,
            &to_js(&json!({
                "duration": 0.8,
                "left": event.client_x(),
                "top": event.client_y(),
                "ease": "expo.out"
            })),
        );
    });
    for event_type in ["mousemove", "mouseenter"] {
        let _ = document.add_event_listener_with_callback(event_type, follow.as_ref().unchecked_ref());
    }
    follow.forget();
}

fn init_hero_gradient() {
    if let Some(wrapper) = dom::element_by_id("hero-gradient-wrapper") {
        gsap::to(
            wrapper.as_ref(),
            &to_js(&json!({ "scale": 0.6, "repeat": -1, "duration": 3, "yoyo": true, "ease": "none" })),
        );
    }
    if let Some(gradient) = dom::element_by_id("hero-gradient") {
        gsap::to(
            gradient.as_ref(),
            &to_js(&json!({ "repeat": -1, "duration": 3, "rotation": 360, "ease": "none" })),
        );
    }
}

/// Pins the services section and scrolls its cards sideways.
fn init_service_scroll() {
    let Some(wrapper) = dom::query(".service-wrapper") else {
        return;
    };
    let distance = {
        let wrapper = wrapper.clone();
        move || -(f64::from(wrapper.scroll_width()) - f64::from(dom::viewport_width()))
    };

    let vars = to_js(&json!({ "duration": 3, "ease": "none" }));
    let x = Closure::<dyn Fn() -> f64>::new(distance.clone());
    set_property(&vars, "x", x.as_ref());
    x.forget();
    let tween = gsap::to(wrapper.as_ref(), &vars);

    let trigger = to_js(&json!({
        "trigger": ".service-section",
        "start": "top 0%",
        "pin": true,
        "scrub": 1,
        "invalidateOnRefresh": true
    }));
    let end = Closure::<dyn Fn() -> String>::new(move || format!("+={}", -distance()));
    set_property(&trigger, "end", end.as_ref());
    set_property(&trigger, "animation", tween.as_ref());
    end.forget();
    gsap::scroll_trigger_create(&trigger);
}

/// Slides the extra-wide image strip across as it scrolls through view.
fn init_image_strip_scroll() {
    let Some(container) = dom::element_by_id("extra-large-image-container") else {
        return;
    };
    let overflow = {
        let container = container.clone();
        move || {
            let client_width = dom::document()
                .and_then(|doc| doc.document_element())
                .map(|root| root.client_width())
                .unwrap_or(0);
            f64::from(container.scroll_width() - client_width)
        }
    };

    let vars = to_js(&json!({ "ease": "none" }));
    let x = {
        let overflow = overflow.clone();
        Closure::<dyn Fn() -> f64>::new(move || -overflow())
    };
    set_property(&vars, "x", x.as_ref());
    x.forget();

    let trigger = to_js(&json!({
        "pin": false,
        "start": "top 90%",
        "scrub": 1,
        "invalidateOnRefresh": false,
        "anticipatePin": 1
    }));
    set_property(&trigger, "trigger", container.as_ref());
    let end = Closure::<dyn Fn() -> String>::new(move || format!("+={}", overflow()));
    set_property(&trigger, "end", end.as_ref());
    end.forget();
    set_property(&vars, "scrollTrigger", &trigger);

    gsap::to(container.as_ref(), &vars);
}

/// One-time setup shared by every page.
pub fn init_global(config: &SiteConfig) {
    init_headroom();
    if !library_available("gsap") {
        log::warn!("GSAP not loaded, animations disabled");
        return;
    }
    register_custom_ease();
    init_smooth_scrolling();
    init_pointer(config.pointer.min_width);
}

/// Wires the animations of the page currently in the DOM.
pub fn init_page() {
    if library_available("gsap") {
        init_hero_gradient();
        init_service_scroll();
        init_image_strip_scroll();
        if library_available("SplitType") {
            let applied: usize = presets::reveal_presets().iter().map(presets::apply).sum();
            log::debug!("Scroll reveal applied to {} elements", applied);
        }
    }
    sliders::init_sliders();
    sliders::init_marquees();
}

/// Runs [`init_page`] once the calling page is mounted and tears its
/// ScrollTriggers down when the page goes away.
pub fn use_page_animations() {
    if library_available("ScrollTrigger") {
        let refresh = window_event_listener(leptos::ev::resize, |_| gsap::scroll_trigger_refresh());
        on_cleanup(move || refresh.remove());
    }
    Effect::new(move |_| {
        spawn_local(async move {
            let _ = JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL)).await;
            init_page();
        });
    });
    on_cleanup(|| {
        if library_available("ScrollTrigger") {
            gsap::scroll_trigger_kill_all();
        }
    });
}
