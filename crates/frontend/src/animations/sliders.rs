//! Carousel and marquee widgets handed off to Swiper and InfiniteMarquee.

use crate::shared::dom;
use crate::shared::interop::marquee::InfiniteMarquee;
use crate::shared::interop::swiper::Swiper;
use crate::shared::interop::{library_available, set_property, to_js};
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub next_el: &'static str,
    pub prev_el: &'static str,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            next_el: ".swiper-button-next",
            prev_el: ".swiper-button-prev",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub slides_per_view: u32,
    pub space_between: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwiperOptions {
    #[serde(rename = "loop")]
    pub looped: bool,
    pub slides_per_view: u32,
    pub space_between: u32,
    pub speed: u32,
    pub allow_touch_move: bool,
    pub navigation: Navigation,
    /// Keyed by minimum viewport width in px.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub breakpoints: BTreeMap<String, Breakpoint>,
}

/// Project carousel: one card on phones, up to four on desktop.
pub fn main_slider_options() -> SwiperOptions {
    let breakpoints = [(0, 1, 10), (640, 2, 20), (1024, 2, 30), (1280, 4, 24)]
        .into_iter()
        .map(|(width, slides_per_view, space_between)| {
            (
                width.to_string(),
                Breakpoint {
                    slides_per_view,
                    space_between,
                },
            )
        })
        .collect();

    SwiperOptions {
        looped: true,
        slides_per_view: 1,
        space_between: 10,
        speed: 800,
        allow_touch_move: true,
        navigation: Navigation::default(),
        breakpoints,
    }
}

pub fn testimonial_slider_options() -> SwiperOptions {
    SwiperOptions {
        looped: true,
        slides_per_view: 1,
        space_between: 4,
        speed: 1500,
        allow_touch_move: true,
        navigation: Navigation::default(),
        breakpoints: BTreeMap::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileMarqueeSettings {
    pub direction: &'static str,
    pub speed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfiniteMarqueeOptions {
    pub element: &'static str,
    pub speed: u32,
    pub smooth_edges: bool,
    pub direction: &'static str,
    pub pause_on_hover: bool,
    pub gap: &'static str,
    pub duplicate_count: u32,
    pub mobile_settings: MobileMarqueeSettings,
}

pub fn marquee_options() -> [InfiniteMarqueeOptions; 2] {
    let base = |element: &'static str, direction: &'static str, mobile_direction: &'static str| {
        InfiniteMarqueeOptions {
            element,
            speed: 120_000,
            smooth_edges: true,
            direction,
            pause_on_hover: true,
            gap: "30px",
            duplicate_count: 1,
            mobile_settings: MobileMarqueeSettings {
                direction: mobile_direction,
                speed: 150_000,
            },
        }
    };
    [
        base(".marquee-container", "left", "top"),
        base(".marquee-reverse-container", "right", "right"),
    ]
}

pub fn init_sliders() {
    if !library_available("Swiper") {
        log::debug!("Swiper not loaded, sliders stay static");
        return;
    }
    for (selector, options) in [
        (".swiper", main_slider_options()),
        (".user-swiper", testimonial_slider_options()),
    ] {
        if dom::query(selector).is_some() {
            let _ = Swiper::new(selector, &to_js(&options));
        }
    }
}

pub fn init_marquees() {
    if !library_available("InfiniteMarquee") {
        return;
    }
    for options in marquee_options() {
        if dom::query(options.element).is_none() {
            continue;
        }
        let element = options.element;
        let js_options = to_js(&options);

        let on = js_sys::Object::new();
        let before = Closure::<dyn Fn()>::new(move || log::debug!("Marquee {} initialising", element));
        let after = Closure::<dyn Fn()>::new(move || log::debug!("Marquee {} initialised", element));
        set_property(&on, "beforeInit", before.as_ref());
        set_property(&on, "afterInit", after.as_ref());
        set_property(&js_options, "on", &on);
        before.forget();
        after.forget();

        let _ = InfiniteMarquee::new(&js_options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_main_slider_breakpoints() {
        let value = serde_json::to_value(main_slider_options()).unwrap();
        assert_eq!(value["loop"], json!(true));
        assert_eq!(value["slidesPerView"], json!(1));
        assert_eq!(
            value["breakpoints"]["1280"],
            json!({ "slidesPerView": 4, "spaceBetween": 24 })
        );
        assert_eq!(value["navigation"]["nextEl"], json!(".swiper-button-next"));
    }

    #[test]
    fn test_testimonial_slider_has_no_breakpoints() {
        let value = serde_json::to_value(testimonial_slider_options()).unwrap();
        assert!(value.get("breakpoints").is_none());
        assert_eq!(value["speed"], json!(1500));
    }

    #[test]
    fn test_marquees_run_in_opposite_directions() {
        let [forward, reverse] = marquee_options();
        assert_eq!(forward.direction, "left");
        assert_eq!(reverse.direction, "right");
        let value = serde_json::to_value(&forward).unwrap();
        assert_eq!(value["mobileSettings"]["direction"], json!("top"));
        assert_eq!(value["smoothEdges"], json!(true));
    }
}
