//! Scroll-triggered reveal presets.
//!
//! Each preset is a selector plus GSAP tween and ScrollTrigger vars. Presets
//! whose selector matches nothing are skipped.

use crate::shared::dom;
use crate::shared::interop::gsap;
use crate::shared::interop::split_type::SplitType;
use crate::shared::interop::{set_property, to_js};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::JsValue;
use web_sys::Element;

/// ScrollTrigger `scrub`: either on/off or a smoothing time in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scrub {
    Toggle(bool),
    Smooth(f64),
}

/// ScrollTrigger `pin`: the trigger itself, or another element by selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pin {
    Enabled(bool),
    Selector(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTriggerVars {
    /// Selector trigger; per-element presets set the element itself instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<&'static str>,
    pub start: &'static str,
    pub end: &'static str,
    pub scrub: Scrub,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<Pin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_spacing: Option<bool>,
}

impl ScrollTriggerVars {
    fn new(start: &'static str, end: &'static str, scrub: Scrub) -> Self {
        Self {
            trigger: None,
            start,
            end,
            scrub,
            pin: None,
            pin_spacing: None,
        }
    }

    fn trigger(mut self, selector: &'static str) -> Self {
        self.trigger = Some(selector);
        self
    }

    fn pin(mut self, pin: Pin) -> Self {
        self.pin = Some(pin);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenMode {
    /// Animate from the given vars to the element's natural state.
    From,
    To,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    None,
    Chars,
    /// Split into lines, then animate each line's words.
    LinesThenWords,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealPreset {
    pub name: &'static str,
    pub selector: &'static str,
    pub mode: TweenMode,
    pub split: Split,
    /// One tween per matched element, triggered by that element.
    pub per_element: bool,
    pub scroll_trigger: ScrollTriggerVars,
    pub vars: Value,
}

pub fn reveal_presets() -> Vec<RevealPreset> {
    let chars_reveal = json!({ "opacity": 0.1, "stagger": 5, "ease": "back.out" });
    let title_words = json!({
        "y": 120, "rotation": 21, "stagger": 0.02, "duration": 0.7, "ease": "power2.out"
    });

    vec![
        RevealPreset {
            name: "text-reveal",
            selector: ".reveal-text",
            mode: TweenMode::From,
            split: Split::Chars,
            per_element: true,
            scroll_trigger: ScrollTriggerVars {
                pin_spacing: Some(true),
                ..ScrollTriggerVars::new("top 34%", "top -10%", Scrub::Toggle(true))
                    .pin(Pin::Selector(".about"))
            },
            vars: chars_reveal.clone(),
        },
        RevealPreset {
            name: "text-reveal-2",
            selector: ".reveal-text-2",
            mode: TweenMode::From,
            split: Split::Chars,
            per_element: true,
            scroll_trigger: ScrollTriggerVars::new("top 90%", "top 40%", Scrub::Toggle(true)),
            vars: chars_reveal,
        },
        RevealPreset {
            name: "section-titles",
            selector: ".text-appear",
            mode: TweenMode::From,
            split: Split::LinesThenWords,
            per_element: true,
            scroll_trigger: ScrollTriggerVars::new("top 50%", "top 30%", Scrub::Toggle(false)),
            vars: title_words.clone(),
        },
        RevealPreset {
            name: "section-titles-2",
            selector: ".text-appear-2",
            mode: TweenMode::From,
            split: Split::LinesThenWords,
            per_element: true,
            scroll_trigger: ScrollTriggerVars::new("top 90%", "top 30%", Scrub::Toggle(false)),
            vars: title_words,
        },
        RevealPreset {
            name: "reveal-me",
            selector: ".reveal-me",
            mode: TweenMode::From,
            split: Split::None,
            per_element: true,
            scroll_trigger: ScrollTriggerVars::new("top 90%", "top 50%", Scrub::Toggle(false)),
            vars: json!({
                "opacity": 0, "y": 95, "rotation": 2, "filter": "blur(10px)",
                "duration": 0.9, "stagger": 0.1, "ease": "power2.out"
            }),
        },
        RevealPreset {
            name: "zoom-image",
            selector: ".zoom-image",
            mode: TweenMode::To,
            split: Split::None,
            per_element: false,
            scroll_trigger: ScrollTriggerVars::new("top 20%", "top -30%", Scrub::Smooth(1.0))
                .trigger(".zoom-image")
                .pin(Pin::Enabled(true)),
            vars: json!({ "scale": 3.2, "ease": "expoScale" }),
        },
        RevealPreset {
            name: "video",
            selector: ".video-wrapper",
            mode: TweenMode::To,
            split: Split::None,
            per_element: false,
            scroll_trigger: ScrollTriggerVars::new("top 80%", "top 0%", Scrub::Smooth(1.0))
                .trigger(".video-section"),
            vars: json!({ "scale": 1 }),
        },
        RevealPreset {
            name: "scale-small",
            selector: ".scale-small-img",
            mode: TweenMode::To,
            split: Split::None,
            per_element: false,
            scroll_trigger: ScrollTriggerVars::new("top 50%", "top 0%", Scrub::Smooth(1.0))
                .trigger(".scale-small-img"),
            vars: json!({ "scale": 0.8, "ease": "power4.inOut" }),
        },
        RevealPreset {
            name: "scale-hero",
            selector: ".scale-hero-img",
            mode: TweenMode::To,
            split: Split::None,
            per_element: false,
            scroll_trigger: ScrollTriggerVars::new("top 7%", "top 0%", Scrub::Smooth(1.0))
                .trigger(".scale-hero-img"),
            vars: json!({ "scale": 0.94, "duration": 0.8, "ease": "power4.inOut" }),
        },
        RevealPreset {
            name: "cta-image",
            selector: "#cta-img",
            mode: TweenMode::From,
            split: Split::None,
            per_element: true,
            scroll_trigger: ScrollTriggerVars::new("top 70%", "top 30%", Scrub::Toggle(false)),
            vars: json!({
                "scale": 0, "rotation": -45, "duration": 2.1, "ease": "elastic.out(1.4, 1.2)"
            }),
        },
        RevealPreset {
            name: "skew-marquee",
            selector: "#skew-Marquee",
            mode: TweenMode::From,
            split: Split::None,
            per_element: true,
            scroll_trigger: ScrollTriggerVars::new("top 80%", "top 50%", Scrub::Toggle(false)),
            vars: json!({
                "y": 200, "skewX": "0deg", "skewY": "0deg", "rotation": 0, "duration": 3
            }),
        },
    ]
}

fn tween(mode: TweenMode, targets: &JsValue, vars: &JsValue) {
    match mode {
        TweenMode::From => {
            gsap::from(targets, vars);
        }
        TweenMode::To => {
            gsap::to(targets, vars);
        }
    }
}

/// Tween vars with `scrollTrigger` attached, optionally triggered by `element`.
fn vars_for(preset: &RevealPreset, element: Option<&Element>) -> JsValue {
    let vars = to_js(&preset.vars);
    let scroll_trigger = to_js(&preset.scroll_trigger);
    if let Some(element) = element {
        set_property(&scroll_trigger, "trigger", element.as_ref());
    }
    set_property(&vars, "scrollTrigger", &scroll_trigger);
    vars
}

fn split(element: &Element, types: &str) -> SplitType {
    SplitType::new(element, &to_js(&json!({ "types": types })))
}

fn apply_to_element(preset: &RevealPreset, element: &Element) {
    match preset.split {
        Split::None => tween(preset.mode, element.as_ref(), &vars_for(preset, Some(element))),
        Split::Chars => {
            let chars = split(element, "chars").chars();
            tween(preset.mode, chars.as_ref(), &vars_for(preset, Some(element)));
        }
        Split::LinesThenWords => {
            for line in split(element, "lines").lines().iter() {
                let Ok(line) = wasm_bindgen::JsCast::dyn_into::<Element>(line) else {
                    continue;
                };
                let words = split(&line, "words").words();
                tween(preset.mode, words.as_ref(), &vars_for(preset, Some(element)));
            }
        }
    }
}

/// Applies one preset to the current document; returns how many elements matched.
pub fn apply(preset: &RevealPreset) -> usize {
    let elements = dom::query_all(preset.selector);
    if elements.is_empty() {
        return 0;
    }

    if preset.per_element {
        for element in &elements {
            apply_to_element(preset, element);
        }
    } else {
        let targets = JsValue::from_str(preset.selector);
        tween(preset.mode, &targets, &vars_for(preset, None));
    }
    elements.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_preset_names_and_selectors_are_unique() {
        let presets = reveal_presets();
        let names: HashSet<_> = presets.iter().map(|p| p.name).collect();
        let selectors: HashSet<_> = presets.iter().map(|p| p.selector).collect();
        assert_eq!(names.len(), presets.len());
        assert_eq!(selectors.len(), presets.len());
    }

    #[test]
    fn test_scroll_trigger_serializes_camel_case() {
        let vars = ScrollTriggerVars {
            pin_spacing: Some(true),
            ..ScrollTriggerVars::new("top 34%", "top -10%", Scrub::Toggle(true))
                .pin(Pin::Selector(".about"))
        };
        let value = serde_json::to_value(&vars).unwrap();
        assert_eq!(
            value,
            json!({
                "start": "top 34%", "end": "top -10%", "scrub": true,
                "pin": ".about", "pinSpacing": true
            })
        );
    }

    #[test]
    fn test_selection_presets_use_a_selector_trigger() {
        for preset in reveal_presets().into_iter().filter(|p| !p.per_element) {
            assert!(preset.scroll_trigger.trigger.is_some(), "{}", preset.name);
        }
        let smooth = serde_json::to_value(Scrub::Smooth(1.0)).unwrap();
        assert_eq!(smooth, json!(1.0));
    }
}
