//! Interactive page widgets. State lives in `contracts::widgets`; these
//! components bind it to markup and timers.

pub mod accordion;
pub mod circle_text;
pub mod counter;
pub mod inline_slider;
pub mod marquee;
pub mod pricing;
pub mod team;

pub use accordion::{AccordionVariant, FaqAccordion};
pub use circle_text::CircleText;
pub use counter::CounterSection;
pub use inline_slider::InlineSlider;
pub use marquee::ScrollingMarquee;
pub use pricing::PricingToggle;
pub use team::TeamShowcase;
