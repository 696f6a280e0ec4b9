//! State behind the interactive page widgets.

pub mod accordion;
pub mod circle_text;
pub mod counter;
pub mod inline_slider;
pub mod marquee;
pub mod menu;
pub mod team;

pub use accordion::{AccordionGroup, FaqEntry};
pub use circle_text::{rotated_chars, RotatedChar};
pub use counter::{CounterStat, CounterTicker};
pub use inline_slider::SlideCycle;
pub use marquee::{loop_offsets, MarqueeDirection, ScrollTracker};
pub use menu::{custom_ease, MenuState};
pub use team::{TeamMember, TeamRoster};
