//! Shared, browser-independent model of the studio site.
//!
//! Everything here is plain Rust: the tab registry and switcher, the small
//! state machines behind the interactive widgets, and the site configuration.
//! The `frontend` crate binds these to the DOM.

pub mod enums;
pub mod shared;
pub mod tabs;
pub mod widgets;
