//! Job-posting page tabs.
//!
//! - `registry` - the compiled-in Overview/Apply fragments
//! - `dom_surface` - [`TabSurface`](contracts::tabs::TabSurface) over the live document
//! - `tabs` - the `CareerTabs` component

pub mod dom_surface;
pub mod registry;
pub mod tabs;

pub use dom_surface::DomTabSurface;
pub use registry::career_tab_registry;
pub use tabs::CareerTabs;
