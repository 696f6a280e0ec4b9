//! Tab content switching.
//!
//! - `registry` - immutable id → fragment mapping built once at startup
//! - `switcher` - validate-then-mutate switching over a [`TabSurface`]

pub mod registry;
pub mod switcher;

pub use registry::{RegistryError, TabEntry, TabId, TabRegistry, TabRegistryBuilder};
pub use switcher::{TabSurface, TabSwitchError, TabSwitcher};
