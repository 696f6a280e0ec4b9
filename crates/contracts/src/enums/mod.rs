pub mod billing_cycle;
pub mod color_theme;

pub use billing_cycle::{BillingCycle, PricePlan};
pub use color_theme::ColorTheme;
