//! Routed pages. Each page calls [`use_page_animations`](crate::animations::use_page_animations)
//! so its scroll effects are wired after it mounts.

pub mod careers;
pub mod content;
pub mod home;
pub mod pricing;

pub use careers::CareerDetailsPage;
pub use home::HomePage;
pub use pricing::PricingPage;
