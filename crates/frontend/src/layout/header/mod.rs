pub mod header;
pub mod menu;

pub use header::Header;
pub use menu::{Menu, MenuGroup, MenuLink};
