pub mod config;
pub mod dom;
pub mod interop;
pub mod theme;
