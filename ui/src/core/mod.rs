//! Platform-agnostic state objects plus the browser glue that drives them.

pub mod accordion;
pub mod config;
pub mod consent;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod form;
pub mod header;
pub mod lang;
pub mod localize;
pub mod menu;
pub mod platform;
pub mod pricing;
pub mod reveal;
pub mod slider;
pub mod storage;
pub mod submit;
pub mod timing;
