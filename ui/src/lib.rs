//! Shared UI crate for the Vitrina site: page copy, interaction state and the
//! Dioxus components that render it.

use dioxus::prelude::*;

pub mod content;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod contact;
    pub mod cookie;
    pub mod faq;
    pub mod footer;
    pub mod gallery;
    pub mod language;
    pub mod portfolio;
    pub mod pricing;
    pub mod site_header;

    pub use footer::SiteFooter;
    pub use language::{use_language, LanguageProvider, LanguageToggle};
    pub use site_header::SiteHeader;
}

/// Site stylesheet, linked once by the launching crate.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
