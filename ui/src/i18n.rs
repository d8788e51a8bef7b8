//! Fluent messages for the site's dynamic text.
//!
//! Static page copy is carried as [`LocalizedText`](crate::core::localize::LocalizedText)
//! pairs. Everything that is produced at runtime (validation errors, the
//! thank-you banner, the failure alert, accordion and slider labels, the
//! cookie confirmation) is a fluent message looked up through [`t!`].
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/vitrina-ui.ftl   (fallback/reference)
//!   es-ES/vitrina-ui.ftl
//! ```
//!
//! The active fluent language always mirrors the site [`Language`]; call
//! [`set_language`] whenever the language signal changes.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::{langid, LanguageIdentifier};

use crate::core::lang::Language;

pub use i18n_embed_fl::fl;

/// Translation macro routed through the shared loader.
///     t!("form-error-email")
///     t!("form-error-required", label = "Name")
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "vitrina-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let loader = FluentLanguageLoader::new(DOMAIN, langid!("en-US"));
    // Labels are interpolated into plain text nodes; no bidi isolation marks.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Load bundles for the visitor's requested languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Point the loader at `lang`'s bundle.
pub fn set_language(lang: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    set_language_tag(lang.fluent_tag())
}

/// Switch by raw tag. Unparseable tags are ignored.
pub fn set_language_tag(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
