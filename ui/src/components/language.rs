use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::config::use_site_config;
use crate::core::lang::Language;
use crate::core::platform;
use crate::core::storage::{KeyValueStore, LanguageStore, LocalStore};
use crate::i18n;

/// Provides the site-wide `Signal<Language>`.
///
/// The initial value comes from storage or the browser locale. After every
/// change the fluent loader already points at the new language (see
/// [`switch_language`]); the effect below mirrors it into `<html lang>` and
/// relocalizes `data-en` / `data-es` markup outside the component tree.
#[component]
pub fn LanguageProvider(children: Element) -> Element {
    i18n::init();
    let config = use_site_config();

    let lang = use_signal(move || {
        let store = LanguageStore::new(LocalStore, config.storage.language.clone());
        let initial = store.language(platform::requested_locale().as_deref());
        if let Err(err) = i18n::set_language(initial) {
            warn!(%initial, "fluent bundle unavailable: {err}");
        }
        info!(%initial, "language resolved");
        initial
    });
    use_context_provider(|| lang);

    use_effect(move || {
        let current = lang();
        #[cfg(target_arch = "wasm32")]
        crate::core::dom::localize_document(current);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = current;
    });

    rsx! { {children} }
}

/// The site language signal. Outside a provider this is a local English
/// signal so components still render.
pub fn use_language() -> Signal<Language> {
    let fallback = use_signal(Language::default);
    try_use_context::<Signal<Language>>().unwrap_or(fallback)
}

/// Switch the fluent bundle, persist `next` in `store` and notify
/// subscribers.
pub fn switch_language<S: KeyValueStore>(
    mut lang: Signal<Language>,
    next: Language,
    store: &LanguageStore<S>,
) {
    if let Err(err) = i18n::set_language(next) {
        warn!(%next, "fluent bundle unavailable: {err}");
    }
    store.remember(next);
    info!(%next, "language switched");
    lang.set(next);
}

/// Button showing the code of the language a click switches to.
#[component]
pub fn LanguageToggle() -> Element {
    let lang = use_language();
    let config = use_site_config();
    let current = lang();

    rsx! {
        button {
            r#type: "button",
            class: "language-toggle",
            aria_label: crate::t!("nav-language-label"),
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                let store = LanguageStore::new(LocalStore, config.storage.language.as_str());
                switch_language(lang, lang().toggled(), &store);
            },
            "{current.toggle_label()}"
        }
    }
}
