//! Platform glue: task spawning and browser locale.

use std::future::Future;

/// Run `fut` on the Dioxus runtime of the calling component.
pub fn spawn_future<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(fut);
}

/// Run `fut` once `ms` milliseconds have elapsed.
pub fn after_ms<F>(ms: u64, fut: F)
where
    F: Future<Output = ()> + 'static,
{
    spawn_future(async move {
        super::timing::sleep_ms(ms).await;
        fut.await;
    });
}

/// The visitor's preferred locale (first entry), e.g. `es-MX`.
pub fn requested_locale() -> Option<String> {
    crate::i18n::requested_languages()
        .first()
        .map(|lang| lang.to_string())
}
