use dioxus::prelude::*;
use tracing::{info, warn};

use crate::components::language::use_language;
use crate::content::COOKIE_TITLE;
use crate::core::config::use_site_config;
use crate::core::consent::{CookiePreferences, SavedNotice};
use crate::core::platform;
use crate::core::storage::LocalStore;
use crate::t;

#[derive(Clone, Copy, PartialEq)]
enum Category {
    Analytics,
    Preference,
    Marketing,
}

impl Category {
    const ALL: [Category; 3] = [Category::Analytics, Category::Preference, Category::Marketing];

    fn id(self) -> &'static str {
        match self {
            Category::Analytics => "analytics-cookies",
            Category::Preference => "preference-cookies",
            Category::Marketing => "marketing-cookies",
        }
    }

    fn label(self) -> String {
        match self {
            Category::Analytics => t!("cookie-analytics"),
            Category::Preference => t!("cookie-preference"),
            Category::Marketing => t!("cookie-marketing"),
        }
    }

    fn is_set(self, prefs: &CookiePreferences) -> bool {
        match self {
            Category::Analytics => prefs.analytics,
            Category::Preference => prefs.preference,
            Category::Marketing => prefs.marketing,
        }
    }

    fn flag(self, prefs: &mut CookiePreferences) -> &mut bool {
        match self {
            Category::Analytics => &mut prefs.analytics,
            Category::Preference => &mut prefs.preference,
            Category::Marketing => &mut prefs.marketing,
        }
    }
}

/// Cookie preference checkboxes. Saving writes all three flags at once and
/// shows a confirmation that hides itself after a while.
#[component]
pub fn CookieSettings() -> Element {
    let lang = use_language()();
    let config = use_site_config();
    let key = config.storage.cookie_preferences.clone();
    let notice_ms = config.cookie_message_ms;

    let load_key = key.clone();
    let mut prefs = use_signal(move || CookiePreferences::load(&LocalStore, &load_key).unwrap_or_default());
    let mut notice = use_signal(SavedNotice::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        match prefs().save(&LocalStore, &key) {
            Ok(()) => info!(prefs = ?prefs(), "cookie preferences saved"),
            Err(err) => warn!("could not persist cookie preferences: {err}"),
        }
        let token = notice.with_mut(|n| n.show());
        platform::after_ms(notice_ms, async move {
            notice.with_mut(|n| n.expire(token));
        });
    };

    let current = prefs();

    rsx! {
        section { id: "cookies", class: "cookie-section",
            h2 { "{COOKIE_TITLE.get(lang)}" }
            form { id: "cookie-preferences-form", class: "cookie-form", onsubmit,
                label { class: "cookie-option",
                    input { r#type: "checkbox", checked: true, disabled: true }
                    {t!("cookie-essential")}
                }
                for category in Category::ALL {
                    label { key: "{category.id()}", class: "cookie-option", r#for: category.id(),
                        input {
                            id: category.id(),
                            r#type: "checkbox",
                            checked: category.is_set(&current),
                            onchange: move |evt: FormEvent| {
                                let on = evt.checked();
                                prefs.with_mut(|p| *category.flag(p) = on);
                            },
                        }
                        {category.label()}
                    }
                }
                button { r#type: "submit", class: "button button--primary", {t!("cookie-save")} }
            }
            if notice().visible() {
                p { id: "cookie-message", class: "cookie-message", role: "status",
                    {t!("cookie-saved")}
                }
            }
        }
    }
}
