use dioxus::prelude::*;

use crate::components::language::use_language;
use crate::content::{FOOTER_RIGHTS, FOOTER_TAGLINE, MORE_LINKS, NAV_LINKS};

#[component]
pub fn SiteFooter() -> Element {
    let lang = use_language()();

    rsx! {
        footer { id: "footer", class: "site-footer",
            div { class: "footer-inner",
                p { class: "footer-tagline", "{FOOTER_TAGLINE.get(lang)}" }
                nav { class: "footer-links",
                    for link in NAV_LINKS.iter().chain(MORE_LINKS) {
                        a { key: "{link.href}", href: link.href, "{link.label.get(lang)}" }
                    }
                }
                p { class: "footer-rights", "© Vitrina. {FOOTER_RIGHTS.get(lang)}" }
            }
        }
    }
}
