use dioxus::prelude::*;
use tracing::debug;

use crate::components::contact::ContactSection;
use crate::components::cookie::CookieSettings;
use crate::components::faq::FaqSection;
use crate::components::gallery::ImageGallery;
use crate::components::language::use_language;
use crate::components::portfolio::PortfolioSlider;
use crate::components::pricing::{ComparisonTable, PricingCards};
use crate::content::*;
use crate::core::config::use_site_config;
use crate::core::platform;

/// The single landing page. Sections carrying reveal classes fade in once
/// scrolled into view; observation starts shortly after first paint.
#[component]
pub fn Home() -> Element {
    let lang = use_language()();
    let reveal = use_site_config().reveal;

    use_effect(move || {
        let threshold = reveal.threshold;
        debug!(delay_ms = reveal.start_delay_ms, threshold, "scheduling scroll reveal");
        platform::after_ms(reveal.start_delay_ms, async move {
            #[cfg(target_arch = "wasm32")]
            crate::core::dom::start_scroll_reveal(threshold);
            #[cfg(not(target_arch = "wasm32"))]
            let _ = threshold;
        });
    });

    rsx! {
        main { id: "top", class: "page page-home",
            section { class: "hero",
                h1 { "{HERO_TITLE.get(lang)}" }
                p { class: "hero-subtitle", "{HERO_SUBTITLE.get(lang)}" }
                a { class: "button button--primary", href: "#contact", "{HERO_CTA.get(lang)}" }
            }

            section { id: "services", class: "services-section",
                h2 { "{SERVICES_TITLE.get(lang)}" }
                for (index, service) in SERVICES.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if index % 2 == 0 { "service-block slide-left" } else { "service-block slide-right" },
                        i { class: "{service.icon}", aria_hidden: "true" }
                        h3 { "{service.title.get(lang)}" }
                        p { "{service.body.get(lang)}" }
                    }
                }
                div { class: "feature-grid",
                    for (index, feature) in FEATURES.iter().enumerate() {
                        div { key: "{index}", class: "feature-card", "{feature.get(lang)}" }
                    }
                }
            }

            section { id: "process", class: "feature-section",
                h2 { "{PROCESS_TITLE.get(lang)}" }
                ol { class: "process-steps",
                    for (index, step) in PROCESS_STEPS.iter().enumerate() {
                        li { key: "{index}", "{step.get(lang)}" }
                    }
                }
            }

            PortfolioSlider {}
            ImageGallery {}
            PricingCards {}
            ComparisonTable {}
            FaqSection {}

            section { class: "cta-section",
                h2 { "{CTA_TITLE.get(lang)}" }
                p { "{CTA_BODY.get(lang)}" }
                a { class: "button button--accent", href: "#contact", "{HERO_CTA.get(lang)}" }
            }

            ContactSection {}

            section { class: "newsletter-section",
                h2 { "{NEWSLETTER_TITLE.get(lang)}" }
                p { "{NEWSLETTER_BODY.get(lang)}" }
            }

            CookieSettings {}
        }
    }
}
