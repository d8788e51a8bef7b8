use dioxus::prelude::*;

use crate::components::language::use_language;
use crate::content::{FAQS, FAQ_TITLE};
use crate::core::accordion::Panel;
use crate::core::config::use_site_config;
use crate::core::platform;

#[component]
pub fn FaqSection() -> Element {
    let lang = use_language()();

    rsx! {
        section { id: "faq", class: "faq-section",
            h2 { "{FAQ_TITLE.get(lang)}" }
            div { class: "faq-list",
                for (index, faq) in FAQS.iter().enumerate() {
                    FaqItem {
                        key: "{index}",
                        index,
                        question: faq.question.get(lang),
                        answer: faq.answer.get(lang),
                    }
                }
            }
        }
    }
}

/// Natural height of a hidden answer; it is un-hidden first so the browser
/// lays it out.
fn measure_answer(index: usize) -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    return crate::core::dom::unhide_and_measure(&format!("faq-answer-{index}"));
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = index;
        None
    }
}

/// Independent expand/collapse. Opening measures the answer in the click
/// handler so the first frame already animates towards the real height; the
/// answer is only marked `hidden` once the collapse transition has played.
#[component]
fn FaqItem(index: usize, question: &'static str, answer: &'static str) -> Element {
    let collapse_ms = use_site_config().faq_collapse_ms;
    let mut panel = use_signal(Panel::default);
    let answer_id = format!("faq-answer-{index}");

    let state = panel();
    let style = state.style();

    rsx! {
        div { class: "faq-item",
            button {
                r#type: "button",
                class: "faq-question",
                aria_expanded: state.aria_expanded(),
                aria_controls: "{answer_id}",
                onclick: move |_| {
                    if let Some(token) = panel.with_mut(|p| p.toggle(|| measure_answer(index))) {
                        platform::after_ms(collapse_ms, async move {
                            panel.with_mut(|p| p.settle(token));
                        });
                    }
                },
                span { class: "faq-question-text", "{question}" }
                i { class: "faq-toggle-icon fas {state.icon_class()}", aria_hidden: "true" }
            }
            div {
                id: "{answer_id}",
                class: "faq-answer",
                role: "region",
                hidden: state.hidden(),
                style: "{style}",
                p { "{answer}" }
            }
        }
    }
}
