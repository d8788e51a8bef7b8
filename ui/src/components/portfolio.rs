use dioxus::html::point_interaction::InteractionLocation;
use dioxus::prelude::*;

use crate::components::language::use_language;
use crate::content::{PORTFOLIO, PORTFOLIO_TITLE};
use crate::core::config::use_site_config;
use crate::core::slider::{Slider, Step, SwipeTracker};
use crate::t;

/// Horizontal slide track driven by prev/next buttons and touch swipes.
#[component]
pub fn PortfolioSlider() -> Element {
    let lang = use_language()();
    let swipe_threshold = use_site_config().slider.swipe_threshold_px;
    let mut slider = use_signal(|| Slider::new(PORTFOLIO.len()));
    let mut swipe = use_signal(|| SwipeTracker::new(swipe_threshold));

    let current = slider();

    rsx! {
        section { id: "portfolio", class: "portfolio-item-section",
            h2 { "{PORTFOLIO_TITLE.get(lang)}" }
            div { class: "portfolio-slider",
                div {
                    class: "portfolio-slider-track",
                    style: "transform: {current.transform()};",
                    ontouchstart: move |evt: TouchEvent| {
                        if let Some(point) = evt.touches().first() {
                            let x = point.client_coordinates().x;
                            swipe.with_mut(|s| s.start(x));
                        }
                    },
                    ontouchend: move |evt: TouchEvent| {
                        let Some(point) = evt.touches_changed().first().map(|p| p.client_coordinates().x) else {
                            return;
                        };
                        if let Some(step) = swipe.with_mut(|s| s.end(point)) {
                            slider.with_mut(|s| {
                                s.step(step);
                            });
                        }
                    },
                    for (index, slide) in PORTFOLIO.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "portfolio-item-container",
                            aria_hidden: "{index != current.index()}",
                            div { class: "portfolio-item",
                                img { src: slide.image, alt: "{slide.title.get(lang)}", loading: "lazy" }
                                h3 { "{slide.title.get(lang)}" }
                                p { "{slide.summary.get(lang)}" }
                            }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "slider-prev",
                    aria_label: t!("slider-prev"),
                    onclick: move |_| {
                        slider.with_mut(|s| {
                            s.step(Step::Prev);
                        });
                    },
                    i { class: "fas fa-chevron-left", aria_hidden: "true" }
                }
                button {
                    r#type: "button",
                    class: "slider-next",
                    aria_label: t!("slider-next"),
                    onclick: move |_| {
                        slider.with_mut(|s| {
                            s.step(Step::Next);
                        });
                    },
                    i { class: "fas fa-chevron-right", aria_hidden: "true" }
                }
                p { class: "slider-position",
                    {t!("slider-position", current = (current.index() + 1), total = current.count())}
                }
            }
        }
    }
}
