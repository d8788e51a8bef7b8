use dioxus::prelude::*;

use crate::components::language::use_language;
use crate::content::{GALLERY, GALLERY_TITLE};
use crate::core::config::use_site_config;
use crate::core::platform;
use crate::core::slider::{Gallery, Step};
use crate::t;

/// Image gallery with directional transition classes.
#[component]
pub fn ImageGallery() -> Element {
    let lang = use_language()();
    let transition_ms = use_site_config().slider.gallery_transition_ms;
    let mut gallery = use_signal(|| Gallery::new(GALLERY.len()));

    let mut arrow = move |step: Step| {
        let Some(transition) = gallery.with_mut(|g| g.arrow(step)) else {
            return;
        };
        platform::after_ms(transition_ms, async move {
            gallery.with_mut(|g| g.finish(transition.id));
        });
    };

    let state = gallery();

    rsx! {
        section { id: "gallery", class: "gallery-section",
            h2 { "{GALLERY_TITLE.get(lang)}" }
            div { class: "slider",
                div { class: "container-images",
                    for (index, image) in GALLERY.iter().enumerate() {
                        img {
                            key: "{index}",
                            src: image.src,
                            alt: "{image.alt.get(lang)}",
                            class: state.classes(index),
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "arrow left",
                    aria_label: t!("gallery-prev"),
                    onclick: move |_| arrow(Step::Prev),
                    i { class: "fas fa-arrow-left", aria_hidden: "true" }
                }
                button {
                    r#type: "button",
                    class: "arrow right",
                    aria_label: t!("gallery-next"),
                    onclick: move |_| arrow(Step::Next),
                    i { class: "fas fa-arrow-right", aria_hidden: "true" }
                }
            }
        }
    }
}
