use dioxus::prelude::*;

use crate::components::language::{use_language, LanguageToggle};
use crate::content::{MORE_LINKS, NAV_LINKS};
use crate::core::header::HeaderState;
use crate::core::menu::MenuToggle;
use crate::t;

#[cfg(target_arch = "wasm32")]
fn recompute_header(
    mut state: Signal<HeaderState>,
    config: &crate::core::config::HeaderConfig,
) {
    let current = *state.peek();
    let next = crate::core::header::refresh(current, crate::core::dom::measure_scroll(), config);
    if next != current {
        state.set(next);
    }
}

/// Fixed site header: primary links, the "More" dropdown, the language
/// toggle and the mobile hamburger menu.
///
/// Both menus close on any click outside their trigger and panel. The
/// header's `scrolled` / `header-hidden` classes are recomputed at most once
/// per animation frame while the page scrolls.
#[component]
pub fn SiteHeader() -> Element {
    let lang = use_language()();
    let mut dropdown = use_signal(MenuToggle::default);
    let mut hamburger = use_signal(MenuToggle::default);
    let header_state = use_signal(HeaderState::default);

    #[cfg(target_arch = "wasm32")]
    {
        let header_config = crate::core::config::use_site_config().header;
        let scroll_config = header_config.clone();
        let _listeners = use_hook(move || {
            use crate::core::dom::{self, Listener};

            let outside_click = Listener::on_document("click", move |event| {
                let target = dom::click_target(&event, "more-links");
                dropdown.with_mut(|menu| menu.document_click(target));
                let target = dom::click_target(&event, "mobile-menu");
                hamburger.with_mut(|menu| menu.document_click(target));
            });
            let scroll =
                dom::on_scroll_frame(move || recompute_header(header_state, &scroll_config));

            std::rc::Rc::new((outside_click, scroll))
        });
        // `#header` only exists once this component has mounted.
        use_effect(move || recompute_header(header_state, &header_config));
    }

    let state = header_state();
    let dropdown_state = dropdown();
    let hamburger_state = hamburger();

    rsx! {
        header { id: "header", class: "{state.header_class()}",
            div { class: "header-inner",
                a { class: "brand", href: "#top",
                    span { class: "brand-mark", "Vitrina" }
                }

                nav { class: "{state.nav_class()}", aria_label: t!("nav-primary-label"),
                    for link in NAV_LINKS {
                        a { key: "{link.href}", class: "nav-link", href: link.href, "{link.label.get(lang)}" }
                    }

                    div { class: "dropdown",
                        button {
                            id: "dropdown-toggle",
                            r#type: "button",
                            class: dropdown_state.trigger_class("dropdown-toggle"),
                            aria_haspopup: "true",
                            aria_controls: "more-links",
                            aria_expanded: "{dropdown_state.is_open()}",
                            onclick: move |_| {
                                dropdown.with_mut(|menu| {
                                    menu.toggle();
                                });
                            },
                            {t!("nav-more")}
                            i { class: "fas fa-chevron-down", aria_hidden: "true" }
                        }
                        ul { id: "more-links", class: dropdown_state.panel_class("dropdown-menu"),
                            for link in MORE_LINKS {
                                li { key: "{link.href}",
                                    a { href: link.href, "{link.label.get(lang)}" }
                                }
                            }
                        }
                    }
                }

                LanguageToggle {}

                button {
                    id: "hamburger-menu",
                    r#type: "button",
                    class: hamburger_state.trigger_class("hamburger"),
                    aria_label: t!("nav-menu-label"),
                    aria_controls: "mobile-menu",
                    aria_expanded: "{hamburger_state.is_open()}",
                    onclick: move |_| {
                        hamburger.with_mut(|menu| {
                            menu.toggle();
                        });
                    },
                    span { class: "hamburger-bar" }
                    span { class: "hamburger-bar" }
                    span { class: "hamburger-bar" }
                }
            }

            div { id: "mobile-menu", class: hamburger_state.panel_class("mobile-menu"),
                for link in NAV_LINKS.iter().chain(MORE_LINKS) {
                    a { key: "{link.href}", class: "mobile-link", href: link.href, "{link.label.get(lang)}" }
                }
                LanguageToggle {}
            }
        }
    }
}
