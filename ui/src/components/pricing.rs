use dioxus::prelude::*;

use crate::components::language::use_language;
use crate::content::{COMPARISON_TITLE, PRICING_TITLE};
use crate::core::accordion::ExclusiveGroup;
use crate::core::pricing::{localize_table, COMPARISON, PLANS};
use crate::t;

/// Plan cards; expanding one card collapses the others.
#[component]
pub fn PricingCards() -> Element {
    let lang = use_language()();
    let mut group = use_signal(ExclusiveGroup::default);
    let state = group();

    rsx! {
        section { id: "pricing", class: "pricing-section",
            h2 { "{PRICING_TITLE.get(lang)}" }
            div { class: "pricing-cards",
                for index in 0..PLANS.len() {
                    PlanCard {
                        key: "{index}",
                        index,
                        expanded: state.is_expanded(index),
                        height: state.height(index),
                        on_toggle: move |index: usize| {
                            group.with_mut(|g| {
                                g.toggle(index, measure_plan_extra);
                            });
                        },
                    }
                }
            }
        }
    }
}

/// Natural height of a card's collapsed extras, read before the re-render.
fn measure_plan_extra(index: usize) -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    return crate::core::dom::scroll_height(&format!("plan-extra-{}", PLANS[index].id));
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = index;
        None
    }
}

#[component]
fn PlanCard(index: usize, expanded: bool, height: Option<f64>, on_toggle: EventHandler<usize>) -> Element {
    let lang = use_language()();
    let plan = &PLANS[index];
    let panel_id = format!("plan-extra-{}", plan.id);
    let card_class = match (plan.featured, expanded) {
        (true, true) => "pricing-card featured expanded",
        (true, false) => "pricing-card featured",
        (false, true) => "pricing-card expanded",
        (false, false) => "pricing-card",
    };
    let panel_style = match (expanded, height) {
        (true, Some(h)) => format!("max-height: {h}px;"),
        (true, None) => "max-height: none;".to_string(),
        (false, _) => "max-height: 0;".to_string(),
    };

    rsx! {
        article { class: card_class,
            h3 { "{plan.name.get(lang)}" }
            p { class: "plan-price",
                span { class: "plan-amount", "{plan.price}" }
                span { class: "plan-period", " {plan.period.get(lang)}" }
            }
            ul { class: "plan-features",
                for feature in plan.features {
                    li { i { class: "fas fa-check", aria_hidden: "true" } " {feature.get(lang)}" }
                }
            }
            div { id: "{panel_id}", class: "plan-extra", style: "{panel_style}",
                ul { class: "plan-features",
                    for feature in plan.extra_features {
                        li { i { class: "fas fa-plus", aria_hidden: "true" } " {feature.get(lang)}" }
                    }
                }
            }
            button {
                r#type: "button",
                class: "plan-toggle",
                aria_expanded: "{expanded}",
                aria_controls: "{panel_id}",
                onclick: move |_| on_toggle.call(index),
                if expanded {
                    {t!("pricing-show-fewer")}
                } else {
                    {t!("pricing-show-more")}
                }
            }
        }
    }
}

/// Plan comparison; every label, value, tooltip and mobile plan label is
/// re-resolved for the active language.
#[component]
pub fn ComparisonTable() -> Element {
    let lang = use_language()();
    let rows = localize_table(COMPARISON, lang);

    rsx! {
        section { id: "compare", class: "comparison-section",
            h2 { "{COMPARISON_TITLE.get(lang)}" }
            table { class: "comparison-table",
                thead {
                    tr {
                        th { scope: "col", {t!("comparison-feature")} }
                        for plan in PLANS {
                            th { key: "{plan.id}", scope: "col", "{plan.name.get(lang)}" }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.feature}",
                            th { scope: "row", class: "feature-label", "{row.feature}" }
                            for (index, cell) in row.cells.into_iter().enumerate() {
                                td {
                                    key: "{index}",
                                    class: "comparison-cell",
                                    "data-plan": cell.plan,
                                    span { class: "cell-value", "{cell.value}" }
                                    if let Some(tip) = cell.tip {
                                        span { class: "cell-tooltip", role: "tooltip", "{tip}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
