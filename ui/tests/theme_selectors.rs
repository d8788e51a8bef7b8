/*!
Theme selector lint.

Components and the browser glue add classes at runtime (`scrolled`,
`header-hidden`, `show`, `open`, `visible`, `to_left`, ...). A refactor of
`assets/theme/main.css` that drops one of them breaks the page silently, so
the selectors the Rust code relies on are checked here by substring.

If you rename a class, update the component and this list together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global
    ":root",
    "body {",
    ".page {",
    ".button {",
    ".button--primary",
    ".button--accent",
    // Header visibility
    ".site-header {",
    ".site-header.scrolled",
    ".site-header.header-hidden",
    ".nav-links.scrolled",
    // Menus
    ".dropdown-menu.show",
    ".dropdown-toggle.open",
    ".mobile-menu.show",
    ".hamburger.open",
    // Scroll reveal
    ".slide-left",
    ".slide-right",
    ".visible",
    ".revealed",
    // Sliders
    ".portfolio-slider-track",
    ".portfolio-item-container",
    ".container-images img.active",
    ".container-images img.to_left",
    ".container-images img.to_right",
    ".arrow.left",
    ".arrow.right",
    // Accordions
    ".faq-answer",
    ".plan-extra",
    ".pricing-card.featured",
    // Comparison table
    ".cell-tooltip",
    "attr(data-plan)",
    // Forms
    ".contact-form .error",
    ".error-message",
    ".thank-you",
    ".cookie-message",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|selector| !THEME_CSS.contains(*selector))
        .collect();
    assert!(
        missing.is_empty(),
        "main.css is missing selectors used by components: {missing:?}"
    );
}

#[test]
fn every_reveal_target_starts_hidden() {
    for selector in ui::core::reveal::REVEAL_SELECTORS {
        // Targets that only exist for layout (`.timeline-item`, `.how-steps li`, ...)
        // are optional; the ones the home page renders must be styled.
        let rendered = [
            ".service-block",
            ".feature-card",
            ".process-steps li",
            ".feature-section",
            ".portfolio-item",
            ".contact-info-item",
        ];
        if rendered.contains(selector) {
            assert!(THEME_CSS.contains(selector), "{selector} has no reveal styling");
        }
    }
}
