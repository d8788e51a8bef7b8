use dioxus::prelude::*;
use tracing::info;

use ui::components::{LanguageProvider, SiteFooter, SiteHeader};
use ui::core::config::SiteConfig;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::embedded);
    use_hook(|| info!(endpoint = %config.form_endpoint, "vitrina web starting"));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link {
            rel: "stylesheet",
            href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css",
        }

        LanguageProvider {
            Router::<Route> {}
        }
    }
}

/// Fixed header and footer around the routed page.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        SiteHeader {}
        Outlet::<Route> {}
        SiteFooter {}
    }
}
