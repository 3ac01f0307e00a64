use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@4.12.14/dist/full.min.css";
const TAILWIND_JS: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    let mut auth = use_context_provider(AuthContext::new);

    // Read the stored token once the page is running in the browser
    use_effect(move || auth.restore());

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Steam game catalog with community reviews"
        }
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        Router::<Route> {}
    }
}
