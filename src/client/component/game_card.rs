use dioxus::prelude::*;

use crate::{client::router::Route, model::game::ImageUrlsDto};

/// Capsule linking to a game's detail page.
#[component]
pub fn GameCard(appid: i64, name: String, subtitle: String, badge: Option<String>) -> Element {
    let image = ImageUrlsDto::for_appid(appid).header;

    rsx!(
        Link {
            to: Route::GameDetail { appid },
            class: "card bg-base-200 hover:bg-base-300 transition-colors",
            figure {
                img {
                    src: "{image}",
                    alt: "{name}",
                    class: "w-full aspect-[460/215] object-cover",
                    loading: "lazy",
                }
            }
            div {
                class: "card-body p-3 gap-1",
                div {
                    class: "flex justify-between items-start gap-2",
                    h3 { class: "font-semibold leading-tight", "{name}" }
                    if let Some(badge) = badge {
                        span { class: "badge badge-primary whitespace-nowrap", "{badge}" }
                    }
                }
                p { class: "text-sm opacity-70", "{subtitle}" }
            }
        }
    )
}

#[component]
pub fn StatCard(title: String, value: String, detail: Option<String>) -> Element {
    rsx!(
        div {
            class: "stat bg-base-200 rounded-box",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value text-2xl", "{value}" }
            if let Some(detail) = detail {
                div { class: "stat-desc", "{detail}" }
            }
        }
    )
}
