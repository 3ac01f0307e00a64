mod achievements;
mod media;
mod reviews;

use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorAlert, ErrorPage, Loading, LoadingPage, Page, StatCard},
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::{
        developer::GameDevelopersDto,
        game::{format_price, GameDetailDto, ImageUrlsDto},
    },
};

use self::{achievements::AchievementsSection, media::MediaGallery, reviews::ReviewsSection};

#[cfg(feature = "web")]
use crate::client::api::{
    developer::get_game_developers,
    game::{get_enriched_game, get_game},
};

/// Minutes as "Xh Ym".
fn format_playtime(minutes: i64) -> String {
    if minutes <= 0 {
        return "0m".to_string();
    }
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

#[component]
pub fn GameDetail(appid: i64) -> Element {
    let mut game = use_signal(Cache::<GameDetailDto>::default);
    let mut storefront_price = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|(appid)| {
        game.set(Cache::Loading);
        spawn(async move {
            game.set(get_game(appid).await.into());
        });
        // The storefront price is optional decoration
        spawn(async move {
            storefront_price.set(get_enriched_game(appid).await.ok().and_then(|e| e.steam_price));
        });
    }));

    let state = game.read();
    let detail = match &*state {
        Cache::Fetched(detail) => detail.clone(),
        Cache::Error(e) if e.status == 404 => {
            return rsx! { ErrorPage { status: 404, message: format!("No game with appid {}", appid) } }
        }
        Cache::Error(e) => return rsx! { ErrorPage { status: e.status, message: e.message.clone() } },
        _ => return rsx! { LoadingPage {} },
    };
    drop(state);

    let images = ImageUrlsDto::for_appid(appid);
    let header_image = detail.header_image.clone().unwrap_or(images.header);
    let price = format_price(detail.price, storefront_price().as_deref());

    rsx! {
        Title { "{detail.name} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-8",

                div {
                    class: "flex flex-col md:flex-row gap-6",
                    img {
                        src: "{header_image}",
                        alt: "{detail.name}",
                        class: "w-full md:w-1/2 rounded-box object-cover",
                    }
                    div {
                        class: "flex flex-col gap-3",
                        h1 { class: "text-3xl font-bold", "{detail.name}" }
                        p { class: "opacity-70", "Released {detail.release_date}" }
                        span { class: "badge badge-lg badge-primary", "{price}" }
                        if let Some(description) = &detail.short_description {
                            p { "{description}" }
                        }
                        div {
                            class: "flex flex-wrap gap-1",
                            for genre in detail.genres.iter() {
                                span { class: "badge badge-secondary", "{genre}" }
                            }
                            for tag in detail.tags.iter().take(10) {
                                span { class: "badge badge-outline", "{tag}" }
                            }
                        }
                    }
                }

                div {
                    class: "stats stats-vertical md:stats-horizontal shadow w-full",
                    StatCard {
                        title: "Average playtime",
                        value: format_playtime(detail.playtime.average_forever),
                        detail: format!("{} in the last 2 weeks", format_playtime(detail.playtime.average_2weeks)),
                    }
                    StatCard {
                        title: "Median playtime",
                        value: format_playtime(detail.playtime.median_forever),
                        detail: format!("{} in the last 2 weeks", format_playtime(detail.playtime.median_2weeks)),
                    }
                    StatCard { title: "Peak players", value: detail.peak_ccu.to_string() }
                    StatCard {
                        title: "Steam reviews",
                        value: format!("{} / {}", detail.positive, detail.negative),
                        detail: "positive / negative".to_string(),
                    }
                    if detail.metacritic_score > 0 {
                        StatCard { title: "Metacritic", value: detail.metacritic_score.to_string() }
                    }
                }

                MediaGallery { appid, fallback_screenshots: detail.screenshots.clone() }

                Companies { appid }

                ReviewsSection { appid }

                AchievementsSection { appid }
            }
        }
    }
}

#[component]
fn Companies(appid: i64) -> Element {
    let mut companies = use_signal(Cache::<GameDevelopersDto>::default);

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|(appid)| {
        spawn(async move {
            companies.set(get_game_developers(appid).await.into());
        });
    }));

    rsx! {
        section {
            h2 { class: "text-xl font-bold mb-3", "Developers" }
            match &*companies.read() {
                Cache::Fetched(c) => rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4 bg-base-200 rounded-box p-4",
                        div {
                            p { class: "font-semibold", "Developed by" }
                            p { {c.developers.join(", ")} }
                        }
                        div {
                            p { class: "font-semibold", "Published by" }
                            p { {c.publishers.join(", ")} }
                        }
                        if let Some(website) = &c.website {
                            a { class: "link", href: "{website}", target: "_blank", "Website" }
                        }
                        if let Some(support) = &c.support_url {
                            a { class: "link", href: "{support}", target: "_blank", "Support" }
                        }
                    }
                },
                Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
                _ => rsx! { Loading {} },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_playtime_in_hours_and_minutes() {
        assert_eq!(format_playtime(0), "0m");
        assert_eq!(format_playtime(45), "45m");
        assert_eq!(format_playtime(120), "2h");
        assert_eq!(format_playtime(135), "2h 15m");
    }
}
