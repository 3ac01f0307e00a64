use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorAlert, GameCard, Loading, Page, StatCard},
        constant::SITE_NAME,
        model::cache::Cache,
        router::Route,
    },
    model::{
        advanced::{SentimentGameDto, TopGameDto, ValueGameDto},
        dashboard::DashboardStatsDto,
        game::format_price,
        review::{rating_class, RecentReviewsDto},
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::{
        advanced::{get_sentiment, get_top, get_value},
        dashboard::get_dashboard_stats,
        review::get_recent_reviews,
    },
    client::constant::{HOME_RECENT_REVIEWS, HOME_REFRESH_INTERVAL_MS, HOME_TOP_GAMES},
    model::advanced::{TopMetric, DEFAULT_RANKING_LIMIT},
};

/// Orders value picks with paid games ahead of free ones, keeping rank order otherwise.
fn paid_first(mut games: Vec<ValueGameDto>) -> Vec<ValueGameDto> {
    games.sort_by_key(|g| g.price <= 0.0);
    games
}

#[component]
pub fn Home() -> Element {
    let mut stats = use_signal(Cache::<DashboardStatsDto>::default);
    let mut recent = use_signal(Cache::<RecentReviewsDto>::default);
    let mut top = use_signal(Cache::<Vec<TopGameDto>>::default);
    let mut value = use_signal(Cache::<Vec<ValueGameDto>>::default);
    let mut sentiment = use_signal(Cache::<Vec<SentimentGameDto>>::default);

    #[cfg(feature = "web")]
    use_effect(move || {
        spawn(async move {
            stats.set(get_dashboard_stats().await.into());
        });
        spawn(async move {
            recent.set(get_recent_reviews(HOME_RECENT_REVIEWS).await.into());
        });
        spawn(async move {
            top.set(get_top(TopMetric::Positive, HOME_TOP_GAMES).await.into());
        });
        spawn(async move {
            value.set(get_value(DEFAULT_RANKING_LIMIT).await.map(paid_first).into());
        });
        spawn(async move {
            sentiment.set(get_sentiment(DEFAULT_RANKING_LIMIT).await.into());
        });
    });

    // Keep the review feed and headline numbers current
    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(HOME_REFRESH_INTERVAL_MS).await;
            if let Ok(latest) = get_recent_reviews(HOME_RECENT_REVIEWS).await {
                recent.set(Cache::Fetched(latest));
            }
            if let Ok(latest) = get_dashboard_stats().await {
                stats.set(Cache::Fetched(latest));
            }
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-8",

                // Headline numbers
                match &*stats.read() {
                    Cache::Fetched(s) => rsx! {
                        div {
                            class: "stats stats-vertical md:stats-horizontal shadow w-full",
                            StatCard { title: "Games", value: s.total_games.to_string() }
                            StatCard {
                                title: "Reviews",
                                value: s.total_reviews.to_string(),
                                detail: format!("{} in the last hour", s.recent_hour_reviews),
                            }
                            StatCard { title: "Average price", value: format_price(s.average_price, None) }
                            if let Some(peak) = &s.top_peak_game {
                                StatCard {
                                    title: "Most played",
                                    value: peak.name.clone(),
                                    detail: format!("{} peak players", peak.peak_ccu),
                                }
                            }
                        }
                    },
                    Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
                    _ => rsx! { Loading {} },
                }

                section {
                    div {
                        class: "flex justify-between items-center mb-3",
                        h2 { class: "text-xl font-bold", "Most loved" }
                        Link { to: Route::games(), class: "link", "Browse all games" }
                    }
                    match &*top.read() {
                        Cache::Fetched(games) => rsx! {
                            div {
                                class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                                for game in games.iter() {
                                    GameCard {
                                        key: "{game.appid}",
                                        appid: game.appid,
                                        name: game.name.clone(),
                                        subtitle: game.developers.join(", "),
                                        badge: format!("{} 👍", game.positive),
                                    }
                                }
                            }
                        },
                        Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
                        _ => rsx! { Loading {} },
                    }
                }

                div {
                    class: "grid grid-cols-1 lg:grid-cols-2 gap-8",
                    section {
                        h2 { class: "text-xl font-bold mb-3", "Best value" }
                        match &*value.read() {
                            Cache::Fetched(games) => rsx! {
                                ul {
                                    class: "flex flex-col gap-2",
                                    for game in games.iter() {
                                        li {
                                            key: "{game.appid}",
                                            class: "flex justify-between items-center bg-base-200 rounded-box px-3 py-2",
                                            Link { to: Route::GameDetail { appid: game.appid }, class: "link-hover", "{game.name}" }
                                            span {
                                                class: "text-sm opacity-80",
                                                "{format_price(game.price, None)} · score {game.value_score:.1}"
                                            }
                                        }
                                    }
                                }
                            },
                            Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
                            _ => rsx! { Loading {} },
                        }
                    }
                    section {
                        h2 { class: "text-xl font-bold mb-3", "Sentiment leaders" }
                        match &*sentiment.read() {
                            Cache::Fetched(games) => rsx! {
                                ul {
                                    class: "flex flex-col gap-2",
                                    for game in games.iter() {
                                        li {
                                            key: "{game.appid}",
                                            class: "flex justify-between items-center bg-base-200 rounded-box px-3 py-2",
                                            Link { to: Route::GameDetail { appid: game.appid }, class: "link-hover", "{game.name}" }
                                            span { class: "badge badge-success", "{game.positive_percent:.0}%" }
                                        }
                                    }
                                }
                            },
                            Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
                            _ => rsx! { Loading {} },
                        }
                    }
                }

                section {
                    h2 { class: "text-xl font-bold mb-3", "Recent reviews" }
                    match &*recent.read() {
                        Cache::Fetched(recent) if recent.reviews.is_empty() => rsx! {
                            p { class: "opacity-70", "No reviews yet." }
                        },
                        Cache::Fetched(recent) => rsx! {
                            div {
                                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                                for entry in recent.reviews.iter() {
                                    div {
                                        key: "{entry.review.id}",
                                        class: "card bg-base-200",
                                        div {
                                            class: "card-body p-4 gap-2",
                                            div {
                                                class: "flex justify-between items-center",
                                                Link {
                                                    to: Route::GameDetail { appid: entry.game_appid },
                                                    class: "font-semibold link-hover",
                                                    "{entry.game_name}"
                                                }
                                                span { class: "badge {rating_class(entry.review.rating)}", "{entry.review.rating}" }
                                            }
                                            p { class: "text-sm line-clamp-3", "{entry.review.comment}" }
                                            p { class: "text-xs opacity-60", "by {entry.review.username}" }
                                        }
                                    }
                                }
                            }
                        },
                        Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
                        _ => rsx! { Loading {} },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_game(appid: i64, price: f64) -> ValueGameDto {
        ValueGameDto {
            appid,
            name: format!("Game {}", appid),
            price,
            positive: 100,
            negative: 0,
            positive_ratio: 1.0,
            value_score: 10.0,
            developers: vec![],
        }
    }

    #[test]
    fn paid_games_come_first() {
        let ordered = paid_first(vec![
            value_game(1, 0.0),
            value_game(2, 4.99),
            value_game(3, 0.0),
            value_game(4, 9.99),
        ]);
        let ids: Vec<_> = ordered.iter().map(|g| g.appid).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }
}
