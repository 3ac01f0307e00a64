use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorAlert, Loading, Page, Pagination, PaginationData},
        constant::SITE_NAME,
        model::cache::Cache,
        router::Route,
    },
    model::{
        api::{PaginatedDto, DEFAULT_PAGE_SIZE},
        game::{
            display_review_score, format_price, GameFilterQuery, GameSort, GameSummaryDto,
            VALID_LANGUAGE_CODES,
        },
    },
};

#[cfg(feature = "web")]
use crate::client::api::game::{filter_games, get_games};

const SORT_COLUMNS: [(&str, &str); 6] = [
    ("name", "Name"),
    ("appid", "App ID"),
    ("price", "Price"),
    ("release_date", "Release date"),
    ("peak_ccu", "Peak players"),
    ("metacritic_score", "Metacritic"),
];

const SORT_MODES: [GameSort; 4] = [
    GameSort::Default,
    GameSort::TopRated,
    GameSort::Value,
    GameSort::Sentiment,
];

fn sort_mode_label(sort: GameSort) -> &'static str {
    match sort {
        GameSort::Default => "Catalog order",
        GameSort::TopRated => "Top rated",
        GameSort::Value => "Best value",
        GameSort::Sentiment => "Sentiment",
    }
}

/// Catalog listing state mirrored in the URL query.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct GamesQuery {
    pub name: String,
    pub genre: String,
    pub tag: String,
    pub developer: String,
    pub language: String,
    pub price_min: String,
    pub price_max: String,
    pub sort_by: String,
    pub order: String,
    pub sort: String,
    pub page: u64,
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl GamesQuery {
    fn has_filters(&self) -> bool {
        self.filter_query().has_criteria()
    }

    /// Filter endpoint query for the current page. Unparseable prices are ignored.
    fn filter_query(&self) -> GameFilterQuery {
        GameFilterQuery {
            name: non_blank(&self.name),
            genre: non_blank(&self.genre),
            tag: non_blank(&self.tag),
            developer: non_blank(&self.developer),
            language: non_blank(&self.language),
            price_min: self.price_min.trim().parse().ok(),
            price_max: self.price_max.trim().parse().ok(),
            sort_by: non_blank(&self.sort_by),
            order: non_blank(&self.order),
            pn: Some(self.page.max(1)),
            ps: Some(DEFAULT_PAGE_SIZE),
        }
    }

    fn with_page(&self, page: u64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    fn into_route(self) -> Route {
        Route::Games {
            name: self.name,
            genre: self.genre,
            tag: self.tag,
            developer: self.developer,
            language: self.language,
            price_min: self.price_min,
            price_max: self.price_max,
            sort_by: self.sort_by,
            order: self.order,
            sort: self.sort,
            page: self.page.max(1),
        }
    }
}

#[component]
pub fn Games(
    name: String,
    genre: String,
    tag: String,
    developer: String,
    language: String,
    price_min: String,
    price_max: String,
    sort_by: String,
    order: String,
    sort: String,
    page: u64,
) -> Element {
    let query = GamesQuery {
        name,
        genre,
        tag,
        developer,
        language,
        price_min,
        price_max,
        sort_by,
        order,
        sort,
        page: page.max(1),
    };
    let nav = navigator();
    let mut games = use_signal(Cache::<PaginatedDto<GameSummaryDto>>::default);

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|(query)| {
        games.set(Cache::Loading);
        spawn(async move {
            let result = if query.has_filters() {
                filter_games(&query.filter_query()).await
            } else {
                get_games(query.page, DEFAULT_PAGE_SIZE, GameSort::from_query(&query.sort)).await
            };

            // Out-of-range page numbers snap back to the nearest valid page
            if let Ok(list) = &result {
                let clamped = list.pagination.clamp_page(query.page);
                if clamped != query.page {
                    nav.replace(query.with_page(clamped).into_route());
                    return;
                }
            }
            games.set(result.into());
        });
    }));

    let current_sort = GameSort::from_query(&query.sort);
    let form_key = format!("{:?}", query.with_page(1));
    let page_query = query.clone();
    let sort_query = query.clone();

    rsx! {
        Title { "Games | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                div {
                    class: "flex flex-wrap justify-between items-center gap-4",
                    h1 { class: "text-2xl font-bold", "Games" }
                    if !query.has_filters() {
                        select {
                            class: "select select-bordered select-sm",
                            value: "{current_sort.as_str()}",
                            onchange: move |evt| {
                                let next = GamesQuery {
                                    sort: evt.value(),
                                    page: 1,
                                    ..sort_query.clone()
                                };
                                nav.push(next.into_route());
                            },
                            for mode in SORT_MODES {
                                option {
                                    value: "{mode.as_str()}",
                                    selected: mode == current_sort,
                                    "{sort_mode_label(mode)}"
                                }
                            }
                        }
                    }
                }

                FilterForm {
                    key: "{form_key}",
                    initial: query.clone(),
                    on_apply: move |next: GamesQuery| {
                        nav.push(next.into_route());
                    },
                }

                match &*games.read() {
                    Cache::Fetched(list) if list.data.is_empty() => rsx! {
                        p { class: "opacity-70 text-center py-8", "No games match these filters." }
                    },
                    Cache::Fetched(list) => rsx! {
                        GameTable { games: list.data.clone() }
                        Pagination {
                            data: PaginationData::from(&list.pagination),
                            on_page_change: move |p: u64| {
                                nav.push(page_query.with_page(p).into_route());
                            },
                        }
                    },
                    Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
                    _ => rsx! { Loading {} },
                }
            }
        }
    }
}

#[component]
fn FilterForm(initial: GamesQuery, on_apply: EventHandler<GamesQuery>) -> Element {
    let mut name = use_signal(|| initial.name.clone());
    let mut genre = use_signal(|| initial.genre.clone());
    let mut tag = use_signal(|| initial.tag.clone());
    let mut developer = use_signal(|| initial.developer.clone());
    let mut language = use_signal(|| initial.language.clone());
    let mut price_min = use_signal(|| initial.price_min.clone());
    let mut price_max = use_signal(|| initial.price_max.clone());
    let mut sort_by = use_signal(|| initial.sort_by.clone());
    let mut order = use_signal(|| initial.order.clone());

    let sort = initial.sort.clone();

    rsx! {
        form {
            class: "grid grid-cols-2 md:grid-cols-4 gap-3 bg-base-200 rounded-box p-4",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_apply.call(GamesQuery {
                    name: name(),
                    genre: genre(),
                    tag: tag(),
                    developer: developer(),
                    language: language(),
                    price_min: price_min(),
                    price_max: price_max(),
                    sort_by: sort_by(),
                    order: order(),
                    sort: sort.clone(),
                    page: 1,
                });
            },
            input {
                class: "input input-bordered input-sm",
                placeholder: "Name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                class: "input input-bordered input-sm",
                placeholder: "Genre",
                value: "{genre}",
                oninput: move |evt| genre.set(evt.value()),
            }
            input {
                class: "input input-bordered input-sm",
                placeholder: "Tag",
                value: "{tag}",
                oninput: move |evt| tag.set(evt.value()),
            }
            input {
                class: "input input-bordered input-sm",
                placeholder: "Developer",
                value: "{developer}",
                oninput: move |evt| developer.set(evt.value()),
            }
            select {
                class: "select select-bordered select-sm",
                value: "{language}",
                onchange: move |evt| language.set(evt.value()),
                option { value: "", "Any language" }
                for code in VALID_LANGUAGE_CODES {
                    option { value: "{code}", selected: language() == code, "{code}" }
                }
            }
            div {
                class: "flex gap-2",
                input {
                    r#type: "number",
                    step: "0.01",
                    min: "0",
                    class: "input input-bordered input-sm w-full",
                    placeholder: "Min £",
                    value: "{price_min}",
                    oninput: move |evt| price_min.set(evt.value()),
                }
                input {
                    r#type: "number",
                    step: "0.01",
                    min: "0",
                    class: "input input-bordered input-sm w-full",
                    placeholder: "Max £",
                    value: "{price_max}",
                    oninput: move |evt| price_max.set(evt.value()),
                }
            }
            select {
                class: "select select-bordered select-sm",
                value: "{sort_by}",
                onchange: move |evt| sort_by.set(evt.value()),
                option { value: "", "Sort by" }
                for (value, label) in SORT_COLUMNS {
                    option { value: "{value}", selected: sort_by() == value, "{label}" }
                }
            }
            div {
                class: "flex gap-2",
                select {
                    class: "select select-bordered select-sm w-full",
                    value: "{order}",
                    onchange: move |evt| order.set(evt.value()),
                    option { value: "asc", selected: order() != "desc", "Ascending" }
                    option { value: "desc", selected: order() == "desc", "Descending" }
                }
                button { r#type: "submit", class: "btn btn-primary btn-sm", "Apply" }
                button {
                    r#type: "button",
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_apply.call(GamesQuery { page: 1, ..GamesQuery::default() }),
                    "Reset"
                }
            }
        }
    }
}

#[component]
fn GameTable(games: Vec<GameSummaryDto>) -> Element {
    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Name" }
                        th { "Developers" }
                        th { "Price" }
                        th { "Reviews" }
                        th { "Score" }
                    }
                }
                tbody {
                    for game in games.iter() {
                        tr {
                            key: "{game.appid}",
                            td {
                                Link {
                                    to: Route::GameDetail { appid: game.appid },
                                    class: "link link-hover font-medium",
                                    "{game.name}"
                                }
                            }
                            td { class: "text-sm opacity-80", {game.developers.join(", ")} }
                            td { "{format_price(game.price, None)}" }
                            td { class: "text-sm", "{game.positive} / {game.negative}" }
                            td {
                                if let Some(score) = display_review_score(game) {
                                    span { class: "badge badge-outline", "{score:.0}%" }
                                } else {
                                    span { class: "opacity-50", "n/a" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_not_filters() {
        let query = GamesQuery {
            name: "  ".to_string(),
            sort: "value".to_string(),
            order: "desc".to_string(),
            page: 2,
            ..GamesQuery::default()
        };

        assert!(!query.has_filters());
        assert_eq!(query.filter_query().pn, Some(2));
    }

    #[test]
    fn parses_price_bounds_and_drops_garbage() {
        let query = GamesQuery {
            genre: " Action ".to_string(),
            price_min: "1.5".to_string(),
            price_max: "cheap".to_string(),
            ..GamesQuery::default()
        };
        let filter = query.filter_query();

        assert!(query.has_filters());
        assert_eq!(filter.genre.as_deref(), Some("Action"));
        assert_eq!(filter.price_min, Some(1.5));
        assert_eq!(filter.price_max, None);
        assert_eq!(filter.pn, Some(1));
    }
}
