use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            ConfirmationModal, ErrorAlert, Loading, Page, Pagination, PaginationData, StatCard,
        },
        constant::{ADMIN_REVIEWS_PER_PAGE, SITE_NAME},
        model::cache::Cache,
        route::admin::{AdminTab, AdminTabs},
        router::Route,
    },
    model::{
        action_log::ActionLogDto,
        api::{PaginatedDto, DEFAULT_PAGE_SIZE},
        dashboard::DashboardStatsDto,
        misc::MiscGameDto,
        review::{rating_class, AdminReviewsDto, RecentReviewDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    admin::{get_action_logs, get_admin_reviews},
    dashboard::get_dashboard_stats,
    misc::{clear_misc, get_misc_list},
    review::delete_review,
};

#[derive(Clone, Copy, PartialEq)]
enum DashboardSection {
    Reviews,
    AuditLog,
    Analytics,
}

#[component]
pub fn AdminDashboard() -> Element {
    let mut stats = use_signal(Cache::<DashboardStatsDto>::default);
    let mut active_section = use_signal(|| DashboardSection::Reviews);

    #[cfg(feature = "web")]
    use_effect(move || {
        spawn(async move {
            stats.set(get_dashboard_stats().await.into());
        });
    });

    let section_class = move |s: DashboardSection| {
        if active_section() == s {
            "btn btn-sm btn-primary"
        } else {
            "btn btn-sm btn-ghost"
        }
    };

    rsx! {
        Title { "Admin | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 { class: "text-lg sm:text-2xl mb-6", "Admin Panel" }

                AdminTabs { active_tab: AdminTab::Dashboard }

                match &*stats.read() {
                    Cache::Fetched(s) => rsx! {
                        div {
                            class: "stats stats-vertical md:stats-horizontal shadow w-full mb-6",
                            StatCard { title: "Games", value: s.total_games.to_string() }
                            StatCard {
                                title: "Reviews",
                                value: s.total_reviews.to_string(),
                                detail: format!("{} in the last hour", s.recent_hour_reviews),
                            }
                            StatCard { title: "Average price", value: format!("£{:.2}", s.average_price) }
                            if let Some(top) = &s.top_peak_game {
                                StatCard {
                                    title: "Most played",
                                    value: top.name.clone(),
                                    detail: format!("{} peak players", top.peak_ccu),
                                }
                            }
                        }
                    },
                    Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
                    _ => rsx! { Loading {} },
                }

                div {
                    class: "flex gap-2 mb-4",
                    button {
                        class: section_class(DashboardSection::Reviews),
                        onclick: move |_| active_section.set(DashboardSection::Reviews),
                        "Reviews"
                    }
                    button {
                        class: section_class(DashboardSection::AuditLog),
                        onclick: move |_| active_section.set(DashboardSection::AuditLog),
                        "Audit log"
                    }
                    button {
                        class: section_class(DashboardSection::Analytics),
                        onclick: move |_| active_section.set(DashboardSection::Analytics),
                        "Analytics"
                    }
                }

                match active_section() {
                    DashboardSection::Reviews => rsx! { ReviewModeration {} },
                    DashboardSection::AuditLog => rsx! { AuditLog {} },
                    DashboardSection::Analytics => rsx! { MiscAnalytics {} },
                }
            }
        }
    }
}

#[component]
fn ReviewModeration() -> Element {
    let mut reviews = use_signal(Cache::<AdminReviewsDto>::default);
    let mut page = use_signal(|| 1u64);
    let mut search = use_signal(String::new);
    let mut search_input = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    use_effect(move || {
        let current_page = page();
        let current_search = search();
        let _ = refetch_trigger();
        reviews.set(Cache::Loading);
        spawn(async move {
            reviews.set(
                get_admin_reviews(current_page, ADMIN_REVIEWS_PER_PAGE, &current_search)
                    .await
                    .into(),
            );
        });
    });

    rsx! {
        div {
            class: "flex flex-col gap-4",
            form {
                class: "flex gap-2",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    page.set(1);
                    search.set(search_input());
                },
                input {
                    class: "input input-bordered input-sm flex-1",
                    placeholder: "Search by username, comment or game",
                    value: "{search_input}",
                    oninput: move |evt| search_input.set(evt.value()),
                }
                button { r#type: "submit", class: "btn btn-sm btn-primary", "Search" }
            }
            match &*reviews.read() {
                Cache::Fetched(list) if list.reviews.is_empty() => rsx! {
                    p { class: "opacity-70", "No reviews found." }
                },
                Cache::Fetched(list) => rsx! {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "Game" }
                                    th { "User" }
                                    th { "Rating" }
                                    th { "Comment" }
                                    th { "Posted" }
                                    th {}
                                }
                            }
                            tbody {
                                for entry in list.reviews.iter() {
                                    ModeratedReviewRow {
                                        key: "{entry.review.id}",
                                        entry: entry.clone(),
                                        refetch_trigger,
                                    }
                                }
                            }
                        }
                    }
                    Pagination {
                        data: PaginationData::from(&list.pagination),
                        on_page_change: move |p: u64| page.set(p),
                    }
                },
                Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
                _ => rsx! { Loading {} },
            }
        }
    }
}

#[component]
fn ModeratedReviewRow(entry: RecentReviewDto, mut refetch_trigger: Signal<u32>) -> Element {
    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let appid = entry.game_appid;
    let review_id = entry.review.id;

    let on_delete = move |_| {
        deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = delete_review(appid, review_id).await;
            deleting.set(false);
            match result {
                Ok(_) => {
                    show_delete.set(false);
                    refetch_trigger += 1;
                }
                Err(e) => error.set(Some(e.message)),
            }
        });
    };

    let review = &entry.review;

    rsx! {
        tr {
            td {
                Link {
                    to: Route::GameDetail { appid },
                    class: "link link-hover",
                    "{entry.game_name}"
                }
            }
            td { "{review.username}" }
            td { span { class: "badge {rating_class(review.rating)}", "{review.rating}" } }
            td { class: "max-w-xs truncate", "{review.comment}" }
            td { class: "text-sm opacity-70", {review.created_at.format("%Y-%m-%d %H:%M").to_string()} }
            td {
                button {
                    class: "btn btn-xs btn-error",
                    onclick: move |_| show_delete.set(true),
                    "Delete"
                }
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete review".to_string(),
            message: format!("Delete the review by {} on {}?", review.username, entry.game_name),
            confirm_text: "Delete".to_string(),
            is_processing: deleting(),
            error: error(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn AuditLog() -> Element {
    let mut logs = use_signal(Cache::<PaginatedDto<ActionLogDto>>::default);
    let mut page = use_signal(|| 1u64);

    #[cfg(feature = "web")]
    use_effect(move || {
        let current_page = page();
        logs.set(Cache::Loading);
        spawn(async move {
            logs.set(get_action_logs(current_page, DEFAULT_PAGE_SIZE).await.into());
        });
    });

    rsx! {
        match &*logs.read() {
            Cache::Fetched(list) if list.data.is_empty() => rsx! {
                p { class: "opacity-70", "Nothing has been logged yet." }
            },
            Cache::Fetched(list) => rsx! {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-sm w-full",
                        thead {
                            tr {
                                th { "When" }
                                th { "User" }
                                th { "Action" }
                                th { "Target" }
                                th { "Status" }
                                th { "IP" }
                            }
                        }
                        tbody {
                            for log in list.data.iter() {
                                tr {
                                    key: "{log.id}",
                                    td { class: "whitespace-nowrap", {log.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()} }
                                    td { "{log.username} ({log.role})" }
                                    td { "{log.action}" }
                                    td { "{log.collection} {log.target_id}" }
                                    td {
                                        span {
                                            class: if log.status == "success" { "badge badge-success" } else { "badge badge-error" },
                                            "{log.status}"
                                        }
                                    }
                                    td { class: "text-xs opacity-70", {log.ip.clone().unwrap_or_default()} }
                                }
                            }
                        }
                    }
                }
                Pagination {
                    data: PaginationData::from(&list.pagination),
                    on_page_change: move |p: u64| page.set(p),
                }
            },
            Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
            _ => rsx! { Loading {} },
        }
    }
}

#[component]
fn MiscAnalytics() -> Element {
    let mut entries = use_signal(Cache::<PaginatedDto<MiscGameDto>>::default);
    let mut page = use_signal(|| 1u64);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut clearing = use_signal(|| None::<MiscGameDto>);
    let mut show_clear = use_signal(|| false);
    let mut processing = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    use_effect(move || {
        let current_page = page();
        let _ = refetch_trigger();
        spawn(async move {
            entries.set(get_misc_list(current_page, DEFAULT_PAGE_SIZE).await.into());
        });
    });

    let on_clear = move |_| {
        let Some(target) = clearing() else {
            return;
        };
        processing.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = clear_misc(target.appid).await;
            processing.set(false);
            match result {
                Ok(_) => {
                    show_clear.set(false);
                    error.set(None);
                    refetch_trigger += 1;
                }
                Err(e) => error.set(Some(e.message)),
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = target;
    };

    let clear_message = clearing()
        .map(|m| format!("Clear genres, tags, languages and peak players for {}?", m.name))
        .unwrap_or_default();

    rsx! {
        match &*entries.read() {
            Cache::Fetched(list) => rsx! {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Game" }
                                th { "Genres" }
                                th { "Tags" }
                                th { "Languages" }
                                th { "Peak players" }
                                th {}
                            }
                        }
                        tbody {
                            for entry in list.data.iter() {
                                tr {
                                    key: "{entry.appid}",
                                    td { "{entry.name}" }
                                    td { class: "text-sm", {entry.details.genres.join(", ")} }
                                    td { class: "text-sm max-w-xs truncate", {entry.details.tags.join(", ")} }
                                    td { class: "text-sm", {entry.details.supported_languages.join(", ")} }
                                    td { "{entry.stats.peak_ccu}" }
                                    td {
                                        button {
                                            class: "btn btn-xs btn-warning",
                                            onclick: {
                                                let entry = entry.clone();
                                                move |_| {
                                                    clearing.set(Some(entry.clone()));
                                                    error.set(None);
                                                    show_clear.set(true);
                                                }
                                            },
                                            "Clear"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Pagination {
                    data: PaginationData::from(&list.pagination),
                    on_page_change: move |p: u64| page.set(p),
                }
            },
            Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
            _ => rsx! { Loading {} },
        }
        ConfirmationModal {
            show: show_clear,
            title: "Clear analytics".to_string(),
            message: clear_message,
            confirm_text: "Clear".to_string(),
            is_processing: processing(),
            error: error(),
            on_confirm: on_clear,
        }
    }
}
