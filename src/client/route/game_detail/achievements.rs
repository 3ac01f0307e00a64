use dioxus::prelude::*;

use crate::{
    client::{
        component::{Loading, Pagination, PaginationData},
        constant::ACHIEVEMENTS_PER_PAGE,
        model::cache::Cache,
    },
    model::{
        api::PaginationDto,
        steam::{achievement_icon_url, rarity_class, AchievementDto, AchievementSort},
    },
};

#[cfg(feature = "web")]
use crate::client::api::steam::get_merged_achievements;

#[component]
pub fn AchievementsSection(appid: i64) -> Element {
    let mut achievements = use_signal(Cache::<Vec<AchievementDto>>::default);
    let mut sort = use_signal(AchievementSort::default);
    let mut page = use_signal(|| 1u64);

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|(appid)| {
        achievements.set(Cache::Loading);
        spawn(async move {
            achievements.set(get_merged_achievements(appid).await.into());
        });
    }));

    let state = achievements.read();
    let list = match &*state {
        Cache::Fetched(list) if list.is_empty() => return rsx! {},
        Cache::Fetched(list) => list.clone(),
        // Missing API key or a game without achievements
        Cache::Error(_) => return rsx! {},
        _ => return rsx! { Loading {} },
    };
    drop(state);

    let mut sorted = list;
    sort().apply(&mut sorted);

    let total = sorted.len() as u64;
    let per_page = ACHIEVEMENTS_PER_PAGE as u64;
    let pagination = PaginationData {
        page: page(),
        per_page,
        total,
        total_pages: PaginationDto::page_count(total, per_page).max(1),
    };
    let current = pagination.clamp(page());
    let visible: Vec<AchievementDto> = sorted
        .into_iter()
        .skip(((current - 1) * per_page) as usize)
        .take(ACHIEVEMENTS_PER_PAGE)
        .collect();

    rsx! {
        section {
            div {
                class: "flex justify-between items-center mb-3",
                h2 { class: "text-xl font-bold", "Achievements ({total})" }
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |evt| {
                        sort.set(if evt.value() == "name" { AchievementSort::Name } else { AchievementSort::Rarity });
                        page.set(1);
                    },
                    option { value: "rarity", selected: sort() == AchievementSort::Rarity, "Rarest first" }
                    option { value: "name", selected: sort() == AchievementSort::Name, "Name" }
                }
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-2",
                for achievement in visible {
                    div {
                        key: "{achievement.name}",
                        class: "flex items-center gap-3 bg-base-200 rounded-box p-2",
                        if let Some(icon) = &achievement.icon {
                            img {
                                src: "{achievement_icon_url(appid, icon)}",
                                class: "w-12 h-12 rounded",
                                loading: "lazy",
                            }
                        }
                        div {
                            class: "flex-1",
                            p { class: "font-semibold", "{achievement.display_name}" }
                            if let Some(description) = &achievement.description {
                                p { class: "text-sm opacity-70", "{description}" }
                            }
                        }
                        if let Some(percent) = achievement.percent {
                            span { class: "badge {rarity_class(percent)}", "{percent:.1}%" }
                        }
                    }
                }
            }
            Pagination {
                data: PaginationData { page: current, ..pagination },
                on_page_change: move |p: u64| page.set(p),
            }
        }
    }
}
