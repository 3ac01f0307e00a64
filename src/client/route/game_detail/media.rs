use dioxus::prelude::*;

use crate::{
    client::{
        component::{Loading, Modal},
        model::cache::Cache,
    },
    model::steam::{ScreenshotDto, TrailerDto},
};

#[cfg(feature = "web")]
use crate::client::api::steam::{get_screenshots, get_trailers};

/// Screenshots and trailers from the storefront.
///
/// When the storefront has no screenshots the catalog's own URLs are shown.
#[component]
pub fn MediaGallery(appid: i64, fallback_screenshots: Vec<String>) -> Element {
    let mut screenshots = use_signal(Cache::<Vec<ScreenshotDto>>::default);
    let mut trailers = use_signal(Cache::<Vec<TrailerDto>>::default);
    let mut show_viewer = use_signal(|| false);
    let mut viewing = use_signal(String::new);

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|(appid)| {
        screenshots.set(Cache::Loading);
        spawn(async move {
            screenshots.set(get_screenshots(appid).await.into());
        });
        spawn(async move {
            trailers.set(get_trailers(appid).await.into());
        });
    }));

    let images: Vec<(String, String)> = match &*screenshots.read() {
        Cache::Fetched(shots) if !shots.is_empty() => shots
            .iter()
            .map(|s| (s.path_thumbnail.clone(), s.path_full.clone()))
            .collect(),
        Cache::Loading | Cache::NotFetched => Vec::new(),
        _ => fallback_screenshots
            .iter()
            .map(|url| (url.clone(), url.clone()))
            .collect(),
    };
    let loading = screenshots.read().is_loading();

    rsx! {
        section {
            h2 { class: "text-xl font-bold mb-3", "Media" }
            if loading {
                Loading {}
            } else if images.is_empty() {
                p { class: "opacity-70", "No screenshots available." }
            } else {
                div {
                    class: "grid grid-cols-2 md:grid-cols-4 gap-2",
                    for (thumbnail, full) in images {
                        button {
                            key: "{thumbnail}",
                            class: "rounded-box overflow-hidden hover:opacity-80",
                            onclick: move |_| {
                                viewing.set(full.clone());
                                show_viewer.set(true);
                            },
                            img { src: "{thumbnail}", class: "w-full", loading: "lazy" }
                        }
                    }
                }
            }

            if let Cache::Fetched(list) = &*trailers.read() {
                if !list.is_empty() {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4 mt-4",
                        for trailer in list.iter() {
                            div {
                                key: "{trailer.id}",
                                class: "flex flex-col gap-1",
                                video {
                                    class: "w-full rounded-box",
                                    controls: true,
                                    preload: "none",
                                    poster: "{trailer.thumbnail}",
                                    if let Some(mp4) = &trailer.mp4 {
                                        source { src: "{mp4}", r#type: "video/mp4" }
                                    }
                                    if let Some(webm) = &trailer.webm {
                                        source { src: "{webm}", r#type: "video/webm" }
                                    }
                                }
                                p { class: "text-sm opacity-70", "{trailer.name}" }
                            }
                        }
                    }
                }
            }
        }

        Modal {
            show: show_viewer,
            title: "Screenshot".to_string(),
            prevent_close: false,
            wide: true,
            img { src: "{viewing}", class: "w-full" }
        }
    }
}
