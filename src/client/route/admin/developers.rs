use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            ConfirmationModal, ErrorAlert, Loading, Modal, Page, Pagination, PaginationData,
        },
        constant::{DEVELOPERS_PER_PAGE, SITE_NAME},
        model::cache::Cache,
        route::admin::{AdminTab, AdminTabs},
        router::Route,
    },
    model::{
        api::PaginationDto,
        developer::{search_developers, DeveloperDto},
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::developer::{delete_developer, get_developers, rename_developer},
    model::developer::{DeleteDeveloperDto, RenameDeveloperDto},
};

#[component]
pub fn DeveloperManagement() -> Element {
    let mut developers = use_signal(Cache::<Vec<DeveloperDto>>::default);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1u64);

    let mut selected = use_signal(|| None::<String>);
    let mut show_rename = use_signal(|| false);
    let mut show_delete = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    use_effect(move || {
        let _ = refetch_trigger();
        spawn(async move {
            developers.set(get_developers().await.into());
        });
    });

    let on_delete = move |_| {
        let Some(name) = selected() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = delete_developer(&DeleteDeveloperDto { name }).await;
            is_deleting.set(false);
            match result {
                Ok(_) => {
                    show_delete.set(false);
                    delete_error.set(None);
                    refetch_trigger += 1;
                }
                Err(e) => delete_error.set(Some(e.message)),
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = name;
    };

    let delete_message = selected()
        .map(|name| format!("Remove {} from every game that lists it?", name))
        .unwrap_or_default();

    rsx! {
        Title { "Admin - Developers | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 { class: "text-lg sm:text-2xl mb-6", "Admin Panel" }

                AdminTabs { active_tab: AdminTab::Developers }

                div {
                    class: "flex items-center justify-between gap-4 mb-6",
                    h2 { class: "text-lg font-semibold", "Manage Developers" }
                    input {
                        class: "input input-bordered input-sm w-64",
                        placeholder: "Search developers",
                        value: "{search}",
                        oninput: move |evt| {
                            search.set(evt.value());
                            page.set(1);
                        },
                    }
                }

                match &*developers.read() {
                    Cache::Fetched(all) => {
                        let matches = search_developers(all, &search());
                        let total = matches.len() as u64;
                        let per_page = DEVELOPERS_PER_PAGE as u64;
                        let pagination = PaginationData {
                            page: page(),
                            per_page,
                            total,
                            total_pages: PaginationDto::page_count(total, per_page).max(1),
                        };
                        let current = pagination.clamp(page());
                        let visible: Vec<DeveloperDto> = matches
                            .into_iter()
                            .skip(((current - 1) * per_page) as usize)
                            .take(DEVELOPERS_PER_PAGE)
                            .cloned()
                            .collect();

                        rsx! {
                            if visible.is_empty() {
                                p { class: "opacity-70", "No developers found." }
                            }
                            div {
                                class: "flex flex-col gap-2",
                                for developer in visible {
                                    div {
                                        key: "{developer.name}",
                                        class: "card bg-base-200",
                                        div {
                                            class: "card-body p-4 flex-row justify-between items-center gap-4",
                                            div {
                                                class: "flex-1",
                                                p { class: "font-semibold", "{developer.name}" }
                                                div {
                                                    class: "flex flex-wrap gap-1 mt-1",
                                                    for game in developer.games.iter() {
                                                        Link {
                                                            key: "{game.appid}",
                                                            to: Route::GameDetail { appid: game.appid },
                                                            class: "badge badge-outline hover:badge-primary",
                                                            "{game.name}"
                                                        }
                                                    }
                                                }
                                            }
                                            div {
                                                class: "flex gap-1",
                                                button {
                                                    class: "btn btn-xs",
                                                    onclick: {
                                                        let name = developer.name.clone();
                                                        move |_| {
                                                            selected.set(Some(name.clone()));
                                                            show_rename.set(true);
                                                        }
                                                    },
                                                    "Rename"
                                                }
                                                button {
                                                    class: "btn btn-xs btn-error",
                                                    onclick: {
                                                        let name = developer.name.clone();
                                                        move |_| {
                                                            selected.set(Some(name.clone()));
                                                            delete_error.set(None);
                                                            show_delete.set(true);
                                                        }
                                                    },
                                                    "Delete"
                                                }
                                            }
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
                    Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
                    _ => rsx! { Loading {} },
                }
            }
        }

        if show_rename() {
            if let Some(name) = selected() {
                RenameModal {
                    show: show_rename,
                    old_name: name,
                    on_renamed: move |_| {
                        show_rename.set(false);
                        refetch_trigger += 1;
                    },
                }
            }
        }

        ConfirmationModal {
            show: show_delete,
            title: "Delete developer".to_string(),
            message: delete_message,
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            error: delete_error(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn RenameModal(show: Signal<bool>, old_name: String, on_renamed: EventHandler<()>) -> Element {
    let mut new_name = use_signal(|| old_name.clone());
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let on_submit = {
        let old_name = old_name.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let target = new_name().trim().to_string();
            if target.is_empty() {
                error.set(Some("New name is required".to_string()));
                return;
            }
            if target == old_name.trim() {
                error.set(Some("New name is the same as the current one".to_string()));
                return;
            }
            saving.set(true);

            #[cfg(feature = "web")]
            {
                let payload = RenameDeveloperDto {
                    old_name: old_name.clone(),
                    new_name: target,
                };
                spawn(async move {
                    let result = rename_developer(&payload).await;
                    saving.set(false);
                    match result {
                        Ok(_) => on_renamed.call(()),
                        Err(e) => error.set(Some(e.message)),
                    }
                });
            }
        }
    };

    rsx! {
        Modal {
            show,
            title: format!("Rename {}", old_name),
            prevent_close: saving(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                input {
                    class: "input input-bordered",
                    value: "{new_name}",
                    oninput: move |evt| new_name.set(evt.value()),
                }
                p { class: "text-sm opacity-70", "Every game listing this developer is updated." }
                if let Some(message) = error() {
                    ErrorAlert { message }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: saving(),
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving(),
                        "Rename"
                    }
                }
            }
        }
    }
}
