use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            ConfirmationModal, ErrorAlert, Loading, Modal, Page, Pagination, PaginationData,
        },
        constant::SITE_NAME,
        model::cache::Cache,
        route::admin::{AdminTab, AdminTabs},
        router::Route,
    },
    model::{
        api::{PaginatedDto, DEFAULT_PAGE_SIZE},
        game::{
            format_price, join_list, split_list, CreateGameDto, GameDetailDto, GameSummaryDto,
            UpdateGameDto,
        },
    },
};

#[cfg(feature = "web")]
use crate::{
    client::api::game::{create_game, delete_game, get_game, get_games, update_game},
    model::game::GameSort,
};

/// Text state of the create/edit form.
#[derive(Clone, PartialEq, Default, Debug)]
struct GameForm {
    appid: String,
    name: String,
    release_date: String,
    price: String,
    short_description: String,
    developers: String,
    publishers: String,
    genres: String,
    tags: String,
    supported_languages: String,
    peak_ccu: String,
    positive: String,
    negative: String,
    metacritic_score: String,
}

fn parse_field<T: std::str::FromStr>(label: &str, value: &str) -> Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{} is not a valid number", label))
}

fn parse_optional<T: std::str::FromStr>(label: &str, value: &str) -> Result<Option<T>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_field(label, value).map(Some)
}

/// `Some(new)` when the value differs from the current one.
fn changed<T: PartialEq>(current: &T, new: T) -> Option<T> {
    (current != &new).then_some(new)
}

impl GameForm {
    fn from_detail(game: &GameDetailDto) -> Self {
        Self {
            appid: game.appid.to_string(),
            name: game.name.clone(),
            release_date: game.release_date.clone(),
            price: format!("{:.2}", game.price),
            short_description: game.short_description.clone().unwrap_or_default(),
            developers: join_list(&game.developers),
            publishers: join_list(&game.publishers),
            genres: join_list(&game.genres),
            tags: join_list(&game.tags),
            supported_languages: join_list(&game.supported_languages),
            peak_ccu: game.peak_ccu.to_string(),
            positive: game.positive.to_string(),
            negative: game.negative.to_string(),
            metacritic_score: game.metacritic_score.to_string(),
        }
    }

    fn to_create(&self) -> Result<CreateGameDto, String> {
        if self.name.trim().is_empty() || self.release_date.trim().is_empty() {
            return Err("Name and release date are required".to_string());
        }
        let description = self.short_description.trim();

        Ok(CreateGameDto {
            appid: parse_field("App ID", &self.appid)?,
            name: self.name.trim().to_string(),
            release_date: self.release_date.trim().to_string(),
            price: parse_field("Price", &self.price)?,
            short_description: (!description.is_empty()).then(|| description.to_string()),
            developers: split_list(&self.developers),
            publishers: split_list(&self.publishers),
            genres: split_list(&self.genres),
            tags: split_list(&self.tags),
            supported_languages: split_list(&self.supported_languages),
            peak_ccu: parse_optional("Peak players", &self.peak_ccu)?,
        })
    }

    /// Only fields that differ from `current` are sent.
    fn to_update(&self, current: &GameDetailDto) -> Result<UpdateGameDto, String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        let description = self.short_description.trim().to_string();

        Ok(UpdateGameDto {
            name: changed(&current.name, self.name.trim().to_string()),
            release_date: changed(&current.release_date, self.release_date.trim().to_string()),
            price: changed(&current.price, parse_field("Price", &self.price)?),
            short_description: changed(
                &current.short_description.clone().unwrap_or_default(),
                description,
            ),
            developers: changed(&current.developers, split_list(&self.developers)),
            publishers: changed(&current.publishers, split_list(&self.publishers)),
            genres: changed(&current.genres, split_list(&self.genres)),
            tags: changed(&current.tags, split_list(&self.tags)),
            supported_languages: changed(
                &current.supported_languages,
                split_list(&self.supported_languages),
            ),
            peak_ccu: changed(&current.peak_ccu, parse_field("Peak players", &self.peak_ccu)?),
            positive: changed(&current.positive, parse_field("Positive reviews", &self.positive)?),
            negative: changed(&current.negative, parse_field("Negative reviews", &self.negative)?),
            metacritic_score: changed(
                &current.metacritic_score,
                parse_field("Metacritic score", &self.metacritic_score)?,
            ),
        })
    }
}

#[component]
pub fn GameManagement() -> Element {
    let mut games = use_signal(Cache::<PaginatedDto<GameSummaryDto>>::default);
    let mut page = use_signal(|| 1u64);
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<GameDetailDto>);

    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| None::<GameSummaryDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);
    let mut load_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    use_effect(move || {
        let current_page = page();
        let _ = refetch_trigger();
        spawn(async move {
            games.set(
                get_games(current_page, DEFAULT_PAGE_SIZE, GameSort::Default)
                    .await
                    .into(),
            );
        });
    });

    let mut open_edit = move |appid: i64| {
        load_error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            match get_game(appid).await {
                Ok(detail) => {
                    editing.set(Some(detail));
                    show_form.set(true);
                }
                Err(e) => load_error.set(Some(e.message)),
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = appid;
    };

    let on_delete = move |_| {
        let Some(target) = deleting() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = delete_game(target.appid).await;
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
        let _ = target;
    };

    let delete_message = deleting()
        .map(|g| format!("Delete {} and all of its reviews? This cannot be undone.", g.name))
        .unwrap_or_default();

    rsx! {
        Title { "Admin - Games | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 { class: "text-lg sm:text-2xl mb-6", "Admin Panel" }

                AdminTabs { active_tab: AdminTab::Games }

                div {
                    class: "flex items-center justify-between gap-4 mb-6",
                    h2 { class: "text-lg font-semibold", "Manage Games" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                        "Add Game"
                    }
                }

                if let Some(message) = load_error() {
                    ErrorAlert { message }
                }

                match &*games.read() {
                    Cache::Fetched(list) => rsx! {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "App ID" }
                                        th { "Name" }
                                        th { "Price" }
                                        th { "Developers" }
                                        th {}
                                    }
                                }
                                tbody {
                                    for game in list.data.iter() {
                                        tr {
                                            key: "{game.appid}",
                                            td { "{game.appid}" }
                                            td {
                                                Link {
                                                    to: Route::GameDetail { appid: game.appid },
                                                    class: "link link-hover",
                                                    "{game.name}"
                                                }
                                            }
                                            td { "{format_price(game.price, None)}" }
                                            td { class: "text-sm", {game.developers.join(", ")} }
                                            td {
                                                class: "flex gap-1 justify-end",
                                                button {
                                                    class: "btn btn-xs",
                                                    onclick: {
                                                        let appid = game.appid;
                                                        move |_| open_edit(appid)
                                                    },
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-xs btn-error",
                                                    onclick: {
                                                        let game = game.clone();
                                                        move |_| {
                                                            deleting.set(Some(game.clone()));
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

        if show_form() {
            GameFormModal {
                show: show_form,
                editing: editing(),
                on_saved: move |_| {
                    show_form.set(false);
                    refetch_trigger += 1;
                },
            }
        }

        ConfirmationModal {
            show: show_delete,
            title: "Delete game".to_string(),
            message: delete_message,
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            error: delete_error(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn GameFormModal(
    show: Signal<bool>,
    editing: Option<GameDetailDto>,
    on_saved: EventHandler<()>,
) -> Element {
    let initial = editing
        .as_ref()
        .map(GameForm::from_detail)
        .unwrap_or_default();
    let mut form = use_signal(|| initial);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let is_edit = editing.is_some();
    let title = match &editing {
        Some(game) => format!("Edit {}", game.name),
        None => "Add Game".to_string(),
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = editing.clone();

        #[cfg(feature = "web")]
        {
            let result = match &current {
                Some(game) => form.read().to_update(game).map(|dto| (game.appid, Some(dto), None)),
                None => form.read().to_create().map(|dto| (dto.appid, None, Some(dto))),
            };
            let (appid, update, create) = match result {
                Ok(parts) => parts,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            if update.as_ref().is_some_and(|dto| dto.is_empty()) {
                error.set(Some("Nothing has changed".to_string()));
                return;
            }

            saving.set(true);
            spawn(async move {
                let result = match (update, create) {
                    (Some(dto), _) => update_game(appid, &dto).await.map(|_| ()),
                    (_, Some(dto)) => create_game(&dto).await.map(|_| ()),
                    _ => Ok(()),
                };
                saving.set(false);
                match result {
                    Ok(()) => on_saved.call(()),
                    Err(e) => error.set(Some(e.message)),
                }
            });
        }

        #[cfg(not(feature = "web"))]
        let _ = current;
    };

    rsx! {
        Modal {
            show,
            title,
            prevent_close: saving(),
            wide: true,
            form {
                class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                onsubmit: on_submit,
                FormField {
                    label: "App ID",
                    value: form.read().appid.clone(),
                    disabled: is_edit,
                    on_input: move |v| form.write().appid = v,
                }
                FormField {
                    label: "Name",
                    value: form.read().name.clone(),
                    on_input: move |v| form.write().name = v,
                }
                FormField {
                    label: "Release date",
                    value: form.read().release_date.clone(),
                    on_input: move |v| form.write().release_date = v,
                }
                FormField {
                    label: "Price (£)",
                    value: form.read().price.clone(),
                    on_input: move |v| form.write().price = v,
                }
                FormField {
                    label: "Developers (comma separated)",
                    value: form.read().developers.clone(),
                    on_input: move |v| form.write().developers = v,
                }
                FormField {
                    label: "Publishers (comma separated)",
                    value: form.read().publishers.clone(),
                    on_input: move |v| form.write().publishers = v,
                }
                FormField {
                    label: "Genres (comma separated)",
                    value: form.read().genres.clone(),
                    on_input: move |v| form.write().genres = v,
                }
                FormField {
                    label: "Tags (comma separated)",
                    value: form.read().tags.clone(),
                    on_input: move |v| form.write().tags = v,
                }
                FormField {
                    label: "Languages (comma separated)",
                    value: form.read().supported_languages.clone(),
                    on_input: move |v| form.write().supported_languages = v,
                }
                FormField {
                    label: "Peak players",
                    value: form.read().peak_ccu.clone(),
                    on_input: move |v| form.write().peak_ccu = v,
                }
                if is_edit {
                    FormField {
                        label: "Positive reviews",
                        value: form.read().positive.clone(),
                        on_input: move |v| form.write().positive = v,
                    }
                    FormField {
                        label: "Negative reviews",
                        value: form.read().negative.clone(),
                        on_input: move |v| form.write().negative = v,
                    }
                    FormField {
                        label: "Metacritic score",
                        value: form.read().metacritic_score.clone(),
                        on_input: move |v| form.write().metacritic_score = v,
                    }
                }
                label {
                    class: "form-control md:col-span-2",
                    span { class: "label-text", "Short description" }
                    textarea {
                        class: "textarea textarea-bordered",
                        value: "{form.read().short_description}",
                        oninput: move |evt| form.write().short_description = evt.value(),
                    }
                }
                if let Some(message) = error() {
                    div { class: "md:col-span-2", ErrorAlert { message } }
                }
                div {
                    class: "modal-action md:col-span-2",
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
                        if saving() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Save"
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(
    label: String,
    value: String,
    #[props(default = false)] disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "form-control",
            span { class: "label-text", "{label}" }
            input {
                class: "input input-bordered input-sm",
                value: "{value}",
                disabled,
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> GameForm {
        GameForm {
            appid: "730".to_string(),
            name: " Counter-Strike 2 ".to_string(),
            release_date: "Aug 21, 2012".to_string(),
            price: "0".to_string(),
            developers: "Valve, Hidden Path Entertainment".to_string(),
            ..GameForm::default()
        }
    }

    #[test]
    fn create_payload_splits_lists_and_trims() {
        let dto = form().to_create().unwrap();

        assert_eq!(dto.appid, 730);
        assert_eq!(dto.name, "Counter-Strike 2");
        assert_eq!(dto.developers, vec!["Valve", "Hidden Path Entertainment"]);
        assert_eq!(dto.short_description, None);
        assert_eq!(dto.peak_ccu, None);
    }

    #[test]
    fn create_rejects_bad_numbers() {
        let bad = GameForm {
            price: "free".to_string(),
            ..form()
        };

        assert_eq!(bad.to_create().unwrap_err(), "Price is not a valid number");
    }

    #[test]
    fn update_only_sends_changed_fields() {
        let current: GameDetailDto = serde_json::from_value(serde_json::json!({
            "appid": 730,
            "name": "Counter-Strike 2",
            "release_date": "Aug 21, 2012",
            "price": 0.0,
            "developers": ["Valve", "Hidden Path Entertainment"],
            "publishers": ["Valve"],
            "genres": ["Action"],
            "tags": [],
            "supported_languages": ["English"],
            "screenshots": [],
            "movies": [],
            "positive": 100,
            "negative": 5,
            "metacritic_score": 83,
            "peak_ccu": 1000,
            "playtime": {
                "average_forever": 0,
                "median_forever": 0,
                "average_2weeks": 0,
                "median_2weeks": 0
            },
            "reviews": {
                "num_reviews_total": 0,
                "positive": 0,
                "negative": 0
            },
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        let mut edited = GameForm::from_detail(&current);
        assert!(edited.to_update(&current).unwrap().is_empty());

        edited.price = "4.99".to_string();
        edited.tags = "FPS".to_string();
        let update = edited.to_update(&current).unwrap();

        assert_eq!(update.price, Some(4.99));
        assert_eq!(update.tags, Some(vec!["FPS".to_string()]));
        assert_eq!(update.name, None);
        assert_eq!(update.developers, None);
    }
}
