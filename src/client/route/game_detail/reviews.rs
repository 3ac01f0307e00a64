use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorAlert, Loading, Markdown},
        model::{auth::AuthContext, cache::Cache},
    },
    model::review::{
        rating_class, review_percentages, FilteredReviewsDto, ReviewDto, ReviewFilter,
        ReviewSort, ReviewStatsDto,
    },
};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::review::{
            create_review, delete_review, get_filtered_reviews, get_review_stats, update_review,
        },
        model::error::ApiError,
    },
    model::review::{CreateReviewDto, UpdateReviewDto},
};

/// Parses a rating input, accepting only whole numbers in 0..=100.
fn parse_rating(input: &str) -> Option<i32> {
    input
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|r| (0..=100).contains(r))
}

#[component]
pub fn ReviewsSection(appid: i64) -> Element {
    let mut filter = use_signal(ReviewFilter::default);
    let mut sort = use_signal(ReviewSort::default);
    let mut reload = use_signal(|| 0u32);
    let mut reviews = use_signal(Cache::<FilteredReviewsDto>::default);
    let mut stats = use_signal(Cache::<ReviewStatsDto>::default);

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|(appid)| {
        let current_filter = filter();
        let current_sort = sort();
        let _ = reload();

        spawn(async move {
            reviews.set(get_filtered_reviews(appid, current_filter, current_sort).await.into());
        });
        spawn(async move {
            stats.set(get_review_stats(appid).await.into());
        });
    }));

    let on_changed = move |_| reload += 1;

    rsx! {
        section {
            class: "flex flex-col gap-4",
            div {
                class: "flex flex-wrap justify-between items-center gap-2",
                h2 { class: "text-xl font-bold", "Reviews" }
                div {
                    class: "flex gap-2",
                    select {
                        class: "select select-bordered select-sm",
                        onchange: move |evt| filter.set(match evt.value().as_str() {
                            "positive" => ReviewFilter::Positive,
                            "negative" => ReviewFilter::Negative,
                            _ => ReviewFilter::All,
                        }),
                        option { value: "all", "All" }
                        option { value: "positive", "Positive" }
                        option { value: "negative", "Negative" }
                    }
                    select {
                        class: "select select-bordered select-sm",
                        onchange: move |evt| sort.set(match evt.value().as_str() {
                            "rating" => ReviewSort::Rating,
                            "username" => ReviewSort::Username,
                            _ => ReviewSort::Date,
                        }),
                        option { value: "date", "Newest" }
                        option { value: "rating", "Highest rated" }
                        option { value: "username", "Username" }
                    }
                }
            }

            if let Cache::Fetched(s) = &*stats.read() {
                div {
                    class: "flex flex-wrap gap-4 items-center text-sm",
                    span { "{s.total_reviews} reviews" }
                    if let Some(average) = s.average_rating {
                        span { "Average rating {average:.1}" }
                    }
                    for (label, count) in [
                        ("0-20", s.rating_distribution.very_low),
                        ("21-40", s.rating_distribution.low),
                        ("41-60", s.rating_distribution.mixed),
                        ("61-80", s.rating_distribution.high),
                        ("81-100", s.rating_distribution.very_high),
                    ] {
                        span { class: "badge badge-ghost", "{label}: {count}" }
                    }
                }
            }

            match &*reviews.read() {
                Cache::Fetched(list) => {
                    let (positive, negative) = review_percentages(&list.reviews);
                    rsx! {
                        if !list.reviews.is_empty() {
                            div {
                                class: "flex w-full h-3 rounded-full overflow-hidden",
                                div { class: "bg-success", style: "width: {positive}%" }
                                div { class: "bg-error", style: "width: {negative}%" }
                            }
                            p { class: "text-xs opacity-70", "{positive}% positive · {negative}% negative" }
                        }
                        if list.reviews.is_empty() {
                            p { class: "opacity-70", "No reviews yet." }
                        }
                        for review in list.reviews.iter() {
                            ReviewItem {
                                key: "{review.id}",
                                appid,
                                review: review.clone(),
                                on_changed,
                            }
                        }
                    }
                }
                Cache::Error(e) => rsx! { ErrorAlert { message: e.message.clone() } },
                _ => rsx! { Loading {} },
            }

            ReviewForm { appid, on_saved: on_changed }
        }
    }
}

#[component]
fn ReviewItem(appid: i64, review: ReviewDto, on_changed: EventHandler<()>) -> Element {
    let auth = use_context::<AuthContext>();
    let mut editing = use_signal(|| false);
    let mut comment = use_signal(|| review.comment.clone());
    let mut rating = use_signal(|| review.rating.to_string());
    let mut error = use_signal(|| None::<String>);
    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let can_edit = auth.is_admin()
        || (review.created_by.is_some() && review.created_by == auth.user_id());
    let review_id = review.id;

    let on_save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(new_rating) = parse_rating(&rating()) else {
            error.set(Some("Rating must be a whole number from 0 to 100".to_string()));
            return;
        };

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = UpdateReviewDto {
                comment: Some(comment()),
                rating: Some(new_rating),
            };
            match update_review(appid, review_id, &payload).await {
                Ok(_) => {
                    editing.set(false);
                    error.set(None);
                    on_changed.call(());
                }
                Err(e) => error.set(Some(e.message)),
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = new_rating;
    };

    let on_delete = move |_| {
        deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result: Result<_, ApiError> = delete_review(appid, review_id).await;
            deleting.set(false);
            match result {
                Ok(_) => {
                    show_delete.set(false);
                    on_changed.call(());
                }
                Err(e) => error.set(Some(e.message)),
            }
        });
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body p-4 gap-2",
                div {
                    class: "flex justify-between items-center",
                    div {
                        class: "flex items-center gap-2",
                        span { class: "badge {rating_class(review.rating)}", "{review.rating}" }
                        span { class: "font-semibold", "{review.username}" }
                        span { class: "text-xs opacity-60", {review.created_at.format("%Y-%m-%d %H:%M").to_string()} }
                    }
                    if can_edit && !editing() {
                        div {
                            class: "flex gap-1",
                            button { class: "btn btn-xs", onclick: move |_| editing.set(true), "Edit" }
                            button { class: "btn btn-xs btn-error", onclick: move |_| show_delete.set(true), "Delete" }
                        }
                    }
                }
                if editing() {
                    form {
                        class: "flex flex-col gap-2",
                        onsubmit: on_save,
                        textarea {
                            class: "textarea textarea-bordered",
                            value: "{comment}",
                            oninput: move |evt| comment.set(evt.value()),
                        }
                        div {
                            class: "flex gap-2 items-center",
                            input {
                                r#type: "number",
                                min: "0",
                                max: "100",
                                class: "input input-bordered input-sm w-24",
                                value: "{rating}",
                                oninput: move |evt| rating.set(evt.value()),
                            }
                            button { r#type: "submit", class: "btn btn-primary btn-sm", "Save" }
                            button { r#type: "button", class: "btn btn-ghost btn-sm", onclick: move |_| editing.set(false), "Cancel" }
                        }
                    }
                } else {
                    Markdown { source: review.comment.clone() }
                }
                if let Some(message) = error() {
                    if !show_delete() {
                        ErrorAlert { message }
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete,
            title: "Delete review".to_string(),
            message: format!("Delete the review by {}?", review.username),
            confirm_text: "Delete".to_string(),
            is_processing: deleting(),
            error: if show_delete() { error() } else { None },
            on_confirm: on_delete,
        }
    }
}

#[component]
fn ReviewForm(appid: i64, on_saved: EventHandler<()>) -> Element {
    let auth = use_context::<AuthContext>();
    let mut comment = use_signal(String::new);
    let mut rating = use_signal(|| "80".to_string());
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let signed_in = auth.username();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if comment().trim().is_empty() {
            error.set(Some("Comment is required".to_string()));
            return;
        }
        let Some(value) = parse_rating(&rating()) else {
            error.set(Some("Rating must be a whole number from 0 to 100".to_string()));
            return;
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let name = username();
            let payload = CreateReviewDto {
                comment: comment(),
                rating: value,
                username: (!name.trim().is_empty()).then(|| name.trim().to_string()),
            };
            match create_review(appid, &payload).await {
                Ok(_) => {
                    comment.set(String::new());
                    error.set(None);
                    on_saved.call(());
                }
                Err(e) => error.set(Some(e.message)),
            }
            submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = value;
    };

    rsx! {
        form {
            class: "flex flex-col gap-2 bg-base-200 rounded-box p-4",
            onsubmit: on_submit,
            h3 { class: "font-semibold", "Write a review" }
            if let Some(name) = signed_in {
                p { class: "text-sm opacity-70", "Posting as {name}" }
            } else {
                input {
                    class: "input input-bordered input-sm",
                    placeholder: "Name (optional)",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
            }
            textarea {
                class: "textarea textarea-bordered",
                placeholder: "What did you think? Markdown is supported.",
                value: "{comment}",
                oninput: move |evt| comment.set(evt.value()),
            }
            div {
                class: "flex gap-2 items-center",
                label { class: "text-sm", "Rating" }
                input {
                    r#type: "number",
                    min: "0",
                    max: "100",
                    class: "input input-bordered input-sm w-24",
                    value: "{rating}",
                    oninput: move |evt| rating.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-sm",
                    disabled: submitting(),
                    "Post review"
                }
            }
            if let Some(message) = error() {
                ErrorAlert { message }
            }
        }
    }
}
