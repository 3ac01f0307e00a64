use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        Page {
            class: "flex flex-col gap-4 items-center justify-center",
            p { class: "text-5xl font-bold", "{status}" }
            p { class: "opacity-80", "{message}" }
            Link {
                to: Route::Home {},
                class: "btn btn-outline",
                "Back to home"
            }
        }
    )
}

/// Inline spinner for sections of a page.
#[component]
pub fn Loading() -> Element {
    rsx!(
        div {
            class: "flex justify-center py-6",
            span { class: "loading loading-spinner loading-md" }
        }
    )
}

/// Inline error alert.
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx!(
        div {
            class: "alert alert-error",
            span { "{message}" }
        }
    )
}
