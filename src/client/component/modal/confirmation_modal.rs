use dioxus::prelude::*;

use super::Modal;

/// Asks before a destructive action. Shows `error` inline when the action failed.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: String,
    confirm_text: String,
    is_processing: bool,
    error: Option<String>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            p { class: "py-2", "{message}" }
            if let Some(error) = error {
                div { class: "alert alert-error text-sm my-2", "{error}" }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| show.set(false),
                    disabled: is_processing,
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-error",
                    onclick: move |_| on_confirm.call(()),
                    disabled: is_processing,
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                        "Working..."
                    } else {
                        "{confirm_text}"
                    }
                }
            }
        }
    )
}
