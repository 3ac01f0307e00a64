pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// Dialog with a title bar. `wide` modals fill the screen on small devices.
#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    prevent_close: bool,
    #[props(default = false)] wide: bool,
    children: Element,
) -> Element {
    let size = if wide {
        "w-full h-full max-w-none max-h-none sm:w-11/12 sm:max-w-5xl sm:h-auto sm:max-h-[90vh] m-0 sm:m-auto rounded-none sm:rounded-box"
    } else {
        "w-11/12 max-w-lg"
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && !prevent_close {
                    show.set(false);
                }
            },
            div {
                class: "modal-box border border-base-300 {size}",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 {
                        class: "font-bold text-lg",
                        "{title}"
                    }
                    if !prevent_close {
                        button {
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: move |_| show.set(false),
                            "✕"
                        }
                    }
                }
                div {
                    {children}
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !prevent_close {
                        show.set(false);
                    }
                },
            }
        }
    )
}
