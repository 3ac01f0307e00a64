use dioxus::prelude::*;

use crate::model::api::{PageInfoDto, PaginationDto};

use super::Modal;

/// Pagination state with 1-based page numbers.
#[derive(Clone, PartialEq)]
pub struct PaginationData {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationData {
    /// Clamps `page` into `1..=total_pages` (at least one page).
    pub fn clamp(&self, page: u64) -> u64 {
        page.clamp(1, self.total_pages.max(1))
    }

    /// 1-based range of entries shown on the current page.
    pub fn showing(&self) -> (u64, u64) {
        if self.total == 0 {
            return (0, 0);
        }
        let first = (self.page - 1) * self.per_page + 1;
        let last = (self.page * self.per_page).min(self.total);
        (first, last)
    }
}

impl From<&PaginationDto> for PaginationData {
    fn from(p: &PaginationDto) -> Self {
        Self {
            page: p.page.max(1),
            per_page: p.page_size,
            total: p.total_results,
            total_pages: p.total_pages.max(1),
        }
    }
}

impl From<&PageInfoDto> for PaginationData {
    fn from(p: &PageInfoDto) -> Self {
        Self {
            page: p.page.max(1),
            per_page: p.per_page,
            total: p.total_results,
            total_pages: p.total_pages.max(1),
        }
    }
}

#[component]
pub fn Pagination(data: PaginationData, on_page_change: EventHandler<u64>) -> Element {
    let mut show_page_jump = use_signal(|| false);
    let mut jump_page_input = use_signal(String::new);

    let (first, last) = data.showing();
    let page = data.page;
    let total_pages = data.total_pages;
    let jump_data = data.clone();

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-2",
            span {
                class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                "Showing {first} to {last} of {data.total}"
            }
            div {
                class: "join",
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: page <= 1,
                    onclick: move |_| on_page_change.call(page - 1),
                    "«"
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    onclick: move |_| {
                        jump_page_input.set(page.to_string());
                        show_page_jump.set(true);
                    },
                    "Page {page} of {total_pages}"
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: page >= total_pages,
                    onclick: move |_| on_page_change.call(page + 1),
                    "»"
                }
            }
        }

        Modal {
            show: show_page_jump,
            title: "Jump to Page".to_string(),
            prevent_close: false,
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Ok(target) = jump_page_input().trim().parse::<u64>() {
                        on_page_change.call(jump_data.clamp(target));
                        show_page_jump.set(false);
                    }
                },
                div {
                    class: "form-control w-full flex flex-col gap-3",
                    label {
                        class: "label",
                        span { class: "label-text", "Page number (1-{total_pages})" }
                    }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        min: "1",
                        max: "{total_pages}",
                        value: "{jump_page_input()}",
                        oninput: move |evt| jump_page_input.set(evt.value()),
                        autofocus: true,
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show_page_jump.set(false),
                        "Cancel"
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Jump" }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(page: u64, total: u64) -> PaginationData {
        PaginationData {
            page,
            per_page: 10,
            total,
            total_pages: PaginationDto::page_count(total, 10),
        }
    }

    #[test]
    fn clamps_into_page_range() {
        let d = data(1, 35);
        assert_eq!(d.clamp(0), 1);
        assert_eq!(d.clamp(9), 4);
        assert_eq!(data(1, 0).clamp(3), 1);
    }

    #[test]
    fn showing_range_stops_at_total() {
        assert_eq!(data(4, 35).showing(), (31, 35));
        assert_eq!(data(1, 0).showing(), (0, 0));
    }
}
