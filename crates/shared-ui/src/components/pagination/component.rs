use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Page-number pagination with Previous/Next buttons.
///
/// `page` is one-based. Nothing renders when everything fits on one page.
#[component]
pub fn Pagination(mut page: Signal<i64>, total_pages: i64, total: i64) -> Element {
    let current = *page.read();
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: current <= 1,
                onclick: move |_| page.set((current - 1).max(1)),
                "Previous"
            }
            span { class: "pagination-info", "Page {current} of {total_pages} ({total} total)" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: current >= total_pages,
                onclick: move |_| page.set((current + 1).min(total_pages)),
                "Next"
            }
        }
    }
}
