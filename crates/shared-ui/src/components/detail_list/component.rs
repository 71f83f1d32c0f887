use dioxus::prelude::*;

/// Vertical list of label/value rows for a record's detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// A single label/value row inside a `DetailList`.
///
/// Plain text goes in `value`; pass children instead for rich content such
/// as a badge or a mailto link.
#[component]
pub fn DetailItem(
    label: String,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                if has_children {
                    {children}
                } else if value.is_empty() {
                    span { class: "detail-item-empty", "Not provided" }
                } else {
                    span { "{value}" }
                }
            }
        }
    }
}

/// Muted footer row for ids and timestamps.
#[component]
pub fn DetailFooter(children: Element) -> Element {
    rsx! {
        div { class: "detail-footer", {children} }
    }
}
