use dioxus::prelude::*;

use crate::with_class;

/// Side panel that slides in from the right over a dimmed overlay.
///
/// Clicking the overlay calls `on_close`; clicks inside the panel do not.
#[component]
pub fn Sheet(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            onclick: move |_| on_close.call(()),
            aside {
                class: "sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn SheetContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sheet-content", attributes);
    rsx! { div { ..merged, {children} } }
}

/// Title row with a close button.
#[component]
pub fn SheetHeader(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { class: "sheet-header",
            h2 { class: "sheet-title", "{title}" }
            button {
                class: "sheet-close",
                r#type: "button",
                "aria-label": "Close",
                onclick: move |_| on_close.call(()),
                "\u{2715}"
            }
            {children}
        }
    }
}

#[component]
pub fn SheetFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sheet-footer", attributes);
    rsx! { div { ..merged, {children} } }
}
