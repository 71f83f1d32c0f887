use dioxus::prelude::*;

use crate::with_class;

/// Form wrapper that suppresses the browser's default submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("form", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Banner for errors that do not belong to a single field.
#[component]
pub fn FormError(message: String) -> Element {
    rsx! {
        div { class: "form-error", role: "alert", "{message}" }
    }
}
