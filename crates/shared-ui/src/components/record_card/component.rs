use dioxus::prelude::*;

use crate::components::card::{
    Card, CardAction, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
};
use crate::components::expandable_field_list::{
    ExpandableFieldList, Field, DEFAULT_VISIBLE_FIELDS,
};

/// Mobile card layout for one record: header plus a collapsible field list.
#[component]
pub fn RecordCard(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] badge: Option<Element>,
    fields: Vec<Field>,
    #[props(default = DEFAULT_VISIBLE_FIELDS)] visible_count: usize,
    #[props(default)] on_select: Option<EventHandler<()>>,
    #[props(default)] actions: Option<Element>,
) -> Element {
    let selectable = on_select.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card { class: "record-card",
            CardHeader {
                CardTitle {
                    if selectable {
                        button {
                            class: "record-card-link",
                            r#type: "button",
                            onclick: move |_| {
                                if let Some(handler) = &on_select {
                                    handler.call(());
                                }
                            },
                            "{title}"
                        }
                    } else {
                        "{title}"
                    }
                }
                if let Some(subtitle) = subtitle {
                    CardDescription { "{subtitle}" }
                }
                if let Some(badge) = badge {
                    CardAction { {badge} }
                }
            }
            CardContent {
                ExpandableFieldList { fields, visible_count }
            }
            if let Some(actions) = actions {
                CardFooter { {actions} }
            }
        }
    }
}
