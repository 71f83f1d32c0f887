use dioxus::prelude::*;

use crate::with_class;

/// Pulsing placeholder shown while data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let merged = with_class("skeleton", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged }
    }
}

/// `count` stacked skeleton bars, used for list pages.
#[component]
pub fn SkeletonRows(#[props(default = 5)] count: usize) -> Element {
    rsx! {
        div { class: "skeleton-rows",
            for index in 0..count {
                Skeleton { key: "{index}", class: "skeleton-row" }
            }
        }
    }
}
