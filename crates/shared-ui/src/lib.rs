pub mod components;

pub use components::*;

use dioxus::prelude::*;

/// Prepend the component's base class to caller-supplied attributes.
pub(crate) fn with_class(class: &'static str, extra: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, extra])
}
