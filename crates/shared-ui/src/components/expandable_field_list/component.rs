use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdChevronUp};
use dioxus_free_icons::Icon;

/// Fields shown before collapsing when the caller does not pick a threshold.
pub const DEFAULT_VISIBLE_FIELDS: usize = 3;

/// One labeled display item inside a record view.
///
/// Identity is positional; the label is cosmetic and may be empty.
#[derive(Clone, PartialEq)]
pub struct Field {
    pub label: String,
    pub value: Element,
}

impl Field {
    /// A field with arbitrary rendered content.
    pub fn new(label: impl Into<String>, value: Element) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// A field whose content is plain text.
    pub fn text(label: impl Into<String>, value: impl std::fmt::Display) -> Self {
        let value = value.to_string();
        Self::new(label, rsx! { "{value}" })
    }
}

/// Collapse state of one rendered field list.
///
/// Holds the clamped threshold and a single `expanded` flag. Starts
/// collapsed; `toggle` flips between the two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionState {
    visible_count: usize,
    expanded: bool,
}

impl Default for ExpansionState {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_FIELDS)
    }
}

impl ExpansionState {
    /// Collapsed state with the given threshold (zero is clamped to one).
    pub fn new(visible_count: usize) -> Self {
        Self {
            visible_count: visible_count.max(1),
            expanded: false,
        }
    }

    /// Same flag, new threshold.
    pub fn with_visible_count(self, visible_count: usize) -> Self {
        Self {
            visible_count: visible_count.max(1),
            ..self
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Number of fields to render out of `total`.
    pub fn visible_len(&self, total: usize) -> usize {
        if self.expanded {
            total
        } else {
            total.min(self.visible_count)
        }
    }

    /// The toggle only exists when some fields would be hidden.
    pub fn shows_toggle(&self, total: usize) -> bool {
        total > self.visible_count
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "View Less"
        } else {
            "View More"
        }
    }
}

/// Labeled fields that collapse to `visible_count` entries behind a
/// "View More" / "View Less" toggle.
///
/// Expansion state lives for as long as this component stays mounted; a
/// new mount always starts collapsed.
#[component]
pub fn ExpandableFieldList(
    fields: Vec<Field>,
    #[props(default = DEFAULT_VISIBLE_FIELDS)] visible_count: usize,
) -> Element {
    let state = use_signal(|| ExpansionState::new(visible_count));
    render_fields(state, &fields, visible_count)
}

fn render_fields(
    mut state: Signal<ExpansionState>,
    fields: &[Field],
    visible_count: usize,
) -> Element {
    let view = state().with_visible_count(visible_count);
    let total = fields.len();
    let shown = view.visible_len(total);
    let expanded = view.is_expanded();
    let toggle_label = view.toggle_label();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "expandable-field-list",
            "data-expanded": if expanded { "true" } else { "false" },
            dl { class: "expandable-fields",
                for (index, field) in fields.iter().take(shown).enumerate() {
                    div { key: "{index}", class: "expandable-field",
                        dt { class: "expandable-field-label", "{field.label}" }
                        dd { class: "expandable-field-value", {field.value.clone()} }
                    }
                }
            }
            if view.shows_toggle(total) {
                button {
                    class: "expandable-field-toggle",
                    r#type: "button",
                    "aria-expanded": if expanded { "true" } else { "false" },
                    onclick: move |_| state.write().toggle(),
                    span { "{toggle_label}" }
                    if expanded {
                        Icon::<LdChevronUp> { icon: LdChevronUp, width: 14, height: 14 }
                    } else {
                        Icon::<LdChevronDown> { icon: LdChevronDown, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
