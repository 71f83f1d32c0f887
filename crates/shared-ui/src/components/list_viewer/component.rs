use dioxus::prelude::*;

use crate::components::data_table::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
};
use crate::components::expandable_field_list::{Field, DEFAULT_VISIBLE_FIELDS};
use crate::components::record_card::RecordCard;

/// One record as shown by a `ListViewer`.
///
/// `title` is the first table column and the card heading; `fields` fill the
/// remaining table cells on wide screens and the collapsible card body on
/// narrow ones.
#[derive(Clone, PartialEq)]
pub struct ListRow {
    pub key: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub badge: Option<Element>,
    pub fields: Vec<Field>,
    pub on_select: Option<EventHandler<()>>,
}

impl ListRow {
    pub fn new(key: impl Into<String>, title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            subtitle: None,
            badge: None,
            fields,
            on_select: None,
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn badge(mut self, badge: Element) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn on_select(mut self, handler: EventHandler<()>) -> Self {
        self.on_select = Some(handler);
        self
    }
}

/// Responsive record list: a table on wide viewports, cards on narrow ones.
///
/// Both layouts are rendered; the stylesheet's media query hides one.
#[component]
pub fn ListViewer(
    columns: Vec<String>,
    rows: Vec<ListRow>,
    #[props(default = "No records found".to_string())] empty_message: String,
    #[props(default = DEFAULT_VISIBLE_FIELDS)] visible_count: usize,
) -> Element {
    if rows.is_empty() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div { class: "list-viewer-empty", "{empty_message}" }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "list-viewer",
            div { class: "list-viewer-table",
                DataTable {
                    DataTableHeader {
                        for column in columns.iter() {
                            DataTableColumn { key: "{column}", "{column}" }
                        }
                    }
                    DataTableBody {
                        for row in rows.iter() {
                            DataTableRow { key: "{row.key}", on_select: row.on_select,
                                DataTableCell {
                                    span { class: "list-viewer-title", "{row.title}" }
                                }
                                for (index, field) in row.fields.iter().enumerate() {
                                    DataTableCell { key: "{index}", {field.value.clone()} }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "list-viewer-cards",
                for row in rows.iter() {
                    RecordCard {
                        key: "{row.key}",
                        title: row.title.clone(),
                        subtitle: row.subtitle.clone(),
                        badge: row.badge.clone(),
                        fields: row.fields.clone(),
                        visible_count,
                        on_select: row.on_select,
                    }
                }
            }
        }
    }
}
