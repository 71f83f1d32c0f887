use dioxus::prelude::*;

/// Horizontally scrollable table.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table { {children} }
        }
    }
}

/// Wraps column headings in `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { scope: "col", {children} }
    }
}

/// Table row; selectable when `on_select` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] on_select: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let selectable = on_select.is_some();
    rsx! {
        tr {
            class: if selectable { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |_| {
                if let Some(handler) = &on_select {
                    handler.call(());
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
