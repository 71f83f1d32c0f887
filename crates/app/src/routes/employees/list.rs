use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_types::{
    AppError, EmployeeListParams, EmployeeResponse, EmployeeStatus, ALL_EMPLOYEE_STATUSES,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Field, FormError, FormSelect, ListRow, ListViewer,
    PageActions, PageHeader, PageTitle, Pagination, SearchBar, SkeletonRows,
};

use super::form_sheet::{EmployeeFormSheet, FormMode};
use crate::auth::use_page_props;
use crate::format_helpers::format_date;
use crate::routes::Route;
use crate::use_ui_settings;

/// Table headings; the first column holds the row title.
pub const EMPLOYEE_COLUMNS: [&str; 6] =
    ["Name", "Email", "Department", "Job Title", "Status", "Hire Date"];

pub fn status_badge_variant(status: EmployeeStatus) -> BadgeVariant {
    match status {
        EmployeeStatus::Active => BadgeVariant::Success,
        EmployeeStatus::OnLeave => BadgeVariant::Warning,
        EmployeeStatus::Terminated => BadgeVariant::Outline,
    }
}

/// Fields of one employee, in column order after the name.
pub fn employee_fields(employee: &EmployeeResponse) -> Vec<Field> {
    let status = employee.status;
    vec![
        Field::text("Email", &employee.email),
        Field::text("Department", &employee.department),
        Field::text("Job Title", &employee.job_title),
        Field::new(
            "Status",
            rsx! {
                Badge { variant: status_badge_variant(status), "{status}" }
            },
        ),
        Field::text("Hire Date", format_date(employee.hire_date)),
    ]
}

#[component]
pub fn EmployeeList() -> Element {
    let page_props = use_page_props();
    let settings = use_ui_settings();
    let page_size = settings.page_size;
    let visible_count = settings.card_visible_fields;

    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| Option::<EmployeeStatus>::None);
    let mut page = use_signal(|| 1i64);
    let mut show_sheet = use_signal(|| false);

    let mut data = use_resource(move || {
        let params = EmployeeListParams {
            q: Some(search()),
            status: status_filter(),
            page: Some(page()),
            limit: Some(page_size),
        };
        async move { server::api::list_employees(params).await }
    });

    let can_manage = page_props.read().can_manage_employees();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Employees" }
                PageActions {
                    if can_manage {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| show_sheet.set(true),
                            Icon { icon: LdPlus, width: 16, height: 16 }
                            "New Employee"
                        }
                    }
                }
            }

            SearchBar {
                value: search(),
                placeholder: "Search by name, email, department or title...",
                on_search: move |q: String| {
                    search.set(q);
                    page.set(1);
                },
                FormSelect {
                    value: status_filter().map(|s| s.as_str()).unwrap_or_default().to_string(),
                    onchange: move |e: Event<FormData>| {
                        status_filter.set(EmployeeStatus::from_str_opt(&e.value()));
                        page.set(1);
                    },
                    option { value: "", "All statuses" }
                    for status in ALL_EMPLOYEE_STATUSES {
                        option { value: status.as_str(), {status.label()} }
                    }
                }
            }

            match &*data.read() {
                Some(Ok(result)) => {
                    let rows: Vec<ListRow> = result
                        .data
                        .iter()
                        .map(|employee| {
                            let id = employee.id.clone();
                            ListRow::new(employee.id.clone(), employee.full_name(), employee_fields(employee))
                                .subtitle(employee.job_title.clone())
                                .badge(rsx! {
                                    Badge { variant: status_badge_variant(employee.status), "{employee.status}" }
                                })
                                .on_select(EventHandler::new(move |_| {
                                    navigator().push(Route::EmployeeDetail { id: id.clone() });
                                }))
                        })
                        .collect();
                    let total_pages = result.meta.total_pages;
                    let total = result.meta.total;
                    rsx! {
                        ListViewer {
                            columns: EMPLOYEE_COLUMNS.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                            rows,
                            empty_message: "No employees found",
                            visible_count,
                        }
                        Pagination { page, total_pages, total }
                    }
                }
                Some(Err(e)) => rsx! {
                    FormError { message: AppError::friendly_message(&e.to_string()) }
                },
                None => rsx! {
                    SkeletonRows { count: 5 }
                },
            }

            if can_manage {
                EmployeeFormSheet {
                    mode: FormMode::Create,
                    initial: None,
                    open: show_sheet(),
                    on_close: move |_| show_sheet.set(false),
                    on_saved: move |_| data.restart(),
                }
            }
        }
    }
}
