use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdPencil, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{AppError, AppErrorKind, EmployeeResponse};
use shared_ui::{
    use_toast, Badge, Button, ButtonVariant, Card, CardContent, DeleteConfirmation, DetailFooter,
    DetailItem, DetailList, FormError, PageActions, PageHeader, PageTitle, SkeletonRows,
    ToastOptions,
};

use super::form_sheet::{EmployeeFormSheet, FormMode};
use super::list::status_badge_variant;
use crate::auth::use_page_props;
use crate::format_helpers::{format_date, format_timestamp, or_dash};
use crate::routes::Route;

#[component]
pub fn EmployeeDetail(id: String) -> Element {
    let page_props = use_page_props();
    let toast = use_toast();

    let mut show_edit = use_signal(|| false);
    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let delete_id = id.clone();
    let mut data = use_resource(use_reactive!(|id| async move {
        server::api::get_employee(id).await
    }));

    let can_manage = page_props.read().can_manage_employees();

    let handle_delete = move |_| {
        let id = delete_id.clone();
        spawn(async move {
            deleting.set(true);
            match server::api::delete_employee(id).await {
                Ok(()) => {
                    toast.success("Employee deleted".to_string(), ToastOptions::new());
                    navigator().push(Route::EmployeeList {});
                }
                Err(e) => {
                    toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
                    show_delete.set(false);
                }
            }
            deleting.set(false);
        });
    };

    rsx! {
        div { class: "container",
            match &*data.read() {
                Some(Ok(employee)) => rsx! {
                    PageHeader {
                        PageTitle { "{employee.first_name} {employee.last_name}" }
                        PageActions {
                            Link { to: Route::EmployeeList {},
                                Button { variant: ButtonVariant::Ghost,
                                    Icon { icon: LdArrowLeft, width: 16, height: 16 }
                                    "Back"
                                }
                            }
                            if can_manage {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| show_edit.set(true),
                                    Icon { icon: LdPencil, width: 16, height: 16 }
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    onclick: move |_| show_delete.set(true),
                                    Icon { icon: LdTrash2, width: 16, height: 16 }
                                    "Delete"
                                }
                            }
                        }
                    }

                    EmployeeProfile { employee: employee.clone() }

                    if can_manage {
                        EmployeeFormSheet {
                            mode: FormMode::Edit,
                            initial: Some(employee.clone()),
                            open: show_edit(),
                            on_close: move |_| show_edit.set(false),
                            on_saved: move |_| data.restart(),
                        }
                        DeleteConfirmation {
                            open: show_delete(),
                            item: employee.full_name(),
                            pending: deleting(),
                            on_confirm: handle_delete,
                            on_open_change: move |open: bool| show_delete.set(open),
                        }
                    }
                },
                Some(Err(e)) => {
                    let message = AppError::from_server_error(&e.to_string())
                        .filter(|err| err.kind == AppErrorKind::NotFound)
                        .map(|_| "This employee does not exist or has been removed.".to_string())
                        .unwrap_or_else(|| AppError::friendly_message(&e.to_string()));
                    rsx! {
                        Card {
                            CardContent {
                                div { class: "empty-state",
                                    h2 { "Employee Not Found" }
                                    FormError { message }
                                    Link { to: Route::EmployeeList {},
                                        Button { "Back to Employees" }
                                    }
                                }
                            }
                        }
                    }
                }
                None => rsx! {
                    SkeletonRows { count: 8 }
                },
            }
        }
    }
}

#[component]
fn EmployeeProfile(employee: EmployeeResponse) -> Element {
    let status = employee.status;
    let created = format_timestamp(&employee.created_at);
    let updated = format_timestamp(&employee.updated_at);

    rsx! {
        Card {
            CardContent {
                DetailList {
                    DetailItem { label: "First Name", value: employee.first_name.clone() }
                    DetailItem { label: "Last Name", value: employee.last_name.clone() }
                    DetailItem { label: "Email",
                        a { href: "mailto:{employee.email}", "{employee.email}" }
                    }
                    DetailItem { label: "Phone", value: or_dash(employee.phone.as_deref()) }
                    DetailItem { label: "Job Title", value: employee.job_title.clone() }
                    DetailItem { label: "Department", value: employee.department.clone() }
                    DetailItem { label: "Status",
                        Badge { variant: status_badge_variant(status), "{status}" }
                    }
                    DetailItem { label: "Hire Date", value: format_date(employee.hire_date) }
                }
                DetailFooter {
                    span { "ID {employee.id}" }
                    span { "Created {created}" }
                    span { "Updated {updated}" }
                }
            }
        }
    }
}
