use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{
    AppError, CreateEmployeeRequest, EmployeeResponse, EmployeeStatus, UpdateEmployeeRequest,
    ALL_EMPLOYEE_STATUSES,
};
use shared_ui::{
    use_toast, Button, ButtonVariant, Form, FormError, FormSelect, Input, Sheet, SheetContent,
    SheetFooter, SheetHeader, ToastOptions,
};
use std::collections::HashMap;

/// Controls whether the form is in Create or Edit mode.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FormMode {
    Create,
    Edit,
}

/// Raw text of the employee form, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub hire_date: String,
}

impl From<&EmployeeResponse> for EmployeeForm {
    fn from(e: &EmployeeResponse) -> Self {
        Self {
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone().unwrap_or_default(),
            job_title: e.job_title.clone(),
            department: e.department.clone(),
            status: e.status,
            hire_date: e.hire_date.to_string(),
        }
    }
}

impl EmployeeForm {
    fn parse_hire_date(&self) -> Result<NaiveDate, HashMap<String, String>> {
        NaiveDate::parse_from_str(self.hire_date.trim(), "%Y-%m-%d").map_err(|_| {
            HashMap::from([("hire_date".to_string(), "Hire date is required".to_string())])
        })
    }

    pub fn to_create(&self) -> Result<CreateEmployeeRequest, HashMap<String, String>> {
        let hire_date = self.parse_hire_date()?;
        let phone = self.phone.trim();
        Ok(CreateEmployeeRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            job_title: self.job_title.trim().to_string(),
            department: self.department.trim().to_string(),
            status: self.status,
            hire_date,
        })
    }

    /// Patch holding only the fields that differ from `original`.
    ///
    /// A cleared phone is sent as an empty string, which removes it.
    pub fn to_update(
        &self,
        original: &EmployeeResponse,
    ) -> Result<UpdateEmployeeRequest, HashMap<String, String>> {
        fn changed(new: &str, old: &str) -> Option<String> {
            let new = new.trim();
            (new != old).then(|| new.to_string())
        }

        let hire_date = self.parse_hire_date()?;
        Ok(UpdateEmployeeRequest {
            first_name: changed(&self.first_name, &original.first_name),
            last_name: changed(&self.last_name, &original.last_name),
            email: changed(&self.email, &original.email),
            phone: changed(&self.phone, original.phone.as_deref().unwrap_or_default()),
            job_title: changed(&self.job_title, &original.job_title),
            department: changed(&self.department, &original.department),
            status: (self.status != original.status).then_some(self.status),
            hire_date: (hire_date != original.hire_date).then_some(hire_date),
        })
    }
}

/// Unified create/edit form for employees, rendered inside a Sheet.
#[component]
pub fn EmployeeFormSheet(
    mode: FormMode,
    initial: Option<EmployeeResponse>,
    open: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<EmployeeResponse>,
) -> Element {
    let toast = use_toast();
    let mut form = use_signal(EmployeeForm::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let initial_for_hydration = initial.clone();
    use_effect(use_reactive!(|open| {
        if open {
            form.set(
                initial_for_hydration
                    .as_ref()
                    .map(EmployeeForm::from)
                    .unwrap_or_default(),
            );
            field_errors.set(HashMap::new());
            error_msg.set(None);
        }
    }));

    let handle_save = move |_: FormEvent| {
        if in_flight() {
            return;
        }
        let current = form.read().clone();
        let original = initial.clone();

        spawn(async move {
            in_flight.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let result = match (mode, original) {
                (FormMode::Edit, Some(original)) => match current.to_update(&original) {
                    Ok(req) => Some(server::api::update_employee(original.id.clone(), req).await),
                    Err(errors) => {
                        field_errors.set(errors);
                        None
                    }
                },
                _ => match current.to_create() {
                    Ok(req) => Some(server::api::create_employee(req).await),
                    Err(errors) => {
                        field_errors.set(errors);
                        None
                    }
                },
            };

            match result {
                Some(Ok(saved)) => {
                    let msg = match mode {
                        FormMode::Create => "Employee created",
                        FormMode::Edit => "Employee updated",
                    };
                    toast.success(msg.to_string(), ToastOptions::new());
                    on_saved.call(saved);
                    on_close.call(());
                }
                Some(Err(e)) => {
                    let err_str = e.to_string();
                    let fields = AppError::parse_field_errors(&err_str);
                    if fields.is_empty() {
                        error_msg.set(Some(AppError::friendly_message(&err_str)));
                    } else {
                        field_errors.set(fields);
                    }
                }
                None => {}
            }
            in_flight.set(false);
        });
    };

    let sheet_title = match mode {
        FormMode::Create => "New Employee",
        FormMode::Edit => "Edit Employee",
    };
    let submit_label = match mode {
        FormMode::Create => "Create Employee",
        FormMode::Edit => "Save Changes",
    };
    let err = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        Sheet { open, on_close: move |_| on_close.call(()),
            SheetContent {
                SheetHeader { title: sheet_title, on_close: move |_| on_close.call(()) }

                if let Some(message) = error_msg() {
                    FormError { message }
                }

                Form { onsubmit: handle_save,
                    div { class: "sheet-form",
                        Input {
                            label: "First Name",
                            required: true,
                            value: form.read().first_name.clone(),
                            error: err("first_name"),
                            on_input: move |e: FormEvent| form.write().first_name = e.value(),
                        }
                        Input {
                            label: "Last Name",
                            required: true,
                            value: form.read().last_name.clone(),
                            error: err("last_name"),
                            on_input: move |e: FormEvent| form.write().last_name = e.value(),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            required: true,
                            value: form.read().email.clone(),
                            error: err("email"),
                            on_input: move |e: FormEvent| form.write().email = e.value(),
                        }
                        Input {
                            label: "Phone",
                            input_type: "tel",
                            value: form.read().phone.clone(),
                            error: err("phone"),
                            on_input: move |e: FormEvent| form.write().phone = e.value(),
                        }
                        Input {
                            label: "Job Title",
                            required: true,
                            value: form.read().job_title.clone(),
                            error: err("job_title"),
                            on_input: move |e: FormEvent| form.write().job_title = e.value(),
                        }
                        Input {
                            label: "Department",
                            required: true,
                            value: form.read().department.clone(),
                            error: err("department"),
                            on_input: move |e: FormEvent| form.write().department = e.value(),
                        }
                        FormSelect {
                            label: "Status",
                            value: form.read().status.as_str().to_string(),
                            error: err("status"),
                            onchange: move |e: Event<FormData>| {
                                if let Some(status) = EmployeeStatus::from_str_opt(&e.value()) {
                                    form.write().status = status;
                                }
                            },
                            for status in ALL_EMPLOYEE_STATUSES {
                                option { value: status.as_str(), {status.label()} }
                            }
                        }
                        Input {
                            label: "Hire Date",
                            input_type: "date",
                            required: true,
                            value: form.read().hire_date.clone(),
                            error: err("hire_date"),
                            on_input: move |e: FormEvent| form.write().hire_date = e.value(),
                        }
                    }

                    SheetFooter {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            disabled: in_flight(),
                            if in_flight() { "Saving..." } else { "{submit_label}" }
                        }
                    }
                }
            }
        }
    }
}
