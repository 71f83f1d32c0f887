use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Form,
    FormError, Input,
};
use std::collections::HashMap;

/// Where to go after signing in. Only in-app paths are honoured.
pub fn destination(redirect: Option<&str>) -> Route {
    redirect
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .and_then(|path| path.parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::Login { .. } | Route::NotFound { .. }))
        .unwrap_or(Route::EmployeeList {})
}

/// Email/password sign-in. Accounts are provisioned by operators.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let target = use_signal(move || destination(redirect.as_deref()));

    if auth.is_authenticated() {
        navigator().replace(target());
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                auth.set_user(user);
                navigator().push(target());
            }
            Err(e) => {
                let err_str = e.to_string();
                let fields = AppError::parse_field_errors(&err_str);
                if fields.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fields);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Use your Staffdesk account to manage employee records" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        FormError { message: err }
                    }

                    Form { onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            id: "email",
                            placeholder: "you@company.com",
                            required: true,
                            value: email(),
                            error: field_errors().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            id: "password",
                            required: true,
                            value: password(),
                            error: field_errors().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            disabled: loading(),
                            class: "auth-submit",
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
