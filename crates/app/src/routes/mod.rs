pub mod employees;
pub mod login;
pub mod not_found;

use crate::auth::{use_auth, use_page_props};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::PageProps;
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant};

use employees::{EmployeeDetail, EmployeeList};
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[redirect("/", || Route::EmployeeList {})]
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/employees")]
    EmployeeList {},
    #[route("/employees/:id")]
    EmployeeDetail { id: String },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Title shown in the top bar and handed to pages through `PageProps`.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login { .. } => "Sign In",
            Route::EmployeeList {} | Route::EmployeeDetail { .. } => "Employees",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

/// Auth guard layout: redirects to /login if not authenticated.
///
/// Suspends (via `?`) until the current-user lookup resolves, so SSR renders
/// the resolved state and hydration reuses it.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let route: Route = use_route();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {
                redirect: Some(route.to_string()),
            });
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
    }
}

/// Top bar plus page outlet. Provides the `PageProps` context.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();

    let page_props = use_memo(use_reactive!(|route| {
        PageProps::new(auth.current_user.read().clone(), route.title())
    }));
    use_context_provider(move || page_props);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "app-shell",
            TopBar {
                on_sign_out: move |_| {
                    spawn(async move {
                        if let Err(e) = server::api::logout().await {
                            tracing::warn!(error = %e, "logout request failed");
                        }
                        auth.clear_auth();
                        navigator().push(Route::Login { redirect: None });
                    });
                },
            }
            main { class: "app-main", Outlet::<Route> {} }
        }
    }
}

#[component]
fn TopBar(on_sign_out: EventHandler<()>) -> Element {
    let props = use_page_props();
    let PageProps { auth, title } = props();
    let role = props.read().role();

    rsx! {
        header { class: "app-topbar",
            div { class: "app-brand",
                Link { to: Route::EmployeeList {}, class: "app-brand-link",
                    Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 }
                    span { "Staffdesk" }
                }
            }
            h1 { class: "app-page-title", "{title}" }
            if let Some(user) = auth {
                div { class: "app-user",
                    span { class: "app-user-name", "{user.display_name}" }
                    Badge { variant: BadgeVariant::Outline, "{role}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_sign_out.call(()),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                }
            }
        }
    }
}
