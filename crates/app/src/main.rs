use dioxus::prelude::*;
use shared_types::UiSettings;

mod auth;
mod format_helpers;
mod routes;
use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let pool = server::db::create_pool()?;
        server::db::run_migrations(&pool).await?;

        let mut router = dioxus::server::router(App).merge(server::openapi::api_router(pool));

        if config.features.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn(
                server::auth::middleware::auth_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    // Display settings are not sensitive; fall back to defaults on error.
    let settings = use_server_future(move || async move { server::api::get_ui_settings().await })?;
    let ui = settings
        .read()
        .as_ref()
        .cloned()
        .and_then(Result::ok)
        .unwrap_or_default();
    use_context_provider(move || ui);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "auth-guard-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

/// Display settings provided by `App`.
pub fn use_ui_settings() -> UiSettings {
    use_context::<UiSettings>()
}
