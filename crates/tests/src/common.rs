use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    middleware, Router,
};
use serde_json::Value;
use shared_types::UserRole;
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Global mutex ensuring tests run sequentially against the shared database.
/// Each test acquires this lock before truncating and seeding.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Seeded accounts, one per role.
pub struct Users {
    pub viewer: i64,
    pub manager: i64,
    pub admin: i64,
}

pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Postgres>,
    pub users: Users,
    _guard: tokio::sync::MutexGuard<'static, ()>,
}

impl TestApp {
    pub fn token(&self, role: UserRole) -> String {
        let id = match role {
            UserRole::Viewer => self.users.viewer,
            UserRole::Manager => self.users.manager,
            UserRole::Admin => self.users.admin,
        };
        server::auth::jwt::create_access_token(id, &email_for(role), role).expect("token")
    }
}

pub fn email_for(role: UserRole) -> String {
    format!("{}@staffdesk.test", role.as_str())
}

/// Router and pool over a freshly truncated database.
///
/// Returns `None` (and the test passes vacuously) when neither
/// `TEST_DATABASE_URL` nor `DATABASE_URL` is set.
pub async fn test_app() -> Option<TestApp> {
    let guard = TEST_MUTEX.lock().await;

    let _ = dotenvy::dotenv();

    let Some(database_url) = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
    else {
        eprintln!("skipping: TEST_DATABASE_URL or DATABASE_URL not set");
        return None;
    };

    std::env::set_var("JWT_SECRET", TEST_SECRET);

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    server::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE employees, users RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to truncate");

    let hash = server::auth::password::hash_password(TEST_PASSWORD).expect("hash");
    let mut ids = Vec::new();
    for role in [UserRole::Viewer, UserRole::Manager, UserRole::Admin] {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (email, display_name, password_hash, role) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(email_for(role))
        .bind(format!("Test {}", role.display_name()))
        .bind(&hash)
        .bind(role.as_str())
        .fetch_one(&pool)
        .await
        .expect("Failed to seed user");
        ids.push(id);
    }

    let router = server::openapi::api_router(pool.clone()).layer(middleware::from_fn(
        server::auth::middleware::auth_middleware,
    ));

    Some(TestApp {
        router,
        pool,
        users: Users {
            viewer: ids[0],
            manager: ids[1],
            admin: ids[2],
        },
        _guard: guard,
    })
}

/// A valid create body; `n` keeps names and emails unique.
pub fn employee_json(n: usize) -> Value {
    serde_json::json!({
        "first_name": format!("Test{n}"),
        "last_name": "Employee",
        "email": format!("employee{n}@staffdesk.test"),
        "phone": "555-0100",
        "job_title": "Analyst",
        "department": "Finance",
        "hire_date": "2022-05-01"
    })
}

/// Create an employee as a manager and return its id.
pub async fn create_employee(app: &TestApp, body: &Value) -> String {
    let token = app.token(UserRole::Manager);
    let (status, response) =
        post_json(&app.router, "/api/employees", &body.to_string(), Some(&token)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {response}");
    response["id"].as_str().expect("id").to_string()
}

fn authed(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header("authorization", format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let req = authed(Request::builder().method("GET").uri(uri), token)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &str,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let req = authed(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json"),
        token,
    )
    .body(Body::from(body.to_string()))
    .unwrap();
    send(app, req).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    body: &str,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let req = authed(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json"),
        token,
    )
    .body(Body::from(body.to_string()))
    .unwrap();
    send(app, req).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let req = authed(Request::builder().method("DELETE").uri(uri), token)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

/// Send a request through the router and parse the response.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send_with_headers(app, req).await;
    (status, body)
}

pub async fn send_with_headers(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, headers, body)
}
