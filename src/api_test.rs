use super::*;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use tracker::{Role, User};

const TOKEN: &str = "tok-1";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Missing or invalid token" })))
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    match body["password"].as_str() {
        Some("right") => (
            StatusCode::OK,
            Json(json!({ "token": TOKEN, "user": { "id": 1, "email": body["email"], "role": "admin" } })),
        ),
        Some("pending") => (StatusCode::FORBIDDEN, Json(json!({ "message": "Account pending approval" }))),
        Some("broken") => (StatusCode::OK, Json(json!({ "message": "ok" }))),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" }))),
    }
}

async fn register(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "taken@example.com" {
        (StatusCode::CONFLICT, Json(json!({ "message": "Email already registered" })))
    } else {
        (StatusCode::CREATED, Json(json!({ "message": "registered" })))
    }
}

async fn tasks(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (StatusCode::OK, Json(json!([{ "task_id": 1, "task_name": "Write docs" }])))
}

async fn submit_log(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    if body["hours_logged"].as_f64().unwrap_or_default() > 24.0 {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Too many hours" })));
    }
    (StatusCode::CREATED, Json(json!({ "message": "logged" })))
}

async fn users(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!([
            { "user_id": 2, "email": "p@example.com", "role": "Employee", "status": "Pending", "created_at": null }
        ])),
    )
}

async fn approve(headers: HeaderMap, Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    if id == "2" {
        (StatusCode::OK, Json(json!({ "message": "approved" })))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "message": "No such user" })))
    }
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/logs/tasks", get(tasks))
        .route("/api/logs/log", post(submit_log))
        .route("/api/admin/users", get(users))
        .route("/api/admin/users/{id}/approve", put(approve));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend");
    });
    format!("http://{addr}/api")
}

fn client(base: &str) -> ApiClient {
    ApiClient::new(base, Duration::from_secs(5)).expect("client")
}

fn session() -> Session {
    Session::new(TOKEN, User::new("1", "a@example.com", Role::Admin))
}

fn request(password: &str) -> LoginRequest {
    LoginRequest { email: "a@example.com".to_owned(), password: password.to_owned() }
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_success_returns_credentials() {
    let api = client(&spawn_backend().await);
    let creds = api.login(&request("right")).await.expect("login");
    assert_eq!(creds.token, TOKEN);
    assert_eq!(creds.user.role, Role::Admin);
    assert_eq!(creds.user.email, "a@example.com");
}

#[tokio::test]
async fn login_rejection_carries_server_message() {
    let api = client(&spawn_backend().await);
    let err = api.login(&request("pending")).await.expect_err("rejected");
    assert_eq!(err, LoginError::Rejected("Account pending approval".to_owned()));
}

#[tokio::test]
async fn login_without_token_is_malformed() {
    let api = client(&spawn_backend().await);
    let err = api.login(&request("broken")).await.expect_err("malformed");
    assert!(matches!(err, LoginError::Malformed(_)));
}

#[tokio::test]
async fn login_against_closed_port_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = client(&format!("http://{addr}/api")).login(&request("right")).await.expect_err("no server");
    assert!(err.is_retryable());
}

// =============================================================
// authenticated endpoints
// =============================================================

#[tokio::test]
async fn tasks_send_bearer_token() {
    let api = client(&spawn_backend().await);
    let tasks = api.tasks(&session()).await.expect("tasks");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].task_name, "Write docs");
}

#[tokio::test]
async fn wrong_token_maps_to_api_error() {
    let api = client(&spawn_backend().await);
    let stale = Session::new("old", User::new("1", "a@example.com", Role::Employee));
    let err = api.tasks(&stale).await.expect_err("unauthorized");
    assert!(matches!(err, CliError::Api { status: 401, ref message } if message == "Missing or invalid token"));
}

#[tokio::test]
async fn signed_out_session_never_hits_network() {
    let api = client("http://127.0.0.1:9/api");
    let err = api.tasks(&Session::empty()).await.expect_err("no session");
    assert!(matches!(err, CliError::NoSession));
}

#[tokio::test]
async fn submit_log_surfaces_validation_error() {
    let api = client(&spawn_backend().await);
    let ok = NewTimeLog { task_id: 1, hours_logged: 2.5, description: "docs".to_owned() };
    api.submit_log(&session(), &ok).await.expect("logged");

    let too_much = NewTimeLog { hours_logged: 30.0, ..ok };
    let err = api.submit_log(&session(), &too_much).await.expect_err("rejected");
    assert!(matches!(err, CliError::Api { status: 400, ref message } if message == "Too many hours"));
}

#[tokio::test]
async fn users_and_approve() {
    let api = client(&spawn_backend().await);
    let users = api.users(&session()).await.expect("users");
    assert_eq!(users[0].user_id, "2");
    assert!(users[0].is_pending());

    api.approve_user(&session(), "2").await.expect("approve");
    let err = api.approve_user(&session(), "99").await.expect_err("missing");
    assert!(matches!(err, CliError::Api { status: 404, .. }));
}

#[tokio::test]
async fn register_conflict_reports_message() {
    let api = client(&spawn_backend().await);
    let req = RegisterRequest {
        name: "Ann".to_owned(),
        email: "taken@example.com".to_owned(),
        password: "hunter22".to_owned(),
    };
    let err = api.register(&req).await.expect_err("conflict");
    assert_eq!(err.to_string(), "server returned 409: Email already registered");

    let fresh = RegisterRequest { email: "new@example.com".to_owned(), ..req };
    api.register(&fresh).await.expect("registered");
}
