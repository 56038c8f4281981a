// src/web/routes.rs
use crate::{
    state::AppState,
    web::{attendance_handlers, auth_handlers, student_handlers, teacher_handlers, user_handlers},
};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        // --- Utilizadores ---
        .route("/users", get(user_handlers::list_users).post(user_handlers::create_user))
        .route(
            "/users/{id}",
            get(user_handlers::get_user)
                .put(user_handlers::update_user)
                .delete(user_handlers::delete_user),
        )
        // --- Alunos ---
        .route("/students", get(student_handlers::list_students).post(student_handlers::create_student))
        .route(
            "/students/{id}",
            get(student_handlers::get_student)
                .put(student_handlers::update_student)
                .delete(student_handlers::delete_student),
        )
        // --- Professores ---
        .route("/teachers", get(teacher_handlers::list_teachers).post(teacher_handlers::create_teacher))
        .route(
            "/teachers/{id}",
            get(teacher_handlers::get_teacher)
                .put(teacher_handlers::update_teacher)
                .delete(teacher_handlers::delete_teacher),
        )
        // --- Presenças: só listar e marcar ---
        .route(
            "/attendance",
            get(attendance_handlers::list_attendance).post(attendance_handlers::mark_attendance),
        )
        // --- Login (consulta de role) ---
        .route("/auth/login", post(auth_handlers::handle_login))
        .with_state(app_state)
}

/// Uma única origem autorizada, qualquer método e qualquer header.
pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        // Lista (não 'exact'): origens fora da lista ficam sem Access-Control-Allow-Origin
        .allow_origin([allowed_origin])
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt; // oneshot

    async fn app() -> Router {
        create_router(AppState {
            db_pool: memory_pool().await,
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn student_lifecycle() {
        let app = app().await;

        let resp = send(&app, Method::POST, "/students", Some(json!({"name": "Ana", "age": 10, "class": "4B"}))).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(resp.headers()[header::LOCATION], "/students/1");
        assert_eq!(body_json(resp).await, json!({"id": 1, "name": "Ana", "age": 10, "class": "4B"}));

        let resp = send(&app, Method::PUT, "/students/1", Some(json!({"name": "Ana", "age": 11, "class": "4B"}))).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = send(&app, Method::GET, "/students/1", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["age"], 11);

        let resp = send(&app, Method::DELETE, "/students/1", None).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = send(&app, Method::GET, "/students/1", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = send(&app, Method::DELETE, "/students/1", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_collections_list_as_empty_arrays() {
        let app = app().await;
        for uri in ["/users", "/students", "/teachers", "/attendance"] {
            let resp = send(&app, Method::GET, uri, None).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
            assert_eq!(body_json(resp).await, json!([]), "{}", uri);
        }
    }

    #[tokio::test]
    async fn null_or_missing_bodies_are_rejected_before_insert() {
        let app = app().await;

        let resp = send(&app, Method::POST, "/teachers", Some(Value::Null)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = send(&app, Method::POST, "/users", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = send(&app, Method::POST, "/students", Some(json!({"name": "sem idade"}))).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = send(&app, Method::POST, "/attendance", Some(Value::Null)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        for uri in ["/users", "/students", "/teachers", "/attendance"] {
            let resp = send(&app, Method::GET, uri, None).await;
            assert_eq!(body_json(resp).await, json!([]), "{}", uri);
        }
    }

    #[tokio::test]
    async fn user_update_checks_id_then_existence() {
        let app = app().await;
        let body = json!({"name": "Rui", "email": "rui@example.com", "passwordHash": "h", "role": "admin"});

        let resp = send(&app, Method::PUT, "/users/0", Some(body.clone())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = send(&app, Method::PUT, "/users/5", Some(body.clone())).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = send(&app, Method::POST, "/users", Some(body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(resp.headers()[header::LOCATION], "/users/1");

        let changed = json!({"id": 99, "name": "Rui M.", "email": "rui@example.com", "passwordHash": "h2", "role": "teacher"});
        let resp = send(&app, Method::PUT, "/users/1", Some(changed)).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = send(&app, Method::GET, "/users/1", None).await;
        assert_eq!(
            body_json(resp).await,
            json!({"id": 1, "name": "Rui M.", "email": "rui@example.com", "passwordHash": "h2", "role": "teacher"})
        );
    }

    #[tokio::test]
    async fn non_numeric_id_is_a_bad_request() {
        let app = app().await;
        let resp = send(&app, Method::GET, "/teachers/abc", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn teacher_create_points_to_get_by_id() {
        let app = app().await;
        let resp = send(&app, Method::POST, "/teachers", Some(json!({"name": "Sra. Lima"}))).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();

        let resp = send(&app, Method::GET, &location, None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["name"], "Sra. Lima");
    }

    #[tokio::test]
    async fn attendance_is_acknowledged_and_listed() {
        let app = app().await;
        let resp = send(
            &app,
            Method::POST,
            "/attendance",
            Some(json!({"studentId": 3, "date": "2024-09-16", "status": "present"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"message": "Attendance marked successfully"}));

        let resp = send(&app, Method::GET, "/attendance", None).await;
        assert_eq!(
            body_json(resp).await,
            json!([{"id": 1, "studentId": 3, "date": "2024-09-16", "status": "present"}])
        );
    }

    #[tokio::test]
    async fn attendance_has_no_item_routes() {
        let app = app().await;
        let resp = send(&app, Method::GET, "/attendance/1", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = send(&app, Method::DELETE, "/attendance", None).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_unauthorized() {
        let app = app().await;
        let resp = send(&app, Method::POST, "/auth/login", Some(json!({"email": "x@example.com"}))).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(resp).await, "Invalid credentials");
    }

    #[tokio::test]
    async fn login_returns_role_without_checking_password() {
        let app = app().await;
        let user = json!({"name": "Eva", "email": "eva@example.com", "passwordHash": "secret-hash", "role": "teacher"});
        send(&app, Method::POST, "/users", Some(user)).await;

        let resp = send(
            &app,
            Method::POST,
            "/auth/login",
            Some(json!({"email": "eva@example.com", "password": "qualquer-coisa"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"message": "Login successful", "role": "teacher"}));
    }

    #[tokio::test]
    async fn login_with_shared_email_uses_the_oldest_user() {
        let app = app().await;
        for role in ["student", "admin"] {
            let user = json!({"name": "Duplicado", "email": "dup@example.com", "passwordHash": "h", "role": role});
            send(&app, Method::POST, "/users", Some(user)).await;
        }

        let resp = send(&app, Method::POST, "/auth/login", Some(json!({"email": "dup@example.com"}))).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["role"], "student");
    }

    #[tokio::test]
    async fn cors_allows_only_the_configured_origin() {
        let app = app()
            .await
            .layer(cors_layer(HeaderValue::from_static("http://localhost:3000")));

        let preflight = |origin: &'static str| {
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/students")
                .header(header::ORIGIN, origin)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap()
        };

        let resp = app.clone().oneshot(preflight("http://localhost:3000")).await.unwrap();
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:3000");

        let resp = app.oneshot(preflight("http://evil.example")).await.unwrap();
        assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
