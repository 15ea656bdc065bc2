//! API index and unknown-endpoint handling

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use super::{error_response, RouteError};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Endpoints {
    get_all_tasks: &'static str,
    create_task: &'static str,
    get_task: &'static str,
    update_task: &'static str,
    partial_update: &'static str,
    delete_task: &'static str,
}

#[derive(Serialize)]
struct IndexResponse {
    message: &'static str,
    endpoints: Endpoints,
}

/// GET / - Describe the available endpoints
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome to the To-Do API",
        endpoints: Endpoints {
            get_all_tasks: "GET /tasks",
            create_task: "POST /tasks",
            get_task: "GET /tasks/:id",
            update_task: "PUT /tasks/:id",
            partial_update: "PATCH /tasks/:id",
            delete_task: "DELETE /tasks/:id",
        },
    })
}

pub async fn endpoint_not_found() -> RouteError {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;
    use todo_core::task::{MemoryTaskStore, UpdatePolicy};

    use crate::state::AppState;

    async fn request(method: &str, uri: &str) -> (StatusCode, Value) {
        let state = AppState::with_storage(
            Arc::new(MemoryTaskStore::new()),
            UpdatePolicy::default(),
            PathBuf::from("tasks.json"),
        );
        let app = crate::routes::router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn index_lists_endpoints() {
        let (status, payload) = request("GET", "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["message"], "Welcome to the To-Do API");
        assert_eq!(payload["endpoints"]["createTask"], "POST /tasks");
        assert_eq!(payload["endpoints"]["partialUpdate"], "PATCH /tasks/:id");
    }

    #[tokio::test]
    async fn unknown_path_is_json_404() {
        let (status, payload) = request("GET", "/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload["error"], "Endpoint not found");
    }

    #[tokio::test]
    async fn unsupported_method_is_json_404() {
        let (status, payload) = request("POST", "/tasks/some-id").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload["error"], "Endpoint not found");
    }

    #[tokio::test]
    async fn health_reports_data_file() {
        let (status, payload) = request("GET", "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["dataFile"], "tasks.json");
    }
}
