//! Task API endpoints
//!
//! RESTful API for task CRUD operations.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use todo_core::task::{NewTask, Task, TaskPatch};

use super::{error_response, route_error, RouteError};
use crate::state::AppState;

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks - List all tasks
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, RouteError> {
    let tasks = state.tasks().list().await.map_err(route_error)?;
    Ok(Json(tasks))
}

/// POST /tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), RouteError> {
    let Json(req) = payload.map_err(bad_body)?;
    let created = state.tasks().create(req).await.map_err(route_error)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /tasks/{id} - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, RouteError> {
    let task = state.tasks().get(&id).await.map_err(route_error)?;
    Ok(Json(task))
}

/// PUT /tasks/{id} - Update a task, at least one field required
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, RouteError> {
    let patch = patch_body(&state, &id, payload).await?;
    let updated = state.tasks().update(&id, patch).await.map_err(route_error)?;
    Ok(Json(updated))
}

/// PATCH /tasks/{id} - Partially update a task
async fn patch_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, RouteError> {
    let patch = patch_body(&state, &id, payload).await?;
    let updated = state.tasks().patch(&id, patch).await.map_err(route_error)?;
    Ok(Json(updated))
}

/// DELETE /tasks/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, RouteError> {
    state.tasks().delete(&id).await.map_err(route_error)?;
    Ok(StatusCode::NO_CONTENT)
}

fn bad_body(rejection: JsonRejection) -> RouteError {
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

/// Unwrap an update body. An unknown id is reported as 404 even when the
/// body itself is unusable.
async fn patch_body(
    state: &AppState,
    id: &str,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<TaskPatch, RouteError> {
    match payload {
        Ok(Json(patch)) => Ok(patch),
        Err(rejection) => {
            state.tasks().get(id).await.map_err(route_error)?;
            Err(bad_body(rejection))
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task)
                .put(update_task)
                .patch(patch_task)
                .delete(delete_task),
        )
}
