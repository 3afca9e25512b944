//! Path-suffix dispatcher shared by the file and folder functions.
//!
//! Route resolution happens before the body is looked at, so an unknown path
//! is always a plain-text `400 Unknown route`. Known routes get a JSON body:
//! the operation result on success, `{ "error": ... }` otherwise.

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

use super::{file_handlers, folder_handlers};
use crate::{
    errors::{AppError, ServiceResult},
    models::account::AccountRequest,
    routes::routes::{Operation, resolve},
    state::AppState,
};

pub async fn dispatch(State(state): State<AppState>, uri: Uri, body: Bytes) -> Response {
    let path = uri.path();
    let Some(operation) = resolve(&state.routes, path) else {
        warn!(path, "unknown route");
        return (StatusCode::BAD_REQUEST, "Unknown route").into_response();
    };

    let body_text = String::from_utf8_lossy(&body);
    info!(path, ?operation, body = %body_text, "dispatching request");

    match run(&state, operation, &body).await {
        Ok(response) => response,
        Err(err) => {
            error!(path, ?operation, body = %body_text, error = %err, "request failed");
            AppError::from(err).into_response()
        }
    }
}

async fn run(state: &AppState, operation: Operation, body: &[u8]) -> ServiceResult<Response> {
    let req = AccountRequest::from_body(body)?;
    match operation {
        Operation::GetItemCount => file_handlers::get_item_count(state, &req).await,
        Operation::GetFolderSize => file_handlers::get_folder_size(state, &req).await,
        Operation::CreateInitialFolder => folder_handlers::create_initial_folder(state, &req).await,
        Operation::CreateFolder => folder_handlers::create_folder(state, &req).await,
        Operation::GetAllTasks => folder_handlers::get_all_tasks(state, &req).await,
        Operation::DeleteTask => folder_handlers::delete_task(state, &req).await,
    }
}
