//! Handlers for the folder provisioning function (`/folders/*`).

use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::{
    errors::{ServiceError, ServiceResult},
    models::account::AccountRequest,
    state::AppState,
};

/// `/folders/create-initial-folder`
pub async fn create_initial_folder(
    state: &AppState,
    req: &AccountRequest,
) -> ServiceResult<Response> {
    let result = state.folders.create_initial_folder(req).await?;
    Ok(Json(result).into_response())
}

/// `/folders/create-folder`
pub async fn create_folder(state: &AppState, req: &AccountRequest) -> ServiceResult<Response> {
    let result = state.folders.create_folder(req).await?;
    Ok(Json(result).into_response())
}

/// `/folders/get-all-tasks`. The route is reserved; there is no task model yet.
pub async fn get_all_tasks(_state: &AppState, _req: &AccountRequest) -> ServiceResult<Response> {
    Err(ServiceError::NotImplemented("get-all-tasks"))
}

/// `/folders/delete-task`. Reserved alongside `get-all-tasks`.
pub async fn delete_task(_state: &AppState, _req: &AccountRequest) -> ServiceResult<Response> {
    Err(ServiceError::NotImplemented("delete-task"))
}
