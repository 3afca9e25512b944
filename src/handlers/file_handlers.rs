//! Handlers for the file metadata function (`/files/*`).

use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::{errors::ServiceResult, models::account::AccountRequest, state::AppState};

/// `/files/get-item-count`
pub async fn get_item_count(state: &AppState, req: &AccountRequest) -> ServiceResult<Response> {
    let result = state.files.get_item_count(req).await?;
    Ok(Json(result).into_response())
}

/// `/files/get-folder-size`
pub async fn get_folder_size(state: &AppState, req: &AccountRequest) -> ServiceResult<Response> {
    let result = state.files.get_folder_size(req).await?;
    Ok(Json(result).into_response())
}
