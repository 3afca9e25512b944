//! Route tables for the file and folder functions.
//!
//! ## Structure
//! - **Probes** (exact paths)
//!   - `GET /healthz` — liveness
//!   - `GET /readyz`  — readiness (bucket probe)
//!
//! - **File metadata** (path suffix, any method)
//!   - `/files/get-item-count`
//!   - `/files/get-folder-size`
//!
//! - **Folder provisioning** (path suffix, any method)
//!   - `/folders/create-initial-folder`
//!   - `/folders/create-folder`
//!   - `/folders/get-all-tasks`  — declared, not yet implemented
//!   - `/folders/delete-task`    — declared, not yet implemented
//!
//! Anything else falls through to the dispatcher and gets `400 Unknown route`.

use crate::{
    config::Function,
    handlers::{
        dispatch_handler::dispatch,
        health_handlers::{healthz, readyz},
    },
    state::AppState,
};
use axum::{Router, routing::get};

/// Named operations reachable through the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetItemCount,
    GetFolderSize,
    CreateInitialFolder,
    CreateFolder,
    GetAllTasks,
    DeleteTask,
}

/// Maps a path suffix to the operation it selects.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub suffix: &'static str,
    pub operation: Operation,
}

const fn route(suffix: &'static str, operation: Operation) -> Route {
    Route { suffix, operation }
}

pub const FILE_ROUTES: &[Route] = &[
    route("/files/get-item-count", Operation::GetItemCount),
    route("/files/get-folder-size", Operation::GetFolderSize),
];

pub const FOLDER_ROUTES: &[Route] = &[
    route("/folders/create-initial-folder", Operation::CreateInitialFolder),
    route("/folders/create-folder", Operation::CreateFolder),
    route("/folders/get-all-tasks", Operation::GetAllTasks),
    route("/folders/delete-task", Operation::DeleteTask),
];

/// The routes one deployment answers.
pub fn route_table(function: Function) -> Vec<Route> {
    match function {
        Function::Files => FILE_ROUTES.to_vec(),
        Function::Folders => FOLDER_ROUTES.to_vec(),
        Function::All => FILE_ROUTES.iter().chain(FOLDER_ROUTES).copied().collect(),
    }
}

/// First route whose suffix ends `path`.
pub fn resolve(table: &[Route], path: &str) -> Option<Operation> {
    table
        .iter()
        .find(|r| path.ends_with(r.suffix))
        .map(|r| r.operation)
}

/// Build and return the router. Probes are exact GET routes; every other
/// path or method goes through the suffix dispatcher.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz).fallback(dispatch))
        .route("/readyz", get(readyz).fallback(dispatch))
        .fallback(dispatch)
}
