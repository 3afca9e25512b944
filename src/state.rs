//! Shared handler state: one store client, both services, the active route table.

use std::sync::Arc;

use crate::{
    config::Function,
    routes::routes::{Route, route_table},
    services::{
        file_service::FileService, folder_service::FolderService, object_store::ObjectStore,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
    pub bucket: String,
    pub files: FileService,
    pub folders: FolderService,
    pub routes: Arc<[Route]>,
}

impl AppState {
    /// `store` is the process-wide client; every service shares it.
    pub fn new(store: Arc<dyn ObjectStore>, bucket: impl Into<String>, function: Function) -> Self {
        let bucket = bucket.into();
        Self {
            files: FileService::new(store.clone(), bucket.clone()),
            folders: FolderService::new(store.clone(), bucket.clone()),
            routes: route_table(function).into(),
            store,
            bucket,
        }
    }
}
