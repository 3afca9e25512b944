//! Folder provisioning: writes empty marker objects whose keys end in `/`.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, instrument};

use super::object_store::ObjectStore;
use crate::{
    errors::{ServiceError, ServiceResult},
    models::{
        account::AccountRequest,
        results::{CreatedFolder, InitialFolders},
    },
};

/// Sub-folders created under every new account root, in response order.
pub const INITIAL_SUBFOLDERS: [&str; 3] = ["documents", "images", "files"];

#[derive(Clone)]
pub struct FolderService {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl FolderService {
    pub fn new(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
        }
    }

    /// Write the account root marker plus the fixed sub-folders.
    ///
    /// The writes run concurrently and every one runs to completion; the
    /// first failure in key order then fails the whole call. Markers that
    /// were written stay in place.
    #[instrument(skip(self, req), fields(bucket = %self.bucket))]
    pub async fn create_initial_folder(&self, req: &AccountRequest) -> ServiceResult<InitialFolders> {
        let identifier = req.scaffold_identifier()?;
        let base_path = format!("{identifier}/");
        let folders = initial_folder_keys(&identifier);

        join_all(
            folders
                .iter()
                .map(|key| self.store.put_marker(&self.bucket, key)),
        )
        .await
        .into_iter()
        .collect::<Result<Vec<()>, _>>()
        .map_err(ServiceError::backend("Failed to create initial folders"))?;

        info!(base_path = %base_path, "initial folder structure created");
        Ok(InitialFolders {
            success: true,
            message: "Initial folder structure created successfully".into(),
            folders,
            base_path,
            bucket_name: self.bucket.clone(),
        })
    }

    /// Write a single marker at `<identifier>[/<folderPath>]/<folderName>/`.
    #[instrument(skip(self, req), fields(bucket = %self.bucket))]
    pub async fn create_folder(&self, req: &AccountRequest) -> ServiceResult<CreatedFolder> {
        let owner = req.folder_owner()?;
        let folder_name = req.require_folder_name()?;
        let key = folder_key(owner, req.folder_path(), folder_name);

        self.store
            .put_marker(&self.bucket, &key)
            .await
            .map_err(ServiceError::backend("Failed to create folder"))?;

        info!(key = %key, "folder created");
        Ok(CreatedFolder {
            success: true,
            message: "Folder created successfully".into(),
            folder_path: key,
            bucket_name: self.bucket.clone(),
        })
    }
}

/// Root marker first, then one marker per entry in `INITIAL_SUBFOLDERS`.
pub fn initial_folder_keys(identifier: &str) -> Vec<String> {
    std::iter::once(format!("{identifier}/"))
        .chain(
            INITIAL_SUBFOLDERS
                .iter()
                .map(|sub| format!("{identifier}/{sub}/")),
        )
        .collect()
}

pub fn folder_key(owner: &str, folder_path: Option<&str>, folder_name: &str) -> String {
    match folder_path {
        Some(path) => format!("{owner}/{path}/{folder_name}/"),
        None => format!("{owner}/{folder_name}/"),
    }
}
