//! Response bodies for the file and folder operations.

use serde::Serialize;

/// Result of `/files/get-item-count`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCount {
    pub user_id: String,
    pub item_count: u64,
    pub prefix: String,
}

/// Result of `/files/get-folder-size`.
///
/// The MB and GB figures use binary units and are fixed to two decimals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSize {
    pub user_id: String,
    pub total_size_bytes: u64,
    #[serde(rename = "totalSizeMB")]
    pub total_size_mb: String,
    #[serde(rename = "totalSizeGB")]
    pub total_size_gb: String,
    pub item_count: u64,
    pub prefix: String,
}

/// Result of `/folders/create-initial-folder`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialFolders {
    pub success: bool,
    pub message: String,
    pub folders: Vec<String>,
    pub base_path: String,
    pub bucket_name: String,
}

/// Result of `/folders/create-folder`. `folder_path` is the full key written.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFolder {
    pub success: bool,
    pub message: String,
    pub folder_path: String,
    pub bucket_name: String,
}
