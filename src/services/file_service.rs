//! File metadata operations: object count and total size under a user prefix.
//!
//! Both operations walk every listing page for `<userId>/` sequentially; the
//! loop ends only when the store stops returning a continuation token.
//! Results are recomputed on every call.

use std::sync::Arc;

use tracing::{debug, instrument, trace};

use super::object_store::{ObjectStore, StoreError};
use crate::{
    errors::{ServiceError, ServiceResult},
    models::{
        account::AccountRequest,
        listing::ListingPage,
        results::{FolderSize, ItemCount},
    },
};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

#[derive(Clone)]
pub struct FileService {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl FileService {
    pub fn new(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
        }
    }

    /// Sum of the key counts the store reports for each page under the prefix.
    #[instrument(skip(self, req), fields(bucket = %self.bucket))]
    pub async fn get_item_count(&self, req: &AccountRequest) -> ServiceResult<ItemCount> {
        let user_id = req.require_user_id()?;
        let prefix = format!("{user_id}/");

        let mut item_count = 0u64;
        self.for_each_page(&prefix, |page| item_count += page.key_count)
            .await
            .map_err(ServiceError::backend("Failed to count items"))?;

        Ok(ItemCount {
            user_id: user_id.to_string(),
            item_count,
            prefix,
        })
    }

    /// Total bytes and number of itemized objects under the prefix.
    #[instrument(skip(self, req), fields(bucket = %self.bucket))]
    pub async fn get_folder_size(&self, req: &AccountRequest) -> ServiceResult<FolderSize> {
        let user_id = req.require_user_id()?;
        let prefix = format!("{user_id}/");

        let mut total_size = 0u64;
        let mut item_count = 0u64;
        self.for_each_page(&prefix, |page| {
            for obj in &page.objects {
                trace!(key = %obj.key, size = obj.size);
                total_size += obj.size;
                item_count += 1;
            }
        })
        .await
        .map_err(ServiceError::backend("Failed to compute folder size"))?;

        Ok(FolderSize {
            user_id: user_id.to_string(),
            total_size_bytes: total_size,
            total_size_mb: two_decimals(total_size as f64 / BYTES_PER_MB),
            total_size_gb: two_decimals(total_size as f64 / BYTES_PER_GB),
            item_count,
            prefix,
        })
    }

    /// Feed every page under `prefix` to `visit`, following continuation tokens.
    async fn for_each_page(
        &self,
        prefix: &str,
        mut visit: impl FnMut(&ListingPage),
    ) -> Result<(), StoreError> {
        let mut continuation_token: Option<String> = None;
        let mut pages = 0usize;
        loop {
            let page = self
                .store
                .list_page(&self.bucket, prefix, continuation_token.as_deref())
                .await?;
            pages += 1;
            visit(&page);

            match page.next_continuation_token {
                Some(token) => continuation_token = Some(token),
                None => break,
            }
        }
        debug!(prefix, pages, "listing complete");
        Ok(())
    }
}

fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}
