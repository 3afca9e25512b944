//! src/services/object_store.rs
//!
//! The object storage seam used by both functions. `ObjectStore` covers the
//! three calls this service makes (paginated prefix listing, empty marker
//! writes and a bucket probe); `S3Store` implements it over `aws-sdk-s3`.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, meta::region::RegionProviderChain};
use aws_sdk_s3::{
    Client as S3Client, config::Region, error::DisplayErrorContext, primitives::ByteStream,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    config::AppConfig,
    models::listing::{ListingPage, ObjectSummary},
};

/// Qualifier that may precede a bucket name in configuration.
pub const S3_ARN_PREFIX: &str = "arn:aws:s3:::";

/// Content type written on folder marker objects.
pub const DIRECTORY_CONTENT_TYPE: &str = "application/x-directory";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("listing prefix `{prefix}` failed: {message}")]
    List { prefix: String, message: String },
    #[error("writing `{key}` failed: {message}")]
    Put { key: String, message: String },
    #[error("bucket `{bucket}` is not reachable: {message}")]
    Probe { bucket: String, message: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Object storage operations needed by the file and folder services.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch one listing page under `prefix`, continuing from `continuation_token`.
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<&str>,
    ) -> StoreResult<ListingPage>;

    /// Write an empty folder marker at `key`.
    async fn put_marker(&self, bucket: &str, key: &str) -> StoreResult<()>;

    /// Cheap reachability check used by the readiness probe.
    async fn probe(&self, bucket: &str) -> StoreResult<()>;
}

/// Strip the `arn:aws:s3:::` qualifier if present, otherwise return the value
/// unchanged.
pub fn bucket_name_from(value: &str) -> &str {
    value.strip_prefix(S3_ARN_PREFIX).unwrap_or(value)
}

/// `ObjectStore` backed by Amazon S3 or an S3-compatible endpoint.
#[derive(Clone)]
pub struct S3Store {
    client: S3Client,
}

impl S3Store {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }

    /// Build the process-wide client from configuration. Credentials come from
    /// the default AWS provider chain.
    pub async fn from_config(cfg: &AppConfig) -> Self {
        let region = RegionProviderChain::first_try(Region::new(cfg.region.clone()));
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = &cfg.endpoint_url {
            debug!("Using custom S3 endpoint {}", endpoint);
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self::new(S3Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<&str>,
    ) -> StoreResult<ListingPage> {
        debug!(bucket, prefix, ?continuation_token, "ListObjectsV2");
        let resp = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .prefix(prefix)
            .set_continuation_token(continuation_token.map(str::to_owned))
            .send()
            .await
            .map_err(|err| StoreError::List {
                prefix: prefix.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        let objects = resp
            .contents()
            .iter()
            .map(|obj| ObjectSummary {
                key: obj.key().unwrap_or_default().to_string(),
                size: obj.size().unwrap_or(0).max(0) as u64,
            })
            .collect();

        Ok(ListingPage {
            key_count: resp.key_count().unwrap_or(0).max(0) as u64,
            objects,
            next_continuation_token: resp.next_continuation_token().map(str::to_owned),
        })
    }

    async fn put_marker(&self, bucket: &str, key: &str) -> StoreResult<()> {
        debug!(bucket, key, "PutObject (folder marker)");
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from_static(b""))
            .content_type(DIRECTORY_CONTENT_TYPE)
            .send()
            .await
            .map_err(|err| StoreError::Put {
                key: key.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;
        Ok(())
    }

    async fn probe(&self, bucket: &str) -> StoreResult<()> {
        self.client
            .head_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| StoreError::Probe {
                bucket: bucket.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?;
        Ok(())
    }
}
