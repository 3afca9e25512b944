//! In-memory `ObjectStore` double for tests.
//!
//! Serves scripted listing pages (chained through synthetic continuation
//! tokens), records every call and can be told to reject marker writes.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use super::object_store::{ObjectStore, StoreError, StoreResult};
use crate::models::listing::{ListingPage, ObjectSummary};

#[derive(Default)]
pub struct MemoryStore {
    pages: Vec<ListingPage>,
    fail_puts_containing: Option<String>,
    fail_probe: bool,
    list_calls: Mutex<Vec<(String, String, Option<String>)>>,
    put_calls: Mutex<Vec<(String, String)>>,
    probe_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `pages` in order. Continuation tokens are generated here, any
    /// token already set on the pages is overwritten.
    pub fn with_pages(mut self, pages: Vec<ListingPage>) -> Self {
        let last = pages.len().saturating_sub(1);
        self.pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, mut page)| {
                page.next_continuation_token = (i < last).then(|| format!("page-{}", i + 1));
                page
            })
            .collect();
        self
    }

    /// Serve a single page whose key count matches its contents.
    pub fn with_objects(self, objects: &[(&str, u64)]) -> Self {
        let objects: Vec<ObjectSummary> = objects
            .iter()
            .map(|(key, size)| ObjectSummary {
                key: key.to_string(),
                size: *size,
            })
            .collect();
        self.with_pages(vec![ListingPage {
            key_count: objects.len() as u64,
            objects,
            next_continuation_token: None,
        }])
    }

    /// Reject any marker write whose key contains `fragment`.
    pub fn failing_puts_containing(mut self, fragment: &str) -> Self {
        self.fail_puts_containing = Some(fragment.to_string());
        self
    }

    pub fn failing_probe(mut self) -> Self {
        self.fail_probe = true;
        self
    }

    /// `(bucket, prefix, continuation_token)` for every list call.
    pub fn list_calls(&self) -> Vec<(String, String, Option<String>)> {
        self.list_calls.lock().unwrap().clone()
    }

    /// `(bucket, key)` for every attempted marker write.
    pub fn put_calls(&self) -> Vec<(String, String)> {
        self.put_calls.lock().unwrap().clone()
    }

    pub fn probe_calls(&self) -> usize {
        self.probe_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.list_calls().len() + self.put_calls().len() + self.probe_calls()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<&str>,
    ) -> StoreResult<ListingPage> {
        self.list_calls.lock().unwrap().push((
            bucket.to_string(),
            prefix.to_string(),
            continuation_token.map(str::to_owned),
        ));

        let index = match continuation_token {
            None => 0,
            Some(token) => token
                .strip_prefix("page-")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| StoreError::List {
                    prefix: prefix.to_string(),
                    message: format!("unknown continuation token `{token}`"),
                })?,
        };

        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }

    async fn put_marker(&self, bucket: &str, key: &str) -> StoreResult<()> {
        self.put_calls
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string()));

        match &self.fail_puts_containing {
            Some(fragment) if key.contains(fragment.as_str()) => Err(StoreError::Put {
                key: key.to_string(),
                message: "access denied".into(),
            }),
            _ => Ok(()),
        }
    }

    async fn probe(&self, bucket: &str) -> StoreResult<()> {
        self.probe_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_probe {
            return Err(StoreError::Probe {
                bucket: bucket.to_string(),
                message: "no such bucket".into(),
            });
        }
        Ok(())
    }
}
