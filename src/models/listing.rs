//! One page of a prefix listing, as returned by the object store.

/// A single itemized object in a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub key: String,
    /// Size in bytes. The backend may omit it, in which case it is 0.
    pub size: u64,
}

/// A listing page for one prefix.
///
/// `key_count` is what the backend reports for the page and is not required to
/// match `objects.len()`. A `next_continuation_token` means more pages follow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    pub key_count: u64,
    pub objects: Vec<ObjectSummary>,
    pub next_continuation_token: Option<String>,
}
