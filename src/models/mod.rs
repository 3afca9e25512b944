//! Request and response records for the file and folder functions.
//!
//! Nothing here is persisted. Requests are decoded from the JSON body of a
//! single invocation, listing pages come back from the object store, and
//! results are serialized straight into the response body.

pub mod account;
pub mod listing;
pub mod results;
