//! Post aggregation for CivicPulse.
//!
//! Fans out one search query to five upstream platform adapters behind the
//! proxy aggregation service, tolerating individual adapter failures by
//! substituting empty buckets, and holds the resulting corpus in a
//! [`PostStore`] with search-lifecycle state and a stale-response guard.

pub mod error;
pub mod sources;
pub mod store;

pub use error::AggregatorError;
pub use sources::AggregatorClient;
pub use store::{PostStore, StoreSnapshot};
