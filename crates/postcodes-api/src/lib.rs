//! Async Rust client for the [postcodes.io](https://postcodes.io) UK
//! postcode and geolocation lookup API.
//!
//! Every operation returns a typed [`Response`] envelope mirroring the
//! upstream `{ "status": <int>, "result": <T> }` wire shape. Upstream
//! errors (404 for an unknown postcode, 400 for a bad batch) decode into
//! the same envelope with `status` carrying the failure; [`Error`] is
//! reserved for problems that prevent an envelope from existing at all.
//!
//! ```no_run
//! use postcodes_api::PostcodesClient;
//!
//! # async fn run() -> Result<(), postcodes_api::Error> {
//! let client = PostcodesClient::new();
//!
//! let resp = client.lookup_postcode("SW1A 2AA").await?;
//! if let Some(record) = resp.data {
//!     println!("{} is in {:?}", record.postcode, record.region);
//! }
//!
//! let nearby = client
//!     .nearest_postcodes(-0.127, 51.503, Some(5), None, None)
//!     .await?;
//! for record in nearby.data.unwrap_or_default() {
//!     println!("nearby: {}", record.postcode);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The client is stateless after construction and safe to share across
//! tasks. No caching, no retries, no rate limiting: each call is exactly
//! one request/decode cycle against the configured root.

pub mod bulk;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod query;

pub use bulk::{GeolocationBatch, MAX_BATCH_SIZE, encode_postcode_batch};
pub use client::PostcodesClient;
pub use endpoints::{DEFAULT_API_ROOT, Endpoints};
pub use error::Error;
pub use models::{Geolocation, MultiResponse, Postcode, PostcodeCodes, Response};
