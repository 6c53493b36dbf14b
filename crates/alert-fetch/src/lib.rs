//! Alert Fetching
//!
//! Retrieves alert batches from the alerts endpoint. Internally every
//! failure is a typed [`FetchError`]; the [`AlertFetcher::load_alerts`]
//! boundary collapses failures to an empty batch plus a logged
//! diagnostic, so rendering always proceeds with a valid sequence.

mod client;
mod error;

pub use client::{AlertFetcher, FetchConfig};
pub use error::FetchError;
