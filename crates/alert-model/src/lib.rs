//! Alert Data Model
//!
//! Wire types for security alerts as served by the alerts endpoint,
//! plus the timestamp parsing policy shared by the aggregator and the
//! table renderer.

mod record;

pub use record::AlertRecord;
