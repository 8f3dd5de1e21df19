//! Shared types for the country → port → good selection domain.
//!
//! The upstream service speaks LoopBack-style JSON: list endpoints return
//! arrays of records with prefixed field names (`id_negara`, `nama_pelabuhan`
//! and so on) and accept a `filter={"where":{...}}` query parameter.

pub mod country;
pub mod good;
pub mod port;

// Re-exports
pub use country::{Country, CountryRecord};
pub use good::Good;
pub use port::{Port, PortRecord};

/// Build the upstream `where`-filter JSON for a single id field.
///
/// `where_filter("id_negara", 1)` → `{"where":{"id_negara":1}}`
pub fn where_filter(field: &str, id: i64) -> String {
    serde_json::json!({ "where": { field: id } }).to_string()
}
