//! Complaint data contract and the pure derivations the dashboard views render.
//!
//! Nothing in this crate touches the browser: records come in as decoded JSON,
//! views get back grouped counts, filtered rows and chart geometry.

pub mod aggregate;
pub mod chart;
pub mod error;
pub mod filter;
pub mod model;

pub use aggregate::{
    GroupCount, complaints_by_day, complaints_by_location, complaints_by_type, total_count,
};
pub use error::DecodeError;
pub use filter::{ComplaintFilter, FacetOptions, SortDirection, SortKey, SortSpec};
pub use model::{ComplaintRecord, Media, MediaKind, decode_complaints};
