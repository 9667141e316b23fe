//! Catalog search criteria applied in process over the property list, the
//! same surface the `/properties` page exposes. The list is small enough
//! that filtering after the read beats pushing predicates into two very
//! different backing stores.

mod filter;
pub use filter::*;
