//! Domain entities shared by the persistent and degraded stores.
//!
//! Records are constructed once (in the facade layer) and handed to
//! whichever store ends up holding them, so derived fields such as the
//! free-month promotion date or a password digest are identical on both
//! paths. Ids are opaque strings; the two stores use different id schemes
//! and ids must never be assumed interchangeable in format.

mod booking;
pub use booking::*;

mod city;
pub use city::*;

mod complaint;
pub use complaint::*;

mod property;
pub use property::*;

mod review;
pub use review::*;

mod user;
pub use user::*;

/// Parse failure for a string-backed status or category enum, typically a
/// sign of a corrupted database row.
#[derive(thiserror::Error, Debug)]
#[error("invalid {kind} value `{value}`")]
pub struct InvalidEnumValue {
    pub kind: &'static str,
    pub value: String,
}
