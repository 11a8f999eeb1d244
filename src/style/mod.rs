//! Style record resolution.

/// Style record to presentation attributes.
pub mod resolve;
