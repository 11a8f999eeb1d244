//! Element identity: mark ids, class tags and document-unique reference ids.

pub mod datum;
pub mod marks;
pub mod unique;
