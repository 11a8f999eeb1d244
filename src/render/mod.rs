//! Scene graph to output tree.
//!
//! [`session::RenderSession`] owns all state that outlives a single pass; the tree walk itself
//! lives in `tree` as methods on the session.

pub mod events;
pub mod nested;
pub mod options;
pub mod session;
pub mod tree;
