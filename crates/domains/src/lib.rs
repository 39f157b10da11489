//! rusty-forum/crates/domains/src/lib.rs
//!
//! The central domain logic and interface definitions for rusty-forum:
//! entities with validation and soft-delete redaction, the comment/reply
//! tree mapper, and the repository capability traits.

pub mod error;
pub mod mapper;
pub mod models;
pub mod payload;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
