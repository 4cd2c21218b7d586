//! # quill-core
//!
//! Core types, traits, and abstractions for quillpad.
//!
//! This crate provides the domain model (notes and pageviews), the
//! repository trait definitions that `quill-db` implements, and the
//! visit-ranking algorithm behind the analytics page.

pub mod analytics;
pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use analytics::{rank_visits, PathVisits};
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
