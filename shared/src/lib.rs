//! Job Board Shared Library
//!
//! This crate contains the wire types, stored models, and pure validation
//! helpers used by the backend and its tests.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{JobPosting, JobPostingPatch, NewJobPosting, NewUser, User};
pub use types::*;
