//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the stores and the credential/token utilities.

pub mod job;
pub mod user;

pub use job::JobService;
pub use user::UserService;
