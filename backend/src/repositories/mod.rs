//! Document store access
//!
//! Each collection sits behind an async trait with a PostgreSQL backend and
//! an in-memory backend. Handlers only ever see the traits.

pub mod error;
pub mod job;
pub mod user;

pub use error::StoreError;
pub use job::{InMemoryJobStore, JobStore, PgJobStore};
pub use user::{InMemoryUserStore, PgUserStore, UserStore};

use sqlx::PgPool;
use std::sync::Arc;

/// Handles to both collections
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub jobs: Arc<dyn JobStore>,
}

impl Stores {
    /// Both collections backed by one PostgreSQL pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserStore::new(pool.clone())),
            jobs: Arc::new(PgJobStore::new(pool)),
        }
    }

    /// Fresh, empty in-memory collections
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::new()),
            jobs: Arc::new(InMemoryJobStore::new()),
        }
    }
}
