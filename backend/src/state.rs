//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Pre-compute expensive resources**: JWT keys and store handles are created once
//! 2. **Cheap cloning**: All fields use Arc or are already Clone-cheap
//! 3. **Immutable after creation**: State is read-only during request handling

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repositories::{JobStore, Stores, UserStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Users and jobs collections
    pub stores: Stores,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
}

impl AppState {
    /// Create a new application state
    ///
    /// Derives the JWT keys from the configured secret, so call this once
    /// at startup.
    pub fn new(stores: Stores, config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry_secs);

        Self {
            stores,
            config: Arc::new(config),
            jwt,
        }
    }

    #[inline]
    pub fn users(&self) -> &dyn UserStore {
        self.stores.users.as_ref()
    }

    #[inline]
    pub fn jobs(&self) -> &dyn JobStore {
        self.stores.jobs.as_ref()
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
