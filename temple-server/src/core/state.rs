use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::store::TempleStore;

/// Server state - shared handles to every service
///
/// Cheap to clone: everything behind an `Arc`.
///
/// | Field | Type | Meaning |
/// |------|------|------|
/// | config | Config | immutable configuration |
/// | store | Arc<TempleStore> | in-memory temple state |
/// | jwt_service | Arc<JwtService> | token issue / validation |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<TempleStore>,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, store: TempleStore, jwt_service: JwtService) -> Self {
        Self {
            config,
            store: Arc::new(store),
            jwt_service: Arc::new(jwt_service),
        }
    }

    /// Build state from configuration with the seeded store
    pub fn initialize(config: &Config) -> Self {
        let store = TempleStore::seeded(config);
        let jwt_service = JwtService::with_config(config.jwt.clone());
        tracing::info!(
            temple = %config.temple_name,
            environment = %config.environment,
            "Server state initialized"
        );
        Self::new(config.clone(), store, jwt_service)
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn store(&self) -> &TempleStore {
        &self.store
    }
}
