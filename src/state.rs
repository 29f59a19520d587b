//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, LostAndFoundService, QrcodeService};
use crate::domain::repositories::HealthRepository;
use crate::infrastructure::persistence::{
    PgHealthRepository, PgLostAndFoundRepository, PgQrcodeRepository, PgSessionRepository,
};

/// Services and health checks shared across requests.
///
/// Cloning is cheap: every field is an [`Arc`]. Fields are public so tests can
/// assemble a state over in-memory repositories.
#[derive(Clone)]
pub struct AppState {
    pub lost_and_found_service: Arc<LostAndFoundService>,
    pub qrcode_service: Arc<QrcodeService>,
    pub auth_service: Arc<AuthService>,
    pub health: Arc<dyn HealthRepository>,
}

impl AppState {
    /// Wires the PostgreSQL repositories into the services.
    pub fn from_pool(pool: Arc<PgPool>, token_signing_secret: String) -> Self {
        let lost_and_found_repository = Arc::new(PgLostAndFoundRepository::new(pool.clone()));
        let qrcode_repository = Arc::new(PgQrcodeRepository::new(pool.clone()));
        let session_repository = Arc::new(PgSessionRepository::new(pool.clone()));

        Self {
            lost_and_found_service: Arc::new(LostAndFoundService::new(lost_and_found_repository)),
            qrcode_service: Arc::new(QrcodeService::new(qrcode_repository)),
            auth_service: Arc::new(AuthService::new(session_repository, token_signing_secret)),
            health: Arc::new(PgHealthRepository::new(pool)),
        }
    }
}
