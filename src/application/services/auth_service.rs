//! Caller identity resolution for bearer tokens.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::AuthUser;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Hashes a raw token with HMAC-SHA256 keyed by `signing_secret`.
///
/// Returns a 64-character lowercase hex-encoded MAC. The admin CLI uses the same
/// function when issuing sessions, so both sides must share the secret.
pub fn hash_token(signing_secret: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Service resolving bearer tokens to the calling student.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before lookup,
/// so a read-only copy of the database is not enough to forge a session.
pub struct AuthService {
    repository: Arc<dyn SessionRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - session repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when sessions were created
    pub fn new(repository: Arc<dyn SessionRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Resolves a raw token to the student owning the session.
    ///
    /// On success the session's `last_used_at` is refreshed; a failure to do so is
    /// logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token matches no active session.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<AuthUser, AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        let Some(student_id) = self.repository.find_student_id(&token_hash).await? else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or revoked token" }),
            ));
        };

        if let Err(e) = self.repository.touch(&token_hash).await {
            tracing::warn!(error = %e, "Failed to update session last_used_at");
        }

        Ok(AuthUser::new(student_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSessionRepository;

    const SECRET: &str = "test-signing-secret";

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut mock_repo = MockSessionRepository::new();
        let expected_hash = hash_token(SECRET, "valid-token");

        mock_repo
            .expect_find_student_id()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(Some("202301010101".to_string())));
        mock_repo.expect_touch().times(1).returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), SECRET.to_string());

        let user = service.authenticate("valid-token").await.unwrap();
        assert_eq!(user.student_id, "202301010101");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_token() {
        let mut mock_repo = MockSessionRepository::new();
        mock_repo
            .expect_find_student_id()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_touch().times(0);

        let service = AuthService::new(Arc::new(mock_repo), SECRET.to_string());

        let result = service.authenticate("bogus").await;
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticate_survives_touch_failure() {
        let mut mock_repo = MockSessionRepository::new();
        mock_repo
            .expect_find_student_id()
            .times(1)
            .returning(|_| Ok(Some("s1".to_string())));
        mock_repo
            .expect_touch()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = AuthService::new(Arc::new(mock_repo), SECRET.to_string());

        assert!(service.authenticate("token").await.is_ok());
    }

    #[test]
    fn test_hash_token_consistency() {
        let hash1 = hash_token(SECRET, "test-token");
        let hash2 = hash_token(SECRET, "test-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_hash_token_depends_on_secret() {
        assert_ne!(
            hash_token("secret-a", "test-token"),
            hash_token("secret-b", "test-token")
        );
        assert_ne!(hash_token(SECRET, "token-1"), hash_token(SECRET, "token-2"));
    }
}
