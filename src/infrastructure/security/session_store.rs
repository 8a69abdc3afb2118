// src/infrastructure/security/session_store.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::{IssuedSession, SessionStore},
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

/// Opaque bearer sessions backed by Postgres. Only a sha-256 digest of
/// each token is stored, so a leaked table cannot be replayed.
#[derive(Clone)]
pub struct PgSessionStore {
    pool: PgPool,
    ttl: Duration,
}

impl PgSessionStore {
    pub fn new(pool: PgPool, ttl: std::time::Duration) -> Self {
        Self {
            pool,
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::hours(12)),
        }
    }

    fn digest(token: &str) -> String {
        URL_SAFE_NO_PAD.encode(Sha256::digest(token.as_bytes()))
    }

    fn generate_token() -> String {
        format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn issue(&self, admin_id: Uuid, now: DateTime<Utc>) -> ApplicationResult<IssuedSession> {
        // Opportunistic sweep; expired rows are dead weight either way.
        sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let token = Self::generate_token();
        let expires_at = now + self.ttl;

        sqlx::query(
            "INSERT INTO sessions (token_digest, admin_id, created_at, expires_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(Self::digest(&token))
        .bind(admin_id)
        .bind(now)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(IssuedSession { token, expires_at })
    }

    async fn resolve(&self, token: &str, now: DateTime<Utc>) -> ApplicationResult<Option<Uuid>> {
        let admin_id: Option<Uuid> = sqlx::query_scalar(
            "SELECT admin_id FROM sessions WHERE token_digest = $1 AND expires_at > $2",
        )
        .bind(Self::digest(token))
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(admin_id)
    }

    async fn revoke(&self, token: &str) -> ApplicationResult<()> {
        sqlx::query("DELETE FROM sessions WHERE token_digest = $1")
            .bind(Self::digest(token))
            .execute(&self.pool)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }
}
