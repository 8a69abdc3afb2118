// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Opaque bearer-session storage. Tokens are generated here and never
/// stored in recoverable form.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn issue(&self, admin_id: Uuid, now: DateTime<Utc>) -> ApplicationResult<IssuedSession>;
    /// Resolve a presented token to the admin it belongs to, if the
    /// session exists and has not expired.
    async fn resolve(&self, token: &str, now: DateTime<Utc>) -> ApplicationResult<Option<Uuid>>;
    async fn revoke(&self, token: &str) -> ApplicationResult<()>;
}
