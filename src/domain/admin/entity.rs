// src/domain/admin/entity.rs
use crate::domain::admin::value_objects::{AdminId, Email, PasswordHash};
use chrono::{DateTime, Utc};

/// Row in the admin allow-list. Being present in the list is the whole
/// authorization model; there are no roles beyond it.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: AdminId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}
