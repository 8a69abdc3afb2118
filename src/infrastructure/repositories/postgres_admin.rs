// src/infrastructure/repositories/postgres_admin.rs
use super::map_sqlx;
use crate::domain::admin::{Admin, AdminId, AdminRepository, Email, NewAdmin, PasswordHash};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresAdminRepository {
    pool: PgPool,
}

impl PostgresAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for Admin {
    type Error = DomainError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        Ok(Admin {
            id: AdminId(row.id),
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn find_by_id(&self, id: AdminId) -> DomainResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, password_hash, created_at FROM admins WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Admin::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, password_hash, created_at FROM admins WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Admin::try_from).transpose()
    }

    async fn upsert(&self, admin: NewAdmin) -> DomainResult<Admin> {
        let row = sqlx::query_as::<_, AdminRow>(
            "INSERT INTO admins (id, email, password_hash, created_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (email) DO UPDATE SET password_hash = EXCLUDED.password_hash
             RETURNING id, email, password_hash, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(admin.email.as_str())
        .bind(admin.password_hash.as_str())
        .bind(admin.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Admin::try_from(row)
    }
}
