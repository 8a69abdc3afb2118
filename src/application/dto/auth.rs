use crate::domain::admin::Admin;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize)]
pub struct AdminDto {
    pub id: Uuid,
    pub email: String,
}

impl From<Admin> for AdminDto {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id.into(),
            email: admin.email.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionDto {
    pub token: String,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub admin: AdminDto,
}
