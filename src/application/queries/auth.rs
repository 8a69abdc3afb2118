// src/application/queries/auth.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AdminDto,
        error::ApplicationResult,
        ports::{security::SessionStore, time::Clock},
    },
    domain::admin::{AdminId, AdminRepository},
};

pub struct AuthQueryService {
    admins: Arc<dyn AdminRepository>,
    sessions: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl AuthQueryService {
    pub fn new(
        admins: Arc<dyn AdminRepository>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            admins,
            sessions,
            clock,
        }
    }

    /// Resolve a bearer token to the admin behind it. Expired or unknown
    /// tokens come back as `None`, as does a session whose admin row was
    /// removed from the allow-list since sign-in.
    pub async fn current_admin(&self, token: &str) -> ApplicationResult<Option<AdminDto>> {
        let now = self.clock.now();
        let Some(admin_id) = self.sessions.resolve(token, now).await? else {
            return Ok(None);
        };

        let admin = self.admins.find_by_id(AdminId(admin_id)).await?;
        Ok(admin.map(Into::into))
    }
}
