// src/application/commands/auth.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::SessionDto,
        error::{ApplicationError, ApplicationResult},
        ports::{
            security::{PasswordHasher, SessionStore},
            time::Clock,
        },
    },
    domain::admin::{AdminRepository, Email},
};

#[derive(Debug, Clone)]
pub struct SignInCommand {
    pub email: String,
    pub password: String,
}

pub struct AuthCommandService {
    admins: Arc<dyn AdminRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl AuthCommandService {
    pub fn new(
        admins: Arc<dyn AdminRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            admins,
            password_hasher,
            sessions,
            clock,
        }
    }

    /// Unknown e-mail and wrong password collapse into the same answer;
    /// the response never says which half failed.
    pub async fn sign_in(&self, command: SignInCommand) -> ApplicationResult<SessionDto> {
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;

        let admin = self
            .admins
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(&command.password, admin.password_hash.as_str())
            .await?;

        let now = self.clock.now();
        let session = self.sessions.issue(admin.id.into(), now).await?;

        Ok(SessionDto {
            token: session.token,
            expires_at: session.expires_at,
            admin: admin.into(),
        })
    }

    pub async fn sign_out(&self, token: &str) -> ApplicationResult<()> {
        self.sessions.revoke(token).await
    }
}
