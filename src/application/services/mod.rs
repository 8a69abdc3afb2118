// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{auth::AuthCommandService, posts::PostCommandService},
        ports::{
            security::{PasswordHasher, SessionStore},
            time::Clock,
            util::IdGenerator,
        },
        queries::{auth::AuthQueryService, health::HealthQueryService, posts::PostQueryService},
    },
    domain::{
        admin::AdminRepository,
        post::{PostRepository, TagRepository},
    },
};

/// One instance of every service, wired once at startup and shared by the
/// HTTP layer. Repositories and ports come in from outside; nothing in
/// here reaches for a global.
pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub auth_commands: Arc<AuthCommandService>,
    pub auth_queries: Arc<AuthQueryService>,
    pub health: Arc<HealthQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        tag_repo: Arc<dyn TagRepository>,
        admin_repo: Arc<dyn AdminRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&clock),
            Arc::clone(&ids),
        ));

        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_repo)));

        let auth_commands = Arc::new(AuthCommandService::new(
            Arc::clone(&admin_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&session_store),
            Arc::clone(&clock),
        ));

        let auth_queries = Arc::new(AuthQueryService::new(
            admin_repo,
            session_store,
            clock,
        ));

        Self {
            post_commands,
            post_queries,
            auth_commands,
            auth_queries,
            health: Arc::new(HealthQueryService),
        }
    }
}
