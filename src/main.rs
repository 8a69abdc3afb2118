use balanza_core::application::{
    ports::{
        security::{PasswordHasher, SessionStore},
        time::Clock,
        util::IdGenerator,
    },
    services::ApplicationServices,
};
use balanza_core::config::AppConfig;
use balanza_core::domain::{
    admin::{AdminRepository, Email, NewAdmin, PasswordHash},
    post::{PostRepository, TagRepository},
};
use balanza_core::infrastructure::{
    database,
    repositories::{PostgresAdminRepository, PostgresPostRepository, PostgresTagRepository},
    security::{Argon2PasswordHasher, PgSessionStore},
    time::SystemClock,
    util::UuidIdGenerator,
};
use balanza_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool.clone()));
    let tag_repo: Arc<dyn TagRepository> = Arc::new(PostgresTagRepository::new(pool.clone()));
    let admin_repo: Arc<dyn AdminRepository> =
        Arc::new(PostgresAdminRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let session_store: Arc<dyn SessionStore> =
        Arc::new(PgSessionStore::new(pool.clone(), config.session_ttl()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator::default());

    ensure_bootstrap_admin(&config, &admin_repo, &password_hasher, &clock).await?;

    let services = Arc::new(ApplicationServices::new(
        post_repo,
        tag_repo,
        admin_repo,
        password_hasher,
        session_store,
        clock,
        ids,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Make sure the configured admin can sign in after a fresh deploy.
async fn ensure_bootstrap_admin(
    config: &AppConfig,
    admin_repo: &Arc<dyn AdminRepository>,
    password_hasher: &Arc<dyn PasswordHasher>,
    clock: &Arc<dyn Clock>,
) -> Result<()> {
    let Some(bootstrap) = config.admin_bootstrap() else {
        return Ok(());
    };

    let hash = password_hasher.hash(&bootstrap.password).await?;
    let admin = admin_repo
        .upsert(NewAdmin {
            email: Email::new(bootstrap.email.as_str())?,
            password_hash: PasswordHash::new(hash)?,
            created_at: clock.now(),
        })
        .await?;
    tracing::info!(admin = %admin.email, "bootstrap admin ensured");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
