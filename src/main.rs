// src/main.rs
use anyhow::Result;
use axum::{ServiceExt, body::Body};
use commentary_core::{
    application::{
        ports::{events::EventPublisher, ids::CommentIdGenerator, time::Clock},
        services::ApplicationServices,
    },
    config::{AppConfig, EventsConfig},
    domain::{comment::CommentRepository, user::UserRepository},
    infrastructure::{
        database,
        ids::UuidCommentIdGenerator,
        messaging::{LogEventPublisher, RedisStreamPublisher, RedisStreamSettings},
        repositories::{PostgresCommentRepository, PostgresUserRepository},
        time::SystemClock,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
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

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!(max_connections = config.database_max_connections(), "database ready");

    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let publisher = build_publisher(config.events())?;
    let ids: Arc<dyn CommentIdGenerator> = Arc::new(UuidCommentIdGenerator);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        comment_repo,
        user_repo,
        publisher,
        ids,
        clock,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    Ok(())
}

fn build_publisher(events: &EventsConfig) -> Result<Arc<dyn EventPublisher>> {
    match events.redis_url.as_deref() {
        Some(url) => {
            let mut settings = RedisStreamSettings::new(url);
            settings.publish_timeout = events.publish_timeout;
            settings.max_len = events.stream_max_len;
            let publisher = RedisStreamPublisher::new(&settings)?;
            tracing::info!(
                timeout_ms = u64::try_from(events.publish_timeout.as_millis()).unwrap_or(u64::MAX),
                max_len = events.stream_max_len,
                "publishing change events to redis streams"
            );
            Ok(Arc::new(publisher))
        }
        None => {
            tracing::warn!("EVENTS_REDIS_URL not set; change events are only logged");
            Ok(Arc::new(LogEventPublisher))
        }
    }
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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
