use anyhow::{Context, Result};
use folio_core::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use folio_core::config::AppConfig;
use folio_core::domain::content::ContentRepository;
use folio_core::infrastructure::{
    content::JsonContentRepository, profile::load_site_profile, time::SystemClock,
    util::DefaultSlugGenerator,
};
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let policy = config.content_policy();
    tracing::info!(
        production = config.is_production(),
        include_drafts = policy.include_drafts,
        home_limit = policy.home_limit,
        "content policy resolved"
    );

    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let content_repo: Arc<dyn ContentRepository> = Arc::new(
        JsonContentRepository::load(config.content_index_path(), slugger.as_ref())
            .context("loading content index")?,
    );
    let site_profile =
        Arc::new(load_site_profile(config.site_profile_path()).context("loading site profile")?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&content_repo),
        site_profile,
        clock,
        policy,
    ));

    let visible = services
        .preflight()
        .await
        .context("content preflight failed")?;
    tracing::info!(visible, "content preflight passed");

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

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
            tracing::warn!(error = %err, "failed to listen for CTRL+C");
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
                tracing::warn!(error = %err, "failed to install terminate handler");
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
