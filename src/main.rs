use axum_extra::extract::cookie::Key;
use handraise::db::ClassroomStorage;
use handraise::router::AppState;
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &handraise::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        bind_addr = %cfg.bind_addr,
        loglevel = %cfg.loglevel
    );

    if cfg.teacher_password == handraise::config::DEFAULT_TEACHER_PASSWORD {
        warn!("teacher password is the built-in default; set HANDRAISE_TEACHER_PASSWORD");
    }

    let cookie_key = match cfg.session_secret.as_deref() {
        Some(secret) if secret.len() >= 32 => Key::derive_from(secret.as_bytes()),
        Some(_) => {
            return Err("HANDRAISE_SESSION_SECRET must be at least 32 bytes".into());
        }
        None => {
            warn!("no HANDRAISE_SESSION_SECRET configured; teacher sessions will not survive a restart");
            Key::generate()
        }
    };

    let storage = ClassroomStorage::connect(&cfg.database_url).await?;

    // Build axum router and serve
    let state = AppState::new(storage, cookie_key);
    let app = handraise::router::handraise_router(state);

    let listener = TcpListener::bind(cfg.bind_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
