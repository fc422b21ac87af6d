//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors stay in
//! `auth::AuthError` and the shared `AppError`.
//!
//! `api create-user <email> <password>` seeds a user and exits.

use auth::domain::Email;
use auth::{Argon2Encrypter, AuthConfig, Database, PgUserRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use platform::crypto::from_base64;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 31113;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let max_connections = env_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS);

    let db = Database::new();
    db.connect(&database_url, max_connections).await?;

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&db.pool().await?)
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = load_auth_config()?;

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => {}
        Some("create-user") => {
            let result = create_user(&db, &auth_config, &args[1..]).await;
            db.disconnect().await;
            return result;
        }
        Some(other) => anyhow::bail!("unknown command: {other}"),
    }

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_router(db.clone(), auth_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], env_or("API_PORT", DEFAULT_PORT)));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.disconnect().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = match env::var("AUTH_TOKEN_SECRET") {
        Ok(secret_b64) => {
            let secret_bytes = from_base64(secret_b64.trim())?;
            let token_secret: [u8; 32] = secret_bytes
                .try_into()
                .map_err(|_| anyhow::anyhow!("AUTH_TOKEN_SECRET must decode to 32 bytes"))?;
            AuthConfig {
                token_secret,
                ..AuthConfig::default()
            }
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("AUTH_TOKEN_SECRET not set, tokens will not survive a restart");
            AuthConfig::with_random_secret()
        }
        Err(_) => anyhow::bail!("AUTH_TOKEN_SECRET must be set in production"),
    };

    config.password_pepper = env::var("PASSWORD_PEPPER")
        .ok()
        .filter(|pepper| !pepper.is_empty())
        .map(String::into_bytes);

    Ok(config)
}

async fn create_user(db: &Database, config: &AuthConfig, args: &[String]) -> anyhow::Result<()> {
    let [email, password] = args else {
        anyhow::bail!("usage: api create-user <email> <password>");
    };

    let email = Email::new(email.as_str())?;
    let password_hash = Argon2Encrypter::new(config.pepper()).hash(password)?;
    PgUserRepository::new(db.clone())
        .create(&email, &password_hash)
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, initiating graceful shutdown");
}
