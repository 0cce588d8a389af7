#![recursion_limit = "256"]
mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // A missing or malformed catalog is non-fatal: the site serves an empty directory.
    let catalog_path = config.catalog_path();
    let state = match state::AppState::load(&catalog_path).await {
        Ok(state) => {
            tracing::info!(
                path = %catalog_path.display(),
                universities = state.stats.total,
                open_admissions = state.stats.open_admissions,
                "catalog loaded"
            );
            state
        }
        Err(e) => {
            tracing::warn!(error = %e, "catalog unavailable, serving empty directory");
            state::AppState::default()
        }
    };

    let app = routes::leptos_app(state, &config).expect("failed to build router");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "campus-finder listening");
    axum::serve(listener, app).await.expect("server failed");
}
