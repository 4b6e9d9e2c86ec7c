use post_service::{app, config::Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let app = app(&config);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await.unwrap();

    info!("Server running on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET    /health       - Health check");
    info!("  POST   /posts        - Create post");
    info!("  GET    /posts        - List posts");
    info!("  GET    /posts/:id    - Get specific post");
    info!("  PUT    /posts/:id    - Update post");
    info!("  DELETE /posts/:id    - Delete post");

    axum::serve(listener, app).await.unwrap();
}
