mod db;
mod rate_limit;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let uploads_dir = std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".into());

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    std::fs::create_dir_all(&uploads_dir).expect("uploads dir creation failed");
    let storage = services::storage::Storage::new(uploads_dir);

    let state = state::AppState::new(pool, storage);

    let app = routes::leptos_app(state).expect("leptos app assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "carango listening");
    axum::serve(listener, app).await.expect("server failed");
}
