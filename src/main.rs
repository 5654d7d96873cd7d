use dotenvy::dotenv;
use snapschool::config::server::ServerConfig;
use snapschool::router::init_router;
use snapschool::state::init_app_state;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server_config = ServerConfig::from_env();
    let state = init_app_state().await;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", server_config.port))
        .await
        .unwrap();
    println!(
        "🚀 snapschool is running on http://localhost:{}",
        server_config.port
    );
    println!(
        "📖 Scalar UI available at http://localhost:{}/scalar",
        server_config.port
    );
    axum::serve(listener, app).await.unwrap();
}
