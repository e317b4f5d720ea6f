use eth_multicaller::{app_state::AppState, args::Args, routes::create_router};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::from_env();

    let state = match AppState::build(&args).await {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(error = %err, "unable to initialize multicaller");
            std::process::exit(1);
        }
    };

    let app = create_router(state, args.allowed_origins());

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .expect("Failed to bind to address");

    tracing::info!("server started on {}", args.bind);

    axum::serve(listener, app).await.expect("Server failed");
}
