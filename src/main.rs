mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, service::populate::PopulateService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if let Some(iterations) = config.seed_students {
        tracing::info!("Seeding {} demo students", iterations);
        PopulateService::new(&db).populate(iterations).await?;
    }

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(startup::cors_layer())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
