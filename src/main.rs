use axum::{Router, Server, middleware::from_fn};
use signup_backend::email::{EmailValidator, RfcEmailValidator};
use signup_backend::{AppState, config::Config, init_tracing, middleware, routes};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("Failed to load configuration");
    init_tracing(&config);

    // Assemble the sign-up validation with its production email checker.
    // Handlers only ever see the trait object.
    let email_validator: Arc<dyn EmailValidator> = Arc::new(RfcEmailValidator);
    let state = Arc::new(AppState::new(config.clone(), email_validator));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_router(state))
        .layer(cors)
        .layer(from_fn(middleware::logger::logger));

    // Start server
    let addr = config
        .server_address()
        .parse()
        .expect("Invalid server address");
    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server error");
}
