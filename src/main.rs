use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{
    error_handling::HandleErrorLayer,
    http::header::CONTENT_TYPE,
    http::Method,
    BoxError,
};
use tower::{
    buffer::BufferLayer, limit::RateLimitLayer, load_shed::LoadShedLayer, ServiceBuilder,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    app::{envy::Envy, errors::DefaultApiError},
    generations::{
        config::ShotCatalog, enums::generation_mode::GenerationMode, service::Generator,
    },
    media::apis::gemini::service::GeminiClient,
    sessions::store::SessionStore,
};

mod app;
mod attributes;
mod generations;
mod media;
mod sessions;

pub struct AppState {
    pub envy: Arc<Envy>,
    pub sessions: Arc<SessionStore>,
    pub generator: Arc<Generator>,
    pub default_mode: GenerationMode,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var(app::env::Env::APP_ENV).unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to read environment: {:#?}", e);
            return;
        }
    };

    if env::var(app::env::Env::GEMINI_API_KEY).is_err() {
        tracing::warn!(
            "{} is not set, generations will fail until it is",
            app::env::Env::GEMINI_API_KEY
        );
    }

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET, Method::PATCH]);

    let catalog = match &envy.shot_catalog_path {
        Some(path) => match ShotCatalog::from_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!("{}: {}", path, e);
                return;
            }
        },
        None => ShotCatalog::default(),
    };

    let gemini = Arc::new(GeminiClient::new(&envy, None));
    let generator = Generator::new(gemini.clone(), gemini, Arc::new(catalog));

    let default_mode = GenerationMode::from_generate_images(envy.generate_images.unwrap_or(true));

    let state = Arc::new(AppState {
        envy: Arc::new(envy),
        sessions: Arc::new(SessionStore::new()),
        generator: Arc::new(generator),
        default_mode,
    });

    app::util::janitor::spawn(state.clone());

    // app
    let app = app::router::routes(state)
        // layers
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    if err.is::<tower::load_shed::error::Overloaded>() {
                        return DefaultApiError::TooManyRequests.value();
                    }

                    tracing::error!("unhandled middleware error: {}", err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(LoadShedLayer::new())
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(5, Duration::from_secs(1))),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let server = match axum::Server::try_bind(&addr) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            return;
        }
    };

    tracing::info!("listening on {}", addr);

    if let Err(e) = server.serve(app.into_make_service()).await {
        tracing::error!("server error: {}", e);
    }
}
