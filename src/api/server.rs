// API server implementation using actix-web

use crate::api::models::ApiResponse;
use crate::api::{middleware, routes};
use crate::util::db::Db;
use crate::util::env as env_util;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::{Context, Result};

pub struct ApiServer {
    pub host: String,
    pub port: u16,
    pub public_base_url: String,
    pub allowed_origins: String,
}

/// Per-request application state: the injected data-store handle and the
/// public base URL media paths resolve against.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub base_url: String,
}

impl ApiServer {
    /// Create server from environment variables
    pub fn from_env() -> Result<Self> {
        env_util::init_env();

        let host = env_util::env_parse("API_HOST", "0.0.0.0".to_string());
        let port: u16 = env_util::env_parse("API_PORT", 8080u16);

        let public_base_url = env_util::env_req("PUBLIC_BASE_URL")?;
        url::Url::parse(&public_base_url).context("PUBLIC_BASE_URL must be an absolute URL")?;

        let allowed_origins = env_util::env_opt("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string());

        Ok(Self {
            host,
            port,
            public_base_url,
            allowed_origins,
        })
    }

    /// Start the HTTP server
    pub async fn run(self, db: Db) -> Result<()> {
        let bind_addr = format!("{}:{}", self.host, self.port);

        tracing::info!(
            host = %self.host,
            port = %self.port,
            "starting content API server"
        );

        let state = web::Data::new(AppState {
            db,
            base_url: self.public_base_url.trim_end_matches('/').to_string(),
        });
        let allowed_origins = self.allowed_origins.clone();

        HttpServer::new(move || {
            let (logger, compress) = middleware::setup_middleware();
            let cors = middleware::setup_cors(&allowed_origins);

            App::new()
                .app_data(state.clone())
                // malformed query strings (non-numeric page/limit and friends)
                // must come back as a 400 in the standard envelope
                .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                    actix_web::error::InternalError::from_response(
                        err,
                        HttpResponse::BadRequest()
                            .json(ApiResponse::<()>::error("Invalid query parameters")),
                    )
                    .into()
                }))
                .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                    actix_web::error::InternalError::from_response(
                        err,
                        HttpResponse::BadRequest()
                            .json(ApiResponse::<()>::error("Invalid request body")),
                    )
                    .into()
                }))
                .app_data(web::PathConfig::default().error_handler(|err, _req| {
                    actix_web::error::InternalError::from_response(
                        err,
                        HttpResponse::BadRequest()
                            .json(ApiResponse::<()>::error("Invalid path parameter")),
                    )
                    .into()
                }))
                .wrap(logger)
                .wrap(compress)
                .wrap(cors)
                .configure(routes::configure_routes)
        })
        .bind(&bind_addr)
        .with_context(|| format!("Failed to bind to {}", bind_addr))?
        .run()
        .await
        .context("HTTP server error")?;

        Ok(())
    }
}
