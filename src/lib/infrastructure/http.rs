//! HTTP Server

use std::{
    net::{Ipv4Addr, SocketAddr, TcpListener},
    time::Duration,
};

use anyhow::{Context, Result};
use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use axum_server::Handle;
use clap::Parser;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowMethods, AllowOrigin, Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{debug, info, info_span};

use crate::domain::mailing::service::MailingService;

use handlers::v1;
use state::{AppState, InstanceConfig};

pub mod handlers;
pub mod open_api;
pub mod responses;
pub mod state;
pub mod stoplight;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct HttpServerConfig {
    /// The port to listen on
    #[arg(short, long, env = "HTTP_PORT", default_value = "3000")]
    pub port: u16,

    /// Seconds before an in-flight request is timed out
    #[arg(long, env = "TIMEOUT_SECONDS", default_value = "30")]
    pub timeout_seconds: u64,

    /// Cache lifetime for the documentation endpoints, in seconds
    #[arg(long, env = "CACHE_TTL_SECONDS", default_value = "3600")]
    pub cache_ttl_seconds: u64,

    /// Maximum accepted JSON payload size, in bytes
    #[arg(long, env = "JSON_LIMIT_BYTES", default_value = "102400")]
    pub json_limit_bytes: usize,

    /// Allowed CORS origins, comma-separated, or `*`
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods, comma-separated
    #[arg(long, env = "CORS_METHODS", default_value = "GET,POST,OPTIONS")]
    pub cors_methods: String,
}

/// The application's HTTP server
#[derive(Debug)]
pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the port specified in `config`.
    pub async fn new(
        mailing_service: impl MailingService,
        instance: InstanceConfig,
        config: HttpServerConfig,
    ) -> Result<Self> {
        let state = AppState::new(instance, mailing_service);

        let router = router(state, &config)?;

        let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
        let listener = TcpListener::bind(address)
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }

    /// Runs the HTTP server.
    #[mutants::skip]
    pub async fn run(self) -> Result<()> {
        debug!(
            "listening on {}",
            self.listener
                .local_addr()
                .context("failed to get local address")?
        );

        let handle = Handle::new();

        let server = axum_server::from_tcp(self.listener)
            .handle(handle.clone())
            .serve(self.router.into_make_service());

        tokio::select! {
            result = server => result.context("server error")?,
            _ = shutdown_signal(Some(handle)) => {
                info!("Shutting down HTTP server");
            }
        }

        Ok(())
    }
}

/// Create the application's router
pub fn router<M: MailingService>(
    state: AppState<M>,
    config: &HttpServerConfig,
) -> Result<Router> {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        let uri = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    Ok(Router::new()
        .merge(v1::router())
        .merge(docs_router(config)?)
        .fallback(v1::route_not_found)
        .layer(trace_layer)
        .layer(CatchPanicLayer::custom(handlers::panic_handler))
        .layer(CompressionLayer::new())
        .layer(cors_layer(config)?)
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeout_seconds)))
        .layer(DefaultBodyLimit::max(config.json_limit_bytes))
        .with_state(state))
}

/// Documentation routes, cached according to the configured TTL
fn docs_router<M: MailingService>(config: &HttpServerConfig) -> Result<Router<AppState<M>>> {
    let cache_control = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_str(&format!("public, max-age={}", config.cache_ttl_seconds))
            .context("invalid cache TTL")?,
    );

    Ok(Router::new()
        .route("/", get(stoplight::handler))
        .route("/openapi.json", get(open_api::handler))
        .layer(cache_control))
}

/// Build the CORS layer from the configured origins and methods
fn cors_layer(config: &HttpServerConfig) -> Result<CorsLayer> {
    let methods = config
        .cors_methods
        .split(',')
        .map(|method| method.trim().parse::<Method>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid CORS method")?;

    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(Any);

    if config.cors_origins.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_origins
        .split(',')
        .map(|origin| origin.trim().parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid CORS origin")?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

#[mutants::skip]
async fn shutdown_signal(handle: Option<Handle>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    if let Some(handle) = handle {
        debug!("shutting down gracefully");
        handle.graceful_shutdown(Some(Duration::from_secs(10)));
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> HttpServerConfig {
    HttpServerConfig {
        port: 0,
        timeout_seconds: 30,
        cache_ttl_seconds: 60,
        json_limit_bytes: 102_400,
        cors_origins: "*".to_string(),
        cors_methods: "GET,POST,OPTIONS".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::{state::test_state, *};

    #[test]
    fn test_router_builds_from_default_test_config() -> TestResult {
        let state = test_state(None);

        assert!(router(state, &test_config()).is_ok());

        Ok(())
    }

    #[test]
    fn test_cors_layer_accepts_origin_list() -> TestResult {
        let config = HttpServerConfig {
            cors_origins: "https://example.com, https://admin.example.com".to_string(),
            ..test_config()
        };

        assert!(cors_layer(&config).is_ok());

        Ok(())
    }

    #[test]
    fn test_cors_layer_rejects_malformed_method() {
        let config = HttpServerConfig {
            cors_methods: "GET,NOT A METHOD".to_string(),
            ..test_config()
        };

        assert!(cors_layer(&config).is_err());
    }
}
