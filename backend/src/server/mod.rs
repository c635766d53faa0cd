//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::{build_http_state, in_memory_ports};

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use tracing::{error, info};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::destinations::{create_destination, get_destination, list_destinations};
use crate::inbound::http::fallback::endpoint_not_found;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::json_config::json_config;
use crate::inbound::http::preferences::{create_preference, get_preference, list_preferences};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_hooks::{reset_all, reset_preferences};
use crate::outbound::memory::InMemoryTravelStore;

/// Everything [`build_app`] needs to assemble one worker's application.
#[derive(Clone)]
pub struct AppDependencies {
    /// Readiness and liveness flags served by the health checks.
    pub health_state: web::Data<HealthState>,
    /// Driving ports shared by the handlers.
    pub http_state: web::Data<HttpState>,
    /// Mount the reset endpoints.
    pub test_hooks: bool,
    /// Single allowed browser origin; `None` allows any origin.
    pub cors_origin: Option<String>,
}

fn cors_for(origin: Option<&str>) -> Cors {
    match origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allow_any_method()
            .allow_any_header(),
        None => Cors::permissive(),
    }
}

/// Assemble the application: routes, fallback, JSON errors, CORS and tracing.
///
/// A trailing slash is trimmed before routing, so `/destinations/` lists the
/// catalogue.
/// Unmatched paths and methods fall through to the JSON 404 fallback, which
/// is also where the reset endpoints land when test hooks are disabled.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        test_hooks,
        cors_origin,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config());

    let app = if test_hooks {
        app.service(reset_all).service(reset_preferences)
    } else {
        app
    };

    let app = app
        .service(list_destinations)
        .service(get_destination)
        .service(create_destination)
        .service(create_preference)
        .service(list_preferences)
        .service(get_preference)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(endpoint_not_found))
        .wrap(cors_for(cors_origin.as_deref()))
        .wrap(NormalizePath::trim())
        .wrap(Trace)
}

/// Construct an Actix HTTP server over a freshly seeded in-memory store.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the listener is bound.
/// - `config`: validated [`ServerConfig`].
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener. Actix's own
/// signal handling is disabled; pair the server with [`drain_on_shutdown`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(Arc::new(InMemoryTravelStore::seeded()));
    let ServerConfig {
        bind_addr,
        test_hooks,
        cors_origin,
    } = config;

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            test_hooks,
            cors_origin: cors_origin.clone(),
        })
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, test_hooks, "travel planner listening");
    Ok(server)
}

/// Flag the service as draining, then stop the server once in-flight
/// requests finish.
pub async fn drain(health_state: &HealthState, handle: ServerHandle) {
    health_state.begin_draining();
    info!("draining travel planner");
    handle.stop(true).await;
}

/// Wait for Ctrl-C or SIGTERM and [`drain`] the server.
///
/// When the listener cannot be installed the process keeps the default
/// signal disposition and this task exits without draining.
pub async fn drain_on_shutdown(health_state: web::Data<HealthState>, handle: ServerHandle) {
    if let Err(err) = shutdown_signal().await {
        error!(error = %err, "failed to listen for shutdown signals");
        return;
    }
    drain(&health_state, handle).await;
}

#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
