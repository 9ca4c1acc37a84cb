//! Composition root and listener lifecycle
//!
//! This module handles all server setup:
//! - Tracing initialization
//! - Database connection and schema migration
//! - Service creation (one instance shared by both transports)
//! - REST and gRPC listeners, run concurrently
//! - Graceful shutdown of both on SIGINT/SIGTERM

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{Router, extract::State, routing::get};
use axum_helpers::server::{
    HealthCheckFuture, ReadinessResult, ShutdownCoordinator, create_router, health_router,
    run_health_checks, serve,
};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sql::{DatabaseConnection, check_health, connect_from_config_with_retry, run_migrations};
use domain_users::{SqlUserRepository, UserOperations, UserService};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig as GrpcConfig, create_health_service};
use migration::Migrator;
use rpc::users::FILE_DESCRIPTOR_SET;
use rpc::users::user_service_server::{SERVICE_NAME, UserServiceServer};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::info;
use utoipa::OpenApi;

use crate::config::AppConfig;
use crate::service::UsersServiceImpl;

const APP_NAME: &str = "userhub";

/// OpenAPI document for everything the REST listener serves
#[derive(OpenApi)]
#[openapi(
    info(title = "userhub", description = "User management over REST and gRPC"),
    nest((path = "/users", api = domain_users::ApiDoc))
)]
pub struct ApiDoc;

/// Run both listeners until a shutdown signal arrives.
///
/// 1. Installs color-eyre and loads [`AppConfig`]
/// 2. Sets up structured logging (JSON for prod, pretty for dev)
/// 3. Connects to the store with retry and brings the schema up to date
/// 4. Serves REST and gRPC from one shared service
///
/// # Errors
///
/// Returns an error if configuration is invalid, the store is unreachable,
/// migrations fail, or either listener fails to bind or serve.
pub async fn run() -> Result<()> {
    install_color_eyre();

    let config = AppConfig::from_env().wrap_err("Failed to load configuration")?;
    init_tracing(&config.environment);

    info!("Connecting to database...");
    let db = connect_from_config_with_retry(config.database.clone(), None)
        .await
        .wrap_err("Failed to connect to database")?;

    run_migrations::<Migrator>(&db, APP_NAME)
        .await
        .wrap_err("Failed to run database migrations")?;

    let service = Arc::new(UserService::new(SqlUserRepository::new(db.clone())));

    let shutdown = ShutdownCoordinator::new();
    let signals = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move { shutdown.wait_for_signal().await })
    };

    let http_listener = TcpListener::bind(config.http.address())
        .await
        .wrap_err_with(|| format!("Failed to bind HTTP listener on {}", config.http.address()))?;
    let grpc_listener = TcpListener::bind(config.grpc.socket_addr()?)
        .await
        .wrap_err_with(|| format!("Failed to bind gRPC listener on {}", config.grpc.addr_string()))?;

    let http = async {
        serve(
            http_listener,
            rest_router(service.clone(), db.clone()),
            shutdown.cancelled(),
        )
        .await
        .wrap_err("HTTP server failed")
    };
    let grpc = serve_grpc(
        grpc_listener,
        service.clone(),
        &config.grpc,
        config.stream.pacing,
        shutdown.cancelled(),
    );

    let result = tokio::try_join!(http, grpc);

    // One listener failing takes the other down with it.
    shutdown.shutdown();
    signals.abort();

    if let Err(e) = db.close().await {
        tracing::error!(error = %e, "Error closing database pool");
    }

    result?;
    info!("userhub shutdown complete");
    Ok(())
}

/// The REST surface: `/users`, `/health`, `/ready`, the OpenAPI document and
/// the JSON 404 fallback.
pub fn rest_router<S: UserOperations>(service: Arc<S>, db: DatabaseConnection) -> Router {
    let routes = Router::new()
        .nest("/users", domain_users::handlers::router(service))
        .merge(health_router())
        .merge(ready_router(db));

    create_router::<ApiDoc>(routes)
}

fn ready_router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready)).with_state(db)
}

async fn ready(State(db): State<DatabaseConnection>) -> ReadinessResult {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async { check_health(&db).await.map_err(|e| e.to_string()) }),
    )];
    run_health_checks(checks).await
}

/// The gRPC service with compression and message limits from `config`.
pub fn grpc_service<S: UserOperations>(
    service: Arc<S>,
    config: &GrpcConfig,
    stream_pacing: Duration,
) -> UserServiceServer<UsersServiceImpl<S>> {
    let server = UserServiceServer::new(UsersServiceImpl::new(service, stream_pacing))
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);

    if config.enable_compression {
        server
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd)
    } else {
        server
    }
}

/// Serve `users.UserService`, `grpc.health.v1.Health` and server reflection
/// on an already-bound listener until `shutdown` resolves.
pub async fn serve_grpc<S, F>(
    listener: TcpListener,
    service: Arc<S>,
    config: &GrpcConfig,
    stream_pacing: Duration,
    shutdown: F,
) -> Result<()>
where
    S: UserOperations,
    F: Future<Output = ()> + Send,
{
    let (mut health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&mut health_reporter, SERVICE_NAME).await;

    let reflection_service = tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()
        .wrap_err("Failed to build gRPC reflection service")?;

    GrpcServer::log_startup(config, SERVICE_NAME);
    info!(addr = %listener.local_addr()?, "gRPC server listening");

    Server::builder()
        .tcp_keepalive(config.tcp_keepalive())
        .add_service(health_service)
        .add_service(reflection_service)
        .add_service(grpc_service(service, config, stream_pacing))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
        .wrap_err("gRPC server failed")?;

    info!("gRPC server stopped");
    Ok(())
}
