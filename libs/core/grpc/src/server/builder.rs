use super::config::ServerConfig;
use tonic_health::server::HealthReporter;
use tonic_health::ServingStatus;
use tracing::info;

/// Startup helpers shared by gRPC servers.
///
/// ```ignore
/// let (mut health_reporter, health_service) = create_health_service();
/// GrpcServer::setup_health(&mut health_reporter, SERVICE_NAME).await;
/// GrpcServer::log_startup(&config, SERVICE_NAME);
///
/// Server::builder()
///     .add_service(health_service)
///     .add_service(UserServiceServer::new(service))
///     .serve_with_shutdown(config.socket_addr()?, shutdown)
///     .await?;
/// ```
pub struct GrpcServer;

impl GrpcServer {
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            "gRPC server starting"
        );
    }

    /// Mark `service_name` and the overall server ("") as SERVING.
    pub async fn setup_health(health_reporter: &mut HealthReporter, service_name: &str) {
        health_reporter
            .set_service_status(service_name, ServingStatus::Serving)
            .await;
        health_reporter
            .set_service_status("", ServingStatus::Serving)
            .await;

        info!(service = service_name, "Health status set to SERVING");
    }
}

pub use tonic_health::server::health_reporter as create_health_service;
