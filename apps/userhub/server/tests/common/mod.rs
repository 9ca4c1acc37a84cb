//! In-process gRPC server on an ephemeral port, backed by a fresh in-memory
//! database.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum_helpers::ShutdownCoordinator;
use domain_users::{SqlUserRepository, UserService};
use grpc_client::server::ServerConfig as GrpcConfig;
use rpc::users::user_service_client::UserServiceClient;
use test_utils::TestDatabase;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tonic::transport::Channel;
use userhub_server::server::serve_grpc;

pub type Service = UserService<SqlUserRepository>;

pub struct TestServer {
    pub addr: SocketAddr,
    pub service: Arc<Service>,
    pub db: TestDatabase,
    shutdown: ShutdownCoordinator,
    handle: JoinHandle<eyre::Result<()>>,
}

impl TestServer {
    pub async fn start(stream_pacing: Duration) -> Self {
        let db = TestDatabase::new().await;
        let service = Arc::new(UserService::new(SqlUserRepository::new(db.connection())));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = ShutdownCoordinator::new();
        let cancelled = shutdown.cancelled();
        let grpc_service = service.clone();
        let handle = tokio::spawn(async move {
            let config = GrpcConfig::new();
            serve_grpc(listener, grpc_service, &config, stream_pacing, cancelled).await
        });

        Self {
            addr,
            service,
            db,
            shutdown,
            handle,
        }
    }

    pub async fn client(&self) -> UserServiceClient<Channel> {
        UserServiceClient::connect(format!("http://{}", self.addr))
            .await
            .unwrap()
    }

    pub async fn stop(self) {
        self.shutdown.shutdown();
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("gRPC server did not stop")
            .unwrap()
            .unwrap();
    }
}
