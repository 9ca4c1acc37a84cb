pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Connect with [`ChannelConfig::default`].
///
/// ```ignore
/// let channel = grpc_client::create_channel("http://localhost:50051").await?;
/// let client = UserServiceClient::new(channel);
/// ```
pub async fn create_channel(addr: impl Into<String>) -> GrpcResult<Channel> {
    create_channel_with_config(addr, ChannelConfig::default()).await
}

pub async fn create_channel_with_config(
    addr: impl Into<String>,
    config: ChannelConfig,
) -> GrpcResult<Channel> {
    let addr = addr.into();

    let endpoint = Endpoint::from_shared(addr.clone()).map_err(|e| {
        tracing::error!(target: "grpc_client", %addr, error = ?e, "Invalid URI");
        GrpcError::InvalidUri(e)
    })?;

    tracing::debug!(target: "grpc_client", %addr, "Creating gRPC channel");

    config
        .endpoint(endpoint)
        .connect()
        .await
        .map_err(|e| {
            tracing::error!(target: "grpc_client", %addr, error = ?e, "Failed to connect");
            GrpcError::ConnectionFailed(e)
        })
}
