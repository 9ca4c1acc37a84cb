//! # gRPC helpers
//!
//! Shared plumbing for the gRPC side of a service:
//!
//! - [`server`]: listener config from the environment, health service setup
//! - [`channel`]: tuned client channels
//! - [`conversions`]: protobuf ↔ domain helpers (RFC 3339 timestamps)
//! - [`error`]: [`GrpcError`] and `tonic::Status` helpers
//!
//! ```ignore
//! use grpc_client::{create_channel_with_config, ChannelConfig};
//! use rpc::users::user_service_client::UserServiceClient;
//!
//! let channel = create_channel_with_config("http://localhost:50051", ChannelConfig::default()).await?;
//! let client = UserServiceClient::new(channel)
//!     .accept_compressed(tonic::codec::CompressionEncoding::Zstd)
//!     .send_compressed(tonic::codec::CompressionEncoding::Zstd);
//! ```

pub mod channel;
pub mod conversions;
pub mod error;
pub mod server;

pub use channel::{create_channel, create_channel_with_config, ChannelConfig};
pub use error::{GrpcError, GrpcResult};
