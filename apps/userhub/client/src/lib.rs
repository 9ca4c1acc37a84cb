//! Reference client for `users.UserService`.
//!
//! Every unary call carries a 1 s deadline and `StreamUsers` a 10 s deadline,
//! so a stalled server surfaces as `DEADLINE_EXCEEDED` instead of a hang.

use std::time::Duration;

use core_config::env_or_default;
use grpc_client::{ChannelConfig, GrpcResult, create_channel_with_config};
use rpc::users::{
    CreateUserRequest, DeleteUserRequest, Empty, GetUserRequest, UpdateUserRequest,
    UserResponse, user_service_client::UserServiceClient,
};
use tonic::codec::{CompressionEncoding, Streaming};
use tonic::transport::Channel;
use tonic::{Request, Status};

pub const DEFAULT_ADDR: &str = "http://localhost:50051";
pub const UNARY_DEADLINE: Duration = Duration::from_secs(1);
pub const STREAM_DEADLINE: Duration = Duration::from_secs(10);

/// `USERS_GRPC_ADDR`, falling back to [`DEFAULT_ADDR`].
pub fn server_addr() -> String {
    env_or_default("USERS_GRPC_ADDR", DEFAULT_ADDR)
}

fn with_deadline<T>(message: T, deadline: Duration) -> Request<T> {
    let mut request = Request::new(message);
    request.set_timeout(deadline);
    request
}

#[derive(Clone)]
pub struct UserClient {
    inner: UserServiceClient<Channel>,
}

impl UserClient {
    pub async fn connect(addr: impl Into<String>) -> GrpcResult<Self> {
        let config = ChannelConfig::new().with_request_timeout(STREAM_DEADLINE);
        let channel = create_channel_with_config(addr, config).await?;
        Ok(Self::new(channel))
    }

    pub fn new(channel: Channel) -> Self {
        let inner = UserServiceClient::new(channel)
            .send_compressed(CompressionEncoding::Zstd)
            .accept_compressed(CompressionEncoding::Zstd);
        Self { inner }
    }

    pub async fn create_user(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<UserResponse, Status> {
        let message = CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        };
        let response = self
            .inner
            .create_user(with_deadline(message, UNARY_DEADLINE))
            .await?;
        Ok(response.into_inner())
    }

    pub async fn get_user(&mut self, id: i64) -> Result<UserResponse, Status> {
        let response = self
            .inner
            .get_user(with_deadline(GetUserRequest { id }, UNARY_DEADLINE))
            .await?;
        Ok(response.into_inner())
    }

    pub async fn get_all_users(&mut self) -> Result<Vec<UserResponse>, Status> {
        let response = self
            .inner
            .get_all_users(with_deadline(Empty {}, UNARY_DEADLINE))
            .await?;
        Ok(response.into_inner().users)
    }

    /// Only the fields that are `Some` are sent as present.
    pub async fn update_user(&mut self, update: UpdateUserRequest) -> Result<UserResponse, Status> {
        let response = self
            .inner
            .update_user(with_deadline(update, UNARY_DEADLINE))
            .await?;
        Ok(response.into_inner())
    }

    pub async fn delete_user(&mut self, id: i64) -> Result<(), Status> {
        self.inner
            .delete_user(with_deadline(DeleteUserRequest { id }, UNARY_DEADLINE))
            .await?;
        Ok(())
    }

    pub async fn stream_users(&mut self) -> Result<Streaming<UserResponse>, Status> {
        let response = self
            .inner
            .stream_users(with_deadline(Empty {}, STREAM_DEADLINE))
            .await?;
        Ok(response.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadlines_are_attached_to_requests() {
        let request = with_deadline(Empty {}, UNARY_DEADLINE);
        let header = request.metadata().get("grpc-timeout").unwrap();
        assert_eq!(header.to_str().unwrap(), "1000000u");
    }

    #[test]
    fn server_addr_reads_the_environment() {
        temp_env::with_var("USERS_GRPC_ADDR", Some("http://users:9000"), || {
            assert_eq!(server_addr(), "http://users:9000");
        });
        temp_env::with_var_unset("USERS_GRPC_ADDR", || {
            assert_eq!(server_addr(), DEFAULT_ADDR);
        });
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        assert!(UserClient::connect("http://127.0.0.1:1").await.is_err());
    }
}
