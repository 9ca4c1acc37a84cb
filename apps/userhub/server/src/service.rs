//! Users gRPC service implementation
//!
//! `UsersServiceImpl` decodes requests, calls the shared domain service and
//! maps results back with the helpers in `conversions`.

use std::sync::Arc;
use std::time::Duration;

use domain_users::UserOperations;
use rpc::users::{
    CreateUserRequest, DeleteUserRequest, Empty, GetUserRequest, UpdateUserRequest,
    UserListResponse, UserResponse, user_service_server::UserService,
};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};
use tracing::{debug, info};

use crate::conversions::{
    create_request_to_domain, to_status, update_request_to_domain, user_to_proto, users_to_proto,
};

/// gRPC service implementation for users
///
/// Generic over the domain operations so tests can swap the backing store.
pub struct UsersServiceImpl<S: UserOperations> {
    service: Arc<S>,
    stream_pacing: Duration,
}

impl<S: UserOperations> UsersServiceImpl<S> {
    pub fn new(service: Arc<S>, stream_pacing: Duration) -> Self {
        Self {
            service,
            stream_pacing,
        }
    }
}

#[tonic::async_trait]
impl<S: UserOperations> UserService for UsersServiceImpl<S> {
    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let id = request.into_inner().id;
        let user = self.service.get_user(id).await.map_err(to_status)?;
        Ok(Response::new(user_to_proto(user)))
    }

    async fn get_all_users(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<UserListResponse>, Status> {
        let users = self.service.get_all_users().await.map_err(to_status)?;
        Ok(Response::new(users_to_proto(users)))
    }

    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let input = create_request_to_domain(request.into_inner()).map_err(to_status)?;
        let user = self.service.create_user(input).await.map_err(to_status)?;
        Ok(Response::new(user_to_proto(user)))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let (id, input) = update_request_to_domain(request.into_inner()).map_err(to_status)?;
        let user = self
            .service
            .update_user(id, input)
            .await
            .map_err(to_status)?;
        Ok(Response::new(user_to_proto(user)))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<Empty>, Status> {
        let id = request.into_inner().id;
        self.service.delete_user(id).await.map_err(to_status)?;
        Ok(Response::new(Empty {}))
    }

    type StreamUsersStream = ReceiverStream<Result<UserResponse, Status>>;

    async fn stream_users(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<Self::StreamUsersStream>, Status> {
        let users = self.service.get_all_users().await.map_err(to_status)?;
        let pacing = self.stream_pacing;
        let total = users.len();

        // Capacity 1 keeps the producer at most one message ahead of the caller.
        let (tx, rx) = mpsc::channel(1);

        tokio::spawn(async move {
            for (sent, user) in users.into_iter().enumerate() {
                if sent > 0 && !pacing.is_zero() {
                    tokio::select! {
                        _ = tx.closed() => {
                            debug!(sent, total, "StreamUsers cancelled by caller");
                            return;
                        }
                        _ = tokio::time::sleep(pacing) => {}
                    }
                }

                if tx.is_closed() || tx.send(Ok(user_to_proto(user))).await.is_err() {
                    debug!(sent, total, "StreamUsers cancelled by caller");
                    return;
                }
            }
            info!(total, "StreamUsers completed");
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_users::{CreateUser, InMemoryUserRepository, UserService as DomainService};
    use tokio_stream::StreamExt;
    use tonic::Code;

    type Svc = UsersServiceImpl<DomainService<InMemoryUserRepository>>;

    async fn seeded(count: usize, pacing: Duration) -> Svc {
        let domain = Arc::new(DomainService::new(InMemoryUserRepository::new()));
        for i in 0..count {
            domain
                .create_user(CreateUser {
                    name: format!("User {i}"),
                    email: format!("user{i}@x.com"),
                    phone: String::new(),
                })
                .await
                .unwrap();
        }
        UsersServiceImpl::new(domain, pacing)
    }

    #[tokio::test]
    async fn stream_emits_every_user_in_list_order() {
        let svc = seeded(3, Duration::ZERO).await;

        let listed = svc
            .get_all_users(Request::new(Empty {}))
            .await
            .unwrap()
            .into_inner()
            .users;
        let streamed: Vec<UserResponse> = svc
            .stream_users(Request::new(Empty {}))
            .await
            .unwrap()
            .into_inner()
            .map(|item| item.unwrap())
            .collect()
            .await;

        assert_eq!(streamed, listed);
    }

    #[tokio::test]
    async fn stream_of_empty_store_ends_immediately() {
        let svc = seeded(0, Duration::from_millis(100)).await;

        let mut stream = svc
            .stream_users(Request::new(Empty {}))
            .await
            .unwrap()
            .into_inner();

        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn pacing_spaces_out_messages() {
        let svc = seeded(3, Duration::from_millis(30)).await;
        let started = std::time::Instant::now();

        let streamed: Vec<_> = svc
            .stream_users(Request::new(Empty {}))
            .await
            .unwrap()
            .into_inner()
            .collect()
            .await;

        assert_eq!(streamed.len(), 3);
        assert!(started.elapsed() >= Duration::from_millis(60));
    }

    #[tokio::test]
    async fn dropped_stream_stops_the_producer_mid_pause() {
        let svc = seeded(50, Duration::from_millis(200)).await;
        let metrics = tokio::runtime::Handle::current().metrics();
        assert_eq!(metrics.num_alive_tasks(), 0);

        let mut stream = svc
            .stream_users(Request::new(Empty {}))
            .await
            .unwrap()
            .into_inner();
        assert!(stream.next().await.unwrap().is_ok());
        assert_eq!(metrics.num_alive_tasks(), 1);

        drop(stream);
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(metrics.num_alive_tasks(), 0);
    }

    #[tokio::test]
    async fn unary_errors_carry_grpc_codes() {
        let svc = seeded(1, Duration::ZERO).await;

        let missing = svc
            .get_user(Request::new(GetUserRequest { id: 99 }))
            .await
            .unwrap_err();
        assert_eq!(missing.code(), Code::NotFound);

        let duplicate = svc
            .create_user(Request::new(CreateUserRequest {
                name: "Again".into(),
                email: "user0@x.com".into(),
                phone: String::new(),
            }))
            .await
            .unwrap_err();
        assert_eq!(duplicate.code(), Code::InvalidArgument);

        let deleted = svc
            .delete_user(Request::new(DeleteUserRequest { id: 99 }))
            .await
            .unwrap_err();
        assert_eq!(deleted.code(), Code::NotFound);
    }
}
