//! Proto ↔ domain mapping for the gRPC adapter.

use domain_users::{CreateUser, UpdateUser, User, UserError, UserResult};
use grpc_client::conversions::datetime_to_rfc3339;
use rpc::users::{CreateUserRequest, UpdateUserRequest, UserListResponse, UserResponse};
use tonic::Status;
use validator::{Validate, ValidationErrors};

pub fn user_to_proto(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        phone: user.phone,
        created_at: datetime_to_rfc3339(user.created_at),
        updated_at: datetime_to_rfc3339(user.updated_at),
    }
}

pub fn users_to_proto(users: Vec<User>) -> UserListResponse {
    UserListResponse {
        users: users.into_iter().map(user_to_proto).collect(),
    }
}

/// Decode and validate with the same rules as the REST body.
pub fn create_request_to_domain(req: CreateUserRequest) -> UserResult<CreateUser> {
    let input = CreateUser {
        name: req.name,
        email: req.email,
        phone: req.phone,
    };
    input.validate().map_err(validation_error)?;
    Ok(input)
}

/// Returns the target id and the fields that were present on the wire.
pub fn update_request_to_domain(req: UpdateUserRequest) -> UserResult<(i64, UpdateUser)> {
    let input = UpdateUser {
        name: req.name,
        email: req.email,
        phone: req.phone,
    };
    input.validate().map_err(validation_error)?;
    Ok((req.id, input))
}

fn validation_error(errors: ValidationErrors) -> UserError {
    UserError::Validation(errors.to_string())
}

/// NOT_FOUND and INVALID_ARGUMENT carry the domain message; anything else is
/// logged and reported as a bare INTERNAL.
pub fn to_status(err: UserError) -> Status {
    match err {
        UserError::NotFound(_) => Status::not_found(err.to_string()),
        UserError::DuplicateEmail(_) | UserError::Validation(_) => {
            Status::invalid_argument(err.to_string())
        }
        UserError::Storage(e) => {
            tracing::error!(error = %e, "Storage failure while handling RPC");
            Status::internal("internal error")
        }
    }
}
