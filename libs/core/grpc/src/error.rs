use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors from building gRPC channels and servers
#[derive(Error, Debug)]
pub enum GrpcError {
    #[error("Invalid URI: {0}")]
    InvalidUri(tonic::transport::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(tonic::transport::Error),

    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),
}

impl From<GrpcError> for tonic::Status {
    fn from(err: GrpcError) -> Self {
        match err {
            GrpcError::InvalidUri(_) | GrpcError::InvalidAddress(_) => {
                tonic::Status::invalid_argument(err.to_string())
            }
            GrpcError::ConnectionFailed(_) => tonic::Status::unavailable(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_listen_address_is_invalid_argument() {
        let status: tonic::Status = GrpcError::InvalidAddress("nowhere:x".into()).into();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }
}
