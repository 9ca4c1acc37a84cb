//! Protobuf contract shared by the users gRPC server and client.
//!
//! Regenerate with `buf generate` from this directory after editing
//! `proto/users.proto`.

mod gen;

pub use gen::users;
