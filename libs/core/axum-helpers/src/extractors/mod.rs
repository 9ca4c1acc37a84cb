//! Extractors that reject through [`AppError`](crate::errors::AppError), so
//! malformed input gets the same JSON envelope as every other error.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
