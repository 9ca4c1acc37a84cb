// @generated
// Wires up buf-generated protobuf code (see buf.gen.yaml).
// The prost file include!()s its tonic counterpart.

pub mod users {
    include!("users.rs");
}
