//! Building blocks shared by GEMD record types and the JSON engine.
//!
//! A record graph is made of [`Obj`] handles, which are shared and compared by
//! address, so one material run can be reachable from many places and still
//! be one object. Entities carry [`Uids`]. Once serialized, a reference to an
//! entity becomes a [`LinkByUid`]. Record fields travel as [`Value`]s, and
//! [`FieldValue`] converts them back into typed Rust fields when a record is
//! rebuilt.
//!
//! Concrete records live in `gemd-model` and the serializer in `gemd-json`.

mod field;
mod link;
mod object;
mod uids;
mod value;

pub use field::{FieldValue, Reference, take_field};
pub use link::{LINK_TYPE_TAG, LinkByUid};
pub use object::{Constructor, FromFields, Obj, Serializable, constructor};
pub use uids::{Uids, new_uid};
pub use value::{Fields, Value};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building, encoding or decoding record graphs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tagged value's type tag has no registered constructor.
    #[error("unexpected base object type: {0}")]
    UnknownType(String),

    /// A registration was rejected before touching the registry.
    #[error("invalid registration: {0}")]
    InvalidRegistration(String),

    /// Two different entities claimed the same (scope, id) in one document.
    #[error("conflicting uid: '{scope}'::'{id}' is claimed by two different entities")]
    ConflictingUid { scope: String, id: String },

    /// A value could not be written to the wire format.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// An entity had to be linked but carries no uid.
    #[error("no uid for {0}; call set_uuids first")]
    MissingUid(String),

    /// A record field had the wrong shape for its constructor.
    #[error("invalid field '{field}' on {type_tag}: {reason}")]
    InvalidField {
        type_tag: String,
        field: String,
        reason: String,
    },

    /// A JSON integer does not fit in an `i64`.
    #[error("number out of range: {0}")]
    OutOfRange(String),

    /// A document did not have the `{"context": [...], "object": ...}` shape.
    #[error("malformed envelope: {0}")]
    Envelope(String),

    /// Configuration could not be parsed or is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
