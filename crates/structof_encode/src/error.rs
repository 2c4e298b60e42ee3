use alloc::string::String;

use structof_reflect::info::ReflectKind;
use structof_reflect::ops::ScalarError;
use thiserror::Error;

// -----------------------------------------------------------------------------
// EncodeError

/// A failure discovered while converting a value.
///
/// The partial output of the failed call is discarded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// The value has a kind that has no generic form, e.g. a function pointer
    /// or a map whose keys are not text.
    #[error("structof: unsupported type: {type_path} for field: {key}")]
    UnsupportedType {
        type_path: &'static str,
        key: String,
    },

    /// The value cannot be converted, e.g. it refers back to itself.
    #[error("structof: unsupported value: {0}")]
    UnsupportedValue(String),
}

// -----------------------------------------------------------------------------
// LookupError

/// Returned by the path lookups of [`navigate::Struct`](crate::navigate::Struct).
///
/// Each variant carries the path up to and including the failing segment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    #[error("field {0:?} not found")]
    NotFound(String),

    #[error("field {0:?} not exported")]
    NotExported(String),

    #[error("field {0:?} not struct or pointer to struct")]
    NotStruct(String),

    #[error("field {0:?} is a null pointer")]
    NullPointer(String),
}

// -----------------------------------------------------------------------------
// SetError

/// Returned by [`FieldMut::try_set`](crate::navigate::FieldMut::try_set).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetError {
    /// The value is of another [`ReflectKind`] than the field.
    #[error("kind not match {expected} != {received}")]
    KindMismatch {
        expected: ReflectKind,
        received: ReflectKind,
    },

    /// The value has the right kind but cannot be stored in the field.
    #[error("cannot assign `{received}` to a field of type `{expected}`")]
    Incompatible {
        expected: &'static str,
        received: &'static str,
        #[source]
        source: Option<ScalarError>,
    },
}
