use thiserror::Error;

use crate::info::ReflectKind;

// -----------------------------------------------------------------------------
// Error

/// Errors reported by the encoder and the field accessors.
///
/// Every error is returned to the immediate caller; nothing is retried and
/// nothing is logged. The `must_*` lookups panic with the same message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The root value (after one level of `Box`/`Option`) is not a struct.
    #[error("structs: `{type_name}` is a {kind} value, not a struct")]
    NotStruct {
        type_name: &'static str,
        kind: ReflectKind,
    },

    /// The field is not `pub`, its value is invisible to the caller.
    #[error("structs: field `{field}` is not exported")]
    NotExported { field: &'static str },

    /// The field was reached through a read-only accessor.
    #[error("structs: field `{field}` is not settable")]
    NotSettable { field: &'static str },

    /// The assigned value does not have the field's type.
    #[error("structs: wrong type for field `{field}`. got: {got} want: {want}")]
    TypeMismatch {
        field: &'static str,
        want: &'static str,
        got: &'static str,
    },

    /// No field with the given name exists.
    #[error("structs: field `{name}` not found")]
    FieldNotFound { name: alloc::string::String },
}
