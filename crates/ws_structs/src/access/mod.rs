//! Accessors bound to one field of one struct instance.
//!
//! - [`Field`]: a read-only view, obtained from a shared borrow.
//! - [`FieldMut`]: a settable binding, obtained from a mutable borrow.
//!
//! Both expose the field metadata ([`NamedField`]) and guard the value of
//! non-exported fields: reading or writing it fails with
//! [`Error::NotExported`].
//!
//! [`NamedField`]: crate::info::NamedField
//! [`Error::NotExported`]: crate::Error::NotExported

// -----------------------------------------------------------------------------
// Modules

mod field;
mod field_mut;

// -----------------------------------------------------------------------------
// Exports

pub use field::Field;
pub use field_mut::FieldMut;

pub(crate) use field_mut::exported_fields_mut;

// -----------------------------------------------------------------------------
// Helpers

use crate::ops::Struct;
use crate::{Error, Reflect};

/// Builds the error for a value that was expected to hold a struct.
#[inline]
pub(crate) fn not_struct(value: &dyn Reflect) -> Error {
    Error::NotStruct {
        type_name: value.reflect_type_name(),
        kind: value.reflect_kind(),
    }
}

/// Index of the field named `name`, or [`Error::FieldNotFound`].
#[inline]
pub(crate) fn index_of(value: &dyn Struct, name: &str) -> Result<usize, Error> {
    value
        .struct_info()
        .index_of(name)
        .ok_or_else(|| Error::FieldNotFound { name: name.into() })
}
