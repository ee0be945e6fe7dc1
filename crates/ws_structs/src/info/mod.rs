//! Static type information of reflected values.
//!
//! - [`ReflectKind`]: the shape of a value, used for kind checks on assignment.
//! - [`StructInfo`]: the declared name and ordered field table of a struct.
//! - [`NamedField`]: one field's name, visibility, embedding and raw tags.
//!
//! `StructInfo` and `NamedField` are built in `const` context by
//! [`#[derive(Reflect)]`](crate::derive::Reflect) and live in `static`s.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod kind;
mod struct_info;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use kind::ReflectKind;
pub use struct_info::StructInfo;
