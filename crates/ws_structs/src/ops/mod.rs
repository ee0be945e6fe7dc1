//! Provide kind views and sub-traits for data operation.
//!
//! ## Menu
//!
//! The following are subtraits of [`Reflect`], each providing data access
//! for one shape of value:
//!
//! - [`Struct`]: For structs with named fields (e.g. `A { .. }`).
//! - [`List`]: For list-like values (e.g. `Vec<i32>`).
//! - [`Map`]: For map-like values (e.g. `BTreeMap<String, i32>`).
//!
//! [`ReflectRef`] and [`ReflectMut`] dispatch a `dyn Reflect` to the view
//! matching its kind.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use list_ops::List;
pub use map_ops::Map;
pub use struct_ops::{Struct, struct_debug, struct_is_zero};
