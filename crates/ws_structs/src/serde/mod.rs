//! `serde` support for reflected values and encoder output.
//!
//! - [`ReflectSerializer`] serializes any `&dyn Reflect`.
//! - [`Value`](crate::Value) and [`StructMap`](crate::StructMap) implement
//!   `Serialize`, so an encoded struct can be written in any serde format.
//!
//! A value is serialized with its own `Serialize` implementation when it
//! exposes one (see [`Reflect::as_serialize`]). Otherwise the shape decides:
//!
//! | Kind     | Serialized as                                  |
//! | -------- | ---------------------------------------------- |
//! | Struct   | a struct of its exported fields, declared names |
//! | List     | a sequence                                     |
//! | Map      | a map                                          |
//! | Option   | an option                                      |
//! | Pointer  | the pointee                                    |
//! | Leaf     | an error naming the type                       |
//!
//! Tags are not applied here, encode first to apply them.
//!
//! [`Reflect::as_serialize`]: crate::Reflect::as_serialize

// -----------------------------------------------------------------------------
// Modules

mod output;
mod reflect_serializer;

// -----------------------------------------------------------------------------
// Exports

pub use reflect_serializer::ReflectSerializer;
