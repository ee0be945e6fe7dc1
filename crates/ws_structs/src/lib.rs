#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macros emit `::ws_structs::...` paths. Inside this crate (unit
// tests and doc tests) that path must still resolve, hence the alias.
extern crate self as ws_structs;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod reflection;

pub mod access;
pub mod encode;
pub mod impls;
pub mod info;
pub mod ops;
pub mod serde;
pub mod tags;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::Error;
pub use reflection::Reflect;
pub use ws_structs_derive as derive;

pub use access::{Field, FieldMut};
pub use encode::{DEFAULT_TAG_KEY, Encoder, EncoderMut, StructMap, Value};
pub use encode::{fields, fill_map, has_zero, is_struct, is_zero, name, names, to_map, values};
