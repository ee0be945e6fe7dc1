//! [`Reflect`](crate::Reflect) implementations for foreign types.
//!
//! - Scalars: all integer and float primitives, `bool`, `char`.
//! - Text: `String`, `&'static str`.
//! - Indirection: `Option<T>`, `Box<T>`.
//! - Collections: `Vec<T>`, `VecDeque<T>`, `BTreeMap<K, V>`,
//!   `hashbrown::HashMap<K, V, S>`, and the std `HashMap<K, V, S>` with the
//!   `std` feature.
//! - Opaque leaves: `Duration`.

mod boxed;
mod collections;
mod option;
mod primitives;
mod time;
