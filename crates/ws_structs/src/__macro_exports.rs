//! Items referenced by the code generated in `ws_structs_derive`.
//!
//! Generated code cannot assume `alloc` is in scope for the caller,
//! so the handful of `alloc` items it needs are re-exported here.

pub use alloc::boxed::Box;
pub use alloc::string::{String, ToString};
pub use alloc::vec::Vec;

pub use erased_serde;
