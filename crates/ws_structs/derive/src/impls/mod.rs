// -----------------------------------------------------------------------------
// Modules

mod opaque_kind;
mod struct_kind;
mod trait_reflect;

// -----------------------------------------------------------------------------
// Internal API

use trait_reflect::{ReflectBody, impl_trait_reflect};

pub(crate) use opaque_kind::impl_opaque;
pub(crate) use struct_kind::impl_struct;
