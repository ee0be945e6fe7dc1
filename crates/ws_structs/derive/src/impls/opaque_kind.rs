use proc_macro2::TokenStream;
use quote::quote;

use super::{ReflectBody, impl_trait_reflect};
use crate::derive_data::ReflectMeta;

/// Implement `Reflect` for an opaque type.
///
/// The value is a leaf. Emptiness is equality with `Default::default()`.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    use crate::path::fp::{DefaultFP, PartialEqFP};

    impl_trait_reflect(
        meta,
        ReflectBody {
            kind: quote!(Opaque),
            view: quote!(Leaf),
            is_zero: quote! {
                <Self as #PartialEqFP>::eq(self, &<Self as #DefaultFP>::default())
            },
            set_zero: quote! {
                *self = <Self as #DefaultFP>::default();
            },
            debug_fallback: None,
        },
    )
}
