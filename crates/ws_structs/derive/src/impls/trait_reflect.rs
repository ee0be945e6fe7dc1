use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// The kind specific parts of a `Reflect` implementation.
pub(crate) struct ReflectBody {
    /// `ReflectKind` variant.
    pub kind: TokenStream,
    /// `ReflectRef` and `ReflectMut` variant.
    pub view: TokenStream,
    /// Body of `is_zero`.
    pub is_zero: TokenStream,
    /// Body of `set_zero`.
    pub set_zero: TokenStream,
    /// Body of `reflect_debug` when the type has no `debug` flag.
    pub debug_fallback: Option<TokenStream>,
}

/// Generate implementation code for `Reflect` trait.
///
/// The `display`, `serialize` and `debug` flags decide whether
/// `to_text`, `as_serialize` and `reflect_debug` are overridden.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta, body: ReflectBody) -> TokenStream {
    use crate::path::fp::{DebugFP, FmtResultFP, FormatterFP, OptionFP, ResultFP};

    let ws_structs_path = meta.ws_structs_path();

    let reflect_ = crate::path::reflect_(ws_structs_path);
    let macro_exports_ = crate::path::macro_exports_(ws_structs_path);
    let reflect_kind_ = crate::path::reflect_kind_(ws_structs_path);
    let reflect_ref_ = crate::path::reflect_ref_(ws_structs_path);
    let reflect_mut_ = crate::path::reflect_mut_(ws_structs_path);

    let type_path = meta.type_path();
    let type_name = meta.type_name_expr();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    let ReflectBody {
        kind,
        view,
        is_zero,
        set_zero,
        debug_fallback,
    } = body;

    let avail = &meta.attrs().avail_traits;

    let to_text_tokens = if avail.display.is_some() {
        quote! {
            #[inline]
            fn to_text(&self) -> #OptionFP<#macro_exports_::String> {
                #OptionFP::Some(<Self as #macro_exports_::ToString>::to_string(self))
            }
        }
    } else {
        crate::utils::empty()
    };

    let as_serialize_tokens = if avail.serialize.is_some() {
        quote! {
            #[inline]
            fn as_serialize(&self) -> #OptionFP<&dyn #macro_exports_::erased_serde::Serialize> {
                #OptionFP::Some(self)
            }
        }
    } else {
        crate::utils::empty()
    };

    let debug_body = if avail.debug.is_some() {
        Some(quote!(<Self as #DebugFP>::fmt(self, f)))
    } else {
        debug_fallback
    };
    let reflect_debug_tokens = match debug_body {
        Some(debug_body) => quote! {
            fn reflect_debug(&self, f: &mut #FormatterFP<'_>) -> #FmtResultFP {
                #debug_body
            }
        },
        None => crate::utils::empty(),
    };

    quote! {
        impl #impl_generics #reflect_ for #type_path #ty_generics #where_clause {
            #[inline]
            fn reflect_type_name(&self) -> &'static str {
                #type_name
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#view(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#view(self)
            }

            fn set(
                &mut self,
                value: #macro_exports_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #macro_exports_::Box<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn is_zero(&self) -> bool {
                #is_zero
            }

            fn set_zero(&mut self) {
                #set_zero
            }

            #to_text_tokens

            #as_serialize_tokens

            #reflect_debug_tokens
        }
    }
}
