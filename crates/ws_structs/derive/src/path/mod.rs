//! This independent module is used to provide the required paths.
//! So as to minimize changes when the `ws_structs` structure is modified.
//!
//! The only special feature is the path of ws_structs itself,
//! See [`ws_structs`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) use ws_macro_utils::full_path as fp;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `ws_structs` crate.
///
/// 1. For crates that depend on `ws_structs`, `::ws_structs` is returned.
/// 2. For crates that depend on `ws_core`, `::ws_core::structs` is returned.
/// 3. For crates that depend on `ws`, `::ws::structs` is returned.
/// 4. For other situations, `::ws_structs` is returned, but this may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so it is called once per macro
/// invocation and the result is passed around.
pub(crate) fn ws_structs() -> syn::Path {
    ws_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("ws_structs"))
}

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn macro_exports_(ws_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #ws_structs_path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn reflect_(ws_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #ws_structs_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(ws_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #ws_structs_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn named_field_(ws_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #ws_structs_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn struct_info_(ws_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #ws_structs_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(ws_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #ws_structs_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(ws_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #ws_structs_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn struct_(ws_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #ws_structs_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn ops_(ws_structs_path: &syn::Path) -> TokenStream {
    quote! {
        #ws_structs_path::ops
    }
}
