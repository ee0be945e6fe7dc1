//! See following macros:
//!
//! - [`Reflect`]
//! - [`impl_reflect_opaque`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `Reflect` and, for structs with named
/// fields and unit structs, `Struct`.
///
/// A field is exported if it is declared `pub`. Restricted visibilities
/// such as `pub(crate)` are not exported.
///
/// Every field type must implement `Reflect`. Type parameters receive a
/// `Reflect` bound.
///
/// ## Field Tags
///
/// Any `key = "value"` pair in a field level `reflect` attribute is a tag,
/// read by the encoder under the tag key (default `map`):
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Server {
///     #[reflect(map = "id,string", json = "identifier")]
///     pub id: u32,
///     #[reflect(map = "-")]
///     pub password: String,
/// }
/// ```
///
/// The `embedded` flag marks a field as an embedded struct. It is metadata
/// only, fields are never flattened.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Server {
///     #[reflect(embedded)]
///     pub base: Base,
/// }
/// ```
///
/// ## Type Flags
///
/// - `opaque`: treat the type as a leaf, its inside is not inspected.
///   Requires `Default` and `PartialEq`, emptiness is equality with the
///   default value. Tuple structs, enums and unions must be opaque.
/// - `serialize`: the type implements `serde::Serialize`.
/// - `display`: the type implements `Display`, used for the `string` option.
/// - `debug`: the type implements `Debug`, used by `Debug for dyn Reflect`.
///
/// ```rust, ignore
/// #[derive(Reflect, Default, PartialEq, Debug)]
/// #[reflect(opaque, debug)]
/// enum Level {
///     #[default]
///     Info,
///     Warn,
/// }
/// ```
///
/// These flags can only be applied at the type level.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    use crate::derive_data::ReflectDerive;

    let ast = parse_macro_input!(input as DeriveInput);

    let reflect_impls = match ReflectDerive::from_input(&ast) {
        Ok(ReflectDerive::Struct(info)) => impls::impl_struct(&info),
        Ok(ReflectDerive::Opaque(meta)) => impls::impl_opaque(&meta),
        Err(err) => return err.into_compile_error().into(),
    };

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}

/// Implements `Reflect` for a foreign type as an opaque leaf.
///
/// Syntax: `path<generics> (flags)`, with the flags of
/// [`derive Reflect`](derive_reflect) except `opaque`, which is implied.
///
/// ## Example
///
/// ```rust, ignore
/// impl_reflect_opaque!(::core::time::Duration (serialize, debug));
/// impl_reflect_opaque!(::utils::One<T: Default + PartialEq> (debug));
/// ```
#[proc_macro]
pub fn impl_reflect_opaque(input: TokenStream) -> TokenStream {
    use crate::derive_data::{ReflectMeta, ReflectOpaqueParser};

    let ReflectOpaqueParser {
        attrs,
        type_path,
        generics,
    } = parse_macro_input!(input with ReflectOpaqueParser::parse);

    let meta = ReflectMeta::new_foreign(attrs, type_path, generics);
    let reflect_impls = impls::impl_opaque(&meta);

    quote! {
        const _: () = {
            #reflect_impls
        };
    }
    .into()
}
