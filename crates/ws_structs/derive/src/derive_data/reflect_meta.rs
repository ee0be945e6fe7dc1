use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Ident, Path, WhereClause, parse_quote};

use super::TypeAttributes;
use crate::path::ws_structs;

// -----------------------------------------------------------------------------
// ReflectMeta

/// How the implemented type is named in generated code.
pub(crate) enum TypeName {
    /// A type declared in the calling crate, named by its identifier.
    Local(Ident),
    /// A foreign type, named by its full path.
    Foreign(Path),
}

/// Metadata shared by every kind of reflected type.
pub(crate) struct ReflectMeta {
    ws_structs_path: Path,
    attrs: TypeAttributes,
    type_name: TypeName,
    generics: Generics,
}

impl ReflectMeta {
    pub fn new_local(attrs: TypeAttributes, ident: Ident, generics: Generics) -> Self {
        Self {
            ws_structs_path: ws_structs(),
            attrs,
            type_name: TypeName::Local(ident),
            generics,
        }
    }

    pub fn new_foreign(attrs: TypeAttributes, type_path: Path, generics: Generics) -> Self {
        Self {
            ws_structs_path: ws_structs(),
            attrs,
            type_name: TypeName::Foreign(type_path),
            generics,
        }
    }

    #[inline]
    pub fn ws_structs_path(&self) -> &Path {
        &self.ws_structs_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// The type in path position, without generics.
    pub fn type_path(&self) -> TokenStream {
        match &self.type_name {
            TypeName::Local(ident) => quote!(#ident),
            TypeName::Foreign(path) => quote!(#path),
        }
    }

    /// The body of `reflect_type_name`.
    ///
    /// Local types report their declared identifier, foreign types
    /// fall back to [`core::any::type_name`].
    pub fn type_name_expr(&self) -> TokenStream {
        match &self.type_name {
            TypeName::Local(ident) => {
                let name = ident.to_string();
                quote!(#name)
            }
            TypeName::Foreign(_) => quote!(::core::any::type_name::<Self>()),
        }
    }

    /// The declared identifier of local types.
    pub fn type_ident(&self) -> Option<&Ident> {
        match &self.type_name {
            TypeName::Local(ident) => Some(ident),
            TypeName::Foreign(_) => None,
        }
    }

    /// Split generics for an `impl` block, adding `Reflect` bounds on all
    /// type parameters.
    ///
    /// Returns `(impl_generics, ty_generics, where_clause)` tokens.
    pub fn split_generics(&self) -> (TokenStream, TokenStream, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let reflect_ = crate::path::reflect_(&self.ws_structs_path);
        let mut where_clause: WhereClause = match where_clause {
            Some(clause) => clause.clone(),
            None => parse_quote!(where),
        };
        for param in self.generics.type_params() {
            let ident = &param.ident;
            where_clause.predicates.push(parse_quote!(#ident: #reflect_));
        }

        (
            quote!(#impl_generics),
            quote!(#ty_generics),
            quote!(#where_clause),
        )
    }
}
