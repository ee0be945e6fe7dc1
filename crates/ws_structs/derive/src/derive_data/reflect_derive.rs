use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

use super::{ReflectMeta, ReflectStruct, StructField, TypeAttributes};

// -----------------------------------------------------------------------------
// ReflectDerive

/// The implementation strategy chosen for a `#[derive(Reflect)]` input.
pub(crate) enum ReflectDerive<'a> {
    /// A struct with named fields or a unit struct.
    Struct(ReflectStruct<'a>),
    /// Any type marked `#[reflect(opaque)]`.
    Opaque(ReflectMeta),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let is_opaque = attrs.is_opaque.is_some();
        let meta = ReflectMeta::new_local(attrs, input.ident.clone(), input.generics.clone());

        if is_opaque {
            return Ok(Self::Opaque(meta));
        }

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => {
                    let fields = named
                        .named
                        .iter()
                        .enumerate()
                        .map(|(index, field)| StructField::new(field, index))
                        .collect::<syn::Result<Vec<_>>>()?;
                    Ok(Self::Struct(ReflectStruct { meta, fields }))
                }
                Fields::Unit => Ok(Self::Struct(ReflectStruct {
                    meta,
                    fields: Vec::new(),
                })),
                Fields::Unnamed(unnamed) => Err(syn::Error::new(
                    unnamed.span(),
                    "tuple structs are not supported, mark the type `#[reflect(opaque)]`",
                )),
            },
            Data::Enum(data) => Err(syn::Error::new(
                data.enum_token.span(),
                "enums are not supported, mark the type `#[reflect(opaque)]`",
            )),
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span(),
                "unions are not supported, mark the type `#[reflect(opaque)]`",
            )),
        }
    }
}
