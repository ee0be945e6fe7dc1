use syn::{Ident, Visibility};

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// StructField

/// A named field of a reflected struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    /// The position in declaration order, private fields included.
    pub index: usize,
    /// Only a plain `pub` exports a field.
    pub exported: bool,
    pub attrs: FieldAttributes,
}

impl<'a> StructField<'a> {
    pub fn new(field: &'a syn::Field, index: usize) -> syn::Result<Self> {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        Ok(Self {
            ident,
            index,
            exported: matches!(field.vis, Visibility::Public(_)),
            attrs: FieldAttributes::parse_attrs(&field.attrs)?,
        })
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A struct with named fields, or a unit struct.
pub(crate) struct ReflectStruct<'a> {
    pub meta: ReflectMeta,
    pub fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    #[inline]
    pub fn meta(&self) -> &ReflectMeta {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }
}
