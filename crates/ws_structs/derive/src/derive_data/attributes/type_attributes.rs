use proc_macro2::Span;
use syn::parse::ParseStream;
use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, Token};

use super::TraitAvailableFlags;
use crate::REFLECT_ATTRIBUTE_NAME;

/// Type level attributes: `#[reflect(opaque, serialize, display, debug)]`.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// Set by `opaque`, or implied by `impl_reflect_opaque!`.
    pub is_opaque: Option<Span>,
    pub avail_traits: TraitAvailableFlags,
}

impl TypeAttributes {
    /// Parse all `#[reflect(...)]` attributes of a type.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| match meta.path.get_ident() {
                Some(ident) if meta.input.is_empty() || meta.input.peek(Token![,]) => {
                    this.set_flag(ident)
                }
                _ => Err(meta.error("expected one of: `opaque`, `serialize`, `display`, `debug`")),
            })?;
        }
        Ok(this)
    }

    /// Parse a comma separated list of flags, as in `(serialize, debug)`.
    pub fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        let flags = Punctuated::<Ident, Token![,]>::parse_terminated(input)?;
        for ident in &flags {
            self.set_flag(ident)?;
        }
        Ok(())
    }

    fn set_flag(&mut self, ident: &Ident) -> syn::Result<()> {
        let span = ident.span();
        let slot = match ident.to_string().as_str() {
            "opaque" => &mut self.is_opaque,
            "serialize" => &mut self.avail_traits.serialize,
            "display" => &mut self.avail_traits.display,
            "debug" => &mut self.avail_traits.debug,
            _ => {
                return Err(syn::Error::new(
                    span,
                    format!("unknown flag `{ident}`, expected one of: `opaque`, `serialize`, `display`, `debug`"),
                ));
            }
        };
        if slot.is_some() {
            return Err(syn::Error::new(span, format!("duplicate flag `{ident}`")));
        }
        *slot = Some(span);
        Ok(())
    }
}
