use syn::parse::ParseStream;
use syn::token::Paren;
use syn::{Attribute, Generics, Path, parenthesized};

use super::TypeAttributes;

// -----------------------------------------------------------------------------
// Opaque Parser

/// The input of [`impl_reflect_opaque`](crate::impl_reflect_opaque).
pub(crate) struct ReflectOpaqueParser {
    pub attrs: TypeAttributes,
    pub type_path: Path,
    pub generics: Generics,
}

impl ReflectOpaqueParser {
    /// Format: `path<generics> where .. (..flags..)`
    pub fn parse(input: ParseStream) -> syn::Result<Self> {
        let origin_span = input.span();
        let origin_attrs = input.call(Attribute::parse_outer)?;
        let mut attrs = TypeAttributes::parse_attrs(origin_attrs.as_slice())?;

        let type_path = Path::parse_mod_style(input)?;
        if type_path.segments.is_empty() {
            return Err(input.error("expected a type path"));
        }

        let mut generics = input.parse::<Generics>()?;
        generics.where_clause = input.parse()?;

        if input.peek(Paren) {
            let content;
            parenthesized!(content in input);
            attrs.parse_stream(&content)?;
        }
        if let Some(span) = attrs.is_opaque {
            return Err(syn::Error::new(span, "`opaque` is implied by `impl_reflect_opaque!`"));
        }
        attrs.is_opaque = Some(origin_span);

        Ok(Self {
            attrs,
            type_path,
            generics,
        })
    }
}
