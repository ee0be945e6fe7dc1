use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Field level attributes: `#[reflect(embedded, map = "...", json = "...")]`.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub embedded: bool,
    /// `(key, raw tag)` in declaration order.
    pub tags: Vec<(String, LitStr)>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let Some(ident) = meta.path.get_ident() else {
                    return Err(meta.error("expected `embedded` or `key = \"tag\"`"));
                };

                if meta.input.peek(syn::Token![=]) {
                    let key = ident.to_string();
                    if this.tags.iter().any(|(k, _)| *k == key) {
                        return Err(meta.error(format!("duplicate tag key `{key}`")));
                    }
                    let raw: LitStr = meta.value()?.parse()?;
                    this.tags.push((key, raw));
                    return Ok(());
                }

                if ident == "embedded" {
                    this.embedded = true;
                    Ok(())
                } else {
                    Err(meta.error(format!("unknown field flag `{ident}`, expected `embedded`")))
                }
            })?;
        }
        Ok(this)
    }
}
