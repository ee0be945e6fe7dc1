use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{ReflectBody, impl_trait_reflect};
use crate::derive_data::ReflectStruct;

/// Implement `Reflect` and `Struct` for a struct with named fields.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let ws_structs_path = meta.ws_structs_path();
    let ops_ = crate::path::ops_(ws_structs_path);
    let reflect_ = crate::path::reflect_(ws_structs_path);

    let idents = info.fields().iter().map(|field| field.ident);
    let set_zero = quote! {
        #( #reflect_::set_zero(&mut self.#idents); )*
    };

    let debug_fallback = quote!(#ops_::struct_debug(self, f));

    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        ReflectBody {
            kind: quote!(Struct),
            view: quote!(Struct),
            is_zero: quote!(#ops_::struct_is_zero(self)),
            set_zero,
            debug_fallback: Some(debug_fallback),
        },
    );

    let struct_trait_tokens = impl_trait_struct(info);

    quote! {
        #reflect_trait_tokens

        #struct_trait_tokens
    }
}

/// The static field table, one `NamedField` per declared field.
fn get_field_table(info: &ReflectStruct) -> TokenStream {
    let named_field_ = crate::path::named_field_(info.meta().ws_structs_path());

    let entries = info.fields().iter().map(|field| {
        let name = field.ident.to_string();
        let exported = field.exported;
        let embedded = field.attrs.embedded;
        let tags = field.attrs.tags.iter().map(|(key, raw)| quote!((#key, #raw)));
        quote! {
            #named_field_::new(#name)
                .with_exported(#exported)
                .with_embedded(#embedded)
                .with_tags(&[#(#tags),*])
        }
    });

    quote! {
        [#(#entries),*]
    }
}

fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::OptionFP;

    let option_ = OptionFP.to_token_stream();

    let meta = info.meta();
    let ws_structs_path = meta.ws_structs_path();

    let reflect_ = crate::path::reflect_(ws_structs_path);
    let struct_ = crate::path::struct_(ws_structs_path);
    let struct_info_ = crate::path::struct_info_(ws_structs_path);
    let named_field_ = crate::path::named_field_(ws_structs_path);
    let macro_exports_ = crate::path::macro_exports_(ws_structs_path);

    let type_path = meta.type_path();
    let type_name = match meta.type_ident() {
        Some(ident) => ident.to_string(),
        None => type_path.to_string(),
    };
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    let field_len = info.fields().len();
    let field_table = get_field_table(info);

    let indices = info.fields().iter().map(|field| field.index);
    let idents = info.fields().iter().map(|field| field.ident);
    let field_at_arms = quote! {
        #( #indices => #option_::Some(&self.#idents as &dyn #reflect_), )*
    };

    let indices = info.fields().iter().map(|field| field.index);
    let idents = info.fields().iter().map(|field| field.ident);
    let field_at_mut_arms = quote! {
        #( #indices => #option_::Some(&mut self.#idents as &mut dyn #reflect_), )*
    };

    let fields_mut_body = if info.fields().is_empty() {
        quote!(#macro_exports_::Vec::new())
    } else {
        let idents = info.fields().iter().map(|field| field.ident);
        quote! {
            #macro_exports_::Vec::from([#( &mut self.#idents as &mut dyn #reflect_ ),*])
        }
    };

    quote! {
        impl #impl_generics #struct_ for #type_path #ty_generics #where_clause {
            fn struct_info(&self) -> &'static #struct_info_ {
                static FIELDS: [#named_field_; #field_len] = #field_table;
                static INFO: #struct_info_ = #struct_info_::new(
                    #type_name,
                    ::core::module_path!(),
                    &FIELDS,
                );
                &INFO
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #field_at_arms
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #field_at_mut_arms
                    _ => #option_::None,
                }
            }

            fn fields_mut(&mut self) -> #macro_exports_::Vec<&mut dyn #reflect_> {
                #fields_mut_body
            }
        }
    }
}
