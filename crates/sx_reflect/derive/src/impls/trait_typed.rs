use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Typed` trait.
pub(crate) fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let sx_reflect_path = info.sx_reflect_path();
    let typed_ = crate::path::typed_(sx_reflect_path);
    let type_info_ = crate::path::type_info_(sx_reflect_path);
    let struct_info_ = crate::path::struct_info_(sx_reflect_path);
    let named_field_ = crate::path::named_field_(sx_reflect_path);

    let fields = info.fields().iter().map(|field| {
        let ty = field.ty;
        let name = &field.name;
        match &field.attrs.alias {
            Some(alias) => quote! {
                #named_field_::new::<#ty>(#name).with_alias(#alias)
            },
            None => quote! {
                #named_field_::new::<#ty>(#name)
            },
        }
    });

    let info_tokens = quote! {
        #type_info_::Struct(#struct_info_::new::<Self>(&[
            #(#fields,)*
        ]))
    };

    let cell_tokens = if info.is_generic() {
        let cell_ = crate::path::generic_type_info_cell_(sx_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(|| #info_tokens)
        }
    } else {
        let cell_ = crate::path::non_generic_type_info_cell_(sx_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(|| #info_tokens)
        }
    };

    let ident = info.ident();
    let (impl_generics, ty_generics, _) = info.generics().split_for_impl();
    let where_clause = super::where_clause(info);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #cell_tokens
            }
        }
    }
}
