use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `TypePath` trait.
pub(crate) fn impl_trait_type_path(info: &ReflectStruct) -> TokenStream {
    let type_path_ = crate::path::type_path_(info.sx_reflect_path());

    let ident = info.ident();
    let ident_str = ident.to_string();
    let (impl_generics, ty_generics, _) = info.generics().split_for_impl();
    let where_clause = super::where_clause(info);

    let path_tokens = match &info.attrs().type_path {
        Some(custom) => quote! { #custom },
        None if info.is_generic() => quote! { ::core::any::type_name::<Self>() },
        None => quote! { ::core::concat!(::core::module_path!(), "::", #ident_str) },
    };

    quote! {
        impl #impl_generics #type_path_ for #ident #ty_generics #where_clause {
            #[inline]
            fn type_path() -> &'static str {
                #path_tokens
            }

            #[inline]
            fn type_ident() -> &'static str {
                #ident_str
            }
        }
    }
}
