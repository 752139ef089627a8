use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation code for `Struct` trait.
pub(crate) fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let sx_reflect_path = info.sx_reflect_path();
    let reflect_ = crate::path::reflect_(sx_reflect_path);
    let struct_ = crate::path::struct_(sx_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(sx_reflect_path);

    let fields = info.fields();
    let field_len = fields.len();
    let idents: Vec<_> = fields.iter().map(|f| f.ident).collect();
    let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
    let indices: Vec<_> = (0..field_len).collect();

    let ident = info.ident();
    let (impl_generics, ty_generics, _) = info.generics().split_for_impl();
    let where_clause = super::where_clause(info);

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #(#names => ::core::option::Option::Some(&self.#idents as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn #reflect_> {
                match name {
                    #(#names => ::core::option::Option::Some(&mut self.#idents as &mut dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#idents as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&mut self.#idents as &mut dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#indices => ::core::option::Option::Some(#names),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

/// Generate implementation code for `Reflect` trait.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let sx_reflect_path = info.sx_reflect_path();
    let reflect_ = crate::path::reflect_(sx_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(sx_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(sx_reflect_path);

    let ident = info.ident();
    let (impl_generics, ty_generics, _) = info.generics().split_for_impl();
    let where_clause = super::where_clause(info);

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }
        }
    }
}
