//! Code generation for the derived traits.

// -----------------------------------------------------------------------------
// Modules

mod struct_kind;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generates `TypePath`, `Typed`, `Struct` and `Reflect` impls.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let type_path_impl = trait_type_path::impl_trait_type_path(info);
    let typed_impl = trait_typed::impl_trait_typed(info);
    let struct_impl = struct_kind::impl_trait_struct(info);
    let reflect_impl = struct_kind::impl_trait_reflect(info);

    quote! {
        #type_path_impl

        #typed_impl

        #struct_impl

        #reflect_impl
    }
}

/// The where clause shared by all generated impls.
///
/// For generic structs every field type must be reflectable and every type
/// parameter `'static`.
fn where_clause(info: &ReflectStruct) -> TokenStream {
    let where_clause = info.generics().where_clause.as_ref();
    let predicates = where_clause.map(|w| &w.predicates);

    if !info.is_generic() {
        return match where_clause {
            Some(w) => quote! { #w },
            None => TokenStream::new(),
        };
    }

    let reflect_ = crate::path::reflect_(info.sx_reflect_path());
    let typed_ = crate::path::typed_(info.sx_reflect_path());

    let params = info.generics().type_params().map(|p| &p.ident);
    let field_tys = info.fields().iter().map(|f| f.ty);

    quote! {
        where
            #(#params: 'static,)*
            #(#field_tys: #reflect_ + #typed_,)*
            #predicates
    }
}
