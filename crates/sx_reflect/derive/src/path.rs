//! Paths of the `sx_reflect` items referenced by generated code.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `sx_reflect` crate.
///
/// 1. For crates that depend on `sx_reflect`, `::sx_reflect` is returned.
/// 2. For crates that depend on `sx_core`, `::sx_core::reflect` is returned.
/// 3. For other situations, `::sx_reflect` is returned, but this may be incorrect.
///
/// This reads the caller's manifest, so it is called once per derive and the
/// result is passed around.
pub(crate) fn sx_reflect() -> syn::Path {
    sx_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("sx_reflect"))
}

macro_rules! define_paths {
    ($($name:ident => $($segment:ident)::+;)*) => {$(
        #[inline(always)]
        pub(crate) fn $name(sx_reflect_path: &syn::Path) -> TokenStream {
            quote! {
                #sx_reflect_path::$($segment)::+
            }
        }
    )*};
}

define_paths! {
    reflect_ => Reflect;
    type_path_ => info::TypePath;
    typed_ => info::Typed;
    type_info_ => info::TypeInfo;
    struct_info_ => info::StructInfo;
    named_field_ => info::NamedField;
    struct_ => ops::Struct;
    struct_field_iter_ => ops::StructFieldIter;
    reflect_ref_ => ops::ReflectRef;
    reflect_mut_ => ops::ReflectMut;
    non_generic_type_info_cell_ => impls::NonGenericTypeInfoCell;
    generic_type_info_cell_ => impls::GenericTypeInfoCell;
}
