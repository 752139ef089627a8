//! Derive macro for [`sx_reflect`](https://docs.rs/sx_reflect).
//!
//! See [`Reflect`](derive_reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection for named structs
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Struct`
/// - `Reflect`
///
/// Only structs with named fields are supported. Every field type must
/// itself implement `Reflect` and `Typed`.
///
/// ## Field Alias
///
/// A field may be written under another key:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Record {
///     #[reflect(alias = "f_32")]
///     f32_value: f32,
/// }
/// ```
///
/// Each key must name one field: an alias cannot repeat another alias or
/// the name of another field. An alias must also read back as a single
/// symbol, so it cannot be a number, `nil` or `t`, or contain whitespace,
/// parentheses, quotes or `;`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Clash {
///     #[reflect(alias = "b")]
///     a: u8,
///     b: u8, // error: alias `b` is already used by field `b`
/// }
/// ```
///
/// ## Custom Type Path
///
/// By default the type path is `module_path!()::Ident` for non-generic types,
/// and [`core::any::type_name`] for generic ones. It can be overridden:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "pkg.Record")]
/// struct Record { /* ... */ }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let info = match derive_data::ReflectStruct::from_derive_input(&ast) {
        Ok(info) => info,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls = impls::impl_struct(&info);

    quote! {
        const _: () = {
            #reflect_impls
        };
    }
    .into()
}
