use std::collections::BTreeMap;

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Path, Type, spanned::Spanned};

use super::{FieldAttributes, TypeAttributes};

/// A named field of the derived struct.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    /// The field name without the `r#` prefix.
    pub name: String,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

/// The parsed derive input of a named struct.
pub(crate) struct ReflectStruct<'a> {
    sx_reflect_path: Path,
    ident: &'a Ident,
    generics: &'a Generics,
    attrs: TypeAttributes,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_derive_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                _ => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Reflect` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Reflect` cannot be derived for types with lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse(&input.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let Some(ident) = field.ident.as_ref() else {
                return Err(syn::Error::new(field.span(), "expected a named field"));
            };
            fields.push(StructField {
                ident,
                name: ident.unraw().to_string(),
                ty: &field.ty,
                attrs: FieldAttributes::parse(&field.attrs)?,
            });
        }

        check_unique_keys(&fields)?;

        Ok(Self {
            sx_reflect_path: crate::path::sx_reflect(),
            ident: &input.ident,
            generics: &input.generics,
            attrs,
            fields,
        })
    }

    #[inline]
    pub fn sx_reflect_path(&self) -> &Path {
        &self.sx_reflect_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn generics(&self) -> &Generics {
        self.generics
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Whether the impls must be written per instantiation.
    #[inline]
    pub fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
            || self.generics.const_params().next().is_some()
    }
}

/// Every wire key, a field's name or its alias, must identify one field.
fn check_unique_keys(fields: &[StructField]) -> syn::Result<()> {
    let mut owners: BTreeMap<String, &str> = fields
        .iter()
        .map(|field| (field.name.clone(), field.name.as_str()))
        .collect();

    for field in fields {
        let Some(alias) = &field.attrs.alias else {
            continue;
        };
        let key = alias.value();
        if key == field.name {
            continue;
        }
        if let Some(owner) = owners.insert(key.clone(), &field.name) {
            return Err(syn::Error::new(
                alias.span(),
                format!("alias `{key}` is already used by field `{owner}`"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::ReflectStruct;

    fn error_of(input: DeriveInput) -> String {
        match ReflectStruct::from_derive_input(&input) {
            Ok(_) => panic!("derive input was accepted"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn alias_cannot_shadow_another_field() {
        let input = parse_quote! {
            struct Clash {
                #[reflect(alias = "b")]
                a: u8,
                b: u8,
            }
        };
        assert_eq!(error_of(input), "alias `b` is already used by field `b`");

        let input = parse_quote! {
            struct Clash {
                a: u8,
                #[reflect(alias = "a")]
                b: u8,
            }
        };
        assert_eq!(error_of(input), "alias `a` is already used by field `a`");
    }

    #[test]
    fn aliases_are_unique() {
        let input = parse_quote! {
            struct Clash {
                #[reflect(alias = "x")]
                a: u8,
                #[reflect(alias = "x")]
                b: u8,
            }
        };
        assert_eq!(error_of(input), "alias `x` is already used by field `a`");
    }

    #[test]
    fn unsupported_shapes() {
        let input = parse_quote! { struct Pair(u8, u8); };
        assert!(error_of(input).contains("named fields"));

        let input = parse_quote! { enum Shape { Circle } };
        assert!(error_of(input).contains("enums"));
    }
}
