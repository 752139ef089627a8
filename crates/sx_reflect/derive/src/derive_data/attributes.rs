use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Type level `#[reflect(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(type_path = "...")]`
    pub type_path: Option<LitStr>,
}

impl TypeAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(REFLECT_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if this.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path`"));
                    }
                    this.type_path = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("alias") {
                    Err(meta.error("`alias` can only be applied to fields"))
                } else {
                    Err(meta.error("unsupported reflect attribute, expected `type_path`"))
                }
            })?;
        }

        Ok(this)
    }
}

/// Field level `#[reflect(...)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(alias = "...")]`
    pub alias: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(REFLECT_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("alias") {
                    if this.alias.is_some() {
                        return Err(meta.error("a field can have only one `alias`"));
                    }
                    let alias: LitStr = meta.value()?.parse()?;
                    check_symbol(&alias)?;
                    this.alias = Some(alias);
                    Ok(())
                } else {
                    Err(meta.error("unsupported reflect attribute, expected `alias`"))
                }
            })?;
        }

        Ok(this)
    }
}

/// An alias is written unquoted as a record key, so it must read back as one
/// symbol.
fn check_symbol(alias: &LitStr) -> syn::Result<()> {
    let text = alias.value();
    let reason = if text.is_empty() {
        "`alias` cannot be empty"
    } else if text
        .chars()
        .any(|ch| ch.is_whitespace() || ch.is_control() || matches!(ch, '(' | ')' | '"' | ';'))
    {
        "`alias` cannot contain whitespace, parentheses, quotes or `;`"
    } else if text == "nil" || text == "t" {
        "`alias` cannot be `nil` or `t`"
    } else if is_number(&text) {
        "`alias` cannot be a number"
    } else {
        return Ok(());
    };
    Err(syn::Error::new(alias.span(), reason))
}

/// Matches `[+-]?digits(.digits)?([eE][+-]?digits)?`.
fn is_number(text: &str) -> bool {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };
    let (integral, fraction) = match mantissa.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (mantissa, None),
    };

    digits(integral)
        && fraction.is_none_or(digits)
        && exponent.is_none_or(|e| digits(e.strip_prefix(['+', '-']).unwrap_or(e)))
}

#[cfg(test)]
mod tests {
    use syn::{Attribute, parse_quote};

    use super::{FieldAttributes, is_number};

    fn parse(attr: Attribute) -> syn::Result<FieldAttributes> {
        FieldAttributes::parse(&[attr])
    }

    #[test]
    fn plain_symbols_are_accepted() {
        let attrs: [Attribute; 5] = [
            parse_quote!(#[reflect(alias = "f_32")]),
            parse_quote!(#[reflect(alias = "Title")]),
            parse_quote!(#[reflect(alias = "x-y")]),
            parse_quote!(#[reflect(alias = "1st")]),
            parse_quote!(#[reflect(alias = "-")]),
        ];
        for attr in attrs {
            assert!(parse(attr).unwrap().alias.is_some());
        }
    }

    #[test]
    fn aliases_that_do_not_read_back_are_rejected() {
        let attrs: [Attribute; 9] = [
            parse_quote!(#[reflect(alias = "")]),
            parse_quote!(#[reflect(alias = "42")]),
            parse_quote!(#[reflect(alias = "-1.5e3")]),
            parse_quote!(#[reflect(alias = "a b")]),
            parse_quote!(#[reflect(alias = "x(y")]),
            parse_quote!(#[reflect(alias = "say\"hi")]),
            parse_quote!(#[reflect(alias = "a;b")]),
            parse_quote!(#[reflect(alias = "nil")]),
            parse_quote!(#[reflect(alias = "t")]),
        ];
        for attr in attrs {
            assert!(parse(attr).is_err());
        }
    }

    #[test]
    fn numbers() {
        assert!(is_number("+7"));
        assert!(is_number("0.25"));
        assert!(is_number("1E-9"));
        assert!(!is_number("1e"));
        assert!(!is_number(".5"));
        assert!(!is_number("1.x"));
    }
}
