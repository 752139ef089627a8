use alloc::boxed::Box;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::info::{NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

type IndexMap = HashMap<&'static str, usize, FixedState>;

/// A container for compile-time named struct info.
///
/// Besides the fields themselves, a `StructInfo` resolves wire keys:
/// a key is either a field's alias or, failing that, its canonical name.
///
/// # Examples
///
/// ```rust
/// use sx_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Record {
///     #[reflect(alias = "f_32")]
///     f32_value: f32,
///     flag: bool,
/// }
///
/// let info = <Record as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of_key("f_32"), Some(0));
/// assert_eq!(info.index_of_key("f32_value"), Some(0));
/// assert_eq!(info.canonical_name("f_32"), "f32_value");
/// assert_eq!(info.canonical_name("missing"), "missing");
/// ```
///
/// A key names exactly one field, so an alias cannot take the name of
/// another field:
///
/// ```compile_fail
/// use sx_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Clash {
///     #[reflect(alias = "b")]
///     a: u8,
///     b: u8,
/// }
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    names: IndexMap,
    aliases: IndexMap,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    ///
    /// # Panics
    ///
    /// Panics if a name or an alias identifies more than one field. The derive
    /// macro rejects such declarations at compile time.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let mut names = IndexMap::with_capacity_and_hasher(fields.len(), FixedState::default());
        let mut aliases = IndexMap::with_hasher(FixedState::default());

        for (index, field) in fields.iter().enumerate() {
            let prev = names.insert(field.name(), index);
            assert!(prev.is_none(), "duplicate field name `{}`", field.name());
        }

        for (index, field) in fields.iter().enumerate() {
            let Some(alias) = field.alias() else {
                continue;
            };
            let prev = aliases.insert(alias, index);
            assert!(prev.is_none(), "duplicate field alias `{alias}`");
            assert!(
                names.get(alias).is_none_or(|&owner| owner == index),
                "alias `{alias}` is the name of another field"
            );
        }

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            names,
            aliases,
        }
    }

    /// Returns the [`NamedField`] for the given canonical `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.names.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the index for the given canonical field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    /// Returns the index of the field a wire `key` refers to.
    ///
    /// Aliases take precedence over canonical names.
    pub fn index_of_key(&self, key: &str) -> Option<usize> {
        self.aliases
            .get(key)
            .or_else(|| self.names.get(key))
            .copied()
    }

    /// Resolves a wire `key` to the canonical field name.
    ///
    /// A key that is not a declared alias resolves to itself.
    pub fn canonical_name<'a>(&self, key: &'a str) -> &'a str {
        match self.aliases.get(key) {
            Some(&index) => self.fields[index].name(),
            None => key,
        }
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::StructInfo;
    use crate::derive::Reflect;
    use crate::info::{NamedField, Typed};

    #[derive(Reflect, Default)]
    struct Aliased {
        #[reflect(alias = "x")]
        first: u8,
        #[reflect(alias = "second")]
        second: u8,
        third: u8,
    }

    #[test]
    fn keys_resolve_to_fields() {
        let info = Aliased::type_info().as_struct().unwrap();
        assert_eq!(info.index_of_key("x"), Some(0));
        assert_eq!(info.index_of_key("first"), Some(0));
        assert_eq!(info.index_of_key("second"), Some(1));
        assert_eq!(info.index_of_key("third"), Some(2));
        assert_eq!(info.index_of_key("fourth"), None);
        assert_eq!(info.canonical_name("x"), "first");
        assert_eq!(info.field("first").unwrap().key(), "x");
    }

    #[test]
    fn fields_keep_declaration_order() {
        let info = Aliased::type_info().as_struct().unwrap();
        let keys: Vec<_> = info.iter().map(|f| f.key()).collect();
        assert_eq!(keys, ["x", "second", "third"]);
    }

    #[test]
    #[should_panic(expected = "alias `third` is the name of another field")]
    fn alias_cannot_name_another_field() {
        StructInfo::new::<Aliased>(&[
            NamedField::new::<u8>("first").with_alias("third"),
            NamedField::new::<u8>("second"),
            NamedField::new::<u8>("third"),
        ]);
    }

    #[test]
    #[should_panic(expected = "duplicate field alias `x`")]
    fn aliases_cannot_repeat() {
        StructInfo::new::<Aliased>(&[
            NamedField::new::<u8>("first").with_alias("x"),
            NamedField::new::<u8>("second").with_alias("x"),
        ]);
    }
}
