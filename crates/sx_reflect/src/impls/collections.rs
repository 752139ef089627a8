use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{ArrayInfo, ListInfo, MapInfo, OptionInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Array, ArrayItemIter, List, ListItemIter, Map, MapIter, Optional};
use crate::reflection::impl_reflect_cast_fn;

/// `TypePath` of a generic container, using the compiler's type name.
macro_rules! impl_generic_type_path {
    (impl<$($param:ident),*> for $ty:ty => $ident:literal) => {
        impl<$($param: 'static),*> TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::any::type_name::<Self>()
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Vec

impl_generic_type_path!(impl<T> for Vec<T> => "Vec");

impl<T: Reflect + Typed + Default> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Vec<T> {
    impl_reflect_cast_fn!(List);
}

impl<T: Reflect + Typed + Default> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(|item| item as &mut dyn Reflect)
    }

    fn push_zero(&mut self) -> &mut dyn Reflect {
        let index = Vec::len(self);
        self.push(T::default());
        &mut self[index]
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// [T; N]

impl<T: 'static, const N: usize> TypePath for [T; N] {
    #[inline]
    fn type_path() -> &'static str {
        ::core::any::type_name::<Self>()
    }

    #[inline]
    fn type_ident() -> &'static str {
        "array"
    }
}

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    impl_reflect_cast_fn!(Array);
}

impl<T: Reflect + Typed, const N: usize> Array for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(|item| item as &mut dyn Reflect)
    }

    #[inline]
    fn iter(&self) -> ArrayItemIter<'_> {
        ArrayItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// Maps

macro_rules! impl_reflect_map {
    (
        impl<$($param:ident),*> for $ty:ty => $ident:literal
        where $($bounds:tt)*
    ) => {
        impl_generic_type_path!(impl<$($param),*> for $ty => $ident);

        impl<$($param),*> Typed for $ty
        where
            $($bounds)*
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<$($param),*> Reflect for $ty
        where
            $($bounds)*
        {
            impl_reflect_cast_fn!(Map);
        }

        impl<$($param),*> Map for $ty
        where
            $($bounds)*
        {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
                let key = key.downcast_ref::<K>()?;
                <$ty>::get(self, key).map(|value| value as &dyn Reflect)
            }

            fn iter(&self) -> MapIter<'_> {
                Box::new(
                    <$ty>::iter(self)
                        .map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
                )
            }

            #[inline]
            fn zero_key(&self) -> Box<dyn Reflect> {
                Box::new(K::default())
            }

            #[inline]
            fn zero_value(&self) -> Box<dyn Reflect> {
                Box::new(V::default())
            }

            fn insert_boxed(
                &mut self,
                key: Box<dyn Reflect>,
                value: Box<dyn Reflect>,
            ) -> Result<(), Box<dyn Reflect>> {
                let key = key.take::<K>()?;
                let value = value.take::<V>()?;
                <$ty>::insert(self, key, value);
                Ok(())
            }

            #[inline]
            fn clear(&mut self) {
                <$ty>::clear(self);
            }
        }
    };
}

impl_reflect_map!(
    impl<K, V, S> for HashMap<K, V, S> => "HashMap"
    where
        K: Reflect + Typed + Default + Eq + Hash,
        V: Reflect + Typed + Default,
        S: BuildHasher + Default + Send + Sync + 'static,
);

impl_reflect_map!(
    impl<K, V> for BTreeMap<K, V> => "BTreeMap"
    where
        K: Reflect + Typed + Default + Ord,
        V: Reflect + Typed + Default,
);

// -----------------------------------------------------------------------------
// Option

impl_generic_type_path!(impl<T> for Option<T> => "Option");

impl<T: Reflect + Typed + Default> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Option(OptionInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Option<T> {
    impl_reflect_cast_fn!(Option);
}

impl<T: Reflect + Typed + Default> Optional for Option<T> {
    #[inline]
    fn value(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn value_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }

    #[inline]
    fn set_none(&mut self) {
        *self = None;
    }

    #[inline]
    fn insert_zero(&mut self) -> &mut dyn Reflect {
        self.insert(T::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::{List, Map};
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    #[test]
    fn generic_infos_are_per_instantiation() {
        let a = <Vec<u8>>::type_info().as_list().unwrap();
        let b = <Vec<String>>::type_info().as_list().unwrap();
        assert!(a.item_info().type_is::<u8>());
        assert!(b.item_info().type_is::<String>());
        assert!(core::ptr::eq(a, <Vec<u8>>::type_info().as_list().unwrap()));
    }

    #[test]
    fn map_insert_rejects_wrong_types() {
        let mut map = HashMap::<String, i32>::new();
        let erased: &mut dyn Map = &mut map;

        let rejected = erased
            .insert_boxed(Box::new(1_u8), Box::new(2_i32))
            .unwrap_err();
        assert!(rejected.is::<u8>());

        erased
            .insert_boxed(Box::new(String::from("a")), Box::new(2_i32))
            .unwrap();
        assert_eq!(
            erased.get(&String::from("a")).and_then(|v| v.downcast_ref::<i32>()),
            Some(&2)
        );
        assert!(erased.get(&0_u8).is_none());
    }

    #[test]
    fn btree_map_iterates_in_key_order() {
        let map = BTreeMap::from([(2_u8, 'b'), (1_u8, 'a')]);
        let keys: Vec<_> = Map::iter(&map)
            .map(|(k, _)| *k.downcast_ref::<u8>().unwrap())
            .collect();
        assert_eq!(keys, [1, 2]);
        assert_eq!(map.reflect_kind(), ReflectKind::Map);
    }

    #[test]
    fn push_zero_appends_default() {
        let mut list = vec![String::from("x")];
        List::push_zero(&mut list);
        assert_eq!(list, ["x", ""]);
    }
}
