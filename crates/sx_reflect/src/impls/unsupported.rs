//! Reflection for values that have no textual form.
//!
//! These are [`Opaque`](crate::info::ReflectKind::Opaque): they can sit in a
//! reflected struct, but encoding them fails.

use std::sync::mpsc::{Sender, SyncSender};

use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_opaque {
    (impl<$($param:ident),*> for $ty:ty => $ident:literal where $($bounds:tt)*) => {
        impl<$($param),*> TypePath for $ty
        where
            $($bounds)*
        {
            #[inline]
            fn type_path() -> &'static str {
                ::core::any::type_name::<Self>()
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }
        }

        impl<$($param),*> Typed for $ty
        where
            $($bounds)*
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl<$($param),*> Reflect for $ty
        where
            $($bounds)*
        {
            impl_reflect_cast_fn!(Opaque);
        }
    };
}

impl_opaque!(impl<R> for fn() -> R => "fn" where R: 'static);
impl_opaque!(impl<A, R> for fn(A) -> R => "fn" where A: 'static, R: 'static);
impl_opaque!(impl<A, B, R> for fn(A, B) -> R => "fn" where A: 'static, B: 'static, R: 'static);
impl_opaque!(impl<T> for Sender<T> => "Sender" where T: Send + 'static);
impl_opaque!(impl<T> for SyncSender<T> => "SyncSender" where T: Send + 'static);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::ReflectKind;
    use std::sync::mpsc;

    #[test]
    fn functions_and_channels_are_opaque() {
        let f: fn(i32) -> i32 = |x| x + 1;
        assert_eq!(f.reflect_kind(), ReflectKind::Opaque);

        let (tx, _rx) = mpsc::channel::<u8>();
        assert_eq!(tx.reflect_kind(), ReflectKind::Opaque);
    }
}
