use crate::Reflect;
use crate::impls::GenericTypeInfoCell;
use crate::info::{InterfaceInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Interface, Poly};
use crate::reflection::impl_reflect_cast_fn;

impl<I: Interface> TypePath for Poly<I> {
    #[inline]
    fn type_path() -> &'static str {
        ::core::any::type_name::<Self>()
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Poly"
    }
}

impl<I: Interface> Typed for Poly<I> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Interface(InterfaceInfo::new::<Self, I>()))
    }
}

impl<I: Interface> Reflect for Poly<I> {
    impl_reflect_cast_fn!(Interface);
}

#[cfg(test)]
mod tests {
    use crate::info::{ReflectKind, Typed};
    use crate::interface;
    use crate::ops::{Poly, Polymorphic};
    use crate::Reflect;
    use alloc::boxed::Box;
    use alloc::string::String;

    interface!(Named = "test.Named");

    #[test]
    fn slot_reports_its_interface() {
        let mut slot = Poly::<Named>::none();
        assert_eq!(slot.interface_name(), "test.Named");
        assert_eq!(slot.reflect_kind(), ReflectKind::Interface);
        assert_eq!(
            Poly::<Named>::type_info().as_interface().unwrap().name(),
            "test.Named"
        );

        slot.set_boxed(Some(Box::new(String::from("x"))));
        assert_eq!(slot.downcast_ref::<String>().map(String::as_str), Some("x"));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Poly::<Named>::new(5_i32), Poly::<Named>::new(5_i32));
        assert_ne!(Poly::<Named>::new(5_i32), Poly::<Named>::new(5_i64));
        assert_ne!(Poly::<Named>::new(5_i32), Poly::<Named>::none());
        assert_eq!(Poly::<Named>::none(), Poly::<Named>::default());
    }
}
