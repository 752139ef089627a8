use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`] so the info is
/// built once per type:
///
/// ```
/// use sx_reflect::{
///     info::{Typed, TypeInfo, TypePath, ScalarInfo, ScalarKind},
///     impls::NonGenericTypeInfoCell,
/// };
///
/// struct Meters(f64);
///
/// impl TypePath for Meters {
///     fn type_path() -> &'static str { "demo::Meters" }
///     fn type_ident() -> &'static str { "Meters" }
/// }
///
/// impl Typed for Meters {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::Float)))
///     }
/// }
///
/// assert_eq!(Meters::type_info().type_path(), "demo::Meters");
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the static type information of `Self`.
    ///
    /// Note: Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// Returns the [`TypeInfo`] of the underlying value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sx_reflect::{Reflect, info::{DynamicTyped, ReflectKind}};
    /// let value: Box<dyn Reflect> = Box::new(vec![1_u8]);
    /// assert_eq!(value.reflect_type_info().kind(), ReflectKind::List);
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
