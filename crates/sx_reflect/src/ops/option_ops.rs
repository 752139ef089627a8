use crate::Reflect;

/// A nullable wrapper, such as `Option<T>`.
///
/// On the wire an optional value is transparent: `nil` when empty,
/// the inner value otherwise.
///
/// # Examples
///
/// ```
/// use sx_reflect::ops::Optional;
///
/// let mut value: Option<String> = None;
/// value.insert_zero().downcast_mut::<String>().unwrap().push_str("sequel");
/// assert_eq!(value.as_deref(), Some("sequel"));
///
/// value.set_none();
/// assert!(Optional::value(&value).is_none());
/// ```
pub trait Optional: Reflect {
    /// Returns the inner value, if present.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Returns the inner value mutably, if present.
    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Empties the option.
    fn set_none(&mut self);

    /// Replaces the content with a zero-valued inner value and returns it.
    fn insert_zero(&mut self) -> &mut dyn Reflect;
}
