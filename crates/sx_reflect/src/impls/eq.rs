use crate::Reflect;
use crate::ops::ReflectRef;

/// Deep structural equality of two reflected values.
///
/// Values of different types are never equal. Maps compare by lookup, so
/// their iteration order does not matter. Opaque values are never equal.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use sx_reflect::impls::reflect_eq;
///
/// let a = HashMap::from([(1_u8, vec![1.5_f64]), (2, vec![])]);
/// let b = HashMap::from([(2_u8, vec![]), (1, vec![1.5_f64])]);
/// assert!(reflect_eq(&a, &b));
/// assert!(!reflect_eq(&1_u8, &1_i8));
/// ```
pub fn reflect_eq(a: &dyn Reflect, b: &dyn Reflect) -> bool {
    if a.ty_id() != b.ty_id() {
        return false;
    }

    match (a.reflect_ref(), b.reflect_ref()) {
        (ReflectRef::Scalar(a), ReflectRef::Scalar(b)) => a.to_scalar() == b.to_scalar(),
        (ReflectRef::Array(a), ReflectRef::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| reflect_eq(x, y))
        }
        (ReflectRef::List(a), ReflectRef::List(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| reflect_eq(x, y))
        }
        (ReflectRef::Map(a), ReflectRef::Map(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, x)| match b.get(key) {
                    Some(y) => reflect_eq(x, y),
                    None => false,
                })
        }
        (ReflectRef::Struct(a), ReflectRef::Struct(b)) => {
            a.field_len() == b.field_len()
                && a
                    .iter_fields()
                    .zip(b.iter_fields())
                    .all(|((_, x), (_, y))| reflect_eq(x, y))
        }
        (ReflectRef::Option(a), ReflectRef::Option(b)) => match (a.value(), b.value()) {
            (Some(x), Some(y)) => reflect_eq(x, y),
            (None, None) => true,
            _ => false,
        },
        (ReflectRef::Interface(a), ReflectRef::Interface(b)) => match (a.value(), b.value()) {
            (Some(x), Some(y)) => reflect_eq(x, y),
            (None, None) => true,
            _ => false,
        },
        _ => false,
    }
}
