use core::fmt;

use crate::Reflect;
use crate::ops::{ReflectRef, ScalarValue};

/// Structural [`Debug`](fmt::Debug) formatting of a reflected value.
///
/// Structs print with their type ident and canonical field names,
/// polymorphic slots with their interface name.
///
/// # Examples
///
/// ```
/// use sx_reflect::Reflect;
///
/// let value: Box<dyn Reflect> = Box::new(vec![Some(1_u8), None]);
/// assert_eq!(format!("{value:?}"), "[Some(1), None]");
/// ```
pub fn reflect_debug(value: &dyn Reflect, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.reflect_ref() {
        ReflectRef::Scalar(scalar) => match scalar.to_scalar() {
            ScalarValue::Nil => f.write_str("()"),
            ScalarValue::Bool(v) => fmt::Debug::fmt(&v, f),
            ScalarValue::Int(v) => fmt::Debug::fmt(&v, f),
            ScalarValue::UInt(v) => fmt::Debug::fmt(&v, f),
            ScalarValue::Float(v) => fmt::Debug::fmt(&v, f),
            ScalarValue::Complex(re, im) => write!(f, "Complex({re:?}, {im:?})"),
            ScalarValue::Text(v) => fmt::Debug::fmt(&v, f),
        },
        ReflectRef::Array(array) => f.debug_list().entries(array.iter()).finish(),
        ReflectRef::List(list) => f.debug_list().entries(list.iter()).finish(),
        ReflectRef::Map(map) => f.debug_map().entries(map.iter()).finish(),
        ReflectRef::Struct(value) => {
            let mut debug = f.debug_struct(value.reflect_type_ident());
            for (name, field) in value.iter_fields() {
                debug.field(name, &field);
            }
            debug.finish()
        }
        ReflectRef::Option(option) => match option.value() {
            Some(inner) => f.debug_tuple("Some").field(&inner).finish(),
            None => f.write_str("None"),
        },
        ReflectRef::Interface(slot) => {
            let mut debug = f.debug_tuple(slot.interface_name());
            match slot.value() {
                Some(inner) => debug.field(&inner),
                None => debug.field(&format_args!("nil")),
            };
            debug.finish()
        }
        ReflectRef::Opaque(value) => f.write_str(value.reflect_type_path()),
    }
}
