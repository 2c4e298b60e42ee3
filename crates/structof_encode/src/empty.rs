use structof_reflect::Reflect;
use structof_reflect::ops::ReflectRef;

/// Reports whether `value` counts as empty for the `omitempty` option.
///
/// Empty values are zero-length sequences, maps and strings, `false`,
/// numeric zero, `'\0'`, null pointers and dynamic values holding nothing.
/// Records are never empty. A type's
/// [`reflect_is_empty`](Reflect::reflect_is_empty) hook takes precedence.
///
/// ```
/// use structof_encode::is_empty_value;
///
/// assert!(is_empty_value(&0_u8));
/// assert!(is_empty_value(&Vec::<u8>::new()));
/// assert!(is_empty_value(&None::<Box<u8>>));
/// assert!(!is_empty_value(&Some(0_u8)));
/// assert!(!is_empty_value(&[0_u8; 1]));
/// ```
pub fn is_empty_value(value: &dyn Reflect) -> bool {
    if let Some(empty) = value.reflect_is_empty() {
        return empty;
    }
    match value.reflect_ref() {
        ReflectRef::List(list) => list.is_empty(),
        ReflectRef::Array(array) => array.is_empty(),
        ReflectRef::Map(map) => map.is_empty(),
        ReflectRef::Pointer(pointer) => pointer.is_null(),
        ReflectRef::Dynamic(dynamic) => dynamic.inner().is_none(),
        ReflectRef::Scalar(scalar) => scalar.scalar().is_zero(),
        ReflectRef::Struct(_) | ReflectRef::Opaque(_) => false,
    }
}

/// Reports whether `value` is the zero value of its type.
///
/// Unlike [`is_empty_value`], this looks inside records and arrays: a record
/// is zero when all of its fields are, an array when all of its items are.
/// A non-nullable pointer is zero when its pointee is. Opaque values are
/// never zero.
///
/// ```
/// use structof_encode::is_zero_value;
/// use structof_reflect::Reflect;
///
/// #[derive(Reflect)]
/// pub struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// assert!(is_zero_value(&Point { x: 0, y: 0 }));
/// assert!(!is_zero_value(&Point { x: 0, y: 1 }));
/// assert!(is_zero_value(&[0.0_f32; 3]));
/// assert!(is_zero_value(&Box::new(String::new())));
/// ```
pub fn is_zero_value(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::Struct(record) => record.iter().all(is_zero_value),
        ReflectRef::List(list) => list.is_empty(),
        ReflectRef::Array(array) => array.iter().all(is_zero_value),
        ReflectRef::Map(map) => map.is_empty(),
        ReflectRef::Pointer(pointer) => match pointer.pointee() {
            None => true,
            Some(pointee) => {
                let nullable = pointer
                    .reflect_type_info()
                    .as_pointer()
                    .is_ok_and(|info| info.is_nullable());
                !nullable && is_zero_value(pointee)
            }
        },
        ReflectRef::Dynamic(dynamic) => dynamic.inner().is_none(),
        ReflectRef::Scalar(scalar) => scalar.scalar().is_zero(),
        ReflectRef::Opaque(_) => false,
    }
}
