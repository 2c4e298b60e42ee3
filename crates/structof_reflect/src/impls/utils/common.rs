use alloc::string::String;
use core::fmt;

use crate::ops::{Array, Dynamic, List, Map, Pointer, Scalar, ScalarRef, Struct};

/// Joins `head` and `params` into `head<P0, P1, ..>`.
///
/// ```
/// use structof_reflect::impls::generic_path;
///
/// assert_eq!(generic_path("Vec", &["u8"]), "Vec<u8>");
/// assert_eq!(generic_path("HashMap", &["String", "u8"]), "HashMap<String, u8>");
/// ```
#[inline(never)]
pub fn generic_path(head: &str, params: &[&str]) -> String {
    let mut len = head.len() + 2;
    for &param in params {
        len += param.len() + 2;
    }
    let mut res = String::with_capacity(len);
    res.push_str(head);
    res.push('<');
    for (index, &param) in params.iter().enumerate() {
        if index > 0 {
            res.push_str(", ");
        }
        res.push_str(param);
    }
    res.push('>');
    res
}

/// A function use for implementing [`Reflect::reflect_debug`](crate::Reflect::reflect_debug).
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for index in 0..dyn_struct.field_len() {
        if let (Some(name), Some(field)) = (dyn_struct.name_at(index), dyn_struct.field_at(index)) {
            debug.field(name, &field as &dyn fmt::Debug);
        }
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`](crate::Reflect::reflect_debug).
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`](crate::Reflect::reflect_debug).
pub fn array_debug(dyn_array: &dyn Array, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_array.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`](crate::Reflect::reflect_debug).
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_debug`](crate::Reflect::reflect_debug).
///
/// Pointers are transparent; a null pointer prints `None`.
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Some(pointee) => pointee.reflect_debug(f),
        None => f.write_str("None"),
    }
}

/// A function use for implementing [`Reflect::reflect_debug`](crate::Reflect::reflect_debug).
pub fn dynamic_debug(dyn_value: &dyn Dynamic, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_value.inner() {
        Some(inner) => inner.reflect_debug(f),
        None => f.write_str("None"),
    }
}

/// A function use for implementing [`Reflect::reflect_debug`](crate::Reflect::reflect_debug).
pub fn scalar_debug(dyn_scalar: &dyn Scalar, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_scalar.scalar() {
        ScalarRef::Str(v) => fmt::Debug::fmt(v, f),
        ScalarRef::Char(v) => fmt::Debug::fmt(&v, f),
        other => fmt::Display::fmt(&other, f),
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;

    use crate::Reflect;

    #[test]
    fn debug_output() {
        let value: Box<dyn Reflect> = Box::new(vec![Some(String::from("a")), None]);
        assert_eq!(format!("{value:?}"), r#"["a", None]"#);

        let value: Box<dyn Reflect> = Box::new('x');
        assert_eq!(format!("{value:?}"), "'x'");
    }
}
