use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use serde_core::ser::{SerializeMap, SerializeSeq};
use serde_core::{Serialize, Serializer};
use structof_reflect::Reflect;
use structof_reflect::impls::NonGenericTypeInfoCell;
use structof_reflect::info::{DynamicInfo, ReflectKind, TypeInfo, TypePath, Typed};
use structof_reflect::ops::{Dynamic, ReflectMut, ReflectRef, ScalarRef};

/// The keyed container produced in keyed mode.
pub type Map = BTreeMap<String, Value>;

// -----------------------------------------------------------------------------
// Value

/// A generic value, the output of every conversion.
///
/// Records become [`Value::Map`] (keyed mode) or [`Value::List`] of
/// alternating keys and values (pairs mode). Sequences become
/// [`Value::List`], maps become [`Value::Map`], and scalars keep their
/// native form with integers widened to 64 bits.
///
/// `Value` is itself reflected as a dynamic value, so a `Value` field behaves
/// like an untyped field: it converts as whatever it holds, and
/// [`Value::Null`] holds nothing.
///
/// # Examples
///
/// ```
/// use structof_encode::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("a".into(), Value::from(1_u8));
/// map.insert("b".into(), Value::from(vec![Value::from("x"), Value::Null]));
///
/// let value = Value::from(map);
/// assert_eq!(value.to_string(), r#"{"a": 1, "b": ["x", null]}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text of a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the items of a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the entries of a [`Value::Map`].
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// From

macro_rules! impl_from {
    ($variant:ident, $wide:ty: $($ty:ty),+) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::$variant(value as $wide)
            }
        }
    )+};
}

impl_from!(Int, i64: i8, i16, i32, i64, isize);
impl_from!(Uint, u64: u8, u16, u32, u64, usize);
impl_from!(Float, f64: f32, f64);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Value {
    #[inline]
    fn from(value: char) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<Map> for Value {
    #[inline]
    fn from(value: Map) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<ScalarRef<'_>> for Value {
    fn from(value: ScalarRef<'_>) -> Self {
        match value {
            ScalarRef::Bool(v) => Self::Bool(v),
            ScalarRef::Int(v) => Self::Int(v),
            ScalarRef::Uint(v) => Self::Uint(v),
            ScalarRef::Float(v) => Self::Float(v),
            ScalarRef::Char(v) => Self::from(v),
            ScalarRef::Str(v) => Self::from(v),
        }
    }
}

// -----------------------------------------------------------------------------
// Display

/// Compact JSON-like text, with `", "` and `": "` as separators.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Uint(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::String(v) => fmt::Debug::fmt(v, f),
            Self::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Serialize

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Uint(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::List(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Self::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Reflect

impl TypePath for Value {
    #[inline]
    fn type_path() -> &'static str {
        "structof_encode::Value"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Value"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Value"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("structof_encode")
    }
}

impl Typed for Value {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<Self>()))
    }
}

impl Reflect for Value {
    /// Accepts another `Value`, or any scalar, which is widened.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        let value = match value.take::<Value>() {
            Ok(value) => value,
            Err(value) => {
                let widened = match (*value).reflect_ref() {
                    ReflectRef::Scalar(scalar) => Some(Value::from(scalar.scalar())),
                    _ => None,
                };
                match widened {
                    Some(widened) => widened,
                    None => return Err(value),
                }
            }
        };
        *self = value;
        Ok(())
    }

    #[inline]
    fn set_zero(&mut self) -> bool {
        *self = Self::Null;
        true
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Dynamic
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Dynamic(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Dynamic(self)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Dynamic for Value {
    fn inner(&self) -> Option<&dyn Reflect> {
        match self {
            Self::Null => None,
            Self::Bool(v) => Some(v),
            Self::Int(v) => Some(v),
            Self::Uint(v) => Some(v),
            Self::Float(v) => Some(v),
            Self::String(v) => Some(v),
            Self::List(v) => Some(v),
            Self::Map(v) => Some(v),
        }
    }

    fn inner_mut(&mut self) -> Option<&mut dyn Reflect> {
        match self {
            Self::Null => None,
            Self::Bool(v) => Some(v),
            Self::Int(v) => Some(v),
            Self::Uint(v) => Some(v),
            Self::Float(v) => Some(v),
            Self::String(v) => Some(v),
            Self::List(v) => Some(v),
            Self::Map(v) => Some(v),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;

    use structof_reflect::Reflect;
    use structof_reflect::ops::Dynamic;

    use super::{Map, Value};

    #[test]
    fn serialize_as_json() {
        let mut map = Map::new();
        map.insert("a".into(), Value::from(-1_i8));
        map.insert("b".into(), Value::from(vec![Value::Bool(true), Value::Null]));
        map.insert("c".into(), Value::from(1.5_f32));

        let json = serde_json::to_string(&Value::from(map)).unwrap();
        assert_eq!(json, r#"{"a":-1,"b":[true,null],"c":1.5}"#);
    }

    #[test]
    fn display_escapes_strings() {
        assert_eq!(Value::from("a\"b").to_string(), r#""a\"b""#);
        assert_eq!(Value::from('x').to_string(), r#""x""#);
        assert_eq!(Value::from(None::<u8>).to_string(), "null");
    }

    #[test]
    fn reflect_as_dynamic() {
        let mut value = Value::Null;
        assert!(value.inner().is_none());

        value.set(Box::new(3_u16)).unwrap();
        assert_eq!(value, Value::Uint(3));
        assert_eq!(value.inner().and_then(|v| v.downcast_ref::<u64>()), Some(&3));

        value.set(Box::new(Value::from("x"))).unwrap();
        assert_eq!(value.inner().and_then(|v| v.downcast_ref::<String>()).unwrap(), "x");

        assert!(value.set(Box::new(vec![1_u8])).is_err());
        assert!(value.set_zero());
        assert!(value.is_null());
    }
}
