//! Per-type conversion functions.
//!
//! An [`Encoder`] is built once per type from its [`TypeInfo`] and kept in a
//! process-wide cache, see [`type_encoder`]. Building an encoder for a record
//! binds the encoders of all its fields, so a record type referring to itself
//! meets its own encoder while that is still under construction. Such
//! requests get a [`Forward`](Encoder::Forward) encoder that waits for the
//! real one at conversion time.
//!
//! ```
//! use structof_encode::encoder::{Encoder, type_encoder};
//! use structof_reflect::info::Typed;
//!
//! assert!(matches!(*type_encoder(u8::type_info()), Encoder::Scalar));
//! assert!(matches!(*type_encoder(<Vec<String>>::type_info()), Encoder::List(_)));
//!
//! // Map keys must be text.
//! let encoder = type_encoder(<std::collections::BTreeMap<u8, u8>>::type_info());
//! assert!(matches!(*encoder, Encoder::Unsupported));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod collection;
mod struct_encoder;

// -----------------------------------------------------------------------------
// Exports

pub use cache::type_encoder;
pub use struct_encoder::StructEncoder;

// -----------------------------------------------------------------------------
// Encoder

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use std::sync::OnceLock;

use structof_reflect::Reflect;
use structof_reflect::info::{ScalarKind, TypeInfo};
use structof_reflect::ops::ReflectRef;

use crate::error::EncodeError;
use crate::state::{EncodeOptions, EncodeState, Identity};
use crate::text::quote;
use crate::value::Value;

/// The conversion function of one type.
pub enum Encoder {
    /// Booleans, numbers, characters and text.
    Scalar,
    /// Values that hold another value of any type, e.g. `Box<dyn Reflect>`.
    Dynamic,
    /// Records.
    Struct(StructEncoder),
    /// Maps with text keys, holding the encoder of the values.
    Map(Arc<Encoder>),
    /// Growable sequences, holding the encoder of the items.
    List(Arc<Encoder>),
    /// Fixed-size sequences, holding the encoder of the items.
    Array(Arc<Encoder>),
    /// Indirections, holding the encoder of the pointee.
    Pointer(Arc<Encoder>),
    /// Types without a generic form.
    Unsupported,
    /// Stands in for an encoder under construction.
    Forward(Arc<OnceLock<Arc<Encoder>>>),
}

impl Encoder {
    /// Builds the encoder of `info`, fetching element encoders from the cache.
    pub(crate) fn new(info: &'static TypeInfo) -> Self {
        match info {
            TypeInfo::Scalar(_) => Self::Scalar,
            TypeInfo::Dynamic(_) => Self::Dynamic,
            TypeInfo::Struct(_) => Self::Struct(StructEncoder::new(info)),
            TypeInfo::Map(map) => {
                if map.key_info().scalar_kind() == Some(ScalarKind::Str) {
                    Self::Map(type_encoder(map.value_info()))
                } else {
                    Self::Unsupported
                }
            }
            TypeInfo::List(list) => Self::List(type_encoder(list.item_info())),
            TypeInfo::Array(array) => Self::Array(type_encoder(array.item_info())),
            TypeInfo::Pointer(pointer) => Self::Pointer(type_encoder(pointer.pointee_info())),
            TypeInfo::Opaque(_) => Self::Unsupported,
        }
    }

    /// Converts `value` and writes the result under `key`.
    pub(crate) fn encode(
        &self,
        state: &mut EncodeState,
        key: &str,
        value: &dyn Reflect,
        options: EncodeOptions,
    ) -> Result<(), EncodeError> {
        match self {
            Self::Scalar => encode_scalar(state, key, value, options),
            Self::Dynamic => encode_dynamic(state, key, value, options),
            Self::Struct(encoder) => encoder.encode(state, key, value, options),
            Self::Map(values) => collection::encode_map(values, state, key, value, options),
            Self::List(items) => collection::encode_list(items, state, key, value, options),
            Self::Array(items) => collection::encode_array(items, state, key, value, options),
            Self::Pointer(pointee) => encode_pointer(pointee, state, key, value, options),
            Self::Unsupported => Err(unsupported(key, value)),
            Self::Forward(slot) => slot.wait().encode(state, key, value, options),
        }
    }
}

impl core::fmt::Debug for Encoder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Scalar => f.write_str("Scalar"),
            Self::Dynamic => f.write_str("Dynamic"),
            Self::Struct(encoder) => f.debug_tuple("Struct").field(encoder).finish(),
            Self::Map(values) => f.debug_tuple("Map").field(values).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Self::Pointer(pointee) => f.debug_tuple("Pointer").field(pointee).finish(),
            Self::Unsupported => f.write_str("Unsupported"),
            // The target may refer back to this encoder.
            Self::Forward(_) => f.write_str("Forward"),
        }
    }
}

// -----------------------------------------------------------------------------
// Leaf kinds

#[inline]
fn unsupported(key: &str, value: &dyn Reflect) -> EncodeError {
    EncodeError::UnsupportedType {
        type_path: value.reflect_type_path(),
        key: String::from(key),
    }
}

fn encode_scalar(
    state: &mut EncodeState,
    key: &str,
    value: &dyn Reflect,
    options: EncodeOptions,
) -> Result<(), EncodeError> {
    let ReflectRef::Scalar(scalar) = value.reflect_ref() else {
        return Err(unsupported(key, value));
    };
    let scalar = scalar.scalar();
    let output = if options.contains(EncodeOptions::QUOTED) {
        Value::String(quote(&scalar.to_string()))
    } else {
        Value::from(scalar)
    };
    state.put(key, output);
    Ok(())
}

fn encode_dynamic(
    state: &mut EncodeState,
    key: &str,
    value: &dyn Reflect,
    options: EncodeOptions,
) -> Result<(), EncodeError> {
    let ReflectRef::Dynamic(dynamic) = value.reflect_ref() else {
        return Err(unsupported(key, value));
    };
    match dynamic.inner() {
        Some(inner) => type_encoder(inner.reflect_type_info()).encode(state, key, inner, options),
        // Nothing held, nothing emitted.
        None => Ok(()),
    }
}

fn encode_pointer(
    pointee_encoder: &Encoder,
    state: &mut EncodeState,
    key: &str,
    value: &dyn Reflect,
    options: EncodeOptions,
) -> Result<(), EncodeError> {
    let ReflectRef::Pointer(pointer) = value.reflect_ref() else {
        return Err(unsupported(key, value));
    };
    let Some(pointee) = pointer.pointee() else {
        state.put(key, Value::Null);
        return Ok(());
    };
    let ty = value.reflect_type_info().ty_id();
    let identity = pointer.address().map(|addr| Identity::Pointer { ty, addr });
    state.with_cycle_check(identity, value.reflect_type_path(), |state| {
        pointee_encoder.encode(state, key, pointee, options)
    })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::BTreeMap;
    use std::sync::OnceLock;

    use structof_reflect::Reflect;
    use structof_reflect::info::Typed;

    use super::{Encoder, type_encoder};
    use crate::state::{EncodeOptions, PooledState};
    use crate::value::Value;

    fn encode<T: Reflect + Typed>(value: &T, options: EncodeOptions) -> Result<Value, crate::EncodeError> {
        let mut state = PooledState::acquire(EncodeOptions::empty());
        type_encoder(T::type_info()).encode(&mut state, "v", value, options)?;
        let Value::Map(mut map) = state.take_output() else {
            panic!("expected keyed output");
        };
        Ok(map.remove("v").unwrap_or_default())
    }

    #[test]
    fn scalars_and_quoting() {
        assert_eq!(encode(&-3_i8, EncodeOptions::empty()), Ok(Value::Int(-3)));
        assert_eq!(encode(&'x', EncodeOptions::empty()), Ok(Value::from("x")));
        assert_eq!(encode(&23_u64, EncodeOptions::QUOTED), Ok(Value::from("\"23\"")));
        assert_eq!(
            encode(&String::from("a\"b"), EncodeOptions::QUOTED),
            Ok(Value::from(r#""a\"b""#)),
        );
    }

    #[test]
    fn pointers_and_dynamics() {
        assert_eq!(encode(&Some(Box::new(1.5_f32)), EncodeOptions::empty()), Ok(Value::Float(1.5)));
        assert_eq!(encode(&None::<u8>, EncodeOptions::empty()), Ok(Value::Null));

        let unset: OnceLock<u8> = OnceLock::new();
        assert_eq!(encode(&unset, EncodeOptions::empty()), Ok(Value::Null));

        let boxed: Box<dyn Reflect> = Box::new(vec![1_u8, 2]);
        assert_eq!(
            encode(&boxed, EncodeOptions::empty()),
            Ok(Value::List(vec![1_u8.into(), 2_u8.into()])),
        );

        // An empty dynamic value emits nothing.
        let mut state = PooledState::acquire(EncodeOptions::empty());
        type_encoder(Value::type_info())
            .encode(&mut state, "v", &Value::Null, EncodeOptions::empty())
            .unwrap();
        assert_eq!(state.take_output(), Value::Map(BTreeMap::new()));
    }

    #[test]
    fn unsupported_types_name_the_key() {
        let f: fn(u8) -> u8 = |x| x;
        let err = encode(&f, EncodeOptions::empty()).unwrap_err();
        assert!(err.to_string().starts_with("structof: unsupported type: "));
        assert!(err.to_string().ends_with(" for field: v"));

        let keyed_by_number = BTreeMap::from([(1_u8, 1_u8)]);
        assert!(encode(&keyed_by_number, EncodeOptions::empty()).is_err());
    }

    #[test]
    fn encoders_are_shared() {
        let first = type_encoder(<Vec<Arc<u16>>>::type_info());
        let second = type_encoder(<Vec<Arc<u16>>>::type_info());
        assert!(Arc::ptr_eq(&first, &second));

        let Encoder::List(item) = &*first else {
            panic!("expected a list encoder");
        };
        assert!(Arc::ptr_eq(item, &type_encoder(<Arc<u16>>::type_info())));
    }
}
