use alloc::string::ToString;
use alloc::vec::Vec;

use structof_reflect::Reflect;
use structof_reflect::ops::{ReflectRef, ScalarRef};

use super::{Encoder, unsupported};
use crate::error::EncodeError;
use crate::state::{Accumulator, EncodeOptions, EncodeState, Identity};
use crate::value::Value;

/// Converts a map with text keys into a nested keyed container, whatever the
/// output mode.
pub(super) fn encode_map(
    values: &Encoder,
    state: &mut EncodeState,
    key: &str,
    value: &dyn Reflect,
    options: EncodeOptions,
) -> Result<(), EncodeError> {
    let ReflectRef::Map(map) = value.reflect_ref() else {
        return Err(unsupported(key, value));
    };
    let identity = Identity::Map(core::ptr::from_ref(value).cast::<()>().addr());

    state.with_cycle_check(Some(identity), value.reflect_type_path(), |state| {
        let entries = state.nested(Accumulator::container(EncodeOptions::empty()), |state| {
            for (entry_key, entry) in map.iter() {
                let ReflectRef::Scalar(scalar) = entry_key.reflect_ref() else {
                    return Err(unsupported(key, value));
                };
                let ScalarRef::Str(name) = scalar.scalar() else {
                    return Err(unsupported(key, value));
                };
                values.encode(state, name, entry, options.mode())?;
            }
            Ok(())
        })?;
        state.put(key, entries);
        Ok(())
    })
}

/// Converts a growable sequence positionally.
pub(super) fn encode_list(
    items: &Encoder,
    state: &mut EncodeState,
    key: &str,
    value: &dyn Reflect,
    options: EncodeOptions,
) -> Result<(), EncodeError> {
    let ReflectRef::List(list) = value.reflect_ref() else {
        return Err(unsupported(key, value));
    };
    // An empty list shares its address with unrelated values.
    let identity = (!list.is_empty()).then(|| Identity::Slice {
        data: list.data_address(),
        len: list.len(),
    });

    state.with_cycle_check(identity, value.reflect_type_path(), |state| {
        let output = encode_items(items, state, list.iter(), options)?;
        state.put(key, Value::List(output));
        Ok(())
    })
}

/// Converts a fixed-size sequence positionally.
pub(super) fn encode_array(
    items: &Encoder,
    state: &mut EncodeState,
    key: &str,
    value: &dyn Reflect,
    options: EncodeOptions,
) -> Result<(), EncodeError> {
    let ReflectRef::Array(array) = value.reflect_ref() else {
        return Err(unsupported(key, value));
    };

    // Arrays are stored inline, only the depth counts.
    state.with_cycle_check(None, value.reflect_type_path(), |state| {
        let output = encode_items(items, state, array.iter(), options)?;
        state.put(key, Value::List(output));
        Ok(())
    })
}

/// Converts each item into its own slot. An item that emits nothing
/// becomes `Null`.
fn encode_items<'a>(
    items: &Encoder,
    state: &mut EncodeState,
    iter: impl ExactSizeIterator<Item = &'a dyn Reflect>,
    options: EncodeOptions,
) -> Result<Vec<Value>, EncodeError> {
    let mut output = Vec::with_capacity(iter.len());
    for (index, item) in iter.enumerate() {
        let key = index.to_string();
        output.push(state.nested(Accumulator::slot(), |state| {
            items.encode(state, &key, item, options.mode())
        })?);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use std::collections::{BTreeMap, HashMap};

    use structof_reflect::Reflect;
    use structof_reflect::info::Typed;

    use crate::encoder::type_encoder;
    use crate::state::{EncodeOptions, PooledState};
    use crate::value::{Map, Value};

    fn encode<T: Reflect + Typed>(value: &T, options: EncodeOptions) -> Value {
        let mut state = PooledState::acquire(EncodeOptions::empty());
        type_encoder(T::type_info())
            .encode(&mut state, "v", value, options)
            .unwrap();
        let Value::Map(mut map) = state.take_output() else {
            panic!("expected keyed output");
        };
        map.remove("v").unwrap_or_default()
    }

    #[test]
    fn sequences_keep_positions() {
        assert_eq!(
            encode(&vec![1_i32, -2], EncodeOptions::empty()),
            Value::List(vec![1_i32.into(), (-2_i32).into()]),
        );
        assert_eq!(
            encode(&[true, false], EncodeOptions::empty()),
            Value::List(vec![true.into(), false.into()]),
        );

        // Empty dynamic items become null.
        let items: Vec<Box<dyn Reflect>> = vec![Box::new(Value::Null), Box::new(3_u8)];
        assert_eq!(
            encode(&items, EncodeOptions::empty()),
            Value::List(vec![Value::Null, 3_u8.into()]),
        );
    }

    #[test]
    fn maps_nest_as_keyed_in_pairs_mode() {
        let map = HashMap::from([(String::from("a"), vec![1_u8])]);
        let expected = Value::Map(Map::from([(
            "a".to_string(),
            Value::List(vec![1_u8.into()]),
        )]));
        assert_eq!(encode(&map, EncodeOptions::empty()), expected);
        assert_eq!(encode(&map, EncodeOptions::PAIRS), expected);

        let empty: BTreeMap<String, u8> = BTreeMap::new();
        assert_eq!(encode(&empty, EncodeOptions::empty()), Value::Map(Map::new()));
    }
}
