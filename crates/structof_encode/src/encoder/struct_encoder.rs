use alloc::sync::Arc;
use core::fmt;

use structof_reflect::Reflect;
use structof_reflect::info::TypeInfo;
use structof_reflect::ops::{ReflectRef, Struct};

use super::unsupported;
use crate::empty::is_empty_value;
use crate::error::EncodeError;
use crate::fields::{FieldOptions, StructFields, cached_type_fields, field_by_path};
use crate::state::{Accumulator, EncodeOptions, EncodeState};
use crate::text::{quote, text_form};
use crate::value::Value;

/// The encoder of a record type.
///
/// Holds the record's resolved fields, with every field encoder bound.
pub struct StructEncoder {
    type_path: &'static str,
    fields: Arc<StructFields>,
}

impl StructEncoder {
    pub(crate) fn new(info: &'static TypeInfo) -> Self {
        let fields = cached_type_fields(info);
        for field in fields.iter() {
            field.encoder();
        }
        Self {
            type_path: info.type_path(),
            fields,
        }
    }

    /// Returns the resolved fields.
    #[inline]
    pub fn fields(&self) -> &StructFields {
        &self.fields
    }

    pub(crate) fn encode(
        &self,
        state: &mut EncodeState,
        key: &str,
        value: &dyn Reflect,
        options: EncodeOptions,
    ) -> Result<(), EncodeError> {
        let ReflectRef::Struct(record) = value.reflect_ref() else {
            return Err(unsupported(key, value));
        };
        let inline = options.contains(EncodeOptions::INLINE);

        // A record without visible fields is represented by its text form.
        if self.fields.is_empty() {
            if !inline {
                let output = match text_form(value) {
                    Some(text) if options.contains(EncodeOptions::QUOTED) => {
                        Value::String(quote(&text))
                    }
                    Some(text) => Value::String(text),
                    None => Accumulator::container(options).into_value(),
                };
                state.put(key, output);
            }
            return Ok(());
        }

        if inline {
            return self.encode_fields(state, record, options.mode());
        }

        let members = state.nested(Accumulator::container(options), |state| {
            self.encode_fields(state, record, options.mode())
        })?;
        state.put(key, members);
        Ok(())
    }

    fn encode_fields(
        &self,
        state: &mut EncodeState,
        record: &dyn Struct,
        mode: EncodeOptions,
    ) -> Result<(), EncodeError> {
        for field in self.fields.iter() {
            // Behind a null embedded pointer.
            let Some(value) = field_by_path(record, field.path()) else {
                continue;
            };

            let field_options = field.options();
            if field_options.contains(FieldOptions::OMIT_EMPTY) && is_empty_value(value) {
                continue;
            }

            let mut options = mode;
            options.set(EncodeOptions::QUOTED, field_options.contains(FieldOptions::QUOTED));
            options.set(EncodeOptions::INLINE, field_options.contains(FieldOptions::INLINE));
            field.encoder().encode(state, field.name(), value, options)?;
        }
        Ok(())
    }
}

impl fmt::Debug for StructEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructEncoder")
            .field("type_path", &self.type_path)
            .field("fields", &self.fields.names().collect::<alloc::vec::Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use structof_reflect::Reflect;
    use structof_reflect::info::Typed;

    use crate::encoder::type_encoder;
    use crate::state::{EncodeOptions, PooledState};
    use crate::value::{Map, Value};

    #[derive(Reflect)]
    #[reflect(display)]
    pub struct Celsius {
        degrees: i32,
    }

    impl core::fmt::Display for Celsius {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "{}C", self.degrees)
        }
    }

    #[derive(Reflect)]
    pub struct Empty {}

    #[derive(Reflect)]
    pub struct Reading {
        pub at: Celsius,
        #[structof(",string")]
        pub quoted: Celsius,
        pub nothing: Empty,
        #[structof(",omitempty")]
        pub note: String,
    }

    fn encode_keyed(value: &Reading, options: EncodeOptions) -> Value {
        let mut state = PooledState::acquire(options);
        type_encoder(Reading::type_info())
            .encode(&mut state, "", value, options | EncodeOptions::INLINE)
            .unwrap();
        state.take_output()
    }

    #[test]
    fn display_only_records() {
        let reading = Reading {
            at: Celsius { degrees: 21 },
            quoted: Celsius { degrees: -4 },
            nothing: Empty {},
            note: String::new(),
        };

        let Value::Map(map) = encode_keyed(&reading, EncodeOptions::empty()) else {
            panic!("expected a map");
        };
        assert_eq!(map.len(), 3);
        assert_eq!(map["at"], Value::from("21C"));
        assert_eq!(map["quoted"], Value::from("\"-4C\""));
        assert_eq!(map["nothing"], Value::Map(Map::new()));

        let pairs = encode_keyed(&reading, EncodeOptions::PAIRS);
        assert_eq!(
            pairs,
            Value::List(vec![
                "at".into(),
                "21C".into(),
                "quoted".into(),
                "\"-4C\"".into(),
                "nothing".into(),
                Value::List(vec![]),
            ]),
        );
    }
}
