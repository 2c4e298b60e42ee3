use alloc::boxed::Box;
use core::fmt;

use structof_reflect::Reflect;
use structof_reflect::info::{NamedField, ReflectKind};
use structof_reflect::ops::{ReflectMut, ReflectRef};

use crate::annotation::Annotation;
use crate::empty::is_zero_value;
use crate::error::SetError;

// -----------------------------------------------------------------------------
// Shared accessors

macro_rules! impl_field_accessors {
    ($ty:ident) => {
        impl $ty<'_> {
            /// Returns the declared field name.
            #[inline]
            pub const fn name(&self) -> &'static str {
                self.declared.name()
            }

            /// Returns the parsed `#[structof("...")]` annotation, if any.
            #[inline]
            pub fn annotation(&self) -> Option<Annotation<'static>> {
                self.declared.annotation().map(Annotation::parse)
            }

            /// Returns `true` if the field is declared `#[reflect(embed)]`.
            #[inline]
            pub const fn is_embedded(&self) -> bool {
                self.declared.is_embedded()
            }

            /// Returns `true` if the field is `pub`.
            #[inline]
            pub const fn is_exported(&self) -> bool {
                self.declared.is_exported()
            }

            /// Returns the kind of the declared type, pointers included.
            #[inline]
            pub fn kind(&self) -> ReflectKind {
                self.declared.type_info().kind()
            }

            /// Returns the path of the declared type.
            #[inline]
            pub fn type_path(&self) -> &'static str {
                self.declared.type_info().type_path()
            }

            /// Returns the declaration.
            #[inline]
            pub const fn declared(&self) -> &'static NamedField {
                self.declared
            }

            /// Returns the current value.
            #[inline]
            pub fn value(&self) -> &dyn Reflect {
                &*self.value
            }

            /// Reports whether the value is the zero value of its type,
            /// see [`is_zero_value`](crate::is_zero_value).
            #[inline]
            pub fn is_zero(&self) -> bool {
                is_zero_value(&*self.value)
            }
        }

        impl fmt::Debug for $ty<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("name", &self.name())
                    .field("type_path", &self.type_path())
                    .field("value", &self.value())
                    .finish()
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Field

/// Read access to one field of a record.
pub struct Field<'a> {
    value: &'a dyn Reflect,
    declared: &'static NamedField,
}

impl<'a> Field<'a> {
    #[inline]
    pub(crate) const fn new(value: &'a dyn Reflect, declared: &'static NamedField) -> Self {
        Self { value, declared }
    }

    /// Returns the current value with the record's lifetime.
    #[inline]
    pub const fn into_value(self) -> &'a dyn Reflect {
        self.value
    }
}

impl_field_accessors!(Field);

// -----------------------------------------------------------------------------
// FieldMut

/// Write access to one field of a record.
pub struct FieldMut<'a> {
    value: &'a mut dyn Reflect,
    declared: &'static NamedField,
}

impl<'a> FieldMut<'a> {
    #[inline]
    pub(crate) const fn new(value: &'a mut dyn Reflect, declared: &'static NamedField) -> Self {
        Self { value, declared }
    }

    /// Returns the current value mutably.
    #[inline]
    pub fn value_mut(&mut self) -> &mut dyn Reflect {
        &mut *self.value
    }

    /// Stores `value` in the field.
    ///
    /// The value must be of the field's [`ReflectKind`]. Scalars are
    /// converted to the field's type within the same scalar kind, checking
    /// the range. Other kinds need exactly the field's type, except dynamic
    /// fields, which take whatever their type accepts.
    ///
    /// On error the field is unchanged.
    pub fn try_set(&mut self, value: Box<dyn Reflect>) -> Result<(), SetError> {
        let expected = self.value.reflect_kind();
        let received = (*value).reflect_kind();
        let expected_path = self.value.reflect_type_path();
        let received_path = (*value).reflect_type_path();

        if expected == ReflectKind::Dynamic {
            return self.value.set(value).map_err(|_| SetError::Incompatible {
                expected: expected_path,
                received: received_path,
                source: None,
            });
        }
        if expected != received {
            return Err(SetError::KindMismatch { expected, received });
        }

        if let ReflectMut::Scalar(target) = self.value.reflect_mut() {
            let ReflectRef::Scalar(source) = (*value).reflect_ref() else {
                return Err(SetError::KindMismatch { expected, received });
            };
            return target
                .set_scalar(source.scalar())
                .map_err(|err| SetError::Incompatible {
                    expected: expected_path,
                    received: received_path,
                    source: Some(err),
                });
        }

        self.value.set(value).map_err(|_| SetError::Incompatible {
            expected: expected_path,
            received: received_path,
            source: None,
        })
    }

    /// Like [`try_set`](Self::try_set), but panics on error.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be stored in the field.
    pub fn set(&mut self, value: Box<dyn Reflect>) {
        if let Err(err) = self.try_set(value) {
            panic!("cannot set field `{}`: {err}", self.name());
        }
    }

    /// Resets the field to the zero value of its type.
    ///
    /// Returns `false` if part of the value could not be reset, see
    /// [`Reflect::set_zero`].
    ///
    /// # Panics
    ///
    /// Panics if the field is not `pub`.
    pub fn set_zero(&mut self) -> bool {
        assert!(
            self.is_exported(),
            "cannot set unexported field `{}`",
            self.name()
        );
        self.value.set_zero()
    }
}

impl_field_accessors!(FieldMut);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use structof_reflect::Reflect;
    use structof_reflect::info::{ReflectKind, Typed};
    use structof_reflect::ops::ScalarError;

    use super::{Field, FieldMut};
    use crate::error::SetError;
    use crate::value::Value;

    #[derive(Reflect)]
    pub struct Sample {
        #[structof("count,omitempty")]
        pub count: i16,
        pub label: String,
        pub items: alloc::vec::Vec<u8>,
        pub any: Value,
        hidden: u8,
    }

    fn sample() -> Sample {
        Sample {
            count: 0,
            label: String::new(),
            items: alloc::vec::Vec::new(),
            any: Value::Null,
            hidden: 0,
        }
    }

    fn field_mut<'a>(record: &'a mut Sample, index: usize) -> FieldMut<'a> {
        let declared = Sample::type_info().as_struct().unwrap().field_at(index).unwrap();
        let value = structof_reflect::ops::Struct::field_at_mut(record, index).unwrap();
        FieldMut::new(value, declared)
    }

    #[test]
    fn accessors() {
        let record = sample();
        let declared = Sample::type_info().as_struct().unwrap().field_at(0).unwrap();
        let field = Field::new(&record.count, declared);

        assert_eq!(field.name(), "count");
        assert_eq!(field.annotation().unwrap().name(), Some("count"));
        assert!(field.annotation().unwrap().omit_empty());
        assert!(field.is_exported() && !field.is_embedded());
        assert_eq!(field.kind(), ReflectKind::Scalar);
        assert_eq!(field.type_path(), "i16");
        assert!(field.is_zero());
    }

    #[test]
    fn scalar_conversion() {
        let mut record = sample();
        let mut count = field_mut(&mut record, 0);

        count.set(Box::new(23_i64));
        assert_eq!(count.value().downcast_ref::<i16>(), Some(&23));

        let err = count.try_set(Box::new(70_000_i32)).unwrap_err();
        assert!(matches!(
            err,
            SetError::Incompatible { source: Some(ScalarError::OutOfRange { .. }), .. }
        ));

        let err = count.try_set(Box::new(String::from("foobar"))).unwrap_err();
        assert!(matches!(
            err,
            SetError::Incompatible { source: Some(ScalarError::KindMismatch { .. }), .. }
        ));
        assert_eq!(record.count, 23);
    }

    #[test]
    fn kinds_must_match() {
        let mut record = sample();
        let mut items = field_mut(&mut record, 2);

        assert_eq!(
            items.try_set(Box::new(1_u8)),
            Err(SetError::KindMismatch {
                expected: ReflectKind::List,
                received: ReflectKind::Scalar,
            }),
        );
        assert!(items.try_set(Box::new(alloc::vec![1_u16])).is_err());

        items.set(Box::new(alloc::vec![1_u8, 2]));
        assert!(items.set_zero());
        assert!(record.items.is_empty());
    }

    #[test]
    fn dynamic_fields_take_any_scalar() {
        let mut record = sample();
        let mut any = field_mut(&mut record, 3);

        any.set(Box::new(-1_i8));
        any.set(Box::new(Value::from("x")));
        assert_eq!(record.any, Value::from("x"));
    }

    #[test]
    #[should_panic(expected = "cannot set unexported field `hidden`")]
    fn unexported_set_zero_panics() {
        let mut record = sample();
        field_mut(&mut record, 4).set_zero();
    }
}
