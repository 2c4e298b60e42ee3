use alloc::vec::Vec;
use core::fmt;

use structof_reflect::Reflect;
use structof_reflect::info::TypeInfo;
use structof_reflect::ops::{self, ReflectMut};

use super::lookup::FieldPath;
use super::{Field, FieldMut};
use crate::error::{EncodeError, LookupError};
use crate::fields::{cached_type_fields, deref_pointers_mut, field_by_path};
use crate::value::{Map, Value};

/// A record instance, bound for reading and writing its fields.
pub struct Struct<'a> {
    record: &'a mut dyn ops::Struct,
    info: &'static TypeInfo,
}

impl<'a> Struct<'a> {
    /// Binds `value`, looking through pointers.
    ///
    /// # Panics
    ///
    /// Panics if `value` is neither a record nor a non-null pointer chain to
    /// one. Shared pointers with other owners count as null.
    pub fn new(value: &'a mut dyn Reflect) -> Self {
        let Some(value) = deref_pointers_mut(value) else {
            panic!("not a non-null pointer to struct");
        };
        let info = value.reflect_type_info();
        match value.reflect_mut() {
            ReflectMut::Struct(record) => Self { record, info },
            _ => panic!("not struct or pointer to struct"),
        }
    }

    /// Returns the record type's name without its module path.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.info.type_ident()
    }

    /// Returns the record type's full path.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.info.type_path()
    }

    /// Returns the record as a reflected value.
    #[inline]
    pub fn as_reflect(&self) -> &dyn Reflect {
        &*self.record
    }

    /// Returns the output names of the visible fields, in field order.
    pub fn field_names(&self) -> Vec<&'static str> {
        cached_type_fields(self.info).names().collect()
    }

    /// Returns the visible fields, in field order.
    ///
    /// Fields promoted through an embedded pointer that is null are left out.
    pub fn fields(&self) -> Vec<Field<'_>> {
        let record: &dyn ops::Struct = &*self.record;
        cached_type_fields(self.info)
            .iter()
            .filter_map(|descriptor| {
                field_by_path(record, descriptor.path())
                    .map(|value| Field::new(value, descriptor.declared()))
            })
            .collect()
    }

    /// Looks up a field by its dot-separated path of declared names, e.g.
    /// `"inner.count"`.
    ///
    /// Every segment but the last must name a record or a pointer to one.
    pub fn field(&self, path: &str) -> Result<Field<'_>, LookupError> {
        let path = FieldPath::resolve(self.info, path)?;
        let value = path.get(&*self.record)?;
        Ok(Field::new(value, path.declared()))
    }

    /// Mutable counterpart of [`field`](Self::field). Nothing is modified
    /// when the lookup fails.
    pub fn field_mut(&mut self, path: &str) -> Result<FieldMut<'_>, LookupError> {
        let path = FieldPath::resolve(self.info, path)?;
        let value = path.get_mut(&mut *self.record)?;
        Ok(FieldMut::new(value, path.declared()))
    }

    /// See [`fill_map`](crate::fill_map).
    #[inline]
    pub fn fill_map(&self, map: &mut Map) -> Result<(), EncodeError> {
        crate::fill_map(self.as_reflect(), map)
    }

    /// See [`make_map`](crate::make_map).
    #[inline]
    pub fn make_map(&self) -> Result<Map, EncodeError> {
        crate::make_map(self.as_reflect())
    }

    /// See [`make_slice`](crate::make_slice).
    #[inline]
    pub fn make_slice(&self) -> Result<Vec<Value>, EncodeError> {
        crate::make_slice(self.as_reflect())
    }
}

impl fmt::Debug for Struct<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Struct")
            .field("type_path", &self.type_path())
            .field("fields", &self.field_names())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec;

    use structof_reflect::Reflect;
    use structof_reflect::info::ReflectKind;

    use super::Struct;
    use crate::error::LookupError;
    use crate::value::Value;

    #[derive(Reflect)]
    pub struct S1 {
        pub a: i64,
    }

    #[derive(Reflect)]
    pub struct S2 {
        pub b: String,
    }

    #[derive(Reflect)]
    pub struct S3 {
        pub a: i64,
        pub b: String,
        nonexported: String,
        pub s1: Option<Box<S1>>,
        #[reflect(embed)]
        pub s2: Option<Box<S2>>,
    }

    fn s3() -> S3 {
        S3 {
            a: 0,
            b: String::new(),
            nonexported: String::new(),
            s1: None,
            s2: None,
        }
    }

    #[test]
    fn set_fields() {
        let mut value = s3();
        let mut record = Struct::new(&mut value);

        let mut a = record.field_mut("a").unwrap();
        a.set(Box::new(23_i64));
        assert_eq!(a.value().downcast_ref::<i64>(), Some(&23));

        // A string into an integer field fails and leaves it unchanged.
        assert!(a.try_set(Box::new(String::from("foobar"))).is_err());
        assert_eq!(a.value().downcast_ref::<i64>(), Some(&23));

        assert_eq!(
            record.field("nonexported").unwrap_err(),
            LookupError::NotExported("nonexported".to_string()),
        );

        let mut s1 = record.field_mut("s1").unwrap();
        s1.set(Box::new(Some(Box::new(S1 { a: 23 }))));
        let mut s2 = record.field_mut("s2").unwrap();
        s2.set(Box::new(Some(Box::new(S2 { b: "foobar".into() }))));

        assert_eq!(value.a, 23);
        assert_eq!(value.s1.map(|s1| s1.a), Some(23));
        assert_eq!(value.s2.map(|s2| s2.b), Some(String::from("foobar")));
    }

    #[test]
    #[should_panic(expected = "cannot set field `a`")]
    fn set_wrong_type_panics() {
        let mut value = s3();
        let mut record = Struct::new(&mut value);
        record.field_mut("a").unwrap().set(Box::new(String::from("foobar")));
    }

    #[test]
    fn set_zero_fields() {
        let mut value = s3();
        value.a = 23;
        value.s1 = Some(Box::new(S1 { a: 1 }));
        value.s2 = Some(Box::new(S2 { b: "x".into() }));

        let mut record = Struct::new(&mut value);
        for path in ["a", "s1", "s2"] {
            let mut field = record.field_mut(path).unwrap();
            assert!(field.set_zero());
            assert!(field.is_zero());
        }

        assert_eq!(value.a, 0);
        assert!(value.s1.is_none() && value.s2.is_none());
    }

    #[test]
    fn lookup_errors() {
        #[derive(Reflect)]
        pub struct Empty {}

        let mut empty = Empty {};
        assert_eq!(
            Struct::new(&mut empty).field("nonexists").unwrap_err(),
            LookupError::NotFound("nonexists".to_string()),
        );

        let mut value = s3();
        let record = Struct::new(&mut value);
        assert_eq!(
            record.field("a.b").unwrap_err(),
            LookupError::NotStruct("a".to_string()),
        );
        assert_eq!(
            record.field("s1.missing").unwrap_err(),
            LookupError::NotFound("s1.missing".to_string()),
        );
        assert_eq!(
            record.field("s1.a").unwrap_err(),
            LookupError::NullPointer("s1".to_string()),
        );
        assert!(record.field("").is_err());
    }

    #[test]
    fn nested_paths() {
        let mut value = s3();
        value.s1 = Some(Box::new(S1 { a: 0 }));
        value.s2 = Some(Box::new(S2 { b: String::new() }));

        let mut record = Struct::new(&mut value);
        record.field_mut("s1.a").unwrap().set(Box::new(23_i32));
        record.field_mut("s2.b").unwrap().set(Box::new(String::from("foobar")));

        assert_eq!(value.s1.as_ref().map(|s1| s1.a), Some(23));
        assert_eq!(value.s2.as_ref().map(|s2| s2.b.as_str()), Some("foobar"));
    }

    #[test]
    fn embedded_and_names() {
        #[derive(Reflect)]
        pub struct Base {}

        #[derive(Reflect)]
        pub struct Derived {
            #[reflect(embed)]
            pub base: Option<Box<Base>>,
            pub a: i32,
        }

        let mut value = Derived { base: None, a: 0 };
        let record = Struct::new(&mut value);
        assert!(record.field("base").unwrap().is_embedded());
        assert!(!record.field("a").unwrap().is_embedded());
        assert_eq!(record.name(), "Derived");
        assert_eq!(record.field("a").unwrap().kind(), ReflectKind::Scalar);
        assert_eq!(record.field("base").unwrap().kind(), ReflectKind::Pointer);
    }

    #[test]
    fn fields_skip_null_embedded_pointers() {
        #[derive(Reflect)]
        pub struct Extra {
            pub c: u8,
        }

        #[derive(Reflect)]
        pub struct Holder {
            pub a: i64,
            #[reflect(embed)]
            pub extra: Option<Box<Extra>>,
        }

        let mut value = Holder { a: 5, extra: None };
        let record = Struct::new(&mut value);
        assert_eq!(record.field_names(), ["a", "c"]);

        let names: vec::Vec<_> = record.fields().iter().map(|field| field.name()).collect();
        assert_eq!(names, ["a"]);

        let map = record.make_map().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], Value::Int(5));

        value.extra = Some(Box::new(Extra { c: 2 }));
        let record = Struct::new(&mut value);
        let names: vec::Vec<_> = record.fields().iter().map(|field| field.name()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn binds_through_pointers() {
        let mut value = Some(Box::new(S1 { a: 1 }));
        assert_eq!(Struct::new(&mut value).name(), "S1");

        let mut shared = Arc::new(S1 { a: 1 });
        let _other = shared.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            Struct::new(&mut shared);
        }));
        assert!(result.is_err());
    }

    #[test]
    #[should_panic(expected = "not struct or pointer to struct")]
    fn rejects_non_records() {
        let mut value = vec![1_u8];
        Struct::new(&mut value);
    }
}
