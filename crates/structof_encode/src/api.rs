use alloc::vec::Vec;

use structof_reflect::Reflect;
use structof_reflect::info::ReflectKind;
use structof_reflect::ops::ReflectRef;

use crate::empty::is_zero_value;
use crate::encoder::type_encoder;
use crate::error::EncodeError;
use crate::fields::deref_pointers;
use crate::state::{EncodeOptions, PooledState};
use crate::value::{Map, Value};

// -----------------------------------------------------------------------------
// Entry points

/// Looks through pointers to the record a conversion starts from.
fn root(value: &dyn Reflect) -> &dyn Reflect {
    let Some(record) = deref_pointers(value) else {
        panic!("not a non-null pointer to struct");
    };
    if !matches!(record.reflect_ref(), ReflectRef::Struct(_)) {
        panic!("not struct or pointer to struct");
    }
    record
}

/// Converts the members of `record` into the output of the mode in `options`.
fn encode_root(record: &dyn Reflect, options: EncodeOptions) -> Result<Value, EncodeError> {
    let record = root(record);
    let mut state = PooledState::acquire(options);
    type_encoder(record.reflect_type_info()).encode(
        &mut state,
        "",
        record,
        options | EncodeOptions::INLINE,
    )?;
    Ok(state.take_output())
}

/// Adds the fields of `record` to `map`, keeping entries already present
/// under other keys.
///
/// On error `map` is left unchanged.
///
/// # Panics
///
/// Panics if `record` is neither a record nor a non-null pointer chain to one.
///
/// # Examples
///
/// ```
/// use structof_encode::{Map, Value, fill_map};
/// use structof_reflect::Reflect;
///
/// #[derive(Reflect)]
/// pub struct Point {
///     pub x: i32,
/// }
///
/// let mut map = Map::from([("y".to_string(), Value::Int(2))]);
/// fill_map(&Point { x: 1 }, &mut map).unwrap();
/// assert_eq!(map.len(), 2);
/// ```
pub fn fill_map(record: &dyn Reflect, map: &mut Map) -> Result<(), EncodeError> {
    if let Value::Map(fields) = encode_root(record, EncodeOptions::empty())? {
        map.extend(fields);
    }
    Ok(())
}

/// Converts `record` into a map, nested records included.
///
/// # Panics
///
/// Panics if `record` is neither a record nor a non-null pointer chain to one.
pub fn make_map(record: &dyn Reflect) -> Result<Map, EncodeError> {
    let mut map = Map::new();
    fill_map(record, &mut map)?;
    Ok(map)
}

/// Converts `record` into a flat list of alternating keys and values.
///
/// Nested records are lists of the same form. Duplicate keys are kept.
///
/// # Panics
///
/// Panics if `record` is neither a record nor a non-null pointer chain to one.
pub fn make_slice(record: &dyn Reflect) -> Result<Vec<Value>, EncodeError> {
    match encode_root(record, EncodeOptions::PAIRS)? {
        Value::List(pairs) => Ok(pairs),
        _ => Ok(Vec::new()),
    }
}

// -----------------------------------------------------------------------------
// Helpers

/// Reports whether `value` is a record or a pointer chain to a record type.
///
/// Only types are inspected: a null pointer to a record counts.
///
/// ```
/// use structof_encode::is_struct;
/// use structof_reflect::Reflect;
///
/// #[derive(Reflect)]
/// pub struct Unit {}
///
/// assert!(is_struct(&Unit {}));
/// assert!(is_struct(&None::<Box<Unit>>));
/// assert!(!is_struct(&"text"));
/// ```
pub fn is_struct(value: &dyn Reflect) -> bool {
    value.reflect_type_info().deref_pointers().kind() == ReflectKind::Struct
}

/// Same as [`is_zero_value`].
#[inline]
pub fn is_zero(value: &dyn Reflect) -> bool {
    is_zero_value(value)
}

/// Returns the name of the value's type without its module path.
#[inline]
pub fn type_name(value: &dyn Reflect) -> &'static str {
    value.reflect_type_info().type_ident()
}

/// Returns the declared names of all fields of a record type, in declaration
/// order and regardless of visibility or annotations.
///
/// # Panics
///
/// Panics if `value` is neither a record nor a pointer chain to a record
/// type.
pub fn field_names(value: &dyn Reflect) -> Vec<&'static str> {
    match value.reflect_type_info().deref_pointers().as_struct() {
        Ok(info) => info.field_names().to_vec(),
        Err(_) => panic!("not struct"),
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
    use alloc::vec::Vec;
    use std::collections::{BTreeMap, HashMap};
    use std::sync::OnceLock;

    use structof_reflect::Reflect;

    use super::{field_names, fill_map, is_struct, is_zero, make_map, make_slice, type_name};
    use crate::error::EncodeError;
    use crate::value::{Map, Value};

    fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
        Value::Map(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[derive(Reflect)]
    pub struct Basic {
        pub a: i64,
        pub b: String,
    }

    #[test]
    fn basic_and_tagged() {
        #[derive(Reflect)]
        pub struct Tagged {
            #[structof("a")]
            pub first: i64,
            #[structof("b")]
            pub second: String,
        }

        let output = make_map(&Basic { a: 23, b: "foobar".into() }).unwrap();
        assert_eq!(Value::Map(output), map([("a", Value::Int(23)), ("b", "foobar".into())]));

        let output = make_map(&Tagged { first: 23, second: "foobar".into() }).unwrap();
        assert_eq!(Value::Map(output), map([("a", Value::Int(23)), ("b", "foobar".into())]));
    }

    #[test]
    fn omit_empty() {
        #[derive(Reflect)]
        pub struct S {
            pub a: i64,
            #[structof(",omitempty")]
            pub b: String,
            #[structof("c,omitempty")]
            pub c: Option<Box<u8>>,
            #[structof(",omitempty")]
            pub d: Vec<u8>,
        }

        let output = make_map(&S { a: 0, b: String::new(), c: None, d: Vec::new() }).unwrap();
        assert_eq!(Value::Map(output), map([("a", Value::Int(0))]));

        let output = make_map(&S { a: 0, b: "x".into(), c: Some(Box::new(0)), d: vec![0] }).unwrap();
        assert_eq!(output.len(), 4);
        assert_eq!(output["c"], Value::Uint(0));
    }

    #[test]
    fn custom_emptiness() {
        #[derive(Reflect)]
        #[reflect(is_empty = Stamp::is_unset)]
        pub struct Stamp {
            pub seconds: u64,
        }

        impl Stamp {
            fn is_unset(&self) -> bool {
                self.seconds == 0
            }
        }

        #[derive(Reflect)]
        pub struct S {
            #[structof("created,omitempty")]
            pub created: Stamp,
        }

        let output = make_map(&S { created: Stamp { seconds: 0 } }).unwrap();
        assert!(output.is_empty());

        let output = make_map(&S { created: Stamp { seconds: 9 } }).unwrap();
        assert_eq!(Value::Map(output), map([("created", map([("seconds", Value::Uint(9))]))]));
    }

    #[test]
    fn omit_empty_keeps_zero_records() {
        #[derive(Reflect)]
        pub struct Point {
            pub x: i32,
        }

        #[derive(Reflect)]
        pub struct S {
            #[structof(",omitempty")]
            pub p: Point,
        }

        // Records have no empty state of their own, all-zero members included.
        let output = make_map(&S { p: Point { x: 0 } }).unwrap();
        assert_eq!(Value::Map(output), map([("p", map([("x", Value::Int(0))]))]));
    }

    #[test]
    fn nested_records_and_maps() {
        #[derive(Reflect)]
        pub struct Inner {
            pub a: String,
        }

        #[derive(Reflect)]
        pub struct Outer {
            pub inner: Option<Box<Inner>>,
            pub by_name: HashMap<String, Arc<Inner>>,
            pub labels: BTreeMap<String, String>,
            pub any: BTreeMap<String, Value>,
            pub ints: HashMap<String, Vec<i32>>,
        }

        let outer = Outer {
            inner: Some(Box::new(Inner { a: "foobar".into() })),
            by_name: HashMap::from([("x".to_string(), Arc::new(Inner { a: "y".into() }))]),
            labels: BTreeMap::from([("foo".to_string(), "bar".to_string())]),
            any: BTreeMap::from([("foo".to_string(), Value::from("bar"))]),
            ints: HashMap::from([("foobar".to_string(), vec![23])]),
        };

        let output = Value::Map(make_map(&outer).unwrap());
        let expected = map([
            ("inner", map([("a", "foobar".into())])),
            ("by_name", map([("x", map([("a", "y".into())]))])),
            ("labels", map([("foo", "bar".into())])),
            ("any", map([("foo", "bar".into())])),
            ("ints", map([("foobar", Value::List(vec![Value::Int(23)]))])),
        ]);
        assert_eq!(output, expected);
    }

    #[test]
    fn sequences_of_records() {
        #[derive(Reflect)]
        pub struct Address {
            #[structof("country")]
            pub country: String,
        }

        #[derive(Reflect)]
        pub struct Person {
            pub name: String,
            pub addresses: Vec<Address>,
            pub by_region: HashMap<String, Vec<Address>>,
        }

        let person = Person {
            name: "foobar".into(),
            addresses: vec![Address { country: "England".into() }, Address { country: "Italy".into() }],
            by_region: HashMap::from([(
                "example".to_string(),
                vec![Address { country: "Turkey".into() }],
            )]),
        };

        let output = make_map(&person).unwrap();
        assert_eq!(
            output["addresses"],
            Value::List(vec![
                map([("country", "England".into())]),
                map([("country", "Italy".into())]),
            ]),
        );
        assert_eq!(
            output["by_region"],
            map([("example", Value::List(vec![map([("country", "Turkey".into())])]))]),
        );
    }

    #[test]
    fn embedded_through_pointer() {
        #[derive(Reflect)]
        pub struct S1 {
            pub a: String,
        }

        #[derive(Reflect)]
        pub struct S2 {
            #[reflect(embed)]
            pub s1: Option<Box<S1>>,
        }

        let value = S2 { s1: Some(Box::new(S1 { a: "foobar".into() })) };
        assert_eq!(Value::Map(make_map(&value).unwrap()), map([("a", "foobar".into())]));
        assert_eq!(make_slice(&value).unwrap(), vec!["a".into(), "foobar".into()]);

        // Nothing is promoted through a null pointer.
        assert!(make_map(&S2 { s1: None }).unwrap().is_empty());
    }

    #[test]
    fn inline_and_overwrite() {
        #[derive(Reflect)]
        pub struct S1 {
            #[structof("a")]
            pub a: String,
        }

        #[derive(Reflect)]
        pub struct S2 {
            #[structof(",inline")]
            pub s1: Option<Box<S1>>,
        }

        #[derive(Reflect)]
        pub struct S3 {
            #[structof(",inline")]
            pub s1: Option<Box<S1>>,
            #[structof("a")]
            pub a: String,
        }

        let value = S2 { s1: Some(Box::new(S1 { a: "foobar".into() })) };
        assert_eq!(Value::Map(make_map(&value).unwrap()), map([("a", "foobar".into())]));

        let value = S3 { s1: Some(Box::new(S1 { a: "s1".into() })), a: "s2".into() };
        assert_eq!(Value::Map(make_map(&value).unwrap()), map([("a", "s2".into())]));
        assert_eq!(
            make_slice(&value).unwrap(),
            vec!["a".into(), "s1".into(), "a".into(), "s2".into()],
        );
    }

    #[test]
    fn pairs_mode() {
        #[derive(Reflect)]
        pub struct Sparse {
            #[structof("a,omitempty")]
            pub a: i64,
        }

        #[derive(Reflect)]
        pub struct Outer {
            pub a: i64,
            pub inner: Option<Box<Basic>>,
        }

        let basic = Box::new(Basic { a: 23, b: "foobar".into() });
        assert_eq!(
            make_slice(&basic).unwrap(),
            vec!["a".into(), Value::Int(23), "b".into(), "foobar".into()],
        );
        assert!(make_slice(&Sparse { a: 0 }).unwrap().is_empty());

        let outer = Outer { a: 23, inner: Some(basic) };
        assert_eq!(
            make_slice(&outer).unwrap(),
            vec![
                "a".into(),
                Value::Int(23),
                "inner".into(),
                Value::List(vec!["a".into(), Value::Int(23), "b".into(), "foobar".into()]),
            ],
        );
    }

    #[test]
    fn nested_null_pointers() {
        #[derive(Reflect)]
        pub struct S1 {}

        #[derive(Reflect)]
        pub struct S2 {
            pub s1: Option<Box<S1>>,
        }

        #[derive(Reflect)]
        pub struct S3 {
            pub s2: Option<Box<S2>>,
        }

        let output = make_map(&S3 { s2: None }).unwrap();
        assert_eq!(Value::Map(output), map([("s2", Value::Null)]));

        let output = make_map(&S3 { s2: Some(Box::new(S2 { s1: None })) }).unwrap();
        assert_eq!(Value::Map(output), map([("s2", map([("s1", Value::Null)]))]));

        let value = S3 { s2: Some(Box::new(S2 { s1: Some(Box::new(S1 {})) })) };
        let output = make_map(&value).unwrap();
        assert_eq!(Value::Map(output), map([("s2", map([("s1", map([]))]))]));
    }

    #[test]
    fn string_option() {
        #[derive(Reflect)]
        #[reflect(display)]
        pub struct Named {
            count: i32,
            label: String,
        }

        impl core::fmt::Display for Named {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({})", self.label, self.count)
            }
        }

        #[derive(Reflect)]
        pub struct T {
            #[structof("named,string")]
            pub named: Option<Box<Named>>,
            #[structof("count,string")]
            pub count: u16,
        }

        let value = T {
            named: Some(Box::new(Named { count: 23, label: "foobar".into() })),
            count: 23,
        };
        let output = make_map(&value).unwrap();
        assert_eq!(output["named"], Value::from(r#""foobar(23)""#));
        assert_eq!(output["count"], Value::from(r#""23""#));
    }

    #[test]
    fn dynamic_values() {
        #[derive(Reflect)]
        pub struct T {
            pub bytes: Box<dyn Reflect>,
            pub nothing: Value,
        }

        let value = T { bytes: Box::new(b"hi".to_vec()), nothing: Value::Null };
        let output = make_map(&value).unwrap();
        assert_eq!(Value::Map(output), map([("bytes", Value::List(vec![Value::Uint(104), Value::Uint(105)]))]));
    }

    #[test]
    fn pointer_chain_roots() {
        #[derive(Reflect)]
        pub struct S {}

        let value = Some(Box::new(Some(Box::new(S {}))));
        assert!(make_map(&value).unwrap().is_empty());
        assert!(make_slice(&Arc::new(S {})).unwrap().is_empty());
    }

    #[test]
    #[should_panic(expected = "not struct or pointer to struct")]
    fn non_record_root_panics() {
        let _ = make_map(&String::new());
    }

    #[test]
    #[should_panic(expected = "not a non-null pointer to struct")]
    fn null_root_panics() {
        let _ = make_map(&None::<Box<Basic>>);
    }

    #[derive(Reflect)]
    pub struct Node {
        pub value: u32,
        pub next: OnceLock<Arc<Node>>,
    }

    fn node(value: u32) -> Node {
        Node { value, next: OnceLock::new() }
    }

    #[test]
    fn cycles_fail_distinct_chains_pass() {
        let looped = Arc::new(node(0));
        let _ = looped.next.set(looped.clone());
        let err = make_map(&looped).unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedValue(ref msg) if msg.starts_with("encountered a cycle via")));

        let mut head = node(0);
        for value in 1..120 {
            let next = core::mem::replace(&mut head, node(value));
            let _ = head.next.set(Arc::new(next));
        }
        let output = make_map(&head).unwrap();
        assert_eq!(output["value"], Value::Uint(119));

        // The failed call returned its state clean.
        assert_eq!(make_map(&node(5)).unwrap()["value"], Value::Uint(5));
    }

    #[derive(Reflect)]
    pub struct Branch {
        pub children: Box<BTreeMap<String, Branch>>,
    }

    #[test]
    fn boxed_maps_are_not_cycles() {
        // The box's pointee and the map share an address at every level.
        let mut root = Branch { children: Box::new(BTreeMap::new()) };
        for _ in 0..60 {
            let child = core::mem::replace(&mut root, Branch { children: Box::new(BTreeMap::new()) });
            root.children.insert("child".to_string(), child);
        }

        let mut output = Value::Map(make_map(&root).unwrap());
        let mut depth = 0;
        while let Value::Map(mut fields) = output {
            let Some(Value::Map(mut children)) = fields.remove("children") else {
                break;
            };
            output = children.remove("child").unwrap_or_default();
            depth += 1;
        }
        assert_eq!(depth, 61);
    }

    #[test]
    fn errors_keep_the_target_map() {
        #[derive(Reflect)]
        pub struct Bad {
            pub a: u8,
            pub keys: BTreeMap<u8, u8>,
        }

        let mut target = Map::from([("kept".to_string(), Value::Bool(true))]);
        let err = fill_map(&Bad { a: 1, keys: BTreeMap::new() }, &mut target).unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedType { ref key, .. } if key == "keys"));
        assert_eq!(target.len(), 1);

        #[derive(Reflect)]
        pub struct WithChannel {
            pub events: std::sync::mpsc::Sender<u8>,
        }

        let (events, _receiver) = std::sync::mpsc::channel();
        let err = make_map(&WithChannel { events }).unwrap_err();
        assert_eq!(
            err.to_string(),
            "structof: unsupported type: std::sync::mpsc::Sender<u8> for field: events",
        );
    }

    #[test]
    fn concurrent_first_use() {
        #[derive(Reflect)]
        pub struct Shared {
            pub id: u64,
            pub tags: Vec<String>,
            pub child: Option<Box<Shared>>,
        }

        std::thread::scope(|scope| {
            for id in 0..8_u64 {
                scope.spawn(move || {
                    let value = Shared {
                        id,
                        tags: vec!["t".into()],
                        child: Some(Box::new(Shared { id, tags: Vec::new(), child: None })),
                    };
                    let output = make_map(&value).unwrap();
                    assert_eq!(output["id"], Value::Uint(id));
                    assert_eq!(make_slice(&value).unwrap().len(), 6);
                });
            }
        });
    }

    #[test]
    fn helpers() {
        #[derive(Reflect)]
        pub struct Mixed {
            #[structof("-")]
            pub a: u8,
            hidden: u8,
            #[reflect(embed)]
            pub basic: Basic,
        }

        let value = Mixed { a: 0, hidden: 0, basic: Basic { a: 0, b: String::new() } };
        assert_eq!(field_names(&value), ["a", "hidden", "basic"]);
        assert_eq!(field_names(&Some(Box::new(node(1)))), ["value", "next"]);
        assert!(is_zero(&value));
        assert!(!is_zero(&node(1)));
        assert_eq!(type_name(&value), "Mixed");
        assert!(is_struct(&value) && is_struct(&Arc::new(node(1))));
        assert!(!is_struct(&vec![node(1)]));
    }

    #[test]
    #[should_panic(expected = "not struct")]
    fn field_names_of_non_record_panics() {
        field_names(&1_u8);
    }
}
