use alloc::vec;
use alloc::vec::Vec;
use core::any::TypeId;
use core::mem;

use structof_reflect::info::{NamedField, ReflectKind, TypeInfo};
use structof_utils::hash::{HashMap, HashSet};

use super::{FieldDescriptor, FieldOptions, StructFields};
use crate::annotation::Annotation;

// -----------------------------------------------------------------------------
// Candidate

/// A field found during the search, or a record queued for expansion.
#[derive(Clone)]
struct Candidate {
    name: &'static str,
    tagged: bool,
    path: Vec<usize>,
    // Pointer layers already removed.
    info: &'static TypeInfo,
    options: FieldOptions,
    // `None` only for the root record.
    declared: Option<&'static NamedField>,
}

impl Candidate {
    fn root(info: &'static TypeInfo) -> Self {
        Self {
            name: "",
            tagged: false,
            path: Vec::new(),
            info,
            options: FieldOptions::empty(),
            declared: None,
        }
    }

    fn into_descriptor(self) -> Option<FieldDescriptor> {
        let declared = self.declared?;
        Some(FieldDescriptor::new(
            self.name,
            self.tagged,
            self.path.into_boxed_slice(),
            self.options,
            declared,
        ))
    }
}

// -----------------------------------------------------------------------------
// type_fields

/// Computes the visible fields of the record type `info`.
///
/// This is a breadth-first search over the record and the records embedded
/// in it, each type expanded at most once. Non-record types yield an empty
/// list. See the [module documentation](crate::fields) for the naming rules.
///
/// Prefer [`cached_type_fields`](crate::fields::cached_type_fields).
pub fn type_fields(info: &'static TypeInfo) -> StructFields {
    if info.kind() != ReflectKind::Struct {
        return StructFields::default();
    }

    // Embedded records to explore at the current level and the next.
    let mut current: Vec<Candidate> = Vec::new();
    let mut next: Vec<Candidate> = vec![Candidate::root(info)];

    // Number of times a type was queued for the next level.
    let mut next_count: HashMap<TypeId, usize> = HashMap::default();

    // Types already expanded at an earlier level.
    let mut visited: HashSet<TypeId> = HashSet::default();

    let mut fields: Vec<Candidate> = Vec::new();

    while !next.is_empty() {
        mem::swap(&mut current, &mut next);
        next.clear();
        let count = mem::take(&mut next_count);

        for record in current.iter() {
            let Ok(struct_info) = record.info.as_struct() else {
                continue;
            };
            if !visited.insert(record.info.ty_id()) {
                continue;
            }
            // A type queued more than once at this level yields every leaf
            // twice, so the collapse below sees the conflict.
            let copies = match count.get(&record.info.ty_id()) {
                Some(&queued) if queued > 1 => 2,
                _ => 1,
            };

            let mut has_visible = false;

            for (index, declared) in struct_info.iter().enumerate() {
                let info = declared.type_info().deref_pointers();
                let is_record = info.kind() == ReflectKind::Struct;

                if declared.is_embedded() {
                    // Private embedded records may still hold public fields.
                    if !declared.is_exported() && !is_record {
                        continue;
                    }
                } else if !declared.is_exported() {
                    continue;
                }
                has_visible = true;

                let annotation = Annotation::parse(declared.annotation().unwrap_or(""));
                if annotation.is_skip() {
                    continue;
                }

                let mut path = Vec::with_capacity(record.path.len() + 1);
                path.extend_from_slice(&record.path);
                path.push(index);

                let candidate = Candidate {
                    name: annotation.name().unwrap_or(declared.name()),
                    tagged: annotation.name().is_some(),
                    path,
                    info,
                    options: FieldOptions::from_annotation(&annotation, info),
                    declared: Some(declared),
                };

                if candidate.tagged || !declared.is_embedded() || !is_record {
                    for _ in 0..copies {
                        fields.push(candidate.clone());
                    }
                    continue;
                }

                let queued = next_count.entry(info.ty_id()).or_insert(0);
                *queued += 1;
                if *queued == 1 {
                    next.push(candidate);
                }
            }

            // An embedded record with nothing visible inside stands for itself.
            if !has_visible && record.declared.is_some() {
                for _ in 0..copies {
                    fields.push(record.clone());
                }
            }
        }
    }

    // Sort by name, then depth, then tagged first, then path.
    fields.sort_by(|x, y| {
        x.name
            .cmp(y.name)
            .then(x.path.len().cmp(&y.path.len()))
            .then(y.tagged.cmp(&x.tagged))
            .then(x.path.cmp(&y.path))
    });

    // Each name keeps its dominant candidate, if there is one.
    let mut out: Vec<Candidate> = Vec::with_capacity(fields.len());
    for group in fields.chunk_by(|x, y| x.name == y.name) {
        match group {
            [only] => out.push(only.clone()),
            [first, second, ..] => {
                if first.path.len() == second.path.len() && first.tagged == second.tagged {
                    log::debug!(
                        "dropping ambiguous field `{}` of `{}`",
                        first.name,
                        info.type_path(),
                    );
                } else {
                    out.push(first.clone());
                }
            }
            [] => {}
        }
    }

    out.sort_by(|x, y| x.path.cmp(&y.path));

    log::trace!("resolved {} fields of `{}`", out.len(), info.type_path());

    StructFields::new(
        out.into_iter()
            .filter_map(Candidate::into_descriptor)
            .collect(),
    )
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::sync::Arc;

    use structof_reflect::Reflect;
    use structof_reflect::info::{ReflectKind, Typed};

    use super::type_fields;
    use crate::fields::FieldOptions;

    fn names<T: Typed>() -> Vec<&'static str> {
        type_fields(T::type_info()).names().collect()
    }

    #[test]
    fn declared_order_without_embedding() {
        #[derive(Reflect)]
        pub struct S {
            pub c: u8,
            pub a: String,
            hidden: bool,
            #[structof("-")]
            pub skipped: u8,
            pub b: Vec<u8>,
        }

        assert_eq!(names::<S>(), ["c", "a", "b"]);
    }

    #[test]
    fn annotation_names_and_options() {
        #[derive(Reflect)]
        pub struct S {
            #[structof("first,omitempty")]
            pub a: u8,
            #[structof(",string")]
            pub b: u8,
            #[structof("-,")]
            pub c: u8,
            #[structof(",string,inline")]
            pub d: Vec<u8>,
        }

        let fields = type_fields(S::type_info());
        assert_eq!(fields.names().collect::<Vec<_>>(), ["first", "b", "-", "d"]);

        let first = fields.find("first").unwrap();
        assert!(first.is_tagged());
        assert_eq!(first.options(), FieldOptions::OMIT_EMPTY);

        let b = fields.find("b").unwrap();
        assert!(!b.is_tagged());
        assert_eq!(b.options(), FieldOptions::QUOTED);

        // `string` and `inline` do not apply to sequences.
        let d = fields.find("d").unwrap();
        assert_eq!(d.options(), FieldOptions::empty());
        assert_eq!(d.kind(), ReflectKind::List);
    }

    #[test]
    fn embedded_fields_are_promoted() {
        #[derive(Reflect)]
        pub struct Base {
            pub id: u32,
            pub kind: String,
        }

        #[derive(Reflect)]
        pub struct User {
            #[reflect(embed)]
            pub base: Option<Box<Base>>,
            pub name: String,
        }

        let fields = type_fields(User::type_info());
        assert_eq!(fields.names().collect::<Vec<_>>(), ["id", "kind", "name"]);
        assert_eq!(fields.find("kind").unwrap().path(), &[0, 1]);
        assert_eq!(fields.find("name").unwrap().path(), &[1]);
    }

    #[test]
    fn shallow_field_shadows_deep_one() {
        #[derive(Reflect)]
        pub struct Base {
            pub id: u32,
        }

        #[derive(Reflect)]
        pub struct User {
            #[reflect(embed)]
            pub base: Base,
            pub id: String,
        }

        let fields = type_fields(User::type_info());
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.find("id").unwrap().path(), &[1]);
    }

    #[test]
    fn ambiguous_names_are_dropped() {
        #[derive(Reflect)]
        pub struct A {
            pub x: u8,
        }

        #[derive(Reflect)]
        pub struct B {
            pub x: u8,
        }

        #[derive(Reflect)]
        pub struct C {
            #[reflect(embed)]
            pub a: A,
            #[reflect(embed)]
            pub b: B,
        }

        assert!(names::<C>().is_empty());
    }

    #[test]
    fn tagged_field_wins_tie() {
        #[derive(Reflect)]
        pub struct A {
            pub x: u8,
        }

        #[derive(Reflect)]
        pub struct B {
            #[structof("x")]
            pub renamed: u8,
        }

        #[derive(Reflect)]
        pub struct C {
            #[reflect(embed)]
            pub a: A,
            #[reflect(embed)]
            pub b: B,
        }

        let fields = type_fields(C::type_info());
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get(0).unwrap().path(), &[1, 0]);
    }

    #[test]
    fn same_type_embedded_twice_conflicts() {
        #[derive(Reflect)]
        pub struct Leaf {
            pub v: u8,
        }

        #[derive(Reflect)]
        pub struct Left {
            #[reflect(embed)]
            pub leaf: Leaf,
        }

        #[derive(Reflect)]
        pub struct Right {
            #[reflect(embed)]
            pub leaf: Leaf,
        }

        #[derive(Reflect)]
        pub struct Root {
            #[reflect(embed)]
            pub left: Left,
            #[reflect(embed)]
            pub right: Right,
        }

        assert!(names::<Root>().is_empty());
    }

    #[test]
    fn named_embedding_is_a_leaf() {
        #[derive(Reflect)]
        pub struct Base {
            pub id: u32,
        }

        #[derive(Reflect)]
        pub struct User {
            #[reflect(embed)]
            #[structof("base")]
            pub base: Base,
        }

        let fields = type_fields(User::type_info());
        assert_eq!(fields.names().collect::<Vec<_>>(), ["base"]);
        assert_eq!(fields.get(0).unwrap().kind(), ReflectKind::Struct);
    }

    #[test]
    fn opaque_embedded_record_stands_for_itself() {
        #[derive(Reflect)]
        pub struct Stamp {
            seconds: u64,
        }

        #[derive(Reflect)]
        pub struct Event {
            #[reflect(embed)]
            pub stamp: Stamp,
            pub name: String,
        }

        assert_eq!(names::<Event>(), ["stamp", "name"]);
    }

    #[test]
    fn private_embedded_record_exposes_public_fields() {
        #[derive(Reflect)]
        pub struct Inner {
            pub a: u8,
        }

        #[derive(Reflect)]
        pub struct Outer {
            #[reflect(embed)]
            inner: Inner,
            #[reflect(embed)]
            number: u8,
        }

        assert_eq!(names::<Outer>(), ["a"]);
    }

    #[test]
    fn self_embedding_terminates() {
        #[derive(Reflect)]
        pub struct Node {
            pub value: u8,
            #[reflect(embed)]
            pub next: Option<Arc<Node>>,
        }

        let fields = type_fields(Node::type_info());
        assert_eq!(fields.names().collect::<Vec<_>>(), ["value"]);
        assert_eq!(fields.get(0).unwrap().path(), &[0]);
    }

    #[test]
    fn non_records_have_no_fields() {
        assert!(type_fields(u8::type_info()).is_empty());
    }
}
