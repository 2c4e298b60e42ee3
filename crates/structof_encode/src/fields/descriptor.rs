use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;
use std::sync::OnceLock;

use bitflags::bitflags;
use structof_reflect::info::{NamedField, ReflectKind, TypeInfo};

use crate::annotation::Annotation;
use crate::encoder::{Encoder, type_encoder};

// -----------------------------------------------------------------------------
// FieldOptions

bitflags! {
    /// Conversion options of one field, taken from its annotation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldOptions: u8 {
        /// `omitempty`: skip the field when its value is empty.
        const OMIT_EMPTY = 1 << 0;
        /// `string`: emit the value's text form as a quoted string.
        const QUOTED     = 1 << 1;
        /// `inline`: write a record's fields into the enclosing output.
        const INLINE     = 1 << 2;
    }
}

impl FieldOptions {
    /// Collects the options of `annotation` for a field of type `info`.
    ///
    /// `string` is kept for scalars and records, `inline` for records only.
    /// Pointer layers of `info` are looked through.
    pub fn from_annotation(annotation: &Annotation<'_>, info: &'static TypeInfo) -> Self {
        let kind = info.deref_pointers().kind();
        let mut options = Self::empty();
        options.set(Self::OMIT_EMPTY, annotation.omit_empty());
        options.set(
            Self::QUOTED,
            annotation.quoted() && matches!(kind, ReflectKind::Scalar | ReflectKind::Struct),
        );
        options.set(
            Self::INLINE,
            annotation.inline() && kind == ReflectKind::Struct,
        );
        options
    }
}

// -----------------------------------------------------------------------------
// FieldDescriptor

/// One visible field of a record type.
pub struct FieldDescriptor {
    name: &'static str,
    tagged: bool,
    path: Box<[usize]>,
    kind: ReflectKind,
    options: FieldOptions,
    declared: &'static NamedField,
    encoder: OnceLock<Arc<Encoder>>,
}

impl FieldDescriptor {
    pub(crate) fn new(
        name: &'static str,
        tagged: bool,
        path: Box<[usize]>,
        options: FieldOptions,
        declared: &'static NamedField,
    ) -> Self {
        Self {
            name,
            tagged,
            path,
            kind: declared.type_info().deref_pointers().kind(),
            options,
            declared,
            encoder: OnceLock::new(),
        }
    }

    /// Returns the output key.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if the output key comes from the annotation.
    #[inline]
    pub const fn is_tagged(&self) -> bool {
        self.tagged
    }

    /// Returns the field indices leading from the record to this field,
    /// through embedded records.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Returns the kind of the field's type, pointer layers looked through.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        self.kind
    }

    /// Returns the conversion options.
    #[inline]
    pub const fn options(&self) -> FieldOptions {
        self.options
    }

    /// Returns the declaration of the field inside its own record.
    #[inline]
    pub const fn declared(&self) -> &'static NamedField {
        self.declared
    }

    /// Returns the info of the field's declared type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.declared.type_info()
    }

    /// Returns the encoder of the field's declared type, binding it on first
    /// use.
    #[inline]
    pub fn encoder(&self) -> &Arc<Encoder> {
        self.encoder.get_or_init(|| type_encoder(self.type_info()))
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("tagged", &self.tagged)
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("options", &self.options)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// StructFields

/// The resolved fields of a record type, ordered by [`path`](FieldDescriptor::path).
///
/// Names are unique, paths are unique.
#[derive(Debug, Default)]
pub struct StructFields {
    list: Box<[FieldDescriptor]>,
}

impl StructFields {
    #[inline]
    pub(crate) fn new(list: Box<[FieldDescriptor]>) -> Self {
        Self { list }
    }

    /// Returns the number of visible fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the record has no visible fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&FieldDescriptor> {
        self.list.get(index)
    }

    /// Returns the field with the output key `name`.
    pub fn find(&self, name: &str) -> Option<&FieldDescriptor> {
        self.list.iter().find(|field| field.name == name)
    }

    /// Iterates over the fields.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, FieldDescriptor> {
        self.list.iter()
    }

    /// Iterates over the output keys.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.list.iter().map(FieldDescriptor::name)
    }
}

impl<'a> IntoIterator for &'a StructFields {
    type Item = &'a FieldDescriptor;
    type IntoIter = core::slice::Iter<'a, FieldDescriptor>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
