use alloc::string::ToString;
use alloc::vec::Vec;

use structof_reflect::Reflect;
use structof_reflect::info::{NamedField, ReflectKind, TypeInfo};
use structof_reflect::ops::{ReflectMut, ReflectRef, Struct};

use crate::error::LookupError;
use crate::fields::{deref_pointers, deref_pointers_mut};

/// A dot-separated field path checked against a record type.
pub(super) struct FieldPath<'p> {
    // Field index and the path prefix ending at that field.
    steps: Vec<(usize, &'p str)>,
    declared: &'static NamedField,
}

impl<'p> FieldPath<'p> {
    /// Resolves `path` on the record type `info` without touching a value.
    pub(super) fn resolve(info: &'static TypeInfo, path: &'p str) -> Result<Self, LookupError> {
        let mut current = info;
        let mut steps = Vec::new();
        let mut declared = None;
        let mut end = 0;

        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            end += segment.len();
            let prefix = &path[..end];
            end += 1;

            let not_found = || LookupError::NotFound(prefix.to_string());
            let record = current.as_struct().map_err(|_| not_found())?;
            let index = record.index_of(segment).ok_or_else(not_found)?;
            let field = record.field_at(index).ok_or_else(not_found)?;

            if !field.is_exported() {
                return Err(LookupError::NotExported(prefix.to_string()));
            }
            steps.push((index, prefix));
            declared = Some(field);

            if segments.peek().is_some() {
                current = field.type_info().deref_pointers();
                if current.kind() != ReflectKind::Struct {
                    return Err(LookupError::NotStruct(prefix.to_string()));
                }
            }
        }

        match declared {
            Some(declared) => Ok(Self { steps, declared }),
            None => Err(LookupError::NotFound(path.to_string())),
        }
    }

    #[inline]
    pub(super) const fn declared(&self) -> &'static NamedField {
        self.declared
    }

    /// Follows the path through `record`.
    pub(super) fn get<'a>(&self, record: &'a dyn Struct) -> Result<&'a dyn Reflect, LookupError> {
        let Some((&(last, prefix), parents)) = self.steps.split_last() else {
            return Err(LookupError::NotFound(self.full().to_string()));
        };

        let mut record = record;
        for &(index, prefix) in parents {
            let value = record
                .field_at(index)
                .ok_or_else(|| LookupError::NotFound(prefix.to_string()))?;
            let value = deref_pointers(value)
                .ok_or_else(|| LookupError::NullPointer(prefix.to_string()))?;
            record = match value.reflect_ref() {
                ReflectRef::Struct(inner) => inner,
                _ => return Err(LookupError::NotStruct(prefix.to_string())),
            };
        }
        record
            .field_at(last)
            .ok_or_else(|| LookupError::NotFound(prefix.to_string()))
    }

    /// Mutable counterpart of [`get`](Self::get).
    ///
    /// A shared pointer with other owners cannot be crossed and is reported
    /// as [`LookupError::NullPointer`].
    pub(super) fn get_mut<'a>(
        &self,
        record: &'a mut dyn Struct,
    ) -> Result<&'a mut dyn Reflect, LookupError> {
        let Some((&(last, prefix), parents)) = self.steps.split_last() else {
            return Err(LookupError::NotFound(self.full().to_string()));
        };

        let mut record = record;
        for &(index, prefix) in parents {
            let value = record
                .field_at_mut(index)
                .ok_or_else(|| LookupError::NotFound(prefix.to_string()))?;
            let value = deref_pointers_mut(value)
                .ok_or_else(|| LookupError::NullPointer(prefix.to_string()))?;
            record = match value.reflect_mut() {
                ReflectMut::Struct(inner) => inner,
                _ => return Err(LookupError::NotStruct(prefix.to_string())),
            };
        }
        record
            .field_at_mut(last)
            .ok_or_else(|| LookupError::NotFound(prefix.to_string()))
    }

    fn full(&self) -> &'p str {
        self.steps.last().map_or("", |&(_, prefix)| prefix)
    }
}
