use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// Besides the name and type, a field records the three declaration facts
/// the conversion engine resolves visibility from:
///
/// - `exported`: the field is declared `pub`.
/// - `embedded`: the field is marked `#[reflect(embed)]`; its own fields are
///   promoted into the parent unless shadowed.
/// - `annotation`: the raw `#[structof("...")]` string, if any.
///
/// # Examples
///
/// ```
/// use structof_reflect::{Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// pub struct Base {
///     pub id: u32,
/// }
///
/// #[derive(Reflect)]
/// pub struct User {
///     #[reflect(embed)]
///     pub base: Base,
///     #[structof("user_name,omitempty")]
///     pub name: String,
/// }
///
/// let info = User::type_info().as_struct().unwrap();
///
/// let base = info.field_at(0).unwrap();
/// assert!(base.is_embedded() && base.is_exported());
/// assert!(base.type_is::<Base>());
///
/// let name = info.field("name").unwrap();
/// assert_eq!(name.annotation(), Some("user_name,omitempty"));
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    annotation: Option<&'static str>,
    exported: bool,
    embedded: bool,
}

impl NamedField {
    /// Creates a private, non-embedded, unannotated field of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            annotation: None,
            exported: false,
            embedded: false,
        }
    }

    /// Marks whether the field is declared `pub`.
    #[inline]
    pub const fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Marks whether the field is embedded.
    #[inline]
    pub const fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Sets the raw annotation string.
    #[inline]
    pub const fn with_annotation(mut self, annotation: &'static str) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Returns the `TypeId` of the field type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the field type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns the raw annotation string.
    #[inline]
    pub const fn annotation(&self) -> Option<&'static str> {
        self.annotation
    }

    /// Returns `true` if the field is declared `pub`.
    #[inline]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    /// Returns `true` if the field is embedded.
    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }
}
