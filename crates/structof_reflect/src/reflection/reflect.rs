use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicInfo, DynamicTypePath, DynamicTyped, TypePath, Typed};
use crate::info::{ReflectKind, TypeInfo};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The core trait of runtime reflection.
///
/// A `dyn Reflect` can report its type ([`DynamicTypePath`],
/// [`DynamicTyped`]), dispatch to a per-kind access trait through
/// [`reflect_ref`](Reflect::reflect_ref) and
/// [`reflect_mut`](Reflect::reflect_mut), and be overwritten in place.
///
/// Implemented for scalars, standard containers and pointers in
/// [`impls`](crate::impls), and by [`#[derive(Reflect)]`](crate::derive::Reflect)
/// for structs with named fields.
///
/// # Hooks
///
/// Two optional hooks change how a value is treated during conversion:
///
/// - [`reflect_is_empty`](Reflect::reflect_is_empty): a custom emptiness test,
///   consulted before the built-in one.
/// - [`reflect_display`](Reflect::reflect_display): a textual form. Structs
///   with no visible fields convert to this text instead of an empty map.
///
/// # Examples
///
/// ```
/// use structof_reflect::{Reflect, info::ReflectKind};
///
/// let mut value: Box<dyn Reflect> = Box::new(5_u32);
/// // The box itself is a dynamic value, its content a scalar.
/// assert_eq!(value.reflect_kind(), ReflectKind::Dynamic);
/// assert_eq!((*value).reflect_kind(), ReflectKind::Scalar);
/// assert!(value.is::<u32>());
///
/// (*value).set(Box::new(9_u32)).unwrap();
/// assert_eq!(value.downcast_ref::<u32>(), Some(&9));
///
/// assert!((*value).set(Box::new(9_u8)).is_err());
/// assert_eq!(value.downcast_ref::<u32>(), Some(&9));
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Returns the [`TypeId`] of the concrete type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Overwrites `self` with `value`.
    ///
    /// Returns `value` back if its type differs from `Self`.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Resets `self` to its zero value.
    ///
    /// Returns `false` if some part has no zero value reachable at runtime,
    /// such as an opaque value or a shared pointer with other owners. Parts
    /// that can be reset are reset regardless.
    fn set_zero(&mut self) -> bool;

    /// Returns the [`ReflectKind`] of the value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable per-kind view.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable per-kind view.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Custom emptiness test. `None` defers to the built-in rules.
    #[inline]
    fn reflect_is_empty(&self) -> Option<bool> {
        None
    }

    /// Custom textual form. `None` means the type has none.
    #[inline]
    fn reflect_display(&self) -> Option<String> {
        None
    }

    /// Debug formatter for the value.
    fn reflect_debug(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Array(data) => impls::array_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Dynamic(data) => impls::dynamic_debug(data, f),
            ReflectRef::Scalar(data) => impls::scalar_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the boxed value to type `T`, or returns it back.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the boxed value to type `T` and unboxes it, or returns it back.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl core::fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.reflect_debug(f)
    }
}

impl TypePath for dyn Reflect {
    #[inline]
    fn type_path() -> &'static str {
        "dyn structof_reflect::Reflect"
    }

    #[inline]
    fn type_name() -> &'static str {
        "dyn Reflect"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "dyn Reflect"
    }
}

impl Typed for dyn Reflect {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Dynamic(DynamicInfo::new::<Self>()))
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
