use core::{error, fmt};

use crate::info::{ArrayInfo, ListInfo, MapInfo, PointerInfo};
use crate::info::{DynamicInfo, OpaqueInfo, ScalarInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The shape of a reflected type, as far as conversion is concerned.
///
/// | kind | examples |
/// |---|---|
/// | `Struct` | `#[derive(Reflect)] struct A { .. }` |
/// | `List` | `Vec<T>`, `VecDeque<T>` |
/// | `Array` | `[T; N]` |
/// | `Map` | `HashMap<K, V>`, `BTreeMap<K, V>` |
/// | `Pointer` | `Option<T>`, `Box<T>`, `Arc<T>`, `OnceLock<T>` |
/// | `Dynamic` | `Box<dyn Reflect>`, and any type holding a value of unknown type |
/// | `Scalar` | `bool`, integers, floats, `char`, `String`, `&'static str` |
/// | `Opaque` | function pointers, channels; never convertible |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Array,
    Map,
    Pointer,
    Dynamic,
    Scalar,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Array => f.pad("Array"),
            Self::Map => f.pad("Map"),
            Self::Pointer => f.pad("Pointer"),
            Self::Dynamic => f.pad("Dynamic"),
            Self::Scalar => f.pad("Scalar"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// ScalarKind

/// The sub-kind of a [`ReflectKind::Scalar`] type.
///
/// Scalars of the same `ScalarKind` convert into each other (with range
/// checks), e.g. an `i64` can be stored into an `i8` field if it fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int,
    Uint,
    Float,
    Char,
    Str,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("Bool"),
            Self::Int => f.pad("Int"),
            Self::Uint => f.pad("Uint"),
            Self::Float => f.pad("Float"),
            Self::Char => f.pad("Char"),
            Self::Str => f.pad("Str"),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectKindError

/// Returned by the `as_xxx` casts of [`TypeInfo`] on a kind mismatch.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a reflected type.
///
/// Obtained from [`Typed::type_info`](crate::info::Typed::type_info) or
/// [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped::reflect_type_info).
/// Every variant holds the [`Type`] of the described type; element types are
/// referenced through function pointers so recursive types can be described.
///
/// # Examples
///
/// ```
/// use structof_reflect::info::{ReflectKind, ScalarKind, Typed};
///
/// let info = <Vec<String>>::type_info();
/// assert_eq!(info.kind(), ReflectKind::List);
///
/// let item = info.as_list().unwrap().item_info();
/// assert_eq!(item.scalar_kind(), Some(ScalarKind::Str));
///
/// assert!(info.as_map().is_err());
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Map(MapInfo),
    Pointer(PointerInfo),
    Dynamic(DynamicInfo),
    Scalar(ScalarInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`], or an error for other kinds.")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_dynamic: Dynamic => DynamicInfo);
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the [`Type`] of the described type.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Dynamic(info) => info.ty(),
            Self::Scalar(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] of the described type.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Dynamic(_) => ReflectKind::Dynamic,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the [`ScalarKind`] if this is a scalar type.
    pub const fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Self::Scalar(info) => Some(info.scalar_kind()),
            _ => None,
        }
    }

    /// Follows [`Pointer`](TypeInfo::Pointer) layers down to the first
    /// non-pointer type.
    ///
    /// ```
    /// use structof_reflect::info::{ReflectKind, Typed};
    /// use std::sync::Arc;
    ///
    /// let info = <Option<Arc<Box<u8>>>>::type_info().deref_pointers();
    /// assert_eq!(info.kind(), ReflectKind::Scalar);
    /// assert!(info.type_is::<u8>());
    /// ```
    pub fn deref_pointers(&'static self) -> &'static TypeInfo {
        let mut info = self;
        while let Self::Pointer(pointer) = info {
            info = pointer.pointee_info();
        }
        info
    }
}
