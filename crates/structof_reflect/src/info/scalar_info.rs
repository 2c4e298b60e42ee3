use crate::info::{ScalarKind, Type, TypePath, impl_type_fn};
use crate::ops::Scalar;

/// A container for compile-time scalar info.
///
/// ```rust
/// use structof_reflect::info::{ScalarKind, Typed};
///
/// let info = <u16 as Typed>::type_info().as_scalar().unwrap();
/// assert_eq!(info.scalar_kind(), ScalarKind::Uint);
/// ```
#[derive(Clone, Debug)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
}

impl ScalarInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ScalarInfo`].
    #[inline]
    pub const fn new<T: Scalar + TypePath>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the [`ScalarKind`].
    #[inline]
    pub const fn scalar_kind(&self) -> ScalarKind {
        self.kind
    }
}
