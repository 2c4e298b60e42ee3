use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{Scalar, ScalarError, ScalarRef};

macro_rules! impl_scalar_type {
    ($ty:ident, $kind:ident) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::stringify!($ty)
            }

            #[inline]
            fn type_name() -> &'static str {
                ::core::stringify!($ty)
            }

            #[inline]
            fn type_ident() -> &'static str {
                ::core::stringify!($ty)
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::$kind))
                })
            }
        }

        impl Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!(Scalar);

            #[inline]
            fn set_zero(&mut self) -> bool {
                *self = <$ty>::default();
                true
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    };
}

#[inline(always)]
const fn mismatch(expected: ScalarKind, value: &ScalarRef<'_>) -> ScalarError {
    ScalarError::KindMismatch {
        expected,
        received: value.kind(),
    }
}

macro_rules! impl_integer {
    ($kind:ident, $wide:ident: $($ty:ident),+) => {$(
        impl_scalar_type!($ty, $kind);

        impl Scalar for $ty {
            #[inline]
            fn scalar(&self) -> ScalarRef<'_> {
                ScalarRef::$kind(*self as $wide)
            }

            fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError> {
                match value {
                    ScalarRef::$kind(v) => {
                        *self = <$ty>::try_from(v).map_err(|_| ScalarError::OutOfRange {
                            target: ::core::stringify!($ty),
                        })?;
                        Ok(())
                    }
                    other => Err(mismatch(ScalarKind::$kind, &other)),
                }
            }
        }
    )+};
}

impl_integer!(Int, i64: i8, i16, i32, i64, isize);
impl_integer!(Uint, u64: u8, u16, u32, u64, usize);

macro_rules! impl_float {
    ($($ty:ident),+) => {$(
        impl_scalar_type!($ty, Float);

        impl Scalar for $ty {
            #[inline]
            fn scalar(&self) -> ScalarRef<'_> {
                ScalarRef::Float(*self as f64)
            }

            fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError> {
                match value {
                    ScalarRef::Float(v) => {
                        let narrowed = v as $ty;
                        if v.is_finite() && narrowed.is_infinite() {
                            return Err(ScalarError::OutOfRange {
                                target: ::core::stringify!($ty),
                            });
                        }
                        *self = narrowed;
                        Ok(())
                    }
                    other => Err(mismatch(ScalarKind::Float, &other)),
                }
            }
        }
    )+};
}

impl_float!(f32, f64);

impl_scalar_type!(bool, Bool);

impl Scalar for bool {
    #[inline]
    fn scalar(&self) -> ScalarRef<'_> {
        ScalarRef::Bool(*self)
    }

    fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError> {
        match value {
            ScalarRef::Bool(v) => {
                *self = v;
                Ok(())
            }
            other => Err(mismatch(ScalarKind::Bool, &other)),
        }
    }
}

impl_scalar_type!(char, Char);

impl Scalar for char {
    #[inline]
    fn scalar(&self) -> ScalarRef<'_> {
        ScalarRef::Char(*self)
    }

    fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError> {
        match value {
            ScalarRef::Char(v) => {
                *self = v;
                Ok(())
            }
            other => Err(mismatch(ScalarKind::Char, &other)),
        }
    }
}
