use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{Scalar, ScalarError, ScalarRef};

// -----------------------------------------------------------------------------
// String

impl TypePath for String {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::string::String"
    }

    #[inline]
    fn type_name() -> &'static str {
        "String"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "String"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::string")
    }
}

impl Typed for String {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::Str)))
    }
}

impl Reflect for String {
    crate::reflection::impl_reflect_cast_fn!(Scalar);

    #[inline]
    fn set_zero(&mut self) -> bool {
        self.clear();
        true
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

impl Scalar for String {
    #[inline]
    fn scalar(&self) -> ScalarRef<'_> {
        ScalarRef::Str(self)
    }

    fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError> {
        match value {
            ScalarRef::Str(v) => {
                self.clear();
                self.push_str(v);
                Ok(())
            }
            other => Err(ScalarError::KindMismatch {
                expected: ScalarKind::Str,
                received: other.kind(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// &'static str

impl TypePath for &'static str {
    #[inline]
    fn type_path() -> &'static str {
        "&str"
    }

    #[inline]
    fn type_name() -> &'static str {
        "&str"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "&str"
    }
}

impl Typed for &'static str {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::Str)))
    }
}

impl Reflect for &'static str {
    crate::reflection::impl_reflect_cast_fn!(Scalar);

    #[inline]
    fn set_zero(&mut self) -> bool {
        *self = "";
        true
    }

    #[inline]
    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(*self, f)
    }
}

impl Scalar for &'static str {
    #[inline]
    fn scalar(&self) -> ScalarRef<'_> {
        ScalarRef::Str(self)
    }

    /// A borrowed `&str` cannot outlive the call, so only the current value
    /// (or the empty string) can be stored.
    fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError> {
        match value {
            ScalarRef::Str(v) if v == *self => Ok(()),
            ScalarRef::Str("") => {
                *self = "";
                Ok(())
            }
            ScalarRef::Str(_) => Err(ScalarError::ReadOnly { target: "&str" }),
            other => Err(ScalarError::KindMismatch {
                expected: ScalarKind::Str,
                received: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::ops::{Scalar, ScalarError, ScalarRef};

    #[test]
    fn string_assignment() {
        let mut text = String::from("old");
        text.set_scalar(ScalarRef::Str("new")).unwrap();
        assert_eq!(text, "new");
        assert!(text.set_scalar(ScalarRef::Int(1)).is_err());
    }

    #[test]
    fn static_str_is_read_only() {
        let mut text: &'static str = "fixed";
        assert_eq!(
            text.set_scalar(ScalarRef::Str("other")),
            Err(ScalarError::ReadOnly { target: "&str" })
        );
        text.set_scalar(ScalarRef::Str("")).unwrap();
        assert_eq!(text, "");
    }
}
