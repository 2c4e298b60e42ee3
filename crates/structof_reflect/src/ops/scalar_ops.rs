use core::{error, fmt};

use crate::Reflect;
use crate::info::ScalarKind;

// -----------------------------------------------------------------------------
// ScalarRef

/// A borrowed view of a scalar value, widened to the largest type of its
/// [`ScalarKind`].
///
/// `Display` renders the plain value: no quotes around strings, `true` or
/// `false` for booleans.
///
/// ```
/// use structof_reflect::ops::{Scalar, ScalarRef};
///
/// assert_eq!(7_u8.scalar(), ScalarRef::Uint(7));
/// assert_eq!(String::from("hi").scalar().to_string(), "hi");
/// assert!(0.0_f32.scalar().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl ScalarRef<'_> {
    /// Returns the [`ScalarKind`] of the value.
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::Int(_) => ScalarKind::Int,
            Self::Uint(_) => ScalarKind::Uint,
            Self::Float(_) => ScalarKind::Float,
            Self::Char(_) => ScalarKind::Char,
            Self::Str(_) => ScalarKind::Str,
        }
    }

    /// Returns `true` for `false`, numeric zero, `'\0'` and the empty string.
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Bool(v) => !v,
            Self::Int(v) => v == 0,
            Self::Uint(v) => v == 0,
            Self::Float(v) => v == 0.0,
            Self::Char(v) => v == '\0',
            Self::Str(v) => v.is_empty(),
        }
    }
}

impl fmt::Display for ScalarRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Uint(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::Str(v) => f.pad(v),
        }
    }
}

// -----------------------------------------------------------------------------
// ScalarError

/// Returned by [`Scalar::set_scalar`] when a value cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// The value belongs to a different [`ScalarKind`].
    KindMismatch {
        expected: ScalarKind,
        received: ScalarKind,
    },
    /// The value does not fit the target type, e.g. `300` into a `u8`.
    OutOfRange { target: &'static str },
    /// The target cannot hold a borrowed value, e.g. `&'static str`.
    ReadOnly { target: &'static str },
}

impl fmt::Display for ScalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KindMismatch { expected, received } => {
                write!(f, "scalar kind mismatch: expected {expected}, received {received}")
            }
            Self::OutOfRange { target } => write!(f, "value out of range for `{target}`"),
            Self::ReadOnly { target } => write!(f, "`{target}` cannot be assigned at runtime"),
        }
    }
}

impl error::Error for ScalarError {}

// -----------------------------------------------------------------------------
// Scalar trait

/// Type-erased access to a leaf value.
///
/// ```
/// use structof_reflect::{info::ScalarKind, ops::{Scalar, ScalarError, ScalarRef}};
///
/// let mut value = 0_i8;
/// value.set_scalar(ScalarRef::Int(-5)).unwrap();
/// assert_eq!(value, -5);
///
/// assert!(matches!(
///     value.set_scalar(ScalarRef::Int(1000)),
///     Err(ScalarError::OutOfRange { .. })
/// ));
/// assert_eq!(
///     value.set_scalar(ScalarRef::Bool(true)),
///     Err(ScalarError::KindMismatch { expected: ScalarKind::Int, received: ScalarKind::Bool })
/// );
/// ```
pub trait Scalar: Reflect {
    /// Returns a widened view of the value.
    fn scalar(&self) -> ScalarRef<'_>;

    /// Stores `value`, converting within the same [`ScalarKind`].
    fn set_scalar(&mut self, value: ScalarRef<'_>) -> Result<(), ScalarError>;
}
