use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};

macro_rules! impl_reflect_for_fn {
    ($($arg:ident),*) => {
        impl<$($arg: TypePath,)* R: TypePath> TypePath for fn($($arg),*) -> R {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let args: &[&str] = &[$($arg::type_path()),*];
                    concat(&["fn(", &args.join(", "), ") -> ", R::type_path()])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let args: &[&str] = &[$($arg::type_name()),*];
                    concat(&["fn(", &args.join(", "), ") -> ", R::type_name()])
                })
            }

            #[inline]
            fn type_ident() -> &'static str {
                "fn"
            }
        }

        impl<$($arg: TypePath,)* R: TypePath> Typed for fn($($arg),*) -> R {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl<$($arg: TypePath,)* R: TypePath> Reflect for fn($($arg),*) -> R {
            crate::reflection::impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn set_zero(&mut self) -> bool {
                false
            }
        }
    };
}

impl_reflect_for_fn!();
impl_reflect_for_fn!(A);
impl_reflect_for_fn!(A, B);

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn function_pointer_names() {
        assert_eq!(<fn(u8, bool) -> String>::type_name(), "fn(u8, bool) -> String");
        assert_eq!(<fn() -> u8>::type_info().kind(), ReflectKind::Opaque);
    }
}
