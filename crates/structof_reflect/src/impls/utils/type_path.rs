/// Implements [`TypePath`](crate::info::TypePath) for a generic type whose
/// parameters are all types.
///
/// ```ignore
/// impl_generic_type_path!("alloc::vec", Vec<T>);
/// ```
///
/// Every parameter is required to implement `TypePath`; names are built on
/// first use and stored in a [`GenericTypePathCell`](crate::impls::GenericTypePathCell).
macro_rules! impl_generic_type_path {
    ($module:literal, $ident:ident < $($param:ident),+ >) => {
        impl<$($param: $crate::info::TypePath),+> $crate::info::TypePath for $ident<$($param),+> {
            fn type_path() -> &'static str {
                static CELL: $crate::impls::GenericTypePathCell =
                    $crate::impls::GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::impls::generic_path(
                        ::core::concat!($module, "::", ::core::stringify!($ident)),
                        &[$(<$param as $crate::info::TypePath>::type_path()),+],
                    )
                })
            }

            fn type_name() -> &'static str {
                static CELL: $crate::impls::GenericTypePathCell =
                    $crate::impls::GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::impls::generic_path(
                        ::core::stringify!($ident),
                        &[$(<$param as $crate::info::TypePath>::type_name()),+],
                    )
                })
            }

            #[inline]
            fn type_ident() -> &'static str {
                ::core::stringify!($ident)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }
    };
}

pub(crate) use impl_generic_type_path;
