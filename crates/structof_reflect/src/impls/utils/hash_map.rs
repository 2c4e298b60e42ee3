/// Implements reflection for a hash map type with a fixed hasher.
///
/// `$module` is the module path reported by `TypePath`, and `$ident<K, V>`
/// must name the map type in the calling scope.
macro_rules! impl_reflect_for_hashmap {
    ($module:literal, $ident:ident < $key:ident, $value:ident >) => {
        $crate::impls::impl_generic_type_path!($module, $ident<$key, $value>);

        impl<$key, $value> $crate::info::Typed for $ident<$key, $value>
        where
            $key: $crate::Reflect + $crate::info::Typed + ::core::cmp::Eq + ::core::hash::Hash,
            $value: $crate::Reflect + $crate::info::Typed,
        {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::GenericTypeInfoCell =
                    $crate::impls::GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::info::TypeInfo::Map($crate::info::MapInfo::new::<Self, $key, $value>())
                })
            }
        }

        impl<$key, $value> $crate::Reflect for $ident<$key, $value>
        where
            $key: $crate::Reflect + $crate::info::Typed + ::core::cmp::Eq + ::core::hash::Hash,
            $value: $crate::Reflect + $crate::info::Typed,
        {
            $crate::reflection::impl_reflect_cast_fn!(Map);

            #[inline]
            fn set_zero(&mut self) -> bool {
                self.clear();
                true
            }
        }

        impl<$key, $value> $crate::ops::Map for $ident<$key, $value>
        where
            $key: $crate::Reflect + $crate::info::Typed + ::core::cmp::Eq + ::core::hash::Hash,
            $value: $crate::Reflect + $crate::info::Typed,
        {
            #[inline]
            fn len(&self) -> usize {
                $ident::len(self)
            }

            fn iter(&self) -> $crate::ops::MapEntryIter<'_> {
                ::alloc::boxed::Box::new(
                    $ident::iter(self).map(|(k, v)| {
                        ($crate::Reflect::as_reflect(k), $crate::Reflect::as_reflect(v))
                    }),
                )
            }

            #[inline]
            fn clear(&mut self) {
                $ident::clear(self);
            }
        }
    };
}

pub(crate) use impl_reflect_for_hashmap;
