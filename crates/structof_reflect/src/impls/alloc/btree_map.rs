use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::impls::{GenericTypeInfoCell, impl_generic_type_path};
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::{Map, MapEntryIter};
use crate::Reflect;

impl_generic_type_path!("alloc::collections::btree_map", BTreeMap<K, V>);

impl<K, V> Typed for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    crate::reflection::impl_reflect_cast_fn!(Map);

    #[inline]
    fn set_zero(&mut self) -> bool {
        self.clear();
        true
    }
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: Reflect + Typed + Ord,
    V: Reflect + Typed,
{
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> MapEntryIter<'_> {
        Box::new(BTreeMap::iter(self).map(|(k, v)| (k.as_reflect(), v.as_reflect())))
    }

    #[inline]
    fn clear(&mut self) {
        BTreeMap::clear(self);
    }
}
