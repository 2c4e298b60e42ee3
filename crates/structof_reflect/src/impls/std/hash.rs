use std::collections::HashMap;

use crate::impls::impl_reflect_for_hashmap;

impl_reflect_for_hashmap!("std::collections::hash_map", HashMap<K, V>);

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::Map;

    #[test]
    fn hash_map_entries() {
        let map = HashMap::from([(String::from("k"), 1_u32)]);
        assert_eq!(<HashMap<String, u32>>::type_info().kind(), ReflectKind::Map);
        assert_eq!(<HashMap<String, u32>>::type_name(), "HashMap<String, u32>");

        let entries: alloc::vec::Vec<_> = Map::iter(&map)
            .map(|(k, v)| (k.downcast_ref::<String>().cloned(), v.downcast_ref::<u32>().copied()))
            .collect();
        assert_eq!(entries, [(Some(String::from("k")), Some(1))]);
    }
}
