use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock};

use structof_reflect::info::TypeInfo;
use structof_utils::TypeIdMap;

use super::{StructFields, type_fields};

static FIELD_CACHE: RwLock<TypeIdMap<Arc<StructFields>>> = RwLock::new(TypeIdMap::new());

/// Like [`type_fields`], but computed at most once per type per process.
///
/// Concurrent first calls may both compute the list, only one is kept and
/// every caller receives that one.
pub fn cached_type_fields(info: &'static TypeInfo) -> Arc<StructFields> {
    let type_id = info.ty_id();

    if let Some(fields) = FIELD_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&type_id)
    {
        return fields.clone();
    }

    // Computed without the lock, resolving may take a while.
    let fields = Arc::new(type_fields(info));

    FIELD_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert(type_id, || fields)
        .clone()
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use std::thread;

    use structof_reflect::Reflect;
    use structof_reflect::info::Typed;

    use super::cached_type_fields;

    #[derive(Reflect)]
    pub struct Shared {
        pub a: u8,
        #[structof("bee")]
        pub b: u8,
    }

    #[test]
    fn same_list_for_every_caller() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| cached_type_fields(Shared::type_info())))
            .collect();
        let lists: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let first = cached_type_fields(Shared::type_info());
        assert_eq!(first.names().collect::<Vec<_>>(), ["a", "bee"]);
        assert!(lists.iter().all(|list| Arc::ptr_eq(list, &first)));
    }
}
