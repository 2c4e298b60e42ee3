use alloc::sync::Arc;
use std::sync::{OnceLock, PoisonError, RwLock};

use structof_reflect::info::TypeInfo;
use structof_utils::TypeIdMap;

use super::Encoder;

type Slot = Arc<OnceLock<Arc<Encoder>>>;

static ENCODER_CACHE: RwLock<TypeIdMap<Slot>> = RwLock::new(TypeIdMap::new());

/// Returns the encoder of the type `info`, building it on first use.
///
/// Each type's encoder is built at most once per process. A request for a
/// type whose encoder is still being built, by this thread or another, gets
/// an [`Encoder::Forward`] that waits for it when used.
pub fn type_encoder(info: &'static TypeInfo) -> Arc<Encoder> {
    let type_id = info.ty_id();

    let cached = ENCODER_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&type_id)
        .cloned();
    if let Some(slot) = cached {
        return resolve(slot, info);
    }

    let slot = {
        let mut cache = ENCODER_CACHE.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = cache.get(&type_id) {
            let slot = slot.clone();
            drop(cache);
            return resolve(slot, info);
        }
        let slot: Slot = Arc::new(OnceLock::new());
        cache.insert(type_id, slot.clone());
        slot
    };

    // No lock is held while building, element encoders come from this cache.
    let encoder = Arc::new(Encoder::new(info));
    log::trace!("built {:?} encoder for `{}`", info.kind(), info.type_path());

    slot.get_or_init(|| encoder).clone()
}

fn resolve(slot: Slot, info: &'static TypeInfo) -> Arc<Encoder> {
    match slot.get() {
        Some(encoder) => encoder.clone(),
        None => {
            log::debug!("forwarding to the encoder of `{}` under construction", info.type_path());
            Arc::new(Encoder::Forward(slot))
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use std::sync::OnceLock;
    use std::thread;

    use structof_reflect::Reflect;
    use structof_reflect::info::Typed;

    use super::type_encoder;
    use crate::encoder::Encoder;

    #[derive(Reflect)]
    pub struct Tree {
        pub label: u8,
        pub children: Vec<Tree>,
        pub parent: OnceLock<Arc<Tree>>,
    }

    #[test]
    fn recursive_type_forwards_to_itself() {
        let encoder = type_encoder(Tree::type_info());
        let Encoder::Struct(record) = &*encoder else {
            panic!("expected a struct encoder");
        };

        // `children` reached the `Tree` slot while it was unset.
        let children = record.fields().find("children").unwrap().encoder();
        let Encoder::List(item) = &**children else {
            panic!("expected a list encoder");
        };
        let Encoder::Forward(slot) = &**item else {
            panic!("expected a forwarding encoder");
        };
        assert!(Arc::ptr_eq(slot.get().unwrap(), &encoder));
    }

    #[derive(Reflect)]
    pub struct Concurrent {
        pub a: Vec<u8>,
        pub b: Option<Arc<Concurrent>>,
    }

    #[test]
    fn concurrent_first_use_builds_once() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| type_encoder(Concurrent::type_info())))
            .collect();
        let encoders: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let first = type_encoder(Concurrent::type_info());
        assert!(matches!(*first, Encoder::Struct(_)));
        // Late callers may have been handed a forward, which leads to the same encoder.
        for encoder in encoders {
            match &*encoder {
                Encoder::Forward(slot) => assert!(Arc::ptr_eq(slot.wait(), &first)),
                _ => assert!(Arc::ptr_eq(&encoder, &first)),
            }
        }
    }
}
