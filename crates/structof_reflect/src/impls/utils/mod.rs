mod common;
pub use common::*;

mod type_path;
pub(crate) use type_path::impl_generic_type_path;

mod hash_map;
pub(crate) use hash_map::impl_reflect_for_hashmap;
