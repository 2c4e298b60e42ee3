// -----------------------------------------------------------------------------
// Modules

mod struct_kind;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use trait_reflect::impl_trait_reflect;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;

pub(crate) use struct_kind::impl_struct;
