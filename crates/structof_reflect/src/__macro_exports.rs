//! Items referenced by `#[derive(Reflect)]` output. Not public API.

#[doc(hidden)]
pub mod macro_utils {
    pub use alloc::borrow::ToOwned;
    pub use alloc::boxed::Box;
    pub use alloc::string::{String, ToString};

    pub use crate::impls::concat as __concat;
}
