#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use structof_encode as encode;
pub use structof_reflect as reflect;
pub use structof_utils as utils;

pub use structof_encode::{
    EncodeError, LookupError, Map, SetError, Value, field_names, fill_map, is_struct, is_zero,
    make_map, make_slice, type_name,
};
pub use structof_encode::navigate::{Field, FieldMut, Struct};
pub use structof_reflect::Reflect;
