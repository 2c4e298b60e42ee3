use std::sync::mpsc::{Sender, SyncSender};

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, impl_generic_type_path};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};

macro_rules! impl_reflect_for_sender {
    ($ident:ident) => {
        impl_generic_type_path!("std::sync::mpsc", $ident<T>);

        impl<T: TypePath + Send> Typed for $ident<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl<T: TypePath + Send> Reflect for $ident<T> {
            crate::reflection::impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn set_zero(&mut self) -> bool {
                false
            }
        }
    };
}

impl_reflect_for_sender!(Sender);
impl_reflect_for_sender!(SyncSender);
