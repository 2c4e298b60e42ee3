use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::any::TypeId;
use core::mem;
use core::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

use bitflags::bitflags;
use structof_utils::hash::HashSet;

use crate::error::EncodeError;
use crate::value::{Map, Value};

/// Nesting depth of pointers, maps and sequences after which the encoder
/// starts recording identities to detect reference cycles.
///
/// Below this depth no bookkeeping is done.
pub const START_DETECTING_CYCLES_AFTER: usize = 100;

// -----------------------------------------------------------------------------
// EncodeOptions

bitflags! {
    /// Options passed down one encoder call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct EncodeOptions: u8 {
        /// Emit scalars and display-only records as quoted text.
        const QUOTED = 1 << 0;
        /// Write a record's members into the current accumulator.
        const INLINE = 1 << 1;
        /// Nested records become key/value pair lists instead of maps.
        const PAIRS  = 1 << 2;
    }
}

impl EncodeOptions {
    /// Options for the members of a record: only the output mode survives.
    #[inline]
    pub(crate) fn mode(self) -> Self {
        self & Self::PAIRS
    }
}

// -----------------------------------------------------------------------------
// Accumulator

/// Where converted values are written.
#[derive(Debug)]
pub(crate) enum Accumulator {
    /// Keyed mode, duplicate keys overwrite.
    Keyed(Map),
    /// Pairs mode, `key, value` appended in order.
    Pairs(Vec<Value>),
    /// A single sequence element, the key is ignored.
    Slot(Option<Value>),
}

impl Accumulator {
    /// An empty container for the output mode in `options`.
    #[inline]
    pub(crate) fn container(options: EncodeOptions) -> Self {
        if options.contains(EncodeOptions::PAIRS) {
            Self::Pairs(Vec::new())
        } else {
            Self::Keyed(Map::new())
        }
    }

    #[inline]
    pub(crate) fn slot() -> Self {
        Self::Slot(None)
    }

    pub(crate) fn put(&mut self, key: &str, value: Value) {
        match self {
            Self::Keyed(map) => {
                map.insert(key.to_string(), value);
            }
            Self::Pairs(list) => {
                list.reserve(2);
                list.push(Value::from(key));
                list.push(value);
            }
            Self::Slot(slot) => *slot = Some(value),
        }
    }

    /// Converts into a value. An unfilled slot is `Null`.
    pub(crate) fn into_value(self) -> Value {
        match self {
            Self::Keyed(map) => Value::Map(map),
            Self::Pairs(list) => Value::List(list),
            Self::Slot(slot) => slot.unwrap_or_default(),
        }
    }
}

impl Default for Accumulator {
    #[inline]
    fn default() -> Self {
        Self::Keyed(Map::new())
    }
}

// -----------------------------------------------------------------------------
// Identity

/// What a pointer, map or sequence is remembered by during cycle detection.
///
/// A pointee, a map stored at the start of it and a map reached through it
/// can share one address, so each kind is kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Identity {
    /// Pointee address, with the pointer type.
    Pointer { ty: TypeId, addr: usize },
    /// Address of the map container.
    Map(usize),
    Slice { data: usize, len: usize },
}

// -----------------------------------------------------------------------------
// EncodeState

/// The working state of one top-level conversion.
#[derive(Debug, Default)]
pub(crate) struct EncodeState {
    acc: Accumulator,
    ptr_level: usize,
    ptr_seen: HashSet<Identity>,
}

impl EncodeState {
    /// Writes `value` under `key` into the current accumulator.
    #[inline]
    pub(crate) fn put(&mut self, key: &str, value: Value) {
        self.acc.put(key, value);
    }

    /// Runs `f` with `acc` as the current accumulator and returns what it
    /// collected. The previous accumulator is restored on every exit.
    pub(crate) fn nested(
        &mut self,
        acc: Accumulator,
        f: impl FnOnce(&mut Self) -> Result<(), EncodeError>,
    ) -> Result<Value, EncodeError> {
        let outer = mem::replace(&mut self.acc, acc);
        let result = f(self);
        let inner = mem::replace(&mut self.acc, outer);
        result.map(|()| inner.into_value())
    }

    /// Runs `f` one level deeper.
    ///
    /// Past [`START_DETECTING_CYCLES_AFTER`] levels, `identity` is recorded
    /// for the duration of `f`, and finding it already recorded is an error.
    pub(crate) fn with_cycle_check(
        &mut self,
        identity: Option<Identity>,
        type_path: &str,
        f: impl FnOnce(&mut Self) -> Result<(), EncodeError>,
    ) -> Result<(), EncodeError> {
        self.ptr_level += 1;

        let mut recorded = None;
        if self.ptr_level > START_DETECTING_CYCLES_AFTER
            && let Some(identity) = identity
        {
            if !self.ptr_seen.insert(identity) {
                self.ptr_level -= 1;
                return Err(EncodeError::UnsupportedValue(format!(
                    "encountered a cycle via {type_path}"
                )));
            }
            recorded = Some(identity);
        }

        let result = f(self);

        if let Some(identity) = recorded {
            self.ptr_seen.remove(&identity);
        }
        self.ptr_level -= 1;
        result
    }

    /// Takes the collected output, leaving an empty keyed accumulator.
    #[inline]
    pub(crate) fn take_output(&mut self) -> Value {
        mem::take(&mut self.acc).into_value()
    }

    #[cfg_attr(not(all(feature = "debug", debug_assertions)), allow(dead_code))]
    #[inline]
    fn is_clean(&self) -> bool {
        self.ptr_level == 0 && self.ptr_seen.is_empty()
    }

    fn reset(&mut self, options: EncodeOptions) {
        self.acc = Accumulator::container(options);
        self.ptr_level = 0;
        self.ptr_seen.clear();
    }
}

// -----------------------------------------------------------------------------
// Pool

static POOL: Mutex<Vec<EncodeState>> = Mutex::new(Vec::new());

/// An [`EncodeState`] borrowed from the process-wide pool.
///
/// Dropping the guard clears the state and returns it, also when the
/// conversion failed or panicked.
pub(crate) struct PooledState {
    state: EncodeState,
}

impl PooledState {
    /// Takes a state from the pool, its accumulator set to the output mode
    /// in `options`.
    pub(crate) fn acquire(options: EncodeOptions) -> Self {
        let mut state = POOL
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_default();
        state.reset(options);
        Self { state }
    }
}

impl Deref for PooledState {
    type Target = EncodeState;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl DerefMut for PooledState {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.state
    }
}

impl Drop for PooledState {
    fn drop(&mut self) {
        let mut state = mem::take(&mut self.state);

        #[cfg(all(feature = "debug", debug_assertions))]
        if !state.is_clean() {
            log::error!(
                "encode state returned with depth {} and {} recorded identities",
                state.ptr_level,
                state.ptr_seen.len(),
            );
        }

        state.reset(EncodeOptions::empty());
        POOL.lock().unwrap_or_else(PoisonError::into_inner).push(state);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use core::any::TypeId;

    use super::{
        Accumulator, EncodeOptions, EncodeState, Identity, PooledState,
        START_DETECTING_CYCLES_AFTER,
    };
    use crate::error::EncodeError;
    use crate::value::Value;

    #[test]
    fn keyed_overwrites_pairs_append() {
        let mut keyed = Accumulator::container(EncodeOptions::empty());
        keyed.put("a", Value::from(1_u8));
        keyed.put("a", Value::from(2_u8));
        let Value::Map(map) = keyed.into_value() else {
            panic!("expected a map");
        };
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], Value::Uint(2));

        let mut pairs = Accumulator::container(EncodeOptions::PAIRS);
        pairs.put("a", Value::from(1_u8));
        pairs.put("a", Value::from(2_u8));
        assert_eq!(
            pairs.into_value(),
            Value::List(vec!["a".into(), 1_u8.into(), "a".into(), 2_u8.into()]),
        );

        assert_eq!(Accumulator::slot().into_value(), Value::Null);
    }

    #[test]
    fn nested_restores_outer_accumulator() {
        let mut state = EncodeState::default();
        state.put("outer", Value::Bool(true));

        let inner = state
            .nested(Accumulator::slot(), |state| {
                state.put("ignored", Value::from("x"));
                Ok(())
            })
            .unwrap();
        assert_eq!(inner, Value::from("x"));

        let failed = state.nested(Accumulator::slot(), |_| {
            Err(EncodeError::UnsupportedValue("boom".into()))
        });
        assert!(failed.is_err());

        let Value::Map(map) = state.take_output() else {
            panic!("expected a map");
        };
        assert_eq!(map.len(), 1);
    }

    fn descend(state: &mut EncodeState, depth: usize, identity: Identity) -> Result<(), EncodeError> {
        if depth == 0 {
            return Ok(());
        }
        state.with_cycle_check(Some(identity), "Node", |state| {
            descend(state, depth - 1, identity)
        })
    }

    #[test]
    fn repeated_identity_fails_past_threshold() {
        let mut state = EncodeState::default();

        // Below the threshold nothing is recorded.
        descend(&mut state, START_DETECTING_CYCLES_AFTER, Identity::Map(8)).unwrap();
        assert!(state.is_clean());

        let err = descend(&mut state, START_DETECTING_CYCLES_AFTER + 2, Identity::Map(8))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "structof: unsupported value: encountered a cycle via Node",
        );
        assert!(state.is_clean());
    }

    #[test]
    fn distinct_identities_pass() {
        fn chain(state: &mut EncodeState, depth: usize) -> Result<(), EncodeError> {
            if depth == 0 {
                return Ok(());
            }
            let identity = Identity::Slice { data: depth, len: 1 };
            state.with_cycle_check(Some(identity), "Node", |state| chain(state, depth - 1))
        }

        let mut state = EncodeState::default();
        chain(&mut state, START_DETECTING_CYCLES_AFTER * 2).unwrap();
        assert!(state.is_clean());
    }

    #[test]
    fn identities_of_different_kinds_do_not_collide() {
        fn alternate(state: &mut EncodeState, depth: usize) -> Result<(), EncodeError> {
            if depth == 0 {
                return Ok(());
            }
            // A boxed map: the pointee and the map have the same address.
            let identity = if depth % 2 == 0 {
                Identity::Pointer { ty: TypeId::of::<u8>(), addr: depth / 2 }
            } else {
                Identity::Map(depth.div_ceil(2))
            };
            state.with_cycle_check(Some(identity), "Node", |state| alternate(state, depth - 1))
        }

        let mut state = EncodeState::default();
        alternate(&mut state, START_DETECTING_CYCLES_AFTER * 2).unwrap();
        assert!(state.is_clean());

        let pointer = |ty| Identity::Pointer { ty, addr: 8 };
        assert_ne!(pointer(TypeId::of::<u8>()), pointer(TypeId::of::<u16>()));
    }

    #[test]
    fn pooled_state_starts_in_requested_mode() {
        {
            let mut state = PooledState::acquire(EncodeOptions::empty());
            state.put("k", Value::Null);
        }
        let mut state = PooledState::acquire(EncodeOptions::PAIRS);
        assert_eq!(state.take_output(), Value::List(vec![]));
    }
}
