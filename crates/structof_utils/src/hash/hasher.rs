//! Provide `FixedHasher` and `NoOpHasher`.
//!
//! `FixedHasher` is a `foldhash` hasher with a fixed seed, so identity sets
//! hash the same way in every process.
//!
//! `NoOpHasher` passes a single `u64` straight through. [`TypeId`] already
//! carries a high quality hash, so type caches use it.
//!
//! [`TypeId`]: core::any::TypeId

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5EED_57C7_0F0F_1A6B);

/// A hasher whose results only depend on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`], created through
/// [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state with a fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use structof_utils::hash::FixedHashState;
///
/// let hash = |v: (usize, usize)| {
///     let mut hasher = FixedHashState.build_hasher();
///     v.hash(&mut hasher);
///     hasher.finish()
/// };
///
/// assert_eq!(hash((0x1000, 3)), hash((0x1000, 3)));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher that stores the last `u64` written.
///
/// Other writes fold their bytes into the state in reverse order, so
/// `write_u64(n)` and `write_u32(n as u32)` agree when called once.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Hash state producing [`NoOpHasher`].
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use structof_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// 7_u64.hash(&mut hasher);
///
/// assert_eq!(hasher.finish(), 7);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

#[cfg(test)]
mod tests {
    use core::hash::{BuildHasher, Hasher};

    use super::{FixedHashState, NoOpHashState};

    #[test]
    fn noop_small_writes_match_u64() {
        let mut a = NoOpHashState.build_hasher();
        a.write_u32(1234);
        let mut b = NoOpHashState.build_hasher();
        b.write_u64(1234);
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn fixed_state_is_stable() {
        let mut a = FixedHashState.build_hasher();
        a.write_usize(42);
        let mut b = FixedHashState.build_hasher();
        b.write_usize(42);
        assert_eq!(a.finish(), b.finish());
    }
}
