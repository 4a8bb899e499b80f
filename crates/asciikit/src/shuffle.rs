//! Fisher–Yates shuffling over a caller-supplied random source.

use alloc::vec::Vec;

/// Uniform random integers over an inclusive range starting at zero.
///
/// The crate owns no generator state; callers bring their own source and
/// are responsible for synchronizing it if it is shared across threads.
/// Any `FnMut(usize) -> usize` closure qualifies.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `0..=upper`.
    fn pick(&mut self, upper: usize) -> usize;
}

impl<F: FnMut(usize) -> usize> RandomSource for F {
    fn pick(&mut self, upper: usize) -> usize {
        self(upper)
    }
}

/// Returns a Fisher–Yates permutation of `s`: for each `i` from `len - 1`
/// down to `1`, the byte at `i` is swapped with one at a uniform index in
/// `[0, i]`.
#[must_use]
pub fn shuffle(s: &[u8], random: &mut impl RandomSource) -> Vec<u8> {
    let mut out = s.to_vec();
    for i in (1..out.len()).rev() {
        let j = random.pick(i);
        debug_assert!(j <= i);
        out.swap(i, j);
    }
    out
}
