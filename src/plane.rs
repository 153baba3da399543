use tracing::trace;

/// Bits per digit.
pub const RADIX_BITS: u32 = 8;

/// Number of distinct digit values, i.e. histogram buckets per pass.
pub const RADIX: usize = 1 << RADIX_BITS;

/// Number of byte planes in a 32-bit word, i.e. passes per sort.
pub const PLANES: u32 = u32::BITS / RADIX_BITS;

/// Return the digit of `word` in byte plane `plane`, where plane 0 is the least significant.
#[inline(always)]
pub const fn digit(word: u32, plane: u32) -> usize {
    ((word >> (plane * RADIX_BITS)) & 0xFF) as usize
}

/// Count the digits of `src` in `plane` and accumulate the counts, so that entry `d` is one past
/// the last slot of bucket `d`.
///
/// Cost: `O(n + RADIX)` reads.
pub fn bucket_ends(src: &[u32], plane: u32) -> [usize; RADIX] {
    let mut ends = [0usize; RADIX];
    for &word in src {
        ends[digit(word, plane)] += 1;
    }

    let mut sum = 0;
    for end in ends.iter_mut() {
        sum += *end;
        *end = sum;
    }
    ends
}

/// Stable counting sort of `src` into `dst` by the digit in `plane`. Both slices have equal length.
///
/// Cost: `O(n + RADIX)` reads and `O(n)` writes.
pub fn scatter(src: &[u32], dst: &mut [u32], plane: u32) {
    debug_assert_eq!(src.len(), dst.len());
    debug_assert!(plane < PLANES);
    trace!(plane, len = src.len(), "counting pass");

    let mut ends = bucket_ends(src, plane);

    // Scanning backwards and filling each bucket from its top keeps equal digits in source order
    for &word in src.iter().rev() {
        let end = &mut ends[digit(word, plane)];
        *end -= 1;
        dst[*end] = word;
    }
}
