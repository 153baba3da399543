#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

//! planesort is a sorting library for `i32` slices. It is a least-significant-digit radix sort:
//! stable, `O(n)` time, and `O(n)` extra space. The following interface is provided:
//!
//! | Family              | Heap allocation (words)      |
//! |---------------------|------------------------------|
//! | [`sort`]            | `2 * len`, freed on return   |
//! | [`sort_with`]       | given ([`Workspace`], reused) |
//!
//! [`sort_slice`] sorts a whole slice. Every function reports the outcome as a
//! `Result<(), SortError>`, which converts into the numeric [`SortStatus`] codes and their
//! [`describe`] strings.
//!
//! Keys are mapped to `u32` words by flipping the sign bit, sorted with one counting pass per
//! byte plane (four in total), and mapped back. A request is checked and its working memory
//! acquired before the caller's slice is touched, so an error always leaves the slice as it was.
//!
//! ```
//! let mut v = [-15, 42, 0, -8, 23, -4, 16, -20, 31];
//! planesort::sort_slice(&mut v).unwrap();
//! assert_eq!(v, [-20, -15, -8, -4, 0, 16, 23, 31, 42]);
//! ```

extern crate alloc;

mod radix;
mod status;

#[cfg(not(feature = "internal"))]
mod buffer;
#[cfg(not(feature = "internal"))]
mod keys;
#[cfg(not(feature = "internal"))]
mod plane;

#[cfg(feature = "internal")]
/// Module that exposes the working buffers and their role flag.
pub mod buffer;
#[cfg(feature = "internal")]
/// Module that exposes the key transform.
pub mod keys;
#[cfg(feature = "internal")]
/// Module that exposes the per-plane counting pass.
pub mod plane;

pub use buffer::Workspace;
pub use status::{describe, SortError, SortStatus};

use tracing::debug;

/// Sort the first `len` elements of `v` in non-decreasing order.
///
/// Fails with [`SortError::NullInput`] if `v` is `None`, and with [`SortError::InvalidSize`] if
/// `len` is zero or larger than `v`. A single element is returned as is without allocating.
///
/// ```
/// use planesort::{sort, SortError};
///
/// let mut v = [64, 34, 25, 12, 22, 11, 90];
/// assert_eq!(sort(Some(&mut v[..]), 7), Ok(()));
/// assert_eq!(v, [11, 12, 22, 25, 34, 64, 90]);
///
/// assert_eq!(sort(None, 5), Err(SortError::NullInput));
/// ```
pub fn sort(v: Option<&mut [i32]>, len: usize) -> Result<(), SortError> {
    sort_with(v, len, &mut Workspace::new())
}

/// Sort the whole of `v`. See [`sort`].
pub fn sort_slice(v: &mut [i32]) -> Result<(), SortError> {
    let len = v.len();
    sort(Some(v), len)
}

/// Sort the first `len` elements of `v` using the buffers of `ws`, growing them if needed. See
/// [`sort`].
pub fn sort_with(v: Option<&mut [i32]>, len: usize, ws: &mut Workspace) -> Result<(), SortError> {
    let Some(v) = v else {
        debug!(len, "rejecting absent input");
        return Err(SortError::NullInput);
    };

    let available = v.len();
    let Some(v) = v.get_mut(..len).filter(|v| !v.is_empty()) else {
        debug!(len, available, "rejecting invalid length");
        return Err(SortError::InvalidSize);
    };

    // A single element is already sorted
    if v.len() == 1 {
        return Ok(());
    }

    radix::sort_full(v, ws)
}
