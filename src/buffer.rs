use alloc::vec::Vec;

use tracing::debug;

use crate::keys::encode;
use crate::status::SortError;

/// Scratch memory for sorting: two slots of `u32` words of equal capacity, reusable across sorts.
///
/// A workspace can be given a ceiling on the number of words per slot. Requests above the ceiling
/// fail the same way an exhausted allocator does.
#[derive(Debug)]
pub struct Workspace {
    slots: [Vec<u32>; 2],
    limit: usize,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create an empty workspace without a ceiling. Does not allocate.
    pub const fn new() -> Self {
        Self::with_limit(usize::MAX)
    }

    /// Create an empty workspace that refuses to hold more than `words` words per slot.
    pub const fn with_limit(words: usize) -> Self {
        Self { slots: [Vec::new(), Vec::new()], limit: words }
    }

    /// Return the number of words each slot can hold without reallocating.
    pub fn capacity(&self) -> usize {
        let [a, b] = &self.slots;
        a.capacity().min(b.capacity())
    }

    /// Ensure both slots can hold `n` words.
    ///
    /// On failure, memory acquired by this call is released and the previously held slots are
    /// kept as they were.
    pub fn reserve(&mut self, n: usize) -> Result<(), SortError> {
        if n > self.limit {
            debug!(words = n, limit = self.limit, "workspace ceiling exceeded");
            return Err(SortError::AllocationFailure);
        }
        if self.capacity() >= n {
            return Ok(());
        }

        // Acquire both slots before giving up the old ones; `front` drops if `back` fails
        let front = acquire(n)?;
        let back = acquire(n)?;
        self.slots = [front, back];
        Ok(())
    }

    /// Free both slots.
    pub fn release(&mut self) {
        self.slots = [Vec::new(), Vec::new()];
    }

    /// Fill the slots with the encoded `keys` and return them as a [`DoubleBuffer`] whose front
    /// holds the data. Assumes [`Workspace::reserve`] succeeded for `keys.len()`.
    pub fn load(&mut self, keys: &[i32]) -> DoubleBuffer<'_> {
        let [front, back] = &mut self.slots;
        front.clear();
        front.extend(keys.iter().map(|&k| encode(k)));
        back.clear();
        back.resize(keys.len(), 0);
        DoubleBuffer::new([front.as_mut_slice(), back.as_mut_slice()])
    }
}

fn acquire(n: usize) -> Result<Vec<u32>, SortError> {
    let mut slot = Vec::new();
    slot.try_reserve_exact(n).map_err(|_| {
        debug!(words = n, "working buffer allocation failed");
        SortError::AllocationFailure
    })?;
    Ok(slot)
}

/// Which of the two slots holds the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The first slot holds the data.
    First,
    /// The second slot holds the data.
    Second,
}

impl Role {
    /// Return the other role.
    pub const fn flip(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Two equal-length slots that alternate as source and destination of a pass.
pub struct DoubleBuffer<'a> {
    slots: [&'a mut [u32]; 2],
    front: Role,
}

impl<'a> DoubleBuffer<'a> {
    /// Wrap `slots`, with the first slot holding the data.
    pub fn new(slots: [&'a mut [u32]; 2]) -> Self {
        debug_assert_eq!(slots[0].len(), slots[1].len());
        Self { slots, front: Role::First }
    }

    /// Return the role of the slot currently holding the data.
    pub fn role(&self) -> Role {
        self.front
    }

    /// Return the data.
    pub fn front(&self) -> &[u32] {
        match self.front {
            Role::First => &*self.slots[0],
            Role::Second => &*self.slots[1],
        }
    }

    /// Run `pass` from the front slot into the back slot, then make the back slot the front.
    pub fn pass(&mut self, pass: impl FnOnce(&[u32], &mut [u32])) {
        let [a, b] = &mut self.slots;
        match self.front {
            Role::First => pass(a, b),
            Role::Second => pass(b, a),
        }
        self.front = self.front.flip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_refuses_large_requests() {
        let mut ws = Workspace::with_limit(4);
        assert_eq!(ws.reserve(4), Ok(()));
        assert!(ws.capacity() >= 4);
        assert_eq!(ws.reserve(5), Err(SortError::AllocationFailure));
        assert!(ws.capacity() >= 4);
    }

    #[test]
    fn impossible_request_fails_without_panicking() {
        let mut ws = Workspace::new();
        assert_eq!(ws.reserve(usize::MAX), Err(SortError::AllocationFailure));
        assert_eq!(ws.reserve(isize::MAX as usize / 2), Err(SortError::AllocationFailure));
        assert_eq!(ws.capacity(), 0);
    }

    #[test]
    fn failed_request_keeps_previous_slots() {
        let mut ws = Workspace::new();
        ws.reserve(16).unwrap();
        let before = ws.capacity();
        assert!(ws.reserve(usize::MAX).is_err());
        assert_eq!(ws.capacity(), before);
    }

    #[test]
    fn release_frees_slots() {
        let mut ws = Workspace::new();
        ws.reserve(8).unwrap();
        ws.release();
        assert_eq!(ws.capacity(), 0);
    }

    #[test]
    fn load_encodes_into_front() {
        let mut ws = Workspace::new();
        ws.reserve(3).unwrap();
        let buffers = ws.load(&[i32::MIN, 0, i32::MAX]);
        assert_eq!(buffers.role(), Role::First);
        assert_eq!(buffers.front(), &[0, 1 << 31, u32::MAX]);
    }

    #[test]
    fn roles_alternate_each_pass() {
        let [mut a, mut b] = [[1u32, 2, 3], [0; 3]];
        let mut buffers = DoubleBuffer::new([&mut a[..], &mut b[..]]);

        let roles: Vec<_> = (0..4)
            .map(|i| {
                buffers.pass(|src, dst| {
                    for (d, s) in dst.iter_mut().zip(src) {
                        *d = s + i;
                    }
                });
                buffers.role()
            })
            .collect();

        assert_eq!(roles, [Role::Second, Role::First, Role::Second, Role::First]);
        assert_eq!(buffers.front(), &[7, 8, 9]);
    }
}
