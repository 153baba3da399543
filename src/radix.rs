use crate::buffer::{Role, Workspace};
use crate::keys::decode;
use crate::plane::{scatter, PLANES};
use crate::status::SortError;

/// Sort `v` with one stable counting pass per byte plane, least significant first, using `ws` for
/// the two working buffers. `v` is only written after every buffer has been acquired.
///
/// Cost: `O(PLANES * n)` moves and `O(n)` extra words.
pub fn sort_full(v: &mut [i32], ws: &mut Workspace) -> Result<(), SortError> {
    ws.reserve(v.len())?;

    let mut buffers = ws.load(v);
    for plane in 0..PLANES {
        buffers.pass(|src, dst| scatter(src, dst, plane));
    }

    // An even number of passes brings the data back to the slot it started in
    debug_assert_eq!(buffers.role(), Role::First);
    for (key, &word) in v.iter_mut().zip(buffers.front()) {
        *key = decode(word);
    }
    Ok(())
}
