// Since the front can sit anywhere in the storage, every logical offset
// has to be projected onto a physical slot modulo the capacity.

/// Maps a logical `offset` from the `front` slot onto its physical slot.
#[inline]
pub(crate) fn project(front: usize, offset: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "projected an index on a queue without slots");
    (front + offset) % capacity
}

/// Moves `slot` forward by `offset`, returns the new slot and whether it ran
/// past the end of the storage.
#[inline]
pub(crate) fn wrap_add(slot: usize, offset: usize, capacity: usize) -> (usize, bool) {
    if capacity == 0 {
        return (0, false);
    }
    let next = slot + offset;
    if next >= capacity {
        (next % capacity, true)
    } else {
        (next, false)
    }
}

/// Moves `slot` backwards by `offset`, returns the new slot and whether it ran
/// before the start of the storage.
#[inline]
pub(crate) fn wrap_sub(slot: usize, offset: usize, capacity: usize) -> (usize, bool) {
    if capacity == 0 {
        return (0, false);
    }
    if offset > slot {
        ((slot + capacity - offset % capacity) % capacity, true)
    } else {
        (slot - offset, false)
    }
}
