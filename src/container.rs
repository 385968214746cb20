// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Growable homogeneous storage with explicit capacity management.
//!
//! A [`Container`] keeps three numbers: how many elements are logically
//! present (`count`), how many slots are reserved (`capacity`), and the size of
//! one element. Capacity starts at [`INIT_CAPACITY`] and doubles whenever a
//! requested count reaches it. It never shrinks.
//!
//! # Addressing
//!
//! [`Container::position`] clamps instead of failing: position `0` is always
//! the base, anything at or past `count` lands on the last element. Writes go
//! the other way: [`Container::copy`] is a no-op past the end. The text layer
//! depends on both rules when it shifts tails around, so they stay asymmetric.
//!
//! # Slots
//!
//! Slots past `count` that were touched before (a text terminator, a shrunk
//! tail) stay materialised, which is what lets [`Text`](crate::Text) keep its
//! terminator just past the logical end. Growing `count` over such slots
//! resets them to `T::default()`.

use log::trace;

use crate::contracts::check_count_within_capacity;
use crate::error::ContainerError;

/// Capacity reserved by the first allocation; doubled from there on.
pub const INIT_CAPACITY: usize = 128;

/// An owning, growable region of `T`.
///
/// Mutating operations take `&mut self` and hand the same value back, so calls
/// chain with `?`. Growth may move the backing memory; the exclusive borrow is
/// what keeps stale references from surviving it.
pub struct Container<T> {
    slots: Vec<T>,
    capacity: usize,
    count: usize,
}

impl<T: Clone> Clone for Container<T> {
    /// The copy reserves the same number of slots as the original, so later
    /// growth goes through the fallible path.
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.capacity);
        slots.extend_from_slice(&self.slots);
        Self {
            slots,
            capacity: self.capacity,
            count: self.count,
        }
    }
}

impl<T> Default for Container<T> {
    /// A container with no reserved capacity. The first growth reserves
    /// [`INIT_CAPACITY`].
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            capacity: 0,
            count: 0,
        }
    }
}

impl<T> Container<T> {
    /// Size in bytes of one element.
    #[inline]
    pub fn unit_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Number of logical elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of reserved slots, always `>= count()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.count]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.count]
    }

    /// Every slot that holds a value, including the ones past `count()` kept
    /// from earlier growth.
    pub fn materialised(&self) -> &[T] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Slot index of element `pos`, clamped.
    ///
    /// `0` is always the base. `pos >= count()` maps to the last element
    /// (`count() - 1`); an empty container maps everything to the base.
    #[inline]
    pub fn position(&self, pos: usize) -> usize {
        if pos == 0 {
            return 0;
        }
        if pos >= self.count {
            return self.count.saturating_sub(1);
        }
        pos
    }

    /// Reference to the slot [`position`](Self::position) selects.
    ///
    /// `None` only when that slot was never materialised (an empty container
    /// that has not been grown).
    pub fn at(&self, pos: usize) -> Option<&T> {
        self.slots.get(self.position(pos))
    }

    /// Release the region. Dropping the value does the same.
    pub fn free(self) {
        trace!(
            "freeing container of {} x {} bytes (capacity {})",
            self.count,
            self.unit_size(),
            self.capacity
        );
    }

    /// Append `item` in a freshly counted slot.
    ///
    /// Unlike [`extend`](Self::extend) this never builds a default element
    /// first, so it works for element types without a cheap `Default`.
    pub fn push(&mut self, item: T) -> Result<&mut Self, ContainerError> {
        let count = self
            .count
            .checked_add(1)
            .ok_or(ContainerError::CapacityOverflow)?;
        self.reserve_for(count)?;

        if self.count < self.slots.len() {
            self.slots[self.count] = item;
        } else {
            self.slots.push(item);
        }
        self.count = count;

        check_count_within_capacity(self.count, self.capacity, self.slots.len());
        Ok(self)
    }

    /// Make room for `count` elements, doubling capacity as many times as
    /// needed when `count >= capacity`.
    ///
    /// The backing storage is also brought up to the logical capacity when it
    /// fell short of it, so no later write has to allocate.
    fn reserve_for(&mut self, count: usize) -> Result<(), ContainerError> {
        if count < self.capacity && self.slots.capacity() >= self.capacity {
            return Ok(());
        }

        let mut capacity = if self.capacity == 0 {
            INIT_CAPACITY
        } else {
            self.capacity
        };
        while count >= capacity {
            capacity = capacity
                .checked_mul(2)
                .ok_or(ContainerError::CapacityOverflow)?;
        }

        self.slots
            .try_reserve_exact(capacity - self.slots.len())
            .map_err(|_| ContainerError::Alloc {
                requested: capacity,
            })?;

        if capacity != self.capacity {
            trace!(
                "container grew from {} to {} slots ({} bytes each)",
                self.capacity,
                capacity,
                self.unit_size()
            );
        }
        self.capacity = capacity;
        Ok(())
    }
}

impl<T: Clone> Container<T> {
    /// Write `items` starting at `pos`.
    ///
    /// No-op when `pos >= count()`. Items that would land past the end are
    /// dropped, so at most `count() - pos` are written.
    pub fn copy(&mut self, pos: usize, items: &[T]) {
        if items.is_empty() || pos >= self.count {
            return;
        }

        let len = items.len().min(self.count - pos);
        self.slots[pos..pos + len].clone_from_slice(&items[..len]);
    }

    /// Write one element at `pos`; same bounds rule as [`copy`](Self::copy).
    pub fn set(&mut self, pos: usize, item: T) {
        self.copy(pos, std::slice::from_ref(&item));
    }

    /// Clone the element [`position`](Self::position) selects.
    pub fn get(&self, pos: usize) -> Option<T> {
        self.at(pos).cloned()
    }

    /// Copy `len` elements read from `position(src)` onwards to `pos`.
    ///
    /// Source and destination may overlap in either direction: the source run
    /// is staged in a temporary buffer before anything is written. The
    /// destination follows [`copy`](Self::copy); the source start follows
    /// [`position`](Self::position). The staging buffer is the only
    /// allocation, and its failure is the only error.
    pub fn copy_within(&mut self, pos: usize, src: usize, len: usize) -> Result<(), ContainerError> {
        if len == 0 || pos >= self.count {
            return Ok(());
        }

        let len = len.min(self.count - pos);
        let start = self.position(src);
        // a clamped source can run past the materialised slots
        let end = start.saturating_add(len).min(self.slots.len());

        let mut staged = Vec::new();
        staged
            .try_reserve_exact(end - start)
            .map_err(|_| ContainerError::Alloc {
                requested: end - start,
            })?;
        staged.extend_from_slice(&self.slots[start..end]);

        self.copy(pos, &staged);
        Ok(())
    }
}

impl<T: Clone + Default> Container<T> {
    /// A container of `count` default (zero) elements.
    pub fn new_len(count: usize) -> Result<Self, ContainerError> {
        let mut container = Self::default();
        container.resize(count)?;
        Ok(container)
    }

    /// An empty container with [`INIT_CAPACITY`] reserved slots.
    pub fn new() -> Result<Self, ContainerError> {
        Self::new_len(0)
    }

    /// Set the logical count.
    ///
    /// Grows capacity first when `count >= capacity()`. Elements exposed by
    /// growing are reset to `T::default()`; shrinking keeps the capacity and
    /// leaves the slots past the new end in place.
    pub fn resize(&mut self, count: usize) -> Result<&mut Self, ContainerError> {
        self.reserve_for(count)?;

        if count > self.count {
            let reused = count.min(self.slots.len());
            self.slots[self.count..reused].fill(T::default());
            if count > self.slots.len() {
                self.slots.resize(count, T::default());
            }
        }
        self.count = count;

        check_count_within_capacity(self.count, self.capacity, self.slots.len());
        Ok(self)
    }

    /// `resize(count() + delta)`.
    pub fn extend(&mut self, delta: usize) -> Result<&mut Self, ContainerError> {
        let count = self
            .count
            .checked_add(delta)
            .ok_or(ContainerError::CapacityOverflow)?;
        self.resize(count)
    }
}

impl<T> std::ops::Deref for Container<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Container<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Container<T> {}

impl<T: PartialEq> PartialEq<[T]> for Container<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Container<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
