//! Fixed-capacity ring storage with FIFO eviction.
use crate::{error::ReplayError, BatchBase, ItemShape};
use log::trace;

/// Fixed-capacity ring storage with FIFO eviction.
///
/// The storage holds up to `max_size` items stacked in a single batch of
/// length `max_size`, plus a write cursor (`head`), a read cursor (`tail`)
/// and a fullness flag. `head` is the index at which the next item will be
/// written; `tail` is the index of the oldest still-valid item, meaningful
/// only when the buffer is non-empty.
///
/// All transitions are pure: they take `&self` and return a new value.
///
/// # Type Parameters
///
/// * `B` - Storage type of the stacked items, must implement [`BatchBase`]
#[derive(Clone, Debug)]
pub struct CircularBuffer<B: BatchBase> {
    /// Stacked storage of `max_size` item slots.
    data: B,

    /// Physical index of the next write.
    head: usize,

    /// Physical index of the oldest valid item.
    tail: usize,

    /// Whether all `max_size` slots hold valid items.
    full: bool,

    /// Number of item slots, fixed for the lifetime of the storage.
    max_size: usize,
}

impl<B: BatchBase> CircularBuffer<B> {
    /// Allocates storage for `max_size` items shaped like `item_prototype`.
    ///
    /// # Arguments
    ///
    /// * `item_prototype` - A batch of length 1 fixing the per-item shape
    /// * `max_size` - Number of item slots
    ///
    /// # Errors
    ///
    /// Fails with [`ReplayError::ZeroCapacity`] if `max_size` is zero, or
    /// [`ReplayError::NotSingleItem`] if the prototype is not a batch of
    /// length 1.
    pub fn new(item_prototype: &B, max_size: usize) -> Result<Self, ReplayError> {
        if max_size == 0 {
            return Err(ReplayError::ZeroCapacity);
        }
        if item_prototype.len() != 1 {
            return Err(ReplayError::NotSingleItem(item_prototype.len()));
        }

        trace!(
            "allocating circular storage of {} slots, item shape {}",
            max_size,
            item_prototype.item_shape()
        );

        Ok(Self {
            data: item_prototype.tile(max_size),
            head: 0,
            tail: 0,
            full: false,
            max_size,
        })
    }

    /// Returns the number of item slots.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the number of valid items.
    pub fn len(&self) -> usize {
        if self.full {
            self.max_size
        } else {
            (self.head + self.max_size - self.tail) % self.max_size
        }
    }

    /// Returns `true` if the storage holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if all slots hold valid items.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Returns the shape fixed at creation.
    pub fn item_shape(&self) -> ItemShape {
        self.data.item_shape()
    }

    fn check_shape(&self, batch: &B) -> Result<(), ReplayError> {
        let expected = self.data.item_shape();
        let actual = batch.item_shape();
        if expected != actual {
            return Err(ReplayError::ShapeMismatch {
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }

    fn check_item(&self, item: &B) -> Result<(), ReplayError> {
        if item.len() != 1 {
            return Err(ReplayError::NotSingleItem(item.len()));
        }
        self.check_shape(item)
    }

    /// Writes `item` at `head`, evicting the oldest item when full.
    ///
    /// This is the only way a single item enters the storage.
    ///
    /// # Errors
    ///
    /// Fails if `item` is not a single item of the shape fixed at creation.
    pub fn push(&self, item: &B) -> Result<Self, ReplayError> {
        self.check_item(item)?;

        let mut data = self.data.clone();
        data.push(self.head, item);

        let head = (self.head + 1) % self.max_size;
        let tail = if self.full {
            // The write overwrote the oldest item.
            (self.tail + 1) % self.max_size
        } else {
            self.tail
        };

        Ok(Self {
            data,
            head,
            tail,
            full: head == tail,
            max_size: self.max_size,
        })
    }

    /// Returns the item at logical position `offset`, counted from the
    /// oldest item.
    ///
    /// # Errors
    ///
    /// Fails with [`ReplayError::OffsetOutOfRange`] if `offset` is not below
    /// the current logical size.
    pub fn get_at_index(&self, offset: usize) -> Result<B, ReplayError> {
        let size = self.len();
        if offset >= size {
            return Err(ReplayError::OffsetOutOfRange { offset, size });
        }
        Ok(self.data.sample(&vec![(self.tail + offset) % self.max_size]))
    }

    /// Gathers the items at the given logical offsets into a batch.
    ///
    /// # Arguments
    ///
    /// * `offsets` - Logical offsets, each below the current logical size
    ///
    /// # Errors
    ///
    /// Fails with [`ReplayError::OffsetOutOfRange`] on the first offset not
    /// below the current logical size.
    pub fn gather(&self, offsets: &Vec<usize>) -> Result<B, ReplayError> {
        let size = self.len();
        let mut ixs = Vec::with_capacity(offsets.len());
        for &offset in offsets.iter() {
            if offset >= size {
                return Err(ReplayError::OffsetOutOfRange { offset, size });
            }
            ixs.push((self.tail + offset) % self.max_size);
        }
        Ok(self.data.sample(&ixs))
    }

    /// Writes the items of `batch` into slots `head, head+1, ...` in one
    /// step.
    ///
    /// When the storage was already full before the insert, `tail` is reset
    /// to 0. That rule does not generalize to inserts that wrap the physical
    /// end of the storage or start at a nonzero head of a full buffer, so
    /// every call outside the region where it is well-defined is rejected:
    ///
    /// * the batch is longer than `max_size`,
    /// * the write would wrap past the physical end of the storage,
    /// * the storage is full and `head` is not 0,
    /// * the storage is not full and the batch exceeds the free slots.
    ///
    /// A zero-length batch is a no-op. The general-case insert is the
    /// fold of [`CircularBuffer::push`] over the items of the batch.
    ///
    /// # Errors
    ///
    /// Fails with [`ReplayError::UnsupportedBatchInsert`] on the conditions
    /// above, or [`ReplayError::ShapeMismatch`] if the batch's item shape
    /// differs from the shape fixed at creation.
    pub fn push_batch(&self, batch: &B) -> Result<Self, ReplayError> {
        self.check_shape(batch)?;

        let n = batch.len();
        if n == 0 {
            return Ok(self.clone());
        }
        if n > self.max_size {
            return Err(ReplayError::UnsupportedBatchInsert(format!(
                "batch of {} items exceeds capacity {}",
                n, self.max_size
            )));
        }
        if self.head + n > self.max_size {
            return Err(ReplayError::UnsupportedBatchInsert(format!(
                "write of {} items at head {} wraps the end of storage of {} slots",
                n, self.head, self.max_size
            )));
        }
        if self.full && self.head != 0 {
            return Err(ReplayError::UnsupportedBatchInsert(format!(
                "storage is full and head {} is not at the start of storage",
                self.head
            )));
        }
        if !self.full && n > self.max_size - self.len() {
            return Err(ReplayError::UnsupportedBatchInsert(format!(
                "batch of {} items exceeds the {} free slots",
                n,
                self.max_size - self.len()
            )));
        }

        trace!("batch insert of {} items at head {}", n, self.head);

        let mut data = self.data.clone();
        data.push(self.head, batch);

        let head = (self.head + n) % self.max_size;
        let tail = if self.full { 0 } else { self.tail };

        Ok(Self {
            data,
            head,
            tail,
            full: head == tail,
            max_size: self.max_size,
        })
    }

    /// Applies `f` to every physical slot and returns the rewritten storage.
    ///
    /// All `max_size` slots are transformed, including slots outside the
    /// current logical range. Cursors and fullness are unchanged.
    ///
    /// # Errors
    ///
    /// Fails if `f` does not return a single item of the shape fixed at
    /// creation.
    pub fn map_slots<F>(&self, f: F) -> Result<Self, ReplayError>
    where
        F: Fn(&B) -> B,
    {
        let mut data = self.data.clone();
        for ix in 0..self.max_size {
            let slot = self.data.sample(&vec![ix]);
            let updated = f(&slot);
            self.check_item(&updated)?;
            data.push(ix, &updated);
        }

        Ok(Self {
            data,
            head: self.head,
            tail: self.tail,
            full: self.full,
            max_size: self.max_size,
        })
    }
}
