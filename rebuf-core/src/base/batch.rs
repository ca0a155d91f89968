//! Columnar storage of item batches.
use crate::ItemShape;

/// A trait defining basic batch operations.
///
/// A batch is columnar storage for items stacked along a leading dimension:
/// a batch of N items has every field of the item given an added leading
/// dimension of size N. A single item is a batch of length 1, and the
/// fixed-size slot storage inside a replay buffer is a batch of length
/// `capacity`. One contract covers all three.
///
/// # Examples
///
/// ```ignore
/// struct TensorBatch {
///     data: Vec<f32>,
///     shape: Vec<usize>,
/// }
///
/// impl BatchBase for TensorBatch {
///     fn tile(&self, capacity: usize) -> Self {
///         // Allocation logic
///     }
///
///     fn push(&mut self, ix: usize, data: &Self) {
///         // Data addition logic
///     }
///
///     fn sample(&self, ixs: &Vec<usize>) -> Self {
///         // Gathering logic
///     }
///     // ...
/// }
/// ```
pub trait BatchBase: Clone {
    /// Allocates zeroed storage for `capacity` items shaped like the items
    /// of `self`.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Length of the leading dimension of the new storage
    fn tile(&self, capacity: usize) -> Self;

    /// Returns the number of items along the leading dimension.
    fn len(&self) -> usize;

    /// Returns `true` if the batch holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the shape of a single item.
    fn item_shape(&self) -> ItemShape;

    /// Writes the items of `data` starting at index `ix`, wrapping at the
    /// end of the storage.
    ///
    /// # Arguments
    ///
    /// * `ix` - Index where the first item of `data` is written
    /// * `data` - Items to be written
    fn push(&mut self, ix: usize, data: &Self);

    /// Gathers the items at the given indices into a new batch.
    ///
    /// # Arguments
    ///
    /// * `ixs` - List of indices to gather
    fn sample(&self, ixs: &Vec<usize>) -> Self;
}

impl<T> BatchBase for Vec<T>
where
    T: Clone + Default,
{
    fn tile(&self, capacity: usize) -> Self {
        vec![T::default(); capacity]
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn item_shape(&self) -> ItemShape {
        ItemShape::scalar()
    }

    fn push(&mut self, ix: usize, data: &Self) {
        let capacity = self.as_slice().len();
        let mut j = ix;
        for v in data.iter() {
            self[j] = v.clone();
            j += 1;
            if j == capacity {
                j = 0;
            }
        }
    }

    fn sample(&self, ixs: &Vec<usize>) -> Self {
        ixs.iter().map(|ix| self[*ix].clone()).collect()
    }
}
