#![warn(missing_docs)]
//! Array-backed item storage for [`rebuf_core`] replay buffers.
use ndarray::{ArrayD, Axis};
use num_traits::Zero;
use rebuf_core::{BatchBase, ItemShape};

/// A batch consisting of an [`ArrayD`].
///
/// The internal array has the shape `[len, item_dims..]`: the first axis is
/// the batch dimension and the remaining axes are the per-item shape. Slot
/// storage allocated via [`BatchBase::tile`] is zero-filled with the
/// prototype's item shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayBatch<T> {
    buf: ArrayD<T>,
}

impl<T> ArrayBatch<T> {
    /// Wraps an array whose leading axis is the batch dimension.
    pub fn from_array(buf: ArrayD<T>) -> Self {
        Self { buf }
    }

    /// Wraps a single item, adding a leading batch axis of length 1.
    pub fn from_item(item: ArrayD<T>) -> Self {
        Self {
            buf: item.insert_axis(Axis(0)),
        }
    }

    /// The underlying array.
    pub fn as_array(&self) -> &ArrayD<T> {
        &self.buf
    }
}

impl<T> BatchBase for ArrayBatch<T>
where
    T: Clone + Zero,
{
    fn tile(&self, capacity: usize) -> Self {
        let mut shape = self.buf.shape().to_vec();
        shape[0] = capacity;
        Self {
            buf: ArrayD::zeros(shape),
        }
    }

    fn len(&self) -> usize {
        self.buf.len_of(Axis(0))
    }

    fn item_shape(&self) -> ItemShape {
        ItemShape::of_dims(&self.buf.shape()[1..])
    }

    fn push(&mut self, ix: usize, data: &Self) {
        let capacity = self.len();
        for i_ in 0..data.len() {
            let i = (i_ + ix) % capacity;
            self.buf
                .index_axis_mut(Axis(0), i)
                .assign(&data.buf.index_axis(Axis(0), i_));
        }
    }

    fn sample(&self, ixs: &Vec<usize>) -> Self {
        Self {
            buf: self.buf.select(Axis(0), ixs),
        }
    }
}

impl<T> From<ArrayBatch<T>> for ArrayD<T> {
    fn from(b: ArrayBatch<T>) -> Self {
        b.buf
    }
}
