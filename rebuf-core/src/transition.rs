//! Environment transitions as composite items.
use crate::{BatchBase, ItemShape};

/// A batch of environment transitions.
///
/// This is the usual item type of a replay buffer: one transition records an
/// observation, the selected action, the next observation, the reward, and
/// the episode termination and truncation flags. The struct implements
/// [`BatchBase`] by field-wise delegation, so a buffer stores transitions
/// column by column.
///
/// # Type Parameters
///
/// * `O` - Observation storage, must implement [`BatchBase`]
/// * `A` - Action storage, must implement [`BatchBase`]
#[derive(Clone)]
pub struct TransitionBatch<O, A>
where
    O: BatchBase,
    A: BatchBase,
{
    /// Current observations.
    pub obs: O,

    /// Selected actions.
    pub act: A,

    /// Next observations.
    pub next_obs: O,

    /// Transition rewards.
    pub reward: Vec<f32>,

    /// Episode termination flags.
    pub is_terminated: Vec<i8>,

    /// Episode truncation flags.
    pub is_truncated: Vec<i8>,
}

impl<O, A> TransitionBatch<O, A>
where
    O: BatchBase,
    A: BatchBase,
{
    /// Decomposes the batch into its columns.
    pub fn unpack(self) -> (O, A, O, Vec<f32>, Vec<i8>, Vec<i8>) {
        (
            self.obs,
            self.act,
            self.next_obs,
            self.reward,
            self.is_terminated,
            self.is_truncated,
        )
    }
}

impl<O, A> BatchBase for TransitionBatch<O, A>
where
    O: BatchBase,
    A: BatchBase,
{
    fn tile(&self, capacity: usize) -> Self {
        Self {
            obs: self.obs.tile(capacity),
            act: self.act.tile(capacity),
            next_obs: self.next_obs.tile(capacity),
            reward: self.reward.tile(capacity),
            is_terminated: self.is_terminated.tile(capacity),
            is_truncated: self.is_truncated.tile(capacity),
        }
    }

    fn len(&self) -> usize {
        self.reward.len()
    }

    fn item_shape(&self) -> ItemShape {
        ItemShape::concat(&[
            self.obs.item_shape(),
            self.act.item_shape(),
            self.next_obs.item_shape(),
            BatchBase::item_shape(&self.reward),
            BatchBase::item_shape(&self.is_terminated),
            BatchBase::item_shape(&self.is_truncated),
        ])
    }

    fn push(&mut self, ix: usize, data: &Self) {
        self.obs.push(ix, &data.obs);
        self.act.push(ix, &data.act);
        self.next_obs.push(ix, &data.next_obs);
        BatchBase::push(&mut self.reward, ix, &data.reward);
        BatchBase::push(&mut self.is_terminated, ix, &data.is_terminated);
        BatchBase::push(&mut self.is_truncated, ix, &data.is_truncated);
    }

    fn sample(&self, ixs: &Vec<usize>) -> Self {
        Self {
            obs: self.obs.sample(ixs),
            act: self.act.sample(ixs),
            next_obs: self.next_obs.sample(ixs),
            reward: BatchBase::sample(&self.reward, ixs),
            is_terminated: BatchBase::sample(&self.is_terminated, ixs),
            is_truncated: BatchBase::sample(&self.is_truncated, ixs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TransitionBatch;
    use crate::BatchBase;

    fn transition(v: f32) -> TransitionBatch<Vec<f32>, Vec<i8>> {
        TransitionBatch {
            obs: vec![v],
            act: vec![v as i8],
            next_obs: vec![v + 1.0],
            reward: vec![v * 0.5],
            is_terminated: vec![0],
            is_truncated: vec![0],
        }
    }

    #[test]
    fn test_item_shape_concatenates_fields() {
        let tr = transition(1.0);
        assert_eq!(tr.item_shape().fields().len(), 6);
        assert_eq!(tr.len(), 1);
    }

    #[test]
    fn test_push_and_sample_keep_fields_aligned() {
        let mut storage = transition(0.0).tile(3);
        storage.push(0, &transition(1.0));
        storage.push(1, &transition(2.0));
        storage.push(2, &transition(3.0));

        let picked = storage.sample(&vec![2, 0]);
        assert_eq!(picked.obs, vec![3.0, 1.0]);
        assert_eq!(picked.act, vec![3, 1]);
        assert_eq!(picked.next_obs, vec![4.0, 2.0]);
        assert_eq!(picked.reward, vec![1.5, 0.5]);
    }
}
