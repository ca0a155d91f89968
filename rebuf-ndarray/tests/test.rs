use ndarray::{arr1, arr2};
use rebuf_core::{
    error::ReplayError,
    uniform::{UniformReplayBuffer, UniformReplayConfig},
    BatchBase, RandomKey, ReplayBuffer, TransitionBatch,
};
use rebuf_ndarray::ArrayBatch;

fn item(v: f32) -> ArrayBatch<f32> {
    ArrayBatch::from_item(arr1(&[v, 10.0 * v]).into_dyn())
}

fn value(batch: &ArrayBatch<f32>, i: usize) -> f32 {
    batch.as_array()[[i, 0]]
}

#[test]
fn test_fifo_eviction_and_resident_sampling() {
    let buffer =
        UniformReplayBuffer::<ArrayBatch<f32>>::build(&UniformReplayConfig::default().capacity(4));
    let mut state = buffer.init(&item(0.0)).unwrap();
    for v in [1.0f32, 2.0, 3.0, 4.0, 5.0].iter() {
        state = buffer.add(&state, &item(*v)).unwrap();
    }

    assert_eq!(buffer.size(&state), 4);
    let oldest = state.storage().get_at_index(0).unwrap();
    assert_eq!(value(&oldest, 0), 2.0);

    let batch = buffer.sample(&state, RandomKey::new(0), 128).unwrap();
    assert_eq!(batch.len(), 128);
    for i in 0..batch.len() {
        let v = value(&batch, i);
        assert!(v >= 2.0 && v <= 5.0);
        assert_eq!(batch.as_array()[[i, 1]], 10.0 * v);
    }
}

#[test]
fn test_sample_empty_buffer_fails() {
    let buffer =
        UniformReplayBuffer::<ArrayBatch<f32>>::build(&UniformReplayConfig::default().capacity(3));
    let state = buffer.init(&item(0.0)).unwrap();
    let err = buffer.sample(&state, RandomKey::new(9), 2).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ReplayError>(),
        Some(ReplayError::EmptyBuffer)
    ));
}

#[test]
fn test_add_rejects_mismatched_item_shape() {
    let buffer =
        UniformReplayBuffer::<ArrayBatch<f32>>::build(&UniformReplayConfig::default().capacity(4));
    let state = buffer.init(&item(0.0)).unwrap();

    let wrong = ArrayBatch::from_item(arr1(&[1.0f32, 2.0, 3.0]).into_dyn());
    let err = buffer.add(&state, &wrong).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ReplayError>(),
        Some(ReplayError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_add_batch_then_full() {
    let buffer =
        UniformReplayBuffer::<ArrayBatch<f32>>::build(&UniformReplayConfig::default().capacity(4));
    let mut state = buffer.init(&item(0.0)).unwrap();
    for v in [1.0f32, 2.0].iter() {
        state = buffer.add(&state, &item(*v)).unwrap();
    }

    let batch = ArrayBatch::from_array(arr2(&[[3.0f32, 30.0], [4.0, 40.0]]).into_dyn());
    let state = buffer.add_batch(&state, &batch).unwrap();

    assert_eq!(buffer.size(&state), 4);
    assert!(state.storage().is_full());
    for (i, expected) in [1.0f32, 2.0, 3.0, 4.0].iter().enumerate() {
        let row = state.storage().get_at_index(i).unwrap();
        assert_eq!(value(&row, 0), *expected);
    }
}

#[test]
fn test_update_shifts_every_stored_value() {
    let buffer =
        UniformReplayBuffer::<ArrayBatch<f32>>::build(&UniformReplayConfig::default().capacity(4));
    let mut state = buffer.init(&item(0.0)).unwrap();
    for v in [1.0f32, 2.0, 3.0].iter() {
        state = buffer.add(&state, &item(*v)).unwrap();
    }

    let updated = buffer
        .update(&state, |slot| {
            ArrayBatch::from_array(slot.as_array().mapv(|v| v + 100.0))
        })
        .unwrap();

    assert_eq!(buffer.size(&updated), 3);
    let batch = buffer.sample(&updated, RandomKey::new(1), 64).unwrap();
    for i in 0..batch.len() {
        assert!(value(&batch, i) >= 101.0);
    }
}

fn transition(v: f32) -> TransitionBatch<ArrayBatch<f32>, ArrayBatch<i64>> {
    TransitionBatch {
        obs: item(v),
        act: ArrayBatch::from_item(arr1(&[v as i64]).into_dyn()),
        next_obs: item(v + 1.0),
        reward: vec![0.5 * v],
        is_terminated: vec![0],
        is_truncated: vec![(v as i8) % 2],
    }
}

#[test]
fn test_transition_buffer_end_to_end() {
    let buffer = UniformReplayBuffer::<TransitionBatch<ArrayBatch<f32>, ArrayBatch<i64>>>::build(
        &UniformReplayConfig::default().capacity(8),
    );
    let mut state = buffer.init(&transition(0.0)).unwrap();
    for v in 1..=10 {
        state = buffer.add(&state, &transition(v as f32)).unwrap();
    }
    assert_eq!(buffer.size(&state), 8);

    let batch = buffer.sample(&state, RandomKey::new(99), 32).unwrap();
    assert_eq!(batch.len(), 32);

    // Columns of one sampled transition stay aligned.
    let (obs, act, next_obs, reward, _, _) = batch.unpack();
    for i in 0..32 {
        let v = obs.as_array()[[i, 0]];
        assert!(v >= 3.0 && v <= 10.0);
        assert_eq!(act.as_array()[[i, 0]], v as i64);
        assert_eq!(next_obs.as_array()[[i, 0]], v + 1.0);
        assert_eq!(reward[i], 0.5 * v);
    }
}
