//! Top-down merge sort.
//!
//! Both halves of a range are copied into buffers and written back one
//! element at a time. Ties take from the left buffer, which keeps the sort
//! stable.

use super::{Abandoned, Step, StepEmitter};
use futures::future::{BoxFuture, FutureExt};

pub async fn merge_sort<T, E>(values: &mut [T], emitter: &mut E) -> Result<(), Abandoned>
where
    T: Ord + Clone + Send + Sync,
    E: StepEmitter<T> + Send,
{
    if values.len() < 2 {
        return Ok(());
    }
    let right = values.len() - 1;
    sort_range(values, 0, right, emitter).await
}

/// Sort the inclusive range `[left, right]`.
fn sort_range<'a, T, E>(
    values: &'a mut [T],
    left: usize,
    right: usize,
    emitter: &'a mut E,
) -> BoxFuture<'a, Result<(), Abandoned>>
where
    T: Ord + Clone + Send + Sync + 'a,
    E: StepEmitter<T> + Send + 'a,
{
    async move {
        if left >= right {
            return Ok(());
        }
        let mid = left + (right - left) / 2;
        sort_range(&mut *values, left, mid, &mut *emitter).await?;
        sort_range(&mut *values, mid + 1, right, &mut *emitter).await?;
        merge(values, left, mid, right, emitter).await
    }
    .boxed()
}

/// Merge the sorted runs `[left, mid]` and `[mid + 1, right]`.
async fn merge<T, E>(
    values: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    emitter: &mut E,
) -> Result<(), Abandoned>
where
    T: Ord + Clone + Send + Sync,
    E: StepEmitter<T> + Send,
{
    let left_buf = values[left..=mid].to_vec();
    let right_buf = values[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_buf.len() && j < right_buf.len() {
        emitter.emit(Step::Compare(left + i, mid + 1 + j), values)?;
        let taken = if left_buf[i] <= right_buf[j] {
            i += 1;
            left_buf[i - 1].clone()
        } else {
            j += 1;
            right_buf[j - 1].clone()
        };
        values[k] = taken.clone();
        emitter.emit(Step::Assign(k, taken), values)?;
        emitter.pause().await?;
        k += 1;
    }

    // one side is exhausted, the rest is copied without comparing
    for value in left_buf[i..].iter().chain(&right_buf[j..]) {
        values[k] = value.clone();
        emitter.emit(Step::Assign(k, value.clone()), values)?;
        emitter.pause().await?;
        k += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::sort::testing::{sort_recorded, Tagged};
    use crate::sort::{Algorithm, Step};

    fn tagged(values: &[i64]) -> Vec<Tagged> {
        values
            .iter()
            .enumerate()
            .map(|(tag, &value)| Tagged { value, tag })
            .collect()
    }

    #[test]
    fn test_merge_duplicates_keep_order() {
        let (values, _) = sort_recorded(Algorithm::Merge, &tagged(&[2, 2, 1]));
        let pairs: Vec<(i64, usize)> = values.iter().map(|t| (t.value, t.tag)).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_merge_is_stable_on_many_duplicates() {
        let input = tagged(&[3, 1, 3, 2, 1, 3, 2, 1, 1, 2]);
        let (values, _) = sort_recorded(Algorithm::Merge, &input);
        for pair in values.windows(2) {
            assert!(pair[0].value <= pair[1].value);
            if pair[0].value == pair[1].value {
                assert!(pair[0].tag < pair[1].tag);
            }
        }
    }

    #[test]
    fn test_merge_step_shape() {
        let (values, rec) = sort_recorded(Algorithm::Merge, &[2i64, 1]);
        assert_eq!(values, vec![1, 2]);
        assert_eq!(
            rec.steps,
            vec![
                Step::Compare(0, 1),
                Step::Assign(0, 1),
                Step::Assign(1, 2),
                Step::Sorted,
            ]
        );
        // one pause per written-back element
        assert_eq!(rec.pauses, 2);
    }

    #[test]
    fn test_merge_pause_count() {
        // 8 elements: three levels, each writing back all 8
        let (_, rec) = sort_recorded(Algorithm::Merge, &[8i64, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(rec.pauses, 24);
    }
}
