//! Quick sort with the Lomuto partition scheme.
//!
//! The pivot is the last element of the range. Every scan position is a
//! `Compare` against the pivot followed by a pause, with a `Swap` in between
//! when the element moves below the boundary.

use super::{Abandoned, Step, StepEmitter};
use futures::future::{BoxFuture, FutureExt};

pub async fn quick_sort<T, E>(values: &mut [T], emitter: &mut E) -> Result<(), Abandoned>
where
    T: Ord + Send + Sync,
    E: StepEmitter<T> + Send,
{
    if values.len() < 2 {
        return Ok(());
    }
    let high = values.len() - 1;
    sort_range(values, 0, high, emitter).await
}

/// Sort the inclusive range `[low, high]`.
fn sort_range<'a, T, E>(
    values: &'a mut [T],
    low: usize,
    high: usize,
    emitter: &'a mut E,
) -> BoxFuture<'a, Result<(), Abandoned>>
where
    T: Ord + Send + Sync + 'a,
    E: StepEmitter<T> + Send + 'a,
{
    async move {
        let (mut low, mut high) = (low, high);
        // smaller side recurses, larger side loops: depth is O(log n)
        while low < high {
            let pivot = partition(&mut *values, low, high, &mut *emitter).await?;
            if pivot - low < high - pivot {
                if pivot > low {
                    sort_range(&mut *values, low, pivot - 1, &mut *emitter).await?;
                }
                low = pivot + 1;
            } else {
                sort_range(&mut *values, pivot + 1, high, &mut *emitter).await?;
                high = pivot - 1;
            }
        }
        Ok(())
    }
    .boxed()
}

/// Partition `[low, high]` around `values[high]` and return the pivot's
/// final index.
async fn partition<T, E>(
    values: &mut [T],
    low: usize,
    high: usize,
    emitter: &mut E,
) -> Result<usize, Abandoned>
where
    T: Ord + Send + Sync,
    E: StepEmitter<T> + Send,
{
    // next slot for an element smaller than the pivot
    let mut boundary = low;
    for j in low..high {
        emitter.emit(Step::Compare(j, high), values)?;
        if values[j] < values[high] {
            values.swap(boundary, j);
            emitter.emit(Step::Swap(boundary, j), values)?;
            boundary += 1;
        }
        emitter.pause().await?;
    }
    values.swap(boundary, high);
    emitter.emit(Step::Swap(boundary, high), values)?;
    Ok(boundary)
}
