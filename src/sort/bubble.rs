//! Adjacent-pair bubble sort.
//!
//! Runs all `n - 1` passes with no early exit, so the number of comparisons
//! is always `n(n-1)/2`. Each inner iteration is one step: `Compare`, an
//! optional `Swap`, then a pause.

use super::{Abandoned, Step, StepEmitter};

pub async fn bubble_sort<T, E>(values: &mut [T], emitter: &mut E) -> Result<(), Abandoned>
where
    T: Ord + Send + Sync,
    E: StepEmitter<T> + Send,
{
    let n = values.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            emitter.emit(Step::Compare(j, j + 1), values)?;
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                emitter.emit(Step::Swap(j, j + 1), values)?;
            }
            emitter.pause().await?;
        }
    }
    Ok(())
}
