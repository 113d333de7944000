//! Selection sort.
//!
//! Every scan step is a `Compare` against the running minimum followed by a
//! pause, whether or not the minimum moves. Each pass ends with a `Swap`
//! into position `i`, recorded even when `i` already holds the minimum.

use super::{Abandoned, Step, StepEmitter};

pub async fn selection_sort<T, E>(values: &mut [T], emitter: &mut E) -> Result<(), Abandoned>
where
    T: Ord + Send + Sync,
    E: StepEmitter<T> + Send,
{
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            emitter.emit(Step::Compare(j, min), values)?;
            if values[j] < values[min] {
                min = j;
            }
            emitter.pause().await?;
        }
        values.swap(i, min);
        emitter.emit(Step::Swap(i, min), values)?;
    }
    Ok(())
}
