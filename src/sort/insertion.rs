//! Insertion sort with an explicit hole.
//!
//! The key is lifted out of position `i`, larger predecessors shift one slot
//! right (one `Assign` and one pause per shift), and the key is written into
//! the hole that remains.

use super::{Abandoned, Step, StepEmitter};

pub async fn insertion_sort<T, E>(values: &mut [T], emitter: &mut E) -> Result<(), Abandoned>
where
    T: Ord + Clone + Send + Sync,
    E: StepEmitter<T> + Send,
{
    for i in 1..values.len() {
        let key = values[i].clone();
        let mut hole = i;
        while hole > 0 {
            emitter.emit(Step::Compare(hole - 1, hole), values)?;
            if values[hole - 1] <= key {
                break;
            }
            values[hole] = values[hole - 1].clone();
            emitter.emit(Step::Assign(hole, values[hole].clone()), values)?;
            emitter.pause().await?;
            hole -= 1;
        }
        values[hole] = key.clone();
        emitter.emit(Step::Assign(hole, key), values)?;
    }
    Ok(())
}
