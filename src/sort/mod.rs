//! Instrumented sorting engines.
//!
//! Every engine is an `async fn` over a mutable slice that reports each
//! comparison and mutation to a [`StepEmitter`] and awaits
//! [`StepEmitter::pause`] at its suspension points. The emitter decides what a
//! pause means: the live application sleeps for the configured delay, tests
//! resolve immediately.
//!
//! Engines never fail on their own. The only error is [`Abandoned`], returned
//! by the emitter once the run has been superseded, which the engines
//! propagate with `?`.

pub mod array;
pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use thiserror::Error;

/// One externally observable action of an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// The values at both indices are being compared.
    Compare(usize, usize),
    /// The values at both indices were exchanged.
    Swap(usize, usize),
    /// A value was written to the index.
    Assign(usize, T),
    /// The run completed; emitted exactly once, last.
    Sorted,
}

/// Visual state of a single bar, derived from the step stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarState {
    #[default]
    Normal,
    Highlight,
    Swap,
    Sorted,
}

/// The run this emitter belongs to is no longer current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("run abandoned")]
pub struct Abandoned;

/// Receives the steps of one run and paces it.
pub trait StepEmitter<T> {
    /// Report a step. `values` is the array right after the step.
    fn emit(&mut self, step: Step<T>, values: &[T]) -> Result<(), Abandoned>;

    /// Suspension point between steps.
    fn pause(&mut self) -> impl Future<Output = Result<(), Abandoned>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    /// Selection order; index + 1 is the key binding.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Algorithm bound to a digit key (`'1'..='5'`).
    pub fn from_key(c: char) -> Option<Algorithm> {
        let idx = c.to_digit(10)? as usize;
        idx.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected bubble, insertion, selection, merge or quick)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Run `algorithm` over `values`, then emit the terminal [`Step::Sorted`].
pub async fn run_algorithm<T, E>(
    algorithm: Algorithm,
    values: &mut [T],
    emitter: &mut E,
) -> Result<(), Abandoned>
where
    T: Ord + Clone + Send + Sync,
    E: StepEmitter<T> + Send,
{
    match algorithm {
        Algorithm::Bubble => bubble::bubble_sort(values, emitter).await?,
        Algorithm::Insertion => insertion::insertion_sort(values, emitter).await?,
        Algorithm::Selection => selection::selection_sort(values, emitter).await?,
        Algorithm::Merge => merge::merge_sort(values, emitter).await?,
        Algorithm::Quick => quick::quick_sort(values, emitter).await?,
    }
    emitter.emit(Step::Sorted, values)
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use proptest::prelude::*;

    fn is_sorted(values: &[i64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("merge".parse::<Algorithm>(), Ok(Algorithm::Merge));
        assert_eq!(" Quick ".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert!("heap".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_algorithm_keys() {
        assert_eq!(Algorithm::from_key('1'), Some(Algorithm::Bubble));
        assert_eq!(Algorithm::from_key('5'), Some(Algorithm::Quick));
        assert_eq!(Algorithm::from_key('0'), None);
        assert_eq!(Algorithm::from_key('6'), None);
        assert_eq!(Algorithm::from_key('x'), None);
    }

    #[test]
    fn test_sorted_emitted_once_last() {
        for algorithm in Algorithm::ALL {
            let (values, rec) = sort_recorded(algorithm, &[4, 1, 3, 1, 2]);
            assert_eq!(values, vec![1, 1, 2, 3, 4], "{algorithm}");
            let sorted = rec.steps.iter().filter(|s| **s == Step::Sorted).count();
            assert_eq!(sorted, 1, "{algorithm}");
            assert_eq!(rec.steps.last(), Some(&Step::Sorted), "{algorithm}");
        }
    }

    #[test]
    fn test_trivial_inputs_only_emit_sorted() {
        for algorithm in Algorithm::ALL {
            for input in [vec![], vec![7i64]] {
                let (values, rec) = sort_recorded(algorithm, &input);
                assert_eq!(values, input);
                assert_eq!(rec.steps, vec![Step::Sorted], "{algorithm}");
                assert_eq!(rec.pauses, 0, "{algorithm}");
            }
        }
    }

    #[test]
    fn test_abandon_stops_engines() {
        for algorithm in Algorithm::ALL {
            let mut values: Vec<i64> = (0..20).rev().collect();
            let mut rec = Recorder::new();
            rec.abandon_after = Some(3);
            let result =
                futures::executor::block_on(run_algorithm(algorithm, &mut values, &mut rec));
            assert_eq!(result, Err(Abandoned), "{algorithm}");
            assert_eq!(rec.pauses, 3, "{algorithm}");
            assert!(!rec.steps.contains(&Step::Sorted), "{algorithm}");
        }
    }

    proptest! {
        #[test]
        fn prop_every_engine_sorts_a_permutation(input in prop::collection::vec(-500i64..500, 0..40)) {
            let mut expected = input.clone();
            expected.sort();
            for algorithm in Algorithm::ALL {
                let (values, _) = sort_recorded(algorithm, &input);
                prop_assert!(is_sorted(&values));
                prop_assert_eq!(&values, &expected);
            }
        }
    }
}
