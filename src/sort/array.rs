//! The array being visualized: random generation and custom input parsing.

use rand::RngExt;
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseArrayError {
    #[error("Please enter a valid array of numbers (comma-separated).")]
    NoValidIntegers,
}

/// Ordered sequence of values shown as bars.
#[derive(Debug, Clone, Default)]
pub struct ArrayState {
    values: Vec<i64>,
}

impl ArrayState {
    /// A fresh array of `size` values drawn uniformly from `range`.
    pub fn random(size: usize, range: RangeInclusive<i64>) -> Self {
        let mut rng = rand::rng();
        let values = (0..size)
            .map(|_| rng.random_range(range.clone()))
            .collect();
        Self { values }
    }

    pub fn from_values(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace the contents with a snapshot taken during a run.
    pub fn replace(&mut self, values: Vec<i64>) {
        self.values = values;
    }

    pub fn min(&self) -> Option<i64> {
        self.values.iter().copied().min()
    }

    pub fn max(&self) -> Option<i64> {
        self.values.iter().copied().max()
    }
}

/// Parse comma-separated integers, dropping tokens that do not start with one.
///
/// Each token is trimmed and read up to the first non-digit, so `"12abc"`
/// yields 12 and `"3.7"` yields 3. Fails only when nothing usable remains.
pub fn parse_custom_array(input: &str) -> Result<Vec<i64>, ParseArrayError> {
    let values: Vec<i64> = input.split(',').filter_map(leading_integer).collect();
    if values.is_empty() {
        return Err(ParseArrayError::NoValidIntegers);
    }
    Ok(values)
}

fn leading_integer(token: &str) -> Option<i64> {
    let token = token.trim();
    let digits_start = usize::from(token.starts_with(['+', '-']));
    let digits_len = token[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    token[..digits_start + digits_len].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters_invalid_tokens() {
        assert_eq!(parse_custom_array("10, abc, 5,, 3"), Ok(vec![10, 5, 3]));
    }

    #[test]
    fn test_parse_rejects_when_nothing_valid() {
        assert_eq!(
            parse_custom_array("abc, , "),
            Err(ParseArrayError::NoValidIntegers)
        );
        assert_eq!(parse_custom_array(""), Err(ParseArrayError::NoValidIntegers));
    }

    #[test]
    fn test_parse_leading_integer_prefix() {
        assert_eq!(
            parse_custom_array(" -4, +7, 12abc, 3.7, -, x9"),
            Ok(vec![-4, 7, 12, 3])
        );
    }

    #[test]
    fn test_parse_drops_overflowing_values() {
        assert_eq!(
            parse_custom_array("99999999999999999999999, 1"),
            Ok(vec![1])
        );
    }

    #[test]
    fn test_random_respects_size_and_range() {
        let array = ArrayState::random(64, 10..=309);
        assert_eq!(array.len(), 64);
        assert!(array.values().iter().all(|v| (10..=309).contains(v)));
        assert!(ArrayState::random(0, 10..=309).is_empty());
    }

    #[test]
    fn test_min_max() {
        let array = ArrayState::from_values(vec![4, -3, 9]);
        assert_eq!(array.min(), Some(-3));
        assert_eq!(array.max(), Some(9));
        assert_eq!(ArrayState::default().max(), None);
    }
}
