//! The ordered subset of a domain a single control may cycle through.

use crate::settings::Setting;
use crate::values::SettingValue;

/// Cycling direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Values reachable by cycling, in declaration order.
///
/// Built once from `domain ∩ possible values ∩ predicate` and never
/// recomputed; a control keeps its set even if the predicate would later
/// answer differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSet<T> {
    values: Vec<T>,
}

impl<T: SettingValue> ValidSet<T> {
    /// Compute the set for a control of `setting`.
    ///
    /// Starts from the full domain of `T`, drops values the predicate
    /// rejects, then drops values `setting` does not accept.
    pub fn build(setting: Setting, predicate: impl Fn(T) -> bool) -> Self {
        let values = T::ALL
            .iter()
            .copied()
            .filter(|v| predicate(*v))
            .filter(|v| setting.accepts(*v))
            .collect();
        Self { values }
    }

    /// Every value `setting` accepts, unfiltered.
    pub fn unfiltered(setting: Setting) -> Self {
        Self::build(setting, |_| true)
    }

    /// Index of `value`, found by identity.
    pub fn position(&self, value: T) -> Option<usize> {
        self.values.iter().position(|v| *v == value)
    }

    pub fn contains(&self, value: T) -> bool {
        self.position(value).is_some()
    }

    pub fn first(&self) -> Option<T> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<T> {
        self.values.last().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }

    /// The value one step from `current`, wrapping at either end.
    ///
    /// When `current` is not in the set, forward yields the first value and
    /// backward the last. Returns `None` only for an empty set.
    pub fn step(&self, current: T, direction: Direction) -> Option<T> {
        let len = self.values.len();
        if len == 0 {
            return None;
        }

        let index = match (self.position(current), direction) {
            (Some(i), Direction::Forward) => (i + 1) % len,
            (Some(i), Direction::Backward) => (i + len - 1) % len,
            (None, Direction::Forward) => 0,
            (None, Direction::Backward) => len - 1,
        };
        self.values.get(index).copied()
    }
}

impl<'a, T: SettingValue> IntoIterator for &'a ValidSet<T> {
    type Item = T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter().copied()
    }
}
