//! Containers parametrized over the numeric and key type sets
//!
//! These reuse the sealed traits from [`crate::numeric`] to restrict what they
//! can be instantiated with.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Deref;

use crate::numeric::{Float, Number};
use crate::sealed::Sealed;

/// Key kinds accepted by [`FloatMap`] and [`Named`]
pub trait MapKey: Sealed + Eq + Hash + Clone + fmt::Debug {}

impl Sealed for String {}

impl MapKey for i32 {}
impl MapKey for i64 {}
impl MapKey for isize {}
impl MapKey for String {}

/// An owned run of numbers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slice<T: Number>(Vec<T>);

impl<T: Number> Slice<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }

    /// Sums every element, starting from the zero value of `T`
    pub fn sum(&self) -> T {
        self.0.iter().fold(T::default(), |acc, &v| crate::add(acc, v))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Number> Deref for Slice<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Number> From<Vec<T>> for Slice<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T: Number> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A series of numbers together with its extremes
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T: Number> {
    data: Vec<T>,
    max: T,
    min: T,
}

impl<T: Number> Series<T> {
    /// Builds a series, computing `max` and `min` over the ordered values
    ///
    /// Returns `None` when no value takes part in ordering, i.e. `data` is
    /// empty or holds only NaNs.
    pub fn new(data: Vec<T>) -> Option<Self> {
        let mut ordered = data.iter().copied().filter(|v| !v.is_unordered());
        let first = ordered.next()?;
        let (min, max) = ordered.fold((first, first), |(min, max), v| {
            (if v < min { v } else { min }, if v > max { v } else { max })
        });

        Some(Self { data, max, min })
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn min(&self) -> T {
        self.min
    }

    /// `max - min`
    pub fn spread(&self) -> T {
        crate::sub(self.max, self.min)
    }
}

/// A map from a [`MapKey`] to a floating-point value
#[derive(Debug, Clone)]
pub struct FloatMap<K: MapKey, V: Float> {
    entries: HashMap<K, V>,
}

impl<K: MapKey, V: Float> FloatMap<K, V> {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Inserts a value, returning the one it replaced
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all values
    pub fn total(&self) -> V {
        self.entries.values().fold(V::default(), |acc, &v| crate::add(acc, v))
    }
}

impl<K: MapKey, V: Float> Default for FloatMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: MapKey, V: Float> FromIterator<(K, V)> for FloatMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// A named value whose payload is drawn from the key type set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Named<T: MapKey> {
    pub name: String,
    pub data: T,
}

impl<T: MapKey> Named<T> {
    pub fn new(name: impl Into<String>, data: T) -> Self {
        Self { name: name.into(), data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_sum() {
        let s: Slice<i32> = vec![1, 2, 3, 4].into();
        assert_eq!(s.sum(), 10);
        assert_eq!(s.len(), 4);

        let f: Slice<f64> = [0.5, 0.25, 0.25].into_iter().collect();
        assert!((f.sum() - 1.0).abs() < 1e-12);

        assert_eq!(Slice::<i64>::new().sum(), 0);
    }

    #[test]
    fn test_series_extremes() {
        let series = Series::new(vec![3, 4, -2, 9]).unwrap();
        assert_eq!(series.max(), 9);
        assert_eq!(series.min(), -2);
        assert_eq!(series.spread(), 11);
        assert_eq!(series.data(), &[3, 4, -2, 9]);
    }

    #[test]
    fn test_series_empty_and_nan() {
        assert!(Series::<i32>::new(Vec::new()).is_none());
        assert!(Series::new(vec![f64::NAN, f64::NAN]).is_none());

        let series = Series::new(vec![f64::NAN, 2.5, -1.0]).unwrap();
        assert_eq!(series.max(), 2.5);
        assert_eq!(series.min(), -1.0);
        assert_eq!(series.data().len(), 3);
    }

    #[test]
    fn test_float_map() {
        let mut m: FloatMap<String, f64> = FloatMap::new();
        assert!(m.is_empty());
        assert_eq!(m.insert("bacon".to_string(), 6.66), None);
        assert_eq!(m.insert("pb".to_string(), 8.88), None);
        assert_eq!(m.insert("pb".to_string(), 8.0), Some(8.88));

        assert_eq!(m.len(), 2);
        assert_eq!(m.get(&"bacon".to_string()), Some(6.66));
        assert_eq!(m.get(&"missing".to_string()), None);
        assert!((m.total() - 14.66).abs() < 1e-9);

        let by_id: FloatMap<i32, f32> = [(1, 1.5), (2, 2.5)].into_iter().collect();
        assert!((by_id.total() - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_named() {
        let n = Named::new("answer", 42i64);
        assert_eq!(n.name, "answer");
        assert_eq!(n.data, 42);

        let s = Named::new("greeting".to_string(), "hello".to_string());
        assert_eq!(s.data, "hello");
    }
}
