//! Summation over numeric map values
//!
//! Two concrete functions sum `i64` and `f64` values keyed by string. Two
//! generic functions cover any hashable key: [`sum_nums`] spells its value
//! bounds out inline, [`sum_numbers`] names them through [`Number`].

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::{BuildHasher, Hash};
use std::ops::Add;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// Numeric value types accepted by [`sum_numbers`]
///
/// Sealed: only `i64` and `f64` implement it.
pub trait Number:
    sealed::Sealed + Copy + Default + Add<Output = Self> + PartialEq + Debug + Display
{
    /// Add without overflow checks; integers wrap around
    fn accumulate(self, rhs: Self) -> Self;
}

impl Number for i64 {
    fn accumulate(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Number for f64 {
    fn accumulate(self, rhs: Self) -> Self {
        self + rhs
    }
}

/// Sum the integer values of `m`, wrapping around on overflow
pub fn sum_ints(m: &HashMap<String, i64>) -> i64 {
    let mut s: i64 = 0;

    for v in m.values() {
        s = s.wrapping_add(*v);
    }

    s
}

/// Sum the floating point values of `m`
pub fn sum_floats(m: &HashMap<String, f64>) -> f64 {
    let mut s = 0.0;

    for v in m.values() {
        s += v;
    }

    s
}

/// Sum the values of `m` with the value bounds written inline
///
/// Any `Copy + Default + Add` type is accepted, and overflow behaves like the
/// type's own `+`. Prefer [`sum_numbers`] for `i64` input that may overflow.
pub fn sum_nums<K, V, S>(m: &HashMap<K, V, S>) -> V
where
    K: Eq + Hash,
    V: Copy + Default + Add<Output = V>,
    S: BuildHasher,
{
    let mut s = V::default();

    for &v in m.values() {
        s = s + v;
    }

    s
}

/// Sum the values of `m`, returning the zero value for an empty map
///
/// `i64` sums wrap around on overflow. Iteration order is unspecified, so
/// `f64` sums may differ in the last bits between runs.
pub fn sum_numbers<K, V, S>(m: &HashMap<K, V, S>) -> V
where
    K: Eq + Hash,
    V: Number,
    S: BuildHasher,
{
    m.values().fold(V::default(), |acc, &v| acc.accumulate(v))
}
