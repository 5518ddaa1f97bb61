//! proptest strategies for distances.
//!
//! The integer strategies keep counts small enough that converting into any
//! common scale of the standard units or the [`fixtures`](crate::fixtures)
//! cannot overflow an `i64`.

use proptest::prelude::*;

use metric_core::{Distance, Scale};

/// Largest magnitude produced by [`signed`] and [`nonzero_signed`].
pub const COUNT_BOUND: i64 = 1_000_000;

/// Any `i64` count in `[-COUNT_BOUND, COUNT_BOUND]`.
pub fn signed<S: Scale>() -> impl Strategy<Value = Distance<i64, S>> {
    (-COUNT_BOUND..=COUNT_BOUND).prop_map(Distance::new)
}

/// Like [`signed`], never zero.
pub fn nonzero_signed<S: Scale>() -> impl Strategy<Value = Distance<i64, S>> {
    prop_oneof![-COUNT_BOUND..=-1i64, 1..=COUNT_BOUND].prop_map(Distance::new)
}

/// A `u64` count up to `max`.
pub fn unsigned<S: Scale>(max: u64) -> impl Strategy<Value = Distance<u64, S>> {
    (0..=max).prop_map(Distance::new)
}

/// A finite `f64` count in `[-1e9, 1e9]`.
pub fn finite<S: Scale>() -> impl Strategy<Value = Distance<f64, S>> {
    (-1.0e9f64..=1.0e9).prop_map(Distance::new)
}

/// Small positive scalars for multiplying and dividing counts.
pub fn scalar() -> impl Strategy<Value = i64> {
    1i64..=1_000
}
