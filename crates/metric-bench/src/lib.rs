//! Workloads for the metric benchmarks.
//!
//! Each typed workload has a raw twin doing the same arithmetic on bare
//! numbers, so the benchmarks can show that unit tracking adds nothing:
//!
//! - [`counts`]: deterministic input data.
//! - [`raw_mixed_sum`] / [`typed_mixed_sum`]: centimeters plus millimeters.
//! - [`raw_to_meters`] / [`typed_to_meters`]: millimeters to float meters.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use metric::prelude::*;

/// `n` deterministic pseudo-random counts in `[0, 1_000_000)`.
pub fn counts(n: usize, seed: u64) -> Vec<i64> {
    (0..n as u64)
        .map(|i| {
            let x = (i ^ seed).wrapping_mul(6364136223846793007);
            (x % 1_000_000) as i64
        })
        .collect()
}

/// Sum of `cm[i] * 10 + mm[i]`, in millimeters.
pub fn raw_mixed_sum(cm: &[i64], mm: &[i64]) -> i64 {
    cm.iter().zip(mm).map(|(c, m)| c * 10 + m).sum()
}

/// Sum of `cm[i] + mm[i]` through the cross-unit `+`.
pub fn typed_mixed_sum(cm: &[Centimeters<i64>], mm: &[Millimeters<i64>]) -> Millimeters<i64> {
    cm.iter()
        .zip(mm)
        .map(|(c, m)| (*c + *m).in_unit::<Milli>())
        .sum()
}

/// Each millimeter count as float meters.
pub fn raw_to_meters(mm: &[i64], out: &mut Vec<f64>) {
    out.clear();
    out.extend(mm.iter().map(|&v| v as f64 / 1_000.0));
}

/// Each distance cast to `Meters<f64>`.
pub fn typed_to_meters(mm: &[Millimeters<i64>], out: &mut Vec<Meters<f64>>) {
    out.clear();
    out.extend(mm.iter().map(|d| d.cast::<f64, Unit>()));
}
