//! Core types and traits for metric distances.
//!
//! This is the leaf crate of the workspace. It defines [`Distance`], a
//! number tagged with a compile-time [`Scale`], together with the
//! conversion engine and the cross-unit operators:
//!
//! - [`ratio`]: `const` rational arithmetic behind every scale.
//! - [`scale`]: the [`Scale`] trait, the SI-decimal scales, [`CommonScale`].
//! - [`repr`]: the sealed [`Repr`] trait, [`Promote`] and [`ReprFrom`].
//! - [`distance`]: the value type and its standard-unit aliases.
//! - [`convert`]: `cast`, `in_unit`, `try_cast`, [`distance_cast`].
//! - [`ops`]: comparisons and arithmetic across units.
//! - [`error`]: [`DistanceError`] for the checked operations.
//!
//! Cargo features:
//!
//! - `approx`: epsilon-tolerant comparison via `approx::AbsDiffEq` and
//!   `approx::RelativeEq` (default epsilon `f32::EPSILON`).
//! - `compound-assign`: `+=`, `-=`, `*=`, `/=`, `%=` and
//!   increment/decrement on same-typed distances.
//!
//! The unit tests for both features in this crate run under
//! `cargo test -p metric-core --all-features`; the `metric` integration
//! tests always enable them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod convert;
mod display;
pub mod distance;
pub mod error;
pub mod ops;
pub mod ratio;
pub mod repr;
pub mod scale;

pub use convert::{distance_cast, DistanceType};
pub use distance::{
    Centimeters, Decimeters, Distance, Kilometers, Megameters, Meters, Micrometers, Millimeters,
    Nanometers,
};
pub use error::DistanceError;
pub use ratio::Ratio;
pub use repr::{Promote, Promoted, Repr, ReprFrom};
pub use scale::{Centi, CommonScale, Deci, Kilo, Mega, Micro, Milli, Nano, Scale, Unit};
