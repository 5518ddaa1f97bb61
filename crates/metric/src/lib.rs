//! metric: distances whose unit is part of the type.
//!
//! A [`Distance<R, S>`](Distance) stores a single number of type `R`; its
//! scale `S` is a compile-time ratio to the meter. Mixing units is either
//! converted automatically (comparisons, sums, remainders) or requires an
//! explicit [`cast`](Distance::cast), and none of it costs more than the
//! raw arithmetic on `R`.
//!
//! # Quick start
//!
//! ```rust
//! use metric::prelude::*;
//! use metric::literals::{cm, m, mm};
//!
//! // Different units compare and add through their common scale.
//! assert!(m(5) == cm(500));
//! assert_eq!((cm(1) + m(5)).to_string(), "501 cm");
//! assert_eq!((cm(1) - mm(2)).to_string(), "8 mm");
//!
//! // Scalars keep the unit; distance over distance is a plain number.
//! assert!(cm(5) * 3u64 == cm(15));
//! assert!(3u64 * cm(5) == cm(15));
//! assert!(cm(5) / 5u64 == cm(1));
//! assert!(cm(5) % cm(3) == cm(2));
//! assert_eq!(cm(6) / cm(2), 3);
//!
//! // Explicit conversion picks the target unit and representation.
//! let km: Kilometers<f64> = m(1_500).cast();
//! assert_eq!(km.count(), 1.5);
//! ```
//!
//! # Custom units
//!
//! ```rust
//! use metric::prelude::*;
//!
//! metric::scale!(pub Yard = 1143 / 1250, "yd");
//!
//! let ten = Distance::<f64, Yard>::new(10.0);
//! let meters: Meters<f64> = ten.cast();
//! assert_eq!(meters.count(), 9.144);
//! assert_eq!(ten.to_string(), "10 yd");
//! ```
//!
//! # Modules
//!
//! | Module | Source | Contents |
//! |--------|--------|----------|
//! | [`types`] | `metric-core` | `Distance`, scales, representations, conversion, operators |
//! | [`literals`] | this crate | `nm` … `Mm` constructors over `u64` and `f64` |
//! | [`prelude`] | this crate | the common imports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod literals;

/// Core types, traits and conversions (`metric-core`).
///
/// Contains [`types::Distance`], the [`types::Scale`] trait and the
/// standard scales, the sealed [`types::Repr`] trait, and
/// [`types::DistanceError`].
pub use metric_core as types;

pub use metric_core::scale;
pub use metric_core::{distance_cast, Distance, DistanceError, Scale};

/// The `approx` crate whose `AbsDiffEq`/`RelativeEq` distances implement.
#[cfg(feature = "approx")]
pub use approx;

/// Common imports for typical usage.
///
/// ```rust
/// use metric::prelude::*;
/// ```
pub mod prelude {
    // Value type and aliases
    pub use metric_core::{
        Centimeters, Decimeters, Distance, Kilometers, Megameters, Meters, Micrometers,
        Millimeters, Nanometers,
    };

    // Scales
    pub use metric_core::{Centi, CommonScale, Deci, Kilo, Mega, Micro, Milli, Nano, Scale, Unit};

    // Conversion and errors
    pub use metric_core::{distance_cast, DistanceError, DistanceType, Repr};
}
