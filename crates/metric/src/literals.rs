//! Short constructors for the standard units.
//!
//! The functions at this level take a `u64`; the ones in [`float`] take
//! an `f64`. These are the two default representations, a large unsigned
//! integer and a high-precision float.
//!
//! ```
//! use metric::literals::{cm, m, mm};
//!
//! assert!(m(5) == cm(500));
//! assert_eq!((cm(1) + m(5)).to_string(), "501 cm");
//! assert_eq!((cm(1) - mm(2)).to_string(), "8 mm");
//! ```

use metric_core::{
    Centimeters, Decimeters, Kilometers, Megameters, Meters, Micrometers, Millimeters, Nanometers,
};

macro_rules! literals {
    ($repr:ty: $($(#[$meta:meta])* $name:ident => $alias:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub const fn $name(v: $repr) -> $alias<$repr> {
                $alias::new(v)
            }
        )*
    };
}

literals! { u64:
    /// `v` nanometers.
    nm => Nanometers;
    /// `v` micrometers.
    um => Micrometers;
    /// `v` millimeters.
    mm => Millimeters;
    /// `v` centimeters.
    cm => Centimeters;
    /// `v` decimeters.
    dm => Decimeters;
    /// `v` meters.
    m => Meters;
    /// `v` kilometers.
    km => Kilometers;
    /// `v` megameters.
    #[allow(non_snake_case)]
    Mm => Megameters;
}

/// The same constructors over `f64`.
///
/// ```
/// use metric::literals::float::{km, m};
///
/// assert!(km(0.5) == m(500.0));
/// ```
pub mod float {
    use metric_core::{
        Centimeters, Decimeters, Kilometers, Megameters, Meters, Micrometers, Millimeters,
        Nanometers,
    };

    literals! { f64:
        /// `v` nanometers.
        nm => Nanometers;
        /// `v` micrometers.
        um => Micrometers;
        /// `v` millimeters.
        mm => Millimeters;
        /// `v` centimeters.
        cm => Centimeters;
        /// `v` decimeters.
        dm => Decimeters;
        /// `v` meters.
        m => Meters;
        /// `v` kilometers.
        km => Kilometers;
        /// `v` megameters.
        #[allow(non_snake_case)]
        Mm => Megameters;
    }
}
