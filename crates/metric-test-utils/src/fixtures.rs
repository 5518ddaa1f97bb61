//! Imperial units as custom scales.
//!
//! All defined against the international yard of exactly 0.9144 m, so
//! every pair shares an integer common scale:
//!
//! - [`Inch`]: 127/5000 m, symbol `in`.
//! - [`Foot`]: 381/1250 m, symbol `ft`.
//! - [`Yard`]: 1143/1250 m, no symbol (prints as a ratio).
//! - [`Fathom`]: 1143/625 m, symbol `ftm`.
//! - [`Mile`]: 201168/125 m, symbol `mi`.

use metric_core::scale;

scale!(pub Inch = 127 / 5_000, "in");
scale!(pub Foot = 381 / 1_250, "ft");
scale!(pub Yard = 1_143 / 1_250);
scale!(pub Fathom = 1_143 / 625, "ftm");
scale!(pub Mile = 201_168 / 125, "mi");

#[cfg(test)]
mod tests {
    use super::*;
    use metric_core::{Distance, Meters, Scale};

    #[test]
    fn ratios_are_exact() {
        assert_eq!(Inch::RATIO.num(), 127);
        assert_eq!(Mile::RATIO.den(), 125);
    }

    #[test]
    fn imperial_chain() {
        assert!(Distance::<u32, Foot>::new(1) == Distance::<u32, Inch>::new(12));
        assert!(Distance::<u32, Yard>::new(1) == Distance::<u32, Foot>::new(3));
        assert!(Distance::<u32, Fathom>::new(1) == Distance::<u32, Yard>::new(2));
        assert!(Distance::<u32, Mile>::new(1) == Distance::<u32, Yard>::new(1_760));
    }

    #[test]
    fn mile_in_meters() {
        let m: Meters<f64> = Distance::<u32, Mile>::new(1).cast();
        assert_eq!(m.count(), 1_609.344);
    }
}
