//! Textual rendering of distances.

use std::fmt;

use crate::distance::Distance;
use crate::repr::Repr;
use crate::scale::{standard_symbol, Scale};

/// `<count> <symbol>` for the standard ratios or a scale with its own
/// symbol, `<count> <num>/<den> m` otherwise. Formatter options such as
/// precision apply to the count.
impl<R: Repr, S: Scale> fmt::Display for Distance<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.count(), f)?;
        match standard_symbol(S::RATIO).or(S::SYMBOL) {
            Some(symbol) => write!(f, " {symbol}"),
            None => write!(f, " {} m", S::RATIO),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::distance::*;
    use crate::scale::CommonScale;

    crate::scale!(Yard = 1143 / 1250);
    crate::scale!(Inch = 127 / 5_000, "in");

    #[test]
    fn standard_symbols() {
        assert_eq!(Nanometers::new(1u64).to_string(), "1 nm");
        assert_eq!(Micrometers::new(2u64).to_string(), "2 um");
        assert_eq!(Millimeters::new(3u64).to_string(), "3 mm");
        assert_eq!(Centimeters::new(4u64).to_string(), "4 cm");
        assert_eq!(Decimeters::new(5u64).to_string(), "5 dm");
        assert_eq!(Meters::new(6u64).to_string(), "6 m");
        assert_eq!(Kilometers::new(7u64).to_string(), "7 km");
        assert_eq!(Megameters::new(8u64).to_string(), "8 Mm");
    }

    #[test]
    fn custom_scale_falls_back_to_ratio() {
        assert_eq!(Distance::<u32, Yard>::new(3).to_string(), "3 1143/1250 m");
        assert_eq!(Distance::<u32, Inch>::new(12).to_string(), "12 in");
    }

    #[test]
    fn common_scale_prints_standard_symbol() {
        let d = Distance::<u64, CommonScale<crate::scale::Centi, crate::scale::Unit>>::new(501);
        assert_eq!(d.to_string(), "501 cm");
        assert_eq!((Centimeters::new(1u64) + Meters::new(5u64)).to_string(), "501 cm");
        assert_eq!((Centimeters::new(1u64) - Millimeters::new(2u64)).to_string(), "8 mm");
    }

    #[test]
    fn common_scale_of_custom_units_prints_ratio() {
        let d = Distance::<u32, Yard>::new(1) + Meters::new(1u32);
        assert_eq!(d.to_string(), "2393 1/1250 m");
    }

    #[test]
    fn formatter_options_reach_the_count() {
        assert_eq!(format!("{:.2}", Meters::new(1.0f64 / 3.0)), "0.33 m");
        assert_eq!(format!("{:>4}", Centimeters::new(7u8)), "   7 cm");
        assert_eq!(Meters::new(-2.5f32).to_string(), "-2.5 m");
    }
}
