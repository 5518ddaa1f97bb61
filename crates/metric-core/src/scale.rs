//! Unit scales: compile-time ratios relative to one meter.
//!
//! A scale is a zero-sized marker type implementing [`Scale`]. The eight
//! SI-decimal scales are provided; any other unit is a new marker, most
//! easily declared with the [`scale!`](crate::scale!) macro.

use std::marker::PhantomData;

use crate::ratio::Ratio;

/// The size of a unit as a rational multiple of one meter.
///
/// Implementors only supply [`NUM`](Scale::NUM) and [`DEN`](Scale::DEN);
/// both must be strictly positive, which is checked when a
/// [`Distance`](crate::Distance) of that scale is first constructed.
///
/// ```
/// use metric_core::{Distance, Scale};
///
/// enum Yard {}
/// impl Scale for Yard {
///     const NUM: u128 = 1143;
///     const DEN: u128 = 1250;
///     const SYMBOL: Option<&'static str> = Some("yd");
/// }
///
/// let d = Distance::<f64, Yard>::new(10.0);
/// assert_eq!(d.to_string(), "10 yd");
/// ```
pub trait Scale: 'static {
    /// Numerator of the unit's size in meters.
    const NUM: u128;
    /// Denominator of the unit's size in meters.
    const DEN: u128;
    /// Optional symbol used by `Display`. Standard ratios always print
    /// their SI symbol regardless of this value.
    const SYMBOL: Option<&'static str> = None;
    /// `NUM / DEN` in lowest terms. Not meant to be overridden.
    const RATIO: Ratio = Ratio::new(Self::NUM, Self::DEN);
}

macro_rules! standard_scales {
    ($($(#[$meta:meta])* $name:ident = $num:literal / $den:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $name {}

            impl Scale for $name {
                const NUM: u128 = $num;
                const DEN: u128 = $den;
            }
        )*
    };
}

standard_scales! {
    /// 10⁻⁹ m.
    Nano = 1 / 1_000_000_000;
    /// 10⁻⁶ m.
    Micro = 1 / 1_000_000;
    /// 10⁻³ m.
    Milli = 1 / 1_000;
    /// 10⁻² m.
    Centi = 1 / 100;
    /// 10⁻¹ m.
    Deci = 1 / 10;
    /// The meter itself.
    Unit = 1 / 1;
    /// 10³ m.
    Kilo = 1_000 / 1;
    /// 10⁶ m.
    Mega = 1_000_000 / 1;
}

/// The common scale of `A` and `B`: `gcd(numerators) / lcm(denominators)`.
///
/// This is the coarsest unit into which both `A` and `B` convert by an
/// integer factor, and is the scale of every cross-unit sum, difference
/// and remainder.
pub struct CommonScale<A, B>(PhantomData<(A, B)>);

impl<A: Scale, B: Scale> Scale for CommonScale<A, B> {
    const NUM: u128 = A::RATIO.common(B::RATIO).num();
    const DEN: u128 = A::RATIO.common(B::RATIO).den();
}

/// The SI symbol for one of the eight standard ratios.
pub const fn standard_symbol(ratio: Ratio) -> Option<&'static str> {
    match (ratio.num(), ratio.den()) {
        (1, 1_000_000_000) => Some("nm"),
        (1, 1_000_000) => Some("um"),
        (1, 1_000) => Some("mm"),
        (1, 100) => Some("cm"),
        (1, 10) => Some("dm"),
        (1, 1) => Some("m"),
        (1_000, 1) => Some("km"),
        (1_000_000, 1) => Some("Mm"),
        _ => None,
    }
}

/// Declare a custom unit scale.
///
/// ```
/// metric_core::scale! {
///     /// International yard.
///     pub Yard = 1143 / 1250, "yd"
/// }
/// metric_core::scale!(pub Fathom = 2286 / 1250);
///
/// use metric_core::Scale;
/// assert_eq!(Yard::SYMBOL, Some("yd"));
/// assert_eq!(Fathom::RATIO.num(), 1143);
/// ```
#[macro_export]
macro_rules! scale {
    ($(#[$meta:meta])* $vis:vis $name:ident = $num:literal / $den:literal $(, $symbol:literal)?) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {}

        impl $crate::Scale for $name {
            const NUM: u128 = $num;
            const DEN: u128 = $den;
            $(const SYMBOL: ::core::option::Option<&'static str> = ::core::option::Option::Some($symbol);)?
        }
    };
}
