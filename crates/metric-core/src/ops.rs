//! Relational and arithmetic operators across units.
//!
//! Two distances of any scales `S1`, `S2` and representations `R1`, `R2`
//! are brought to the common scale [`CommonScale<S1, S2>`] and the promoted
//! representation [`Promoted<R1, R2>`] before the raw operation runs:
//!
//! | Expression | Result |
//! |------------|--------|
//! | `a == b`, `a < b`, ... | `bool`, compared in the common scale |
//! | `a + b`, `a - b` | `Distance<Promoted<R1, R2>, CommonScale<S1, S2>>` |
//! | `a % b` | `Distance<Promoted<R1, R2>, CommonScale<S1, S2>>` |
//! | `a / b` | `Promoted<R1, R2>` (dimensionless) |
//! | `a * n`, `n * a`, `a / n`, `a % n` | `Distance<Promoted<R1, N>, S1>` |
//!
//! Converting into the common scale is always an integer multiplication,
//! so integer operands never lose a remainder on the way in. Division and
//! remainder by zero behave exactly like the representation type does.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Rem, Sub};

use num_traits::Zero;

use crate::distance::Distance;
use crate::error::DistanceError;
use crate::repr::{repr_cast, Promote, Promoted, Repr};
use crate::scale::{CommonScale, Scale};

/// Both counts expressed in the common scale and promoted representation.
#[inline(always)]
pub fn common_counts<R1, S1, R2, S2>(
    a: Distance<R1, S1>,
    b: Distance<R2, S2>,
) -> (Promoted<R1, R2>, Promoted<R1, R2>)
where
    R1: Promote<R2>,
    R2: Repr,
    S1: Scale,
    S2: Scale,
{
    let a = a.cast::<Promoted<R1, R2>, CommonScale<S1, S2>>();
    let b = b.cast::<Promoted<R1, R2>, CommonScale<S1, S2>>();
    (a.count(), b.count())
}

impl<R1, S1, R2, S2> PartialEq<Distance<R2, S2>> for Distance<R1, S1>
where
    R1: Promote<R2>,
    R2: Repr,
    S1: Scale,
    S2: Scale,
{
    #[inline(always)]
    fn eq(&self, other: &Distance<R2, S2>) -> bool {
        let (a, b) = common_counts(*self, *other);
        a == b
    }
}

impl<R: Repr + Eq + Promote<R>, S: Scale> Eq for Distance<R, S> {}

impl<R1, S1, R2, S2> PartialOrd<Distance<R2, S2>> for Distance<R1, S1>
where
    R1: Promote<R2>,
    R2: Repr,
    S1: Scale,
    S2: Scale,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Distance<R2, S2>) -> Option<Ordering> {
        let (a, b) = common_counts(*self, *other);
        a.partial_cmp(&b)
    }
}

impl<R: Repr + Ord + Promote<R>, S: Scale> Ord for Distance<R, S> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.count().cmp(&other.count())
    }
}

impl<R1, S1, R2, S2> Add<Distance<R2, S2>> for Distance<R1, S1>
where
    R1: Promote<R2>,
    R2: Repr,
    S1: Scale,
    S2: Scale,
{
    type Output = Distance<Promoted<R1, R2>, CommonScale<S1, S2>>;

    #[inline(always)]
    fn add(self, rhs: Distance<R2, S2>) -> Self::Output {
        let (a, b) = common_counts(self, rhs);
        Distance::new(a + b)
    }
}

impl<R1, S1, R2, S2> Sub<Distance<R2, S2>> for Distance<R1, S1>
where
    R1: Promote<R2>,
    R2: Repr,
    S1: Scale,
    S2: Scale,
{
    type Output = Distance<Promoted<R1, R2>, CommonScale<S1, S2>>;

    #[inline(always)]
    fn sub(self, rhs: Distance<R2, S2>) -> Self::Output {
        let (a, b) = common_counts(self, rhs);
        Distance::new(a - b)
    }
}

impl<R1, S1, R2, S2> Div<Distance<R2, S2>> for Distance<R1, S1>
where
    R1: Promote<R2>,
    R2: Repr,
    S1: Scale,
    S2: Scale,
{
    type Output = Promoted<R1, R2>;

    #[inline(always)]
    fn div(self, rhs: Distance<R2, S2>) -> Self::Output {
        let (a, b) = common_counts(self, rhs);
        a / b
    }
}

impl<R1, S1, R2, S2> Rem<Distance<R2, S2>> for Distance<R1, S1>
where
    R1: Promote<R2>,
    R2: Repr,
    S1: Scale,
    S2: Scale,
{
    type Output = Distance<Promoted<R1, R2>, CommonScale<S1, S2>>;

    #[inline(always)]
    fn rem(self, rhs: Distance<R2, S2>) -> Self::Output {
        let (a, b) = common_counts(self, rhs);
        Distance::new(a % b)
    }
}

macro_rules! scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<R, S> Mul<$t> for Distance<R, S>
            where
                R: Promote<$t>,
                S: Scale,
            {
                type Output = Distance<Promoted<R, $t>, S>;

                #[inline(always)]
                fn mul(self, rhs: $t) -> Self::Output {
                    let lhs = repr_cast::<R, Promoted<R, $t>>(self.count());
                    Distance::new(lhs * repr_cast::<$t, Promoted<R, $t>>(rhs))
                }
            }

            impl<R, S> Mul<Distance<R, S>> for $t
            where
                $t: Promote<R>,
                R: Repr,
                S: Scale,
            {
                type Output = Distance<Promoted<$t, R>, S>;

                #[inline(always)]
                fn mul(self, rhs: Distance<R, S>) -> Self::Output {
                    let rhs = repr_cast::<R, Promoted<$t, R>>(rhs.count());
                    Distance::new(repr_cast::<$t, Promoted<$t, R>>(self) * rhs)
                }
            }

            impl<R, S> Div<$t> for Distance<R, S>
            where
                R: Promote<$t>,
                S: Scale,
            {
                type Output = Distance<Promoted<R, $t>, S>;

                #[inline(always)]
                fn div(self, rhs: $t) -> Self::Output {
                    let lhs = repr_cast::<R, Promoted<R, $t>>(self.count());
                    Distance::new(lhs / repr_cast::<$t, Promoted<R, $t>>(rhs))
                }
            }

            impl<R, S> Rem<$t> for Distance<R, S>
            where
                R: Promote<$t>,
                S: Scale,
            {
                type Output = Distance<Promoted<R, $t>, S>;

                #[inline(always)]
                fn rem(self, rhs: $t) -> Self::Output {
                    let lhs = repr_cast::<R, Promoted<R, $t>>(self.count());
                    Distance::new(lhs % repr_cast::<$t, Promoted<R, $t>>(rhs))
                }
            }
        )*
    };
}

scalar_ops!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl<R: Repr, S: Scale> Distance<R, S> {
    /// `self / rhs`, or [`DistanceError::DivisionByZero`] for a zero `rhs`.
    ///
    /// Unlike the `/` operator this also rejects a zero float divisor
    /// instead of producing an infinity or NaN.
    pub fn checked_div<T>(self, rhs: T) -> Result<Distance<Promoted<R, T>, S>, DistanceError>
    where
        R: Promote<T>,
        T: Repr,
    {
        if rhs.is_zero() {
            return Err(DistanceError::DivisionByZero);
        }
        Ok(Distance::new(
            repr_cast::<R, Promoted<R, T>>(self.count()) / repr_cast::<T, Promoted<R, T>>(rhs),
        ))
    }

    /// `self % rhs`, or [`DistanceError::DivisionByZero`] for a zero `rhs`.
    pub fn checked_rem<T>(self, rhs: T) -> Result<Distance<Promoted<R, T>, S>, DistanceError>
    where
        R: Promote<T>,
        T: Repr,
    {
        if rhs.is_zero() {
            return Err(DistanceError::DivisionByZero);
        }
        Ok(Distance::new(
            repr_cast::<R, Promoted<R, T>>(self.count()) % repr_cast::<T, Promoted<R, T>>(rhs),
        ))
    }

    /// The dimensionless ratio `self / other`, or
    /// [`DistanceError::DivisionByZero`] when `other` is zero.
    pub fn checked_ratio<R2, S2>(
        self,
        other: Distance<R2, S2>,
    ) -> Result<Promoted<R, R2>, DistanceError>
    where
        R: Promote<R2>,
        R2: Repr,
        S2: Scale,
    {
        let (a, b) = common_counts(self, other);
        if b.is_zero() {
            return Err(DistanceError::DivisionByZero);
        }
        Ok(a / b)
    }
}

#[cfg(feature = "approx")]
mod tolerant {
    //! Epsilon-tolerant comparison through the `approx` traits.
    //!
    //! Counts are compared in the common scale as `f64`. The default
    //! epsilon is `f32::EPSILON` whatever the representation width.

    use approx::{AbsDiffEq, RelativeEq};

    use super::common_counts;
    use crate::distance::Distance;
    use crate::repr::{Promote, Repr};
    use crate::scale::Scale;

    impl<R1, S1, R2, S2> AbsDiffEq<Distance<R2, S2>> for Distance<R1, S1>
    where
        R1: Promote<R2>,
        R2: Repr,
        S1: Scale,
        S2: Scale,
    {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::from(f32::EPSILON)
        }

        fn abs_diff_eq(&self, other: &Distance<R2, S2>, epsilon: f64) -> bool {
            let (a, b) = common_counts(*self, *other);
            a.as_f64().abs_diff_eq(&b.as_f64(), epsilon)
        }
    }

    impl<R1, S1, R2, S2> RelativeEq<Distance<R2, S2>> for Distance<R1, S1>
    where
        R1: Promote<R2>,
        R2: Repr,
        S1: Scale,
        S2: Scale,
    {
        fn default_max_relative() -> f64 {
            f64::from(f32::EPSILON)
        }

        fn relative_eq(&self, other: &Distance<R2, S2>, epsilon: f64, max_relative: f64) -> bool {
            let (a, b) = common_counts(*self, *other);
            a.as_f64().relative_eq(&b.as_f64(), epsilon, max_relative)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::distance::*;
    use crate::error::DistanceError;
    use proptest::prelude::*;

    crate::scale!(Yard = 1143 / 1250, "yd");
    crate::scale!(Foot = 381 / 1250, "ft");

    #[test]
    fn equality_across_units() {
        assert!(Meters::new(5u64) == Centimeters::new(500u64));
        assert!(Millimeters::new(5_000u32) == Meters::new(5i8));
        assert!(Meters::new(5u64) != Centimeters::new(501u64));
        assert!(Distance::<u32, Yard>::new(1) == Distance::<u32, Foot>::new(3));
    }

    #[test]
    fn equality_across_representations() {
        assert!(Meters::new(1.5f64) == Millimeters::new(1_500u16));
        assert!(Centimeters::new(2.0f32) == Centimeters::new(2i64));
    }

    #[test]
    fn exact_equality_has_no_tolerance() {
        let a = Meters::new(1.0f64);
        let b = Meters::new(1.0f64 + f64::EPSILON);
        assert!(a != b);
    }

    #[test]
    fn ordering_across_units() {
        assert!(Centimeters::new(99u32) < Meters::new(1u32));
        assert!(Kilometers::new(1u8) > Meters::new(999u16));
        assert!(Millimeters::new(10i32) <= Centimeters::new(1i32));
        assert!(Millimeters::new(10i32) >= Centimeters::new(1i32));
        assert!(Nanometers::new(1i64) > Megameters::new(-1i64));
    }

    #[test]
    fn ord_on_same_type() {
        let mut v = vec![Meters::new(3u8), Meters::new(1), Meters::new(2)];
        v.sort();
        let counts: Vec<u8> = v.iter().map(|d| d.count()).collect();
        assert_eq!(counts, [1, 2, 3]);
        assert_eq!(Meters::new(4u8).max(Meters::new(9)).count(), 9);
    }

    #[test]
    fn nan_is_unordered() {
        assert_eq!(
            Meters::new(f64::NAN).partial_cmp(&Meters::new(1.0f64)),
            None
        );
    }

    #[test]
    fn add_sub_in_common_scale() {
        let sum = Centimeters::new(1u64) + Meters::new(5u64);
        assert_eq!(sum.count(), 501);
        let diff = Centimeters::new(1u64) - Millimeters::new(2u64);
        assert_eq!(diff.count(), 8);
        let yards = Distance::<u32, Yard>::new(1) + Distance::<u32, Foot>::new(1);
        assert_eq!(yards.count(), 4);
        assert!(yards == Distance::<u32, Foot>::new(4));
    }

    #[test]
    fn add_promotes_representation() {
        let d = Meters::new(1u8) + Meters::new(-2i8);
        let count: i16 = d.count();
        assert_eq!(count, -1);
        let f = Meters::new(1u32) + Centimeters::new(0.5f32);
        let count: f64 = f.count();
        assert_eq!(count, 100.5);
    }

    #[test]
    fn scalar_multiplication_both_orders() {
        assert!(Centimeters::new(5u64) * 3u64 == Centimeters::new(15u64));
        assert!(3u64 * Centimeters::new(5u64) == Centimeters::new(15u64));
        let widened = Meters::new(200u8) * 2u32;
        assert_eq!(widened.count(), 400u32);
        let f = 0.5f64 * Meters::new(3i32);
        assert_eq!(f.count(), 1.5);
    }

    #[test]
    fn scalar_division_and_remainder() {
        assert!(Centimeters::new(5u64) / 5u64 == Centimeters::new(1u64));
        assert_eq!((Centimeters::new(7i32) % 4i32).count(), 3);
        assert_eq!((Meters::new(1.0f64) / 4.0f64).count(), 0.25);
    }

    #[test]
    fn distance_division_is_dimensionless() {
        let ratio: u64 = Centimeters::new(6u64) / Centimeters::new(2u64);
        assert_eq!(ratio, 3);
        assert_eq!(Meters::new(1u32) / Centimeters::new(25u32), 4);
    }

    #[test]
    fn distance_remainder() {
        assert!(Centimeters::new(5u64) % Centimeters::new(3u64) == Centimeters::new(2u64));
        assert_eq!((Meters::new(1u32) % Centimeters::new(30u32)).count(), 10);
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_panics() {
        let zero = std::hint::black_box(0u32);
        let _ = Meters::new(1u32) / zero;
    }

    #[test]
    fn extreme_scales_compare_within_range() {
        assert!(Megameters::new(18_446u64) < Nanometers::new(18_446_000_000_000_000_001u64));
        assert!(Megameters::new(1u64) > Nanometers::new(999_999_999_999_999u64));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "overflows its representation")]
    fn common_scale_overflow_panics_in_debug() {
        // 18_447 Mm is 1.8447e19 nm, past u64::MAX
        let _ = Megameters::new(18_447u64) > Nanometers::new(1_000_000_000_000_000_000u64);
    }

    #[test]
    fn float_division_by_zero_is_infinite() {
        assert!((Meters::new(1.0f64) / 0.0f64).count().is_infinite());
    }

    #[test]
    fn checked_division() {
        assert_eq!(
            Meters::new(6u32).checked_div(0u32),
            Err(DistanceError::DivisionByZero)
        );
        assert_eq!(
            Meters::new(6.0f64).checked_div(0.0f64),
            Err(DistanceError::DivisionByZero)
        );
        assert_eq!(Meters::new(6u32).checked_div(4u32).unwrap().count(), 1);
        assert_eq!(Meters::new(6u32).checked_rem(4u32).unwrap().count(), 2);
        assert!(Meters::new(6u32).checked_rem(0u8).is_err());
        assert_eq!(Meters::new(6u32).checked_ratio(Centimeters::new(200u32)), Ok(3));
        assert_eq!(
            Meters::new(6u32).checked_ratio(Centimeters::new(0u32)),
            Err(DistanceError::DivisionByZero)
        );
    }

    #[cfg(feature = "approx")]
    #[test]
    fn tolerant_equality() {
        use approx::{assert_abs_diff_eq, assert_relative_eq};

        let a = Meters::new(0.1f64 + 0.2f64);
        let b = Meters::new(0.3f64);
        assert!(a != b);
        assert_abs_diff_eq!(a, b);
        assert_relative_eq!(Meters::new(1.0f32), Millimeters::new(1_000.0f64));
    }

    fn arb_cm() -> impl Strategy<Value = Centimeters<i64>> {
        (-1_000_000i64..1_000_000).prop_map(Centimeters::new)
    }

    fn arb_mm() -> impl Strategy<Value = Millimeters<i64>> {
        (-1_000_000i64..1_000_000).prop_map(Millimeters::new)
    }

    fn arb_m() -> impl Strategy<Value = Meters<i64>> {
        (-1_000i64..1_000).prop_map(Meters::new)
    }

    proptest! {
        #[test]
        fn addition_commutes(a in arb_cm(), b in arb_mm()) {
            prop_assert!(a + b == b + a);
        }

        #[test]
        fn addition_associates(a in arb_cm(), b in arb_mm(), c in arb_m()) {
            prop_assert!((a + b) + c == a + (b + c));
        }

        #[test]
        fn sub_undoes_add(a in arb_cm(), b in arb_mm()) {
            prop_assert!((a + b) - b == a);
        }

        #[test]
        fn scalar_mul_commutes(a in arb_cm(), s in -1_000i64..1_000) {
            prop_assert!(a * s == s * a);
        }

        #[test]
        fn exact_division_inverts_mul(a in arb_cm(), s in 1i64..1_000) {
            prop_assert!((a * s) / s == a);
        }

        #[test]
        fn division_identity(a in arb_cm(), b in arb_cm()) {
            prop_assume!(b.count() != 0);
            prop_assert!((a / b) * b + (a % b) == a);
        }

        #[test]
        fn ordering_agrees_with_meters(a in arb_cm(), b in arb_mm()) {
            let in_mm = a.count() * 10;
            prop_assert_eq!(a < b, in_mm < b.count());
            prop_assert_eq!(a == b, in_mm == b.count());
        }
    }
}
