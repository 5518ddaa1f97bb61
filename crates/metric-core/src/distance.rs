//! The [`Distance`] value type and its standard-unit aliases.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::Neg;

use crate::repr::{Repr, ReprFrom};
use crate::scale::{Centi, Deci, Kilo, Mega, Micro, Milli, Nano, Scale, Unit};

/// A distance of `count` units of scale `S`, stored as an `R`.
///
/// The unit lives only in the type: a `Distance<u64, Centi>` is exactly
/// as large as a `u64` and every operator compiles down to the raw
/// arithmetic plus the constant conversion factors involved.
///
/// Values of different scales or representations can be compared and
/// combined directly; see the [`ops`](crate::ops) module for the rules.
///
/// ```
/// use metric_core::{Centimeters, Meters};
///
/// let a = Meters::new(5u64);
/// let b = Centimeters::new(500u64);
/// assert!(a == b);
/// assert_eq!((a + b).to_string(), "1000 cm");
/// ```
pub struct Distance<R, S> {
    count: R,
    scale: PhantomData<S>,
}

/// Distance in nanometers.
pub type Nanometers<R> = Distance<R, Nano>;
/// Distance in micrometers.
pub type Micrometers<R> = Distance<R, Micro>;
/// Distance in millimeters.
pub type Millimeters<R> = Distance<R, Milli>;
/// Distance in centimeters.
pub type Centimeters<R> = Distance<R, Centi>;
/// Distance in decimeters.
pub type Decimeters<R> = Distance<R, Deci>;
/// Distance in meters.
pub type Meters<R> = Distance<R, Unit>;
/// Distance in kilometers.
pub type Kilometers<R> = Distance<R, Kilo>;
/// Distance in megameters.
pub type Megameters<R> = Distance<R, Mega>;

impl<R: Repr, S: Scale> Distance<R, S> {
    const SCALE_IS_POSITIVE: () = assert!(
        S::NUM > 0 && S::DEN > 0,
        "unit scale must have a strictly positive numerator and denominator"
    );

    /// A distance of `count` units.
    ///
    /// Fails to compile if `S` has a zero numerator or denominator.
    #[inline(always)]
    pub const fn new(count: R) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SCALE_IS_POSITIVE;
        Self {
            count,
            scale: PhantomData,
        }
    }

    /// A distance from a count of another representation.
    ///
    /// Only lossless integer widenings and conversions into a float
    /// representation are accepted:
    ///
    /// ```
    /// use metric_core::{Meters, Millimeters};
    ///
    /// let a = Meters::<i64>::from_count(7u32);
    /// let b = Millimeters::<f32>::from_count(2.5f64);
    /// assert_eq!(a.count(), 7);
    /// assert_eq!(b.count(), 2.5);
    /// ```
    ///
    /// ```compile_fail
    /// use metric_core::Meters;
    ///
    /// // f64 -> u64 would truncate.
    /// let _ = Meters::<u64>::from_count(2.5f64);
    /// ```
    #[inline(always)]
    pub fn from_count<T: Repr>(count: T) -> Self
    where
        R: ReprFrom<T>,
    {
        Self::new(R::repr_from(count))
    }

    /// A zero distance.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::new(R::zero())
    }

    /// The stored magnitude, in units of `S`.
    #[inline(always)]
    pub const fn count(&self) -> R {
        self.count
    }
}

impl<R: Repr, S: Scale> Clone for Distance<R, S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Repr, S: Scale> Copy for Distance<R, S> {}

impl<R: Repr, S: Scale> Default for Distance<R, S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Repr, S: Scale> fmt::Debug for Distance<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Distance")
            .field("count", &self.count)
            .field("scale", &format_args!("{}", S::RATIO))
            .finish()
    }
}

impl<R: Repr + Hash, S: Scale> Hash for Distance<R, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count.hash(state);
    }
}

impl<R: Repr + Neg<Output = R>, S: Scale> Neg for Distance<R, S> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.count)
    }
}

impl<R: Repr, S: Scale> Sum for Distance<R, S> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.fold(R::zero(), |acc, d| acc + d.count))
    }
}

impl<'a, R: Repr, S: Scale> Sum<&'a Distance<R, S>> for Distance<R, S> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// Mutating profile. Compound assignment only accepts the exact same
// distance type or a bare count, so it never rescales in place.
#[cfg(feature = "compound-assign")]
mod compound {
    use super::Distance;
    use crate::repr::Repr;
    use crate::scale::Scale;
    use std::ops::{AddAssign, DivAssign, MulAssign, RemAssign, SubAssign};

    impl<R: Repr, S: Scale> AddAssign for Distance<R, S> {
        #[inline(always)]
        fn add_assign(&mut self, rhs: Self) {
            self.count = self.count + rhs.count;
        }
    }

    impl<R: Repr, S: Scale> SubAssign for Distance<R, S> {
        #[inline(always)]
        fn sub_assign(&mut self, rhs: Self) {
            self.count = self.count - rhs.count;
        }
    }

    impl<R: Repr, S: Scale> MulAssign<R> for Distance<R, S> {
        #[inline(always)]
        fn mul_assign(&mut self, rhs: R) {
            self.count = self.count * rhs;
        }
    }

    impl<R: Repr, S: Scale> DivAssign<R> for Distance<R, S> {
        #[inline(always)]
        fn div_assign(&mut self, rhs: R) {
            self.count = self.count / rhs;
        }
    }

    impl<R: Repr, S: Scale> RemAssign<R> for Distance<R, S> {
        #[inline(always)]
        fn rem_assign(&mut self, rhs: R) {
            self.count = self.count % rhs;
        }
    }

    impl<R: Repr, S: Scale> Distance<R, S> {
        /// Add one unit, then return the updated distance.
        pub fn increment(&mut self) -> Self {
            self.count = self.count + R::one();
            *self
        }

        /// Subtract one unit, then return the updated distance.
        pub fn decrement(&mut self) -> Self {
            self.count = self.count - R::one();
            *self
        }

        /// Add one unit, returning the distance as it was before.
        pub fn post_increment(&mut self) -> Self {
            let before = *self;
            self.count = self.count + R::one();
            before
        }

        /// Subtract one unit, returning the distance as it was before.
        pub fn post_decrement(&mut self) -> Self {
            let before = *self;
            self.count = self.count - R::one();
            before
        }
    }
}
