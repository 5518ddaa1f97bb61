//! Unit conversion between scales and representations.
//!
//! The factor from scale `S1` to `S2` is the reduced ratio `S1 / S2`,
//! evaluated as an associated constant. Depending on its shape the count
//! is passed through, divided, multiplied, or multiplied then divided;
//! all of it happens in a wide intermediate (`f64`, `i128` or `u128`) and
//! the result is narrowed to the target representation last.

use std::marker::PhantomData;

use num_traits::{NumCast, PrimInt};

use crate::distance::Distance;
use crate::error::DistanceError;
use crate::ratio::Ratio;
use crate::repr::Repr;
use crate::scale::Scale;

/// The constant conversion factor from scale `Src` to scale `Dst`.
pub struct Conversion<Src, Dst>(PhantomData<(Src, Dst)>);

impl<Src: Scale, Dst: Scale> Conversion<Src, Dst> {
    /// `Src / Dst` in lowest terms.
    pub const RATIO: Ratio = Src::RATIO.div(Dst::RATIO);
}

#[inline(always)]
fn apply_int<W: PrimInt>(v: W, num: W, den: W) -> W {
    let one = W::one();
    if num == one && den == one {
        v
    } else if num == one {
        v / den
    } else if den == one {
        v * num
    } else {
        v * num / den
    }
}

#[inline(always)]
fn checked_apply_int<W: PrimInt>(v: W, num: W, den: W) -> Option<W> {
    let one = W::one();
    if den == one {
        v.checked_mul(&num)
    } else if num == one {
        Some(v / den)
    } else {
        v.checked_mul(&num).map(|scaled| scaled / den)
    }
}

#[inline(always)]
fn apply_float(v: f64, ratio: Ratio) -> f64 {
    if ratio.is_one() {
        v
    } else if ratio.num() == 1 {
        v / ratio.den() as f64
    } else if ratio.den() == 1 {
        v * ratio.num() as f64
    } else {
        v * ratio.num() as f64 / ratio.den() as f64
    }
}

/// Rescale a count by `ratio`, converting from `A` to `B`.
///
/// Native overflow semantics apply to integer targets: a result that does
/// not fit `B` panics in debug builds and wraps in release builds, just
/// like `+` or `*` on `B` would. Float to integer saturates as `as` does.
#[inline(always)]
pub fn rescale<A: Repr, B: Repr>(v: A, ratio: Ratio) -> B {
    if A::IS_FLOAT || B::IS_FLOAT {
        B::cast_from_f64(apply_float(v.as_f64(), ratio))
    } else if A::IS_SIGNED || B::IS_SIGNED {
        let wide = apply_int(v.as_i128(), ratio.num() as i128, ratio.den() as i128);
        debug_assert!(
            <B as NumCast>::from(wide).is_some(),
            "distance count {wide} overflows its representation"
        );
        B::cast_from_i128(wide)
    } else {
        let wide = apply_int(v.as_u128(), ratio.num(), ratio.den());
        debug_assert!(
            <B as NumCast>::from(wide).is_some(),
            "distance count {wide} overflows its representation"
        );
        B::cast_from_u128(wide)
    }
}

/// Like [`rescale`], but `None` when the intermediate overflows or the
/// result does not fit `B` (including NaN or infinite floats into an
/// integer).
pub fn try_rescale<A: Repr, B: Repr>(v: A, ratio: Ratio) -> Option<B> {
    if A::IS_FLOAT || B::IS_FLOAT {
        let scaled = apply_float(v.as_f64(), ratio);
        if !B::IS_FLOAT && !scaled.is_finite() {
            return None;
        }
        <B as NumCast>::from(scaled)
    } else if A::IS_SIGNED || B::IS_SIGNED {
        let num = i128::try_from(ratio.num()).ok()?;
        let den = i128::try_from(ratio.den()).ok()?;
        <B as NumCast>::from(checked_apply_int(v.as_i128(), num, den)?)
    } else {
        <B as NumCast>::from(checked_apply_int(v.as_u128(), ratio.num(), ratio.den())?)
    }
}

impl<R: Repr, S: Scale> Distance<R, S> {
    /// Convert to scale `S2` and representation `R2`.
    ///
    /// ```
    /// use metric_core::{Centimeters, Meters};
    ///
    /// let m = Meters::new(2.5f64);
    /// let cm: Centimeters<u32> = m.cast();
    /// assert_eq!(cm.count(), 250);
    /// ```
    #[inline(always)]
    pub fn cast<R2: Repr, S2: Scale>(self) -> Distance<R2, S2> {
        Distance::new(rescale::<R, R2>(self.count(), Conversion::<S, S2>::RATIO))
    }

    /// Convert to scale `S2`, keeping the representation.
    ///
    /// Converting to a coarser unit with an integer representation
    /// truncates toward zero.
    #[inline(always)]
    pub fn in_unit<S2: Scale>(self) -> Distance<R, S2> {
        self.cast()
    }

    /// Convert like [`cast`](Self::cast), but report overflow instead of
    /// wrapping or saturating.
    ///
    /// ```
    /// use metric_core::{DistanceError, Kilometers, Millimeters};
    ///
    /// let ok: Millimeters<u32> = Kilometers::new(4u8).try_cast().unwrap();
    /// assert_eq!(ok.count(), 4_000_000);
    ///
    /// let err = Kilometers::new(5_000u32).try_cast::<u32, metric_core::Milli>();
    /// assert!(matches!(err, Err(DistanceError::Overflow { .. })));
    /// ```
    pub fn try_cast<R2: Repr, S2: Scale>(self) -> Result<Distance<R2, S2>, DistanceError> {
        let ratio = Conversion::<S, S2>::RATIO;
        try_rescale::<R, R2>(self.count(), ratio)
            .map(Distance::new)
            .ok_or(DistanceError::Overflow {
                num: ratio.num(),
                den: ratio.den(),
            })
    }
}

/// Free-function form of [`Distance::cast`], with the target named as a
/// whole distance type.
///
/// ```
/// use metric_core::{distance_cast, Kilometers, Meters};
///
/// let km = distance_cast::<Kilometers<f64>, _, _>(Meters::new(1500u32));
/// assert_eq!(km.count(), 1.5);
/// ```
#[inline(always)]
pub fn distance_cast<D, R, S>(d: Distance<R, S>) -> D
where
    D: DistanceType,
    R: Repr,
    S: Scale,
{
    D::from_distance(d)
}

/// Implemented by every [`Distance`]; lets generic code name a target
/// distance type as a single parameter.
pub trait DistanceType: Copy {
    /// The representation type.
    type Repr: Repr;
    /// The scale.
    type Scale: Scale;

    /// Convert any distance into `Self`.
    fn from_distance<R: Repr, S: Scale>(d: Distance<R, S>) -> Self;
}

impl<R: Repr, S: Scale> DistanceType for Distance<R, S> {
    type Repr = R;
    type Scale = S;

    #[inline(always)]
    fn from_distance<R2: Repr, S2: Scale>(d: Distance<R2, S2>) -> Self {
        d.cast()
    }
}
