//! Representation types: the primitive numbers a distance count is stored in.
//!
//! [`Repr`] is sealed and implemented for the twelve primitive integer and
//! float types, so a [`Distance`](crate::Distance) can never be used as
//! the representation of another distance. [`Promote`] picks the common
//! representation of two operands, and [`ReprFrom`] lists the implicit
//! conversions permitted when constructing a distance.

use std::fmt;

use num_traits::{Num, NumCast};

mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric type usable as a distance count.
///
/// The `as_*`/`cast_from_*` methods are plain `as` casts into and out of
/// the wide intermediates the conversion engine works in.
pub trait Repr:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + Num
    + NumCast
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Whether this is `f32` or `f64`.
    const IS_FLOAT: bool;
    /// Whether negative values are representable.
    const IS_SIGNED: bool;

    /// `self as i128`.
    fn as_i128(self) -> i128;
    /// `self as u128`.
    fn as_u128(self) -> u128;
    /// `self as f64`.
    fn as_f64(self) -> f64;
    /// `v as Self`.
    fn cast_from_i128(v: i128) -> Self;
    /// `v as Self`.
    fn cast_from_u128(v: u128) -> Self;
    /// `v as Self`.
    fn cast_from_f64(v: f64) -> Self;
}

macro_rules! impl_repr {
    ($($t:ty => float: $float:literal, signed: $signed:literal;)*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Repr for $t {
                const IS_FLOAT: bool = $float;
                const IS_SIGNED: bool = $signed;

                #[inline(always)]
                fn as_i128(self) -> i128 {
                    self as i128
                }
                #[inline(always)]
                fn as_u128(self) -> u128 {
                    self as u128
                }
                #[inline(always)]
                fn as_f64(self) -> f64 {
                    self as f64
                }
                #[inline(always)]
                fn cast_from_i128(v: i128) -> Self {
                    v as $t
                }
                #[inline(always)]
                fn cast_from_u128(v: u128) -> Self {
                    v as $t
                }
                #[inline(always)]
                fn cast_from_f64(v: f64) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_repr! {
    u8 => float: false, signed: false;
    u16 => float: false, signed: false;
    u32 => float: false, signed: false;
    u64 => float: false, signed: false;
    u128 => float: false, signed: false;
    i8 => float: false, signed: true;
    i16 => float: false, signed: true;
    i32 => float: false, signed: true;
    i64 => float: false, signed: true;
    i128 => float: false, signed: true;
    f32 => float: true, signed: true;
    f64 => float: true, signed: true;
}

/// Convert a count between representations with `as` semantics, routed
/// through the widest intermediate that holds both sides.
#[inline(always)]
pub fn repr_cast<A: Repr, B: Repr>(v: A) -> B {
    if A::IS_FLOAT || B::IS_FLOAT {
        B::cast_from_f64(v.as_f64())
    } else if A::IS_SIGNED || B::IS_SIGNED {
        B::cast_from_i128(v.as_i128())
    } else {
        B::cast_from_u128(v.as_u128())
    }
}

/// The common representation of `Self` and `Rhs`.
///
/// Symmetric: `Promoted<A, B>` and `Promoted<B, A>` are the same type.
/// Same signedness picks the wider type; mixed signedness picks the
/// narrowest signed type that holds both (`i128` once a 64- or 128-bit
/// unsigned is involved); a float paired with a 8/16-bit integer or `f32`
/// stays `f32`, everything else involving a float becomes `f64`.
pub trait Promote<Rhs: Repr>: Repr {
    /// The promoted type.
    type Output: Repr;
}

/// Shorthand for `<A as Promote<B>>::Output`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

macro_rules! promote_row {
    ($lhs:ty: $($rhs:ty => $out:ty),* $(,)?) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;
            }
        )*
    };
}

promote_row!(u8: u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128,
    i8 => i16, i16 => i16, i32 => i32, i64 => i64, i128 => i128, f32 => f32, f64 => f64);
promote_row!(u16: u8 => u16, u16 => u16, u32 => u32, u64 => u64, u128 => u128,
    i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128, f32 => f32, f64 => f64);
promote_row!(u32: u8 => u32, u16 => u32, u32 => u32, u64 => u64, u128 => u128,
    i8 => i64, i16 => i64, i32 => i64, i64 => i64, i128 => i128, f32 => f64, f64 => f64);
promote_row!(u64: u8 => u64, u16 => u64, u32 => u64, u64 => u64, u128 => u128,
    i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128, f32 => f64, f64 => f64);
promote_row!(u128: u8 => u128, u16 => u128, u32 => u128, u64 => u128, u128 => u128,
    i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128, f32 => f64, f64 => f64);
promote_row!(i8: u8 => i16, u16 => i32, u32 => i64, u64 => i128, u128 => i128,
    i8 => i8, i16 => i16, i32 => i32, i64 => i64, i128 => i128, f32 => f32, f64 => f64);
promote_row!(i16: u8 => i16, u16 => i32, u32 => i64, u64 => i128, u128 => i128,
    i8 => i16, i16 => i16, i32 => i32, i64 => i64, i128 => i128, f32 => f32, f64 => f64);
promote_row!(i32: u8 => i32, u16 => i32, u32 => i64, u64 => i128, u128 => i128,
    i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128, f32 => f64, f64 => f64);
promote_row!(i64: u8 => i64, u16 => i64, u32 => i64, u64 => i128, u128 => i128,
    i8 => i64, i16 => i64, i32 => i64, i64 => i64, i128 => i128, f32 => f64, f64 => f64);
promote_row!(i128: u8 => i128, u16 => i128, u32 => i128, u64 => i128, u128 => i128,
    i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128, f32 => f64, f64 => f64);
promote_row!(f32: u8 => f32, u16 => f32, u32 => f64, u64 => f64, u128 => f64,
    i8 => f32, i16 => f32, i32 => f64, i64 => f64, i128 => f64, f32 => f32, f64 => f64);
promote_row!(f64: u8 => f64, u16 => f64, u32 => f64, u64 => f64, u128 => f64,
    i8 => f64, i16 => f64, i32 => f64, i64 => f64, i128 => f64, f32 => f64, f64 => f64);

/// Implicit conversion of a count from representation `T`.
///
/// Implemented for lossless integer widenings (exactly the pairs the
/// standard library has `From` impls for) and for every source type when
/// `Self` is a float. Narrowing into an integer has no impl, so
/// `Distance::<u8, _>::from_count(300u16)` does not compile.
pub trait ReprFrom<T: Repr>: Repr {
    /// Convert `v` into `Self`.
    fn repr_from(v: T) -> Self;
}

macro_rules! repr_from {
    ($target:ty: $($src:ty),* $(,)?) => {
        $(
            impl ReprFrom<$src> for $target {
                #[inline(always)]
                fn repr_from(v: $src) -> Self {
                    v as $target
                }
            }
        )*
    };
}

repr_from!(u8: u8);
repr_from!(u16: u8, u16);
repr_from!(u32: u8, u16, u32);
repr_from!(u64: u8, u16, u32, u64);
repr_from!(u128: u8, u16, u32, u64, u128);
repr_from!(i8: i8);
repr_from!(i16: u8, i8, i16);
repr_from!(i32: u8, u16, i8, i16, i32);
repr_from!(i64: u8, u16, u32, i8, i16, i32, i64);
repr_from!(i128: u8, u16, u32, u64, i8, i16, i32, i64, i128);
repr_from!(f32: u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);
repr_from!(f64: u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);
