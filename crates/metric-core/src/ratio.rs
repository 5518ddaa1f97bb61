//! Compile-time rational arithmetic backing unit scales.
//!
//! Everything here is `const fn` so that scale ratios, conversion factors
//! and common scales fold into associated constants.

use std::fmt;

/// Greatest common divisor. `gcd(0, 0) == 0`.
pub const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple. Either argument being zero yields zero.
pub const fn lcm(a: u128, b: u128) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)) * b
}

/// A positive rational number `num / den`, always kept in lowest terms.
///
/// Used as the compile-time size of a unit relative to one meter, and as
/// the factor applied when converting between two units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: u128,
    den: u128,
}

impl Ratio {
    /// The ratio `1/1`.
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    /// Build a ratio and reduce it to lowest terms.
    ///
    /// Panics (at compile time when used in a constant) if `den` is zero.
    pub const fn new(num: u128, den: u128) -> Self {
        assert!(den != 0, "ratio denominator must be non-zero");
        let g = gcd(num, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// Numerator in lowest terms.
    pub const fn num(self) -> u128 {
        self.num
    }

    /// Denominator in lowest terms.
    pub const fn den(self) -> u128 {
        self.den
    }

    /// `self / other`, reduced.
    ///
    /// Cross-cancels before multiplying so that large but reducible
    /// ratios (nanometer over megameter) stay well inside `u128`.
    pub const fn div(self, other: Ratio) -> Ratio {
        assert!(other.num != 0, "cannot divide by a zero ratio");
        let g_num = gcd(self.num, other.num);
        let g_den = gcd(self.den, other.den);
        Ratio {
            num: (self.num / g_num) * (other.den / g_den),
            den: (self.den / g_den) * (other.num / g_num),
        }
    }

    /// The common ratio of two ratios: `gcd(num) / lcm(den)`.
    ///
    /// Both inputs are integer multiples of the result, so converting a
    /// value from either ratio into it is a pure multiplication.
    pub const fn common(self, other: Ratio) -> Ratio {
        Ratio::new(gcd(self.num, other.num), lcm(self.den, other.den))
    }

    /// True for `1/1`.
    pub const fn is_one(self) -> bool {
        self.num == 1 && self.den == 1
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
