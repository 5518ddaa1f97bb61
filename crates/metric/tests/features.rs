//! Integration test: the optional behavior profiles.
//!
//! The dev-dependency on `metric-core` turns on `approx` and
//! `compound-assign` for every test build, so these always run.

use metric::prelude::*;

#[test]
fn default_equality_is_exact() {
    let a = Meters::new(0.1f64 + 0.2f64);
    let b = Meters::new(0.3f64);
    assert!(a != b);
}

mod tolerant {
    use approx::{abs_diff_eq, assert_abs_diff_eq, assert_relative_eq, relative_ne};
    use metric::literals::float::{cm, m, mm};
    use metric::prelude::*;

    #[test]
    fn rounding_noise_is_tolerated() {
        assert_abs_diff_eq!(m(0.1) + m(0.2), m(0.3));
        assert_relative_eq!(cm(0.1) + mm(0.2), mm(1.2));
    }

    #[test]
    fn epsilon_is_f32_regardless_of_width() {
        let base = Meters::new(1.0f64);
        let nudged = Meters::new(1.0f64 + 1e-9);
        assert!(abs_diff_eq!(base, nudged));
        assert!(!abs_diff_eq!(base, Meters::new(1.001f64)));
    }

    #[test]
    fn real_differences_are_not_tolerated() {
        assert!(relative_ne!(m(1.0), cm(99.0)));
    }

    #[test]
    fn mixed_representations() {
        assert_relative_eq!(Centimeters::new(150u32), Meters::new(1.5f32));
    }
}

mod compound {
    use metric::literals::cm;
    use metric::prelude::*;

    #[test]
    fn assign_operators() {
        let mut d = cm(10);
        d += cm(5);
        assert!(d == cm(15));
        d -= cm(3);
        assert!(d == cm(12));
        d *= 2;
        assert!(d == cm(24));
        d /= 5;
        assert!(d == cm(4));
        d %= 3;
        assert!(d == cm(1));
    }

    #[test]
    fn prefix_and_postfix_steps() {
        let mut d = Millimeters::new(7i32);
        assert!(d.increment() == Millimeters::new(8i32));
        assert!(d.post_increment() == Millimeters::new(8i32));
        assert!(d == Millimeters::new(9i32));
        assert!(d.decrement() == Millimeters::new(8i32));
        assert!(d.post_decrement() == Millimeters::new(8i32));
        assert!(d == Millimeters::new(7i32));
    }
}
