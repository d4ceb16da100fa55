use crate::{HsError, HsResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> HsResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HsError::NonFinite { what, value: v })
    }
}

/// Clamp a value between min and max.
///
/// Comparison based: NaN is returned unchanged, infinities land on a bound.
pub fn clamp(value: Real, min: Real, max: Real) -> Real {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn clamp_bounds_and_nan() {
        assert_eq!(clamp(-5.0, 40.0, 95.0), 40.0);
        assert_eq!(clamp(120.0, 40.0, 95.0), 95.0);
        assert_eq!(clamp(61.5, 40.0, 95.0), 61.5);
        assert_eq!(clamp(Real::INFINITY, 40.0, 95.0), 95.0);
        assert_eq!(clamp(Real::NEG_INFINITY, 40.0, 95.0), 40.0);
        assert!(clamp(Real::NAN, 40.0, 95.0).is_nan());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clamp_stays_in_range(v in -1e6_f64..1e6_f64) {
            let c = clamp(v, 40.0, 95.0);
            prop_assert!((40.0..=95.0).contains(&c));
        }
    }
}
