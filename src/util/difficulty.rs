use std::f64::consts::{PI, SQRT_2};

use crate::util::float_ext::FloatExt;

pub const fn bpm_to_milliseconds(bpm: f64, delimiter: Option<i32>) -> f64 {
    60_000.0 / i32_unwrap_or(delimiter, 4) as f64 / bpm
}

pub const fn milliseconds_to_bpm(ms: f64, delimiter: Option<i32>) -> f64 {
    60_000.0 / (ms * i32_unwrap_or(delimiter, 4) as f64)
}

// `Option::unwrap_or` is not const
const fn i32_unwrap_or(option: Option<i32>, default: i32) -> i32 {
    match option {
        Some(value) => value,
        None => default,
    }
}

/// The logistic curve every evaluator goes through.
///
/// `max_value / (1 + exp(multiplier * (midpoint_offset - x)))`, i.e. a
/// sigmoid centered on `midpoint_offset` whose steepness is `multiplier`
/// (the reciprocal of the curve's scale).
pub fn logistic(x: f64, midpoint_offset: f64, multiplier: f64, max_value: Option<f64>) -> f64 {
    max_value.unwrap_or(1.0) / (1.0 + f64::exp(multiplier * (midpoint_offset - x)))
}

/// [`logistic`] with a precomputed exponent.
pub fn logistic_exp(exp: f64, max_value: Option<f64>) -> f64 {
    max_value.unwrap_or(1.0) / (1.0 + f64::exp(exp))
}

/// The `p`-norm of the given values, also used as power mean for combining
/// skill ratings.
pub fn norm<const N: usize>(p: f64, values: [f64; N]) -> f64 {
    values
        .into_iter()
        .map(|x| f64::powf(x, p))
        .sum::<f64>()
        .powf(p.recip())
}

pub fn smoothstep_bell_curve(x: f64, mean: f64, width: f64) -> f64 {
    let mut new_x = x;

    new_x -= mean;
    new_x = if new_x > 0.0 {
        width - new_x
    } else {
        width + new_x
    };

    smoothstep(new_x, 0.0, width)
}

pub const fn smoothstep(x: f64, start: f64, end: f64) -> f64 {
    let x = reverse_lerp(x, start, end);

    x * x * (3.0 - 2.0 * x)
}

pub const fn smootherstep(x: f64, start: f64, end: f64) -> f64 {
    let x = reverse_lerp(x, start, end);

    x * x * x * (x * (6.0 * x - 15.0) + 10.0)
}

pub const fn reverse_lerp(x: f64, start: f64, end: f64) -> f64 {
    f64::clamp((x - start) / (end - start), 0.0, 1.0)
}

/// Maps a difficulty setting in `0..=10` onto a range whose middle value is
/// reached at 5.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid + (mid - min) * (difficulty - 5.0) / 5.0
    } else {
        mid
    }
}

pub fn erf(x: f64) -> f64 {
    #![expect(clippy::unreadable_literal, reason = "calibration literals")]

    if FloatExt::eq(x, 0.0) {
        return 0.0;
    }

    if x.is_infinite() {
        return x.signum();
    }

    if x.is_nan() {
        return f64::NAN;
    }

    // Abramowitz and Stegun formula 7.1.26
    let t = 1.0 / (1.0 + 0.3275911 * f64::abs(x));

    let tau = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));

    let erf = 1.0 - tau * f64::exp(-x * x);

    if x >= 0.0 { erf } else { -erf }
}

pub fn erf_inv(mut x: f64) -> f64 {
    // Winitzki approximation
    const A: f64 = 0.147;

    if x <= -1.0 {
        return f64::NEG_INFINITY;
    }

    if x >= 1.0 {
        return f64::INFINITY;
    }

    if FloatExt::eq(x, 0.0) {
        return 0.0;
    }

    let sgn = f64::signum(x);
    x = f64::abs(x);

    let ln = f64::ln(1.0 - x * x);
    let t1 = 2.0 / (PI * A) + ln / 2.0;
    let t2 = ln / A;
    let base_approx = f64::sqrt(t1 * t1 - t2) - t1;

    // Correction reduces max error from -0.005 to -0.00045.
    let c = if x >= 0.85 {
        f64::powf((x - 0.85) / 0.293, 8.0)
    } else {
        0.0
    };

    sgn * (f64::sqrt(base_approx) + c)
}

/// One-tailed 99% z-score.
const Z: f64 = 2.326_347_874_04;

/// Estimates an upper bound of the standard deviation of hit errors.
///
/// `great_hits` out of `total_hits` landed inside `great_hit_window`. The
/// proportion is bounded from below through the Wilson score interval and
/// then converted into a deviation assuming normally distributed hit
/// errors. Returns `None` if no great hits were recorded, there were no
/// hits at all, or the window is non-positive.
pub fn deviation_upper_bound(
    great_hits: u32,
    total_hits: u32,
    great_hit_window: f64,
) -> Option<f64> {
    if great_hits == 0 || total_hits == 0 || great_hit_window.is_nan() || great_hit_window <= 0.0 {
        return None;
    }

    let n = f64::from(total_hits);
    let p = f64::from(great_hits.min(total_hits)) / n;
    let z2 = Z * Z;

    let p_lower_bound =
        (n * p + z2 / 2.0) / (n + z2) - Z / (n + z2) * f64::sqrt(n * p * (1.0 - p) + z2 / 4.0);

    let deviation = great_hit_window / (SQRT_2 * erf_inv(p_lower_bound));

    deviation.is_finite().then_some(deviation)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn logistic_midpoint() {
        assert!((logistic(4.0, 4.0, 9.0, None) - 0.5).abs() < 1e-12);

        let expected = 1.1 / (1.0 + f64::exp(8.8));
        assert!((logistic(0.0, 0.88, 10.0, Some(1.1)) - expected).abs() < 1e-12);
    }

    #[test]
    fn norm_is_power_mean() {
        assert!((norm(2.0, [3.0, 4.0]) - 5.0).abs() < 1e-12);
        assert!((norm(1.1, [2.0, 0.0, 0.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn difficulty_range_endpoints() {
        assert!((difficulty_range(0.0, 1800.0, 1200.0, 450.0) - 1800.0).abs() < 1e-9);
        assert!((difficulty_range(5.0, 1800.0, 1200.0, 450.0) - 1200.0).abs() < 1e-9);
        assert!((difficulty_range(10.0, 1800.0, 1200.0, 450.0) - 450.0).abs() < 1e-9);
    }

    #[test]
    fn erf_inv_inverts_erf() {
        for x in [0.1, 0.5, 0.9, 0.99] {
            assert!((erf(erf_inv(x)) - x).abs() < 1e-3, "x={x}");
        }

        assert!(erf_inv(1.0).is_infinite());
        assert!(erf_inv(-1.0).is_infinite());
    }

    #[test]
    fn perfect_proportion_has_finite_deviation() {
        let deviation = deviation_upper_bound(1000, 1000, 35.0).unwrap();
        assert!(deviation.is_finite());
        assert!(deviation > 0.0);
    }

    #[test]
    fn unknown_deviation() {
        assert_eq!(deviation_upper_bound(0, 100, 35.0), None);
        assert_eq!(deviation_upper_bound(10, 100, 0.0), None);
        assert_eq!(deviation_upper_bound(10, 100, -5.0), None);
        assert_eq!(deviation_upper_bound(0, 0, 35.0), None);
    }

    proptest! {
        #[test]
        fn more_greats_lower_deviation(total in 1_u32..5000, ratio in 0.01_f64..0.99) {
            let greats = ((f64::from(total) * ratio) as u32).max(1);
            prop_assume!(greats < total);

            let fewer = deviation_upper_bound(greats, total, 35.0).unwrap();
            let more = deviation_upper_bound(greats + 1, total, 35.0).unwrap();

            prop_assert!(more <= fewer);
        }
    }
}
