#[allow(dead_code)]
pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
}

/// Evaluate a polynomial, highest power first
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

/// Evaluate a polynomial whose coefficients are given as
/// `(numerator, denominator)` pairs, highest power first
pub(crate) fn polyval_ratio(p: &[(f64, f64)], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, (num, den)| acc*x + num / den)
}

pub(crate) trait GeoMath {
    fn eatanhe(&self, es: Self) -> Self;
}

impl GeoMath for f64 {
    /// `e * atanh(e * x)`, the term shared by the conformal latitude
    /// and the isometric latitude.
    fn eatanhe(&self, es: f64) -> f64 {
        es * (es * *self).atanh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyval_horner() {
        // 2x^2 + 3x + 4 at x = 2
        assert_eq!(polyval(&[2., 3., 4.], 2.), 18.);
        assert_eq!(polyval_ratio(&[(1., 2.), (3., 4.)], 2.), 1.75);
    }

    #[test]
    fn eatanhe_vanishes_for_zero_eccentricity() {
        assert_eq!(0.7_f64.eatanhe(0.), 0.);
        assert_eq!(0.5_f64.eatanhe(0.1), 0.1 * (0.05_f64).atanh());
    }
}
