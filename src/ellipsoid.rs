use crate::{Error, constants::{ANS_A, ANS_INV_F, GRS80_A, GRS80_INV_F, WGS84_A, WGS84_INV_F}, projections::krueger};

/// Reference ellipsoid defined by its semi-major axis and inverse flattening.
/// The remaining shape constants are derived once on construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    inverse_flattening: f64,
    f: f64,
    e2: f64,
    e: f64,
    n: f64,
}

impl Ellipsoid {
    /// Internal-only constructor that doesn't check the parameters
    fn new(a: f64, inverse_flattening: f64) -> Ellipsoid {
        let f = 1. / inverse_flattening;
        let e2 = f * (2. - f);

        Self {
            a,
            inverse_flattening,
            f,
            e2,
            e: e2.sqrt(),
            n: f / (2. - f),
        }
    }

    /// Derives the ellipsoidal constants from the semi-major axis (meters)
    /// and the inverse flattening. An infinite inverse flattening describes
    /// a sphere.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the semi-major axis isn't a positive
    /// finite number or if the inverse flattening isn't greater than `1`.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridconvert::Ellipsoid;
    ///
    /// let grs80 = Ellipsoid::create(6_378_137.0, 298.257222101).unwrap();
    /// assert!((grs80.third_flattening() - 0.0016792203946287).abs() < 1e-15);
    ///
    /// assert!(Ellipsoid::create(-1.0, 298.257222101).is_err());
    /// assert!(Ellipsoid::create(6_378_137.0, 1.0).is_err());
    /// ```
    pub fn create(a: f64, inverse_flattening: f64) -> Result<Ellipsoid, Error> {
        if !(a > 0. && a.is_finite()) {
            Err(Error::Configuration(format!("Semi-major axis {a} must be a positive finite length.")))
        } else if !(inverse_flattening > 1.) {
            Err(Error::Configuration(format!("Inverse flattening {inverse_flattening} must be greater than 1.")))
        } else {
            Ok(Ellipsoid::new(a, inverse_flattening))
        }
    }

    /// Sphere of the given radius, for which every flattening-derived
    /// constant is zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the radius isn't a positive finite length.
    pub fn sphere(radius: f64) -> Result<Ellipsoid, Error> {
        Ellipsoid::create(radius, f64::INFINITY)
    }

    /// Geodetic Reference System 1980, used by GDA94 and GDA2020.
    pub fn grs80() -> Ellipsoid {
        Ellipsoid::new(GRS80_A, GRS80_INV_F)
    }

    pub fn wgs84() -> Ellipsoid {
        Ellipsoid::new(WGS84_A, WGS84_INV_F)
    }

    /// Australian National Spheroid, used by AGD66.
    pub fn ans() -> Ellipsoid {
        Ellipsoid::new(ANS_A, ANS_INV_F)
    }

    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    #[inline]
    pub fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    #[inline]
    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// The squared eccentricity *e² = f(2 - f)*
    #[inline]
    pub fn eccentricity_squared(&self) -> f64 {
        self.e2
    }

    #[inline]
    pub fn eccentricity(&self) -> f64 {
        self.e
    }

    /// The third flattening *n = f / (2 - f)*
    #[inline]
    pub fn third_flattening(&self) -> f64 {
        self.n
    }

    /// Radius of the circle whose circumference equals the meridian
    /// ellipse's. Equal to the semi-major axis for a sphere.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridconvert::Ellipsoid;
    ///
    /// let a = Ellipsoid::grs80().rectifying_radius();
    /// assert!((a - 6_367_449.145771).abs() < 1e-6);
    ///
    /// let sphere = Ellipsoid::sphere(6_371_000.0).unwrap();
    /// assert_eq!(sphere.rectifying_radius(), 6_371_000.0);
    /// ```
    pub fn rectifying_radius(&self) -> f64 {
        krueger::rectifying_radius(self.a, self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grs80_constants() {
        let grs80 = Ellipsoid::grs80();
        assert_eq!(grs80.semi_major_axis(), 6_378_137.);
        assert!((grs80.flattening() - 1. / 298.257_222_101).abs() < 1e-18);
        assert!((grs80.eccentricity() - 0.081_819_191_042_815_8).abs() < 1e-12);
        assert!((grs80.eccentricity_squared() - grs80.eccentricity().powi(2)).abs() < 1e-16);
    }

    #[test]
    fn wgs84_and_grs80_are_close() {
        let wgs84 = Ellipsoid::wgs84();
        let grs80 = Ellipsoid::grs80();
        assert_eq!(wgs84.semi_major_axis(), grs80.semi_major_axis());
        assert!((wgs84.flattening() - grs80.flattening()).abs() < 1e-10);
    }

    #[test]
    fn sphere_has_no_flattening() {
        let sphere = Ellipsoid::sphere(1.).unwrap();
        assert_eq!(sphere.flattening(), 0.);
        assert_eq!(sphere.eccentricity(), 0.);
        assert_eq!(sphere.third_flattening(), 0.);
    }

    #[test]
    fn rejects_invalid_parameters() {
        for (a, inv_f) in [(0., 298.), (-6e6, 298.), (f64::NAN, 298.), (f64::INFINITY, 298.), (6e6, 1.), (6e6, 0.5), (6e6, -298.), (6e6, f64::NAN)] {
            assert!(matches!(Ellipsoid::create(a, inv_f), Err(Error::Configuration(_))), "{a} {inv_f}");
        }
    }
}
