use crate::utility::GeoMath;

/// Latitude on the conformal sphere, along with the intermediate terms the
/// scale factor needs later on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConformalLatitude {
    /// Geographic latitude in radians
    pub phi: f64,
    /// tan(phi)
    pub t: f64,
    pub sigma: f64,
    /// tan of the conformal latitude
    pub t_prime: f64,
    /// Conformal latitude in radians
    pub latitude: f64,
}

impl ConformalLatitude {
    /// Maps the geographic latitude `phi` (radians) onto the conformal sphere
    /// of an ellipsoid with eccentricity `e`.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridconvert::projections::conformal::ConformalLatitude;
    ///
    /// let phi = 0.75_f64;
    /// let sphere = ConformalLatitude::compute(phi, 0.0);
    ///
    /// assert_eq!(sphere.sigma, 0.0);
    /// assert_eq!(sphere.t_prime, phi.tan());
    /// ```
    pub fn compute(phi: f64, e: f64) -> ConformalLatitude {
        let t = phi.tan();
        let t1 = (1. + t.powi(2)).sqrt();
        let sigma = (t / t1).eatanhe(e).sinh();
        let t_prime = t * (1. + sigma.powi(2)).sqrt() - sigma * t1;

        Self {
            phi,
            t,
            sigma,
            t_prime,
            latitude: t_prime.atan(),
        }
    }
}

/// Normalised Gauss-Schreiber coordinates on the conformal sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussSchreiber {
    /// Northing-like ratio u/a
    pub epsilon_prime: f64,
    /// Easting-like ratio v/a
    pub n_prime: f64,
}

impl GaussSchreiber {
    /// Projects a point with conformal tangent `t_prime` at `omega` radians from
    /// the central meridian. Loses accuracy as `omega` approaches a quarter turn;
    /// keep it within the zone.
    pub fn project(t_prime: f64, omega: f64, a: f64) -> GaussSchreiber {
        let (sin_omega, cos_omega) = omega.sin_cos();

        let u = a * (t_prime / cos_omega).atan();
        let v = a * (sin_omega / (t_prime.powi(2) + cos_omega.powi(2)).sqrt()).asinh();

        Self {
            epsilon_prime: u / a,
            n_prime: v / a,
        }
    }
}
