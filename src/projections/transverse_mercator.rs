use tracing::{debug, trace};

use crate::{
    Ellipsoid, Error, ForwardProjection, GridConfig, GridPoint, LatLon,
    projections::{
        conformal::{ConformalLatitude, GaussSchreiber},
        krueger::KruegerCoefficients,
    },
};

/// Normalised transverse Mercator coordinates: the Gauss-Schreiber ratios
/// with the Krueger series correction applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TmRatios {
    /// Scaled by the rectifying radius, gives the X (easting) coordinate
    pub n: f64,
    /// Scaled by the rectifying radius, gives the Y (northing) coordinate
    pub e: f64,
}

impl TmRatios {
    pub fn compute(n_prime: f64, epsilon_prime: f64, alpha: &KruegerCoefficients) -> TmRatios {
        let (dn, de) = alpha
            .iter()
            .fold((0_f64, 0_f64), |(dn, de), (order, alpha)| {
                let k = f64::from(order);
                (
                    dn + alpha * (k * epsilon_prime).cos() * (k * n_prime).sinh(),
                    de + alpha * (k * epsilon_prime).sin() * (k * n_prime).cosh(),
                )
            });

        Self {
            n: n_prime + dn,
            e: epsilon_prime + de,
        }
    }
}

/// The `(p, q)` terms of the scale factor and grid convergence.
pub fn pq_coefficients(alpha: &KruegerCoefficients, epsilon_prime: f64, n_prime: f64) -> (f64, f64) {
    let (p, q) = alpha
        .iter()
        .fold((0_f64, 0_f64), |(p, q), (order, alpha)| {
            let k = f64::from(order);
            (
                p + k * alpha * (k * epsilon_prime).cos() * (k * n_prime).cosh(),
                q + k * alpha * (k * epsilon_prime).sin() * (k * n_prime).sinh(),
            )
        });

    (1. + p, -q)
}

/// Scales normalised coordinates to the grid, returning `(easting, northing)`.
pub fn assemble(
    ratios: &TmRatios,
    rectifying_radius: f64,
    central_scale_factor: f64,
    false_easting: f64,
    false_northing: f64,
) -> (f64, f64) {
    let x = rectifying_radius * ratios.n;
    let y = rectifying_radius * ratios.e;

    (
        central_scale_factor * x + false_easting,
        central_scale_factor * y + false_northing,
    )
}

/// Point scale factor and grid convergence (degrees) of a point `omega`
/// radians from the central meridian. The convergence is reported as a
/// magnitude.
pub fn scale_and_convergence(
    (p, q): (f64, f64),
    rectifying_radius: f64,
    ellipsoid: &Ellipsoid,
    central_scale_factor: f64,
    conformal: &ConformalLatitude,
    omega: f64,
) -> (f64, f64) {
    let a = ellipsoid.semi_major_axis();
    let e2 = ellipsoid.eccentricity_squared();
    let t = conformal.t;
    let t_prime = conformal.t_prime;

    let m = central_scale_factor * (rectifying_radius / a) * (q.powi(2) + p.powi(2)).sqrt() * (
        (1. + t.powi(2)).sqrt() * (1. - e2 * conformal.phi.sin().powi(2)).sqrt()
        /
        (t_prime.powi(2) + omega.cos().powi(2)).sqrt()
    );

    let gamma = (q / p).abs().atan()
        + ((t_prime * omega.tan()).abs() / (1. + t_prime.powi(2)).sqrt()).atan();

    (m, gamma.to_degrees())
}

/// Forward transverse Mercator projection using the Krueger n-series to the
/// 8th order in the third flattening, accurate well below a millimeter within
/// a zone.
#[derive(Clone, Debug)]
pub struct TransverseMercator {
    config: GridConfig,
    alpha: KruegerCoefficients,
    rectifying_radius: f64,
}

impl TransverseMercator {
    pub fn new(config: GridConfig) -> TransverseMercator {
        let ellipsoid = config.ellipsoid();
        let alpha = KruegerCoefficients::compute(ellipsoid.third_flattening());
        // Radius of the circle with the same circumference as the meridian
        let rectifying_radius = ellipsoid.rectifying_radius();

        debug!(
            grid = config.name(),
            a = ellipsoid.semi_major_axis(),
            inverse_flattening = ellipsoid.inverse_flattening(),
            n = ellipsoid.third_flattening(),
            rectifying_radius,
            "derived transverse mercator constants"
        );

        Self {
            config,
            alpha,
            rectifying_radius,
        }
    }

    pub fn mga2020() -> TransverseMercator {
        TransverseMercator::new(GridConfig::mga2020())
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn coefficients(&self) -> &KruegerCoefficients {
        &self.alpha
    }

    pub fn rectifying_radius(&self) -> f64 {
        self.rectifying_radius
    }

    /// Projects a latitude/longitude pair given in decimal degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputDomain`] if the coordinate is outside
    /// `(-90, 90] x (-180, 180)` and [`Error::Configuration`] if its zone
    /// isn't part of the grid.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridconvert::{GridConfig, TransverseMercator};
    ///
    /// let tm = TransverseMercator::new(GridConfig::mga2020());
    /// let point = tm.project(-37.81, 144.96).unwrap();
    ///
    /// assert_eq!(point.zone(), 55);
    /// assert!((point.easting() - 320_422.8203).abs() < 1e-3);
    /// assert!((point.northing() - 5_813_305.2226).abs() < 1e-3);
    ///
    /// // Greenwich is not on the Map Grid of Australia
    /// assert!(tm.project(51.48, 0.0).is_err());
    /// ```
    pub fn project(&self, latitude: f64, longitude: f64) -> Result<GridPoint, Error> {
        self.forward(&LatLon::create(latitude, longitude)?)
    }
}

impl ForwardProjection for TransverseMercator {
    fn forward(&self, point: &LatLon) -> Result<GridPoint, Error> {
        point.validate()?;

        let ellipsoid = self.config.ellipsoid();
        let k0 = self.config.central_scale_factor();
        let zone = self.config.zones().resolve(point.longitude)?;

        let phi = point.latitude.to_radians();
        let omega = point.longitude.to_radians() - zone.central_meridian.to_radians();

        let conformal = ConformalLatitude::compute(phi, ellipsoid.eccentricity());
        let gauss_schreiber = GaussSchreiber::project(conformal.t_prime, omega, ellipsoid.semi_major_axis());
        let ratios = TmRatios::compute(gauss_schreiber.n_prime, gauss_schreiber.epsilon_prime, &self.alpha);

        let (easting, northing) = assemble(
            &ratios,
            self.rectifying_radius,
            k0,
            self.config.false_easting(),
            self.config.false_northing(),
        );

        let pq = pq_coefficients(&self.alpha, gauss_schreiber.epsilon_prime, gauss_schreiber.n_prime);
        let (point_scale_factor, grid_convergence) =
            scale_and_convergence(pq, self.rectifying_radius, ellipsoid, k0, &conformal, omega);

        trace!(
            grid = self.config.name(),
            %point,
            zone = zone.index,
            omega,
            easting,
            northing,
            point_scale_factor,
            grid_convergence,
            "projected point"
        );

        Ok(GridPoint::new(zone.index, easting, northing, point_scale_factor, grid_convergence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_series_is_identity() {
        let alpha = KruegerCoefficients::compute(0.);
        let ratios = TmRatios::compute(0.02, -0.4, &alpha);
        assert_eq!(ratios, TmRatios { n: 0.02, e: -0.4 });
        assert_eq!(pq_coefficients(&alpha, -0.4, 0.02), (1., 0.));
    }

    #[test]
    fn central_meridian_has_no_convergence() {
        let tm = TransverseMercator::mga2020();
        for lat in [-43.5, -37., -23.670_123_89, -10.] {
            let point = tm.project(lat, 141.).unwrap();
            assert_eq!(point.zone(), 54);
            assert_eq!(point.easting(), 500_000.);
            assert_eq!(point.grid_convergence(), 0.);
            assert!((point.point_scale_factor() - 0.9996).abs() < 1e-12);
        }
    }

    #[test]
    fn central_meridian_still_has_series_northing() {
        let alpha = KruegerCoefficients::compute(0.001_679_220_394_628_744_8);
        let ratios = TmRatios::compute(0., -0.6, &alpha);
        assert_eq!(ratios.n, 0.);
        assert!((ratios.e - -0.6).abs() > 1e-4);
    }

    #[test]
    fn scale_grows_away_from_central_meridian() {
        let tm = TransverseMercator::mga2020();
        let near = tm.project(-30., 141.5).unwrap();
        let far = tm.project(-30., 143.5).unwrap();

        assert!(near.point_scale_factor() > 0.9996);
        assert!(far.point_scale_factor() > near.point_scale_factor());
        assert!(far.grid_convergence() > near.grid_convergence());
    }

    #[test]
    fn symmetric_about_central_meridian() {
        let tm = TransverseMercator::mga2020();
        let west = tm.project(-30., 139.).unwrap();
        let east = tm.project(-30., 143.).unwrap();

        assert!((west.easting() - 500_000. + east.easting() - 500_000.).abs() < 1e-6);
        assert!((west.northing() - east.northing()).abs() < 1e-6);
        assert!((west.point_scale_factor() - east.point_scale_factor()).abs() < 1e-12);
        assert!((west.grid_convergence() - east.grid_convergence()).abs() < 1e-10);
    }

    #[test]
    fn north_pole() {
        let point = TransverseMercator::mga2020().project(90., 135.).unwrap();
        assert_eq!(point.zone(), 53);
        assert_eq!(point.easting(), 500_000.);
        assert!((point.northing() - 19_997_964.942_9).abs() < 1e-3);
        assert!((point.point_scale_factor() - 0.9996).abs() < 1e-12);
    }

    #[test]
    fn rejects_unvalidated_point() {
        let point = LatLon { latitude: -95., longitude: 135. };
        assert!(matches!(TransverseMercator::mga2020().forward(&point), Err(Error::InputDomain(_))));
    }
}
