use std::fmt::Display;

use crate::Error;

/// Result of a forward projection: grid coordinates in meters, the point
/// scale factor and the grid convergence in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub(crate) zone: i32,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
    #[cfg_attr(feature = "serde", serde(alias = "m"))]
    pub(crate) point_scale_factor: f64,
    #[cfg_attr(feature = "serde", serde(alias = "gamma"))]
    pub(crate) grid_convergence: f64,
}

impl GridPoint {
    pub(crate) fn new(zone: i32, easting: f64, northing: f64, point_scale_factor: f64, grid_convergence: f64) -> GridPoint {
        Self {
            zone,
            easting,
            northing,
            point_scale_factor,
            grid_convergence,
        }
    }

    #[inline]
    pub fn zone(&self) -> i32 {
        self.zone
    }

    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Ratio of a small grid distance to the matching ellipsoid distance.
    #[inline]
    pub fn point_scale_factor(&self) -> f64 {
        self.point_scale_factor
    }

    /// Angle in degrees between grid north and true north.
    #[inline]
    pub fn grid_convergence(&self) -> f64 {
        self.grid_convergence
    }

    /// Checks the point scale factor against a known value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericConsistency`] if it differs from `expected` by
    /// more than `tolerance`.
    ///
    /// # Usage
    ///
    /// ```
    /// let point = gridconvert::geographic_to_grid(-23.67012389, 133.8855133).unwrap();
    ///
    /// assert!(point.check_scale_factor(0.99975953924774, 5e-11).is_ok());
    /// assert!(point.check_scale_factor(1.0, 1e-6).is_err());
    /// ```
    pub fn check_scale_factor(&self, expected: f64, tolerance: f64) -> Result<(), Error> {
        check("point scale factor", self.point_scale_factor, expected, tolerance)
    }

    /// Checks the grid convergence (degrees) against a known value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericConsistency`] if it differs from `expected` by
    /// more than `tolerance`.
    pub fn check_grid_convergence(&self, expected: f64, tolerance: f64) -> Result<(), Error> {
        check("grid convergence", self.grid_convergence, expected, tolerance)
    }
}

fn check(quantity: &'static str, computed: f64, expected: f64, tolerance: f64) -> Result<(), Error> {
    // Written so that a NaN anywhere fails the check
    if (computed - expected).abs() <= tolerance {
        Ok(())
    } else {
        Err(Error::NumericConsistency {
            quantity,
            computed,
            expected,
            tolerance,
        })
    }
}

impl Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{} {easting} {northing}",
            self.zone,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_within_tolerance() {
        let point = GridPoint::new(53, 386_352.398_9, 7_381_850.769_4, 0.999_759_539_247_74, 0.447_481_413_9);

        assert!(point.check_scale_factor(0.999_759_539_2, 1e-10).is_ok());
        assert!(point.check_grid_convergence(0.447_481_4, 1e-7).is_ok());

        let err = point.check_scale_factor(0.9996, 1e-10).unwrap_err();
        assert!(matches!(err, Error::NumericConsistency { quantity: "point scale factor", .. }));
        assert!(point.check_grid_convergence(f64::NAN, 1.).is_err());
    }

    #[test]
    fn display() {
        let point = GridPoint::new(55, 320_422.5, 5_813_305.25, 1., 1.25);
        assert_eq!(point.to_string(), "55 320422.5 5813305.25");
    }
}
