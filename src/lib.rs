#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]

use lazy_static::lazy_static;
use thiserror::Error;

pub mod ellipsoid;
pub mod grid;
pub mod grid_point;
pub mod latlon;
pub mod zone;

pub mod projections {
    pub mod conformal;
    pub mod krueger;
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

pub use ellipsoid::Ellipsoid;
pub use grid::GridConfig;
pub use grid_point::GridPoint;
pub use latlon::LatLon;
pub use projections::transverse_mercator::TransverseMercator;
pub use zone::{Zone, ZoneSpec};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate outside the projection domain: {0}")]
    InputDomain(String),
    #[error("Invalid grid configuration: {0}")]
    Configuration(String),
    #[error("Coordinate could not be parsed: {0}")]
    InvalidCoord(String),
    #[error("The {quantity} {computed} differs from the expected {expected} by more than {tolerance}")]
    NumericConsistency {
        quantity: &'static str,
        computed: f64,
        expected: f64,
        tolerance: f64,
    },
}

pub trait ParseCoord {
    /// # Errors
    ///
    /// Returns an [`Error`] if `value` isn't a valid coordinate.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any coordinate implementing [`ParseCoord`].
///
/// # Errors
///
/// Returns an [`Error`] if `value` isn't a valid coordinate.
///
/// # Usage
///
/// ```
/// use gridconvert::LatLon;
///
/// let coord: LatLon = gridconvert::from_str("-23.67012389, 133.8855133").unwrap();
/// assert_eq!(coord.latitude(), -23.67012389);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Projection from geographic coordinates onto a map grid. Implementations
/// hold no mutable state, so one instance can serve any number of threads.
pub trait ForwardProjection: Send + Sync {
    /// Projects a single point.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the point can't be projected on this grid.
    fn forward(&self, point: &LatLon) -> Result<GridPoint, Error>;

    /// Projects every point, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the [`Error`] of the first point that can't be projected.
    fn forward_batch(&self, points: &[LatLon]) -> Result<Vec<GridPoint>, Error> {
        points
            .iter()
            .map(|point| self.forward(point))
            .collect()
    }
}

lazy_static! {
    static ref MGA2020: TransverseMercator = TransverseMercator::mga2020();
}

/// Converts a GDA2020 latitude/longitude in decimal degrees to MGA2020 grid
/// coordinates.
///
/// # Errors
///
/// Returns [`Error::InputDomain`] if the latitude isn't in `(-90, 90]` or the
/// longitude isn't in `(-180, 180)`, and [`Error::Configuration`] if the
/// longitude falls outside MGA zones 46 to 59.
///
/// # Usage
///
/// ```
/// let point = gridconvert::geographic_to_grid(-23.67012389, 133.8855133).unwrap();
///
/// assert_eq!(point.zone(), 53);
/// assert!((point.easting() - 386_352.3989).abs() < 1e-3);
/// assert!((point.northing() - 7_381_850.7694).abs() < 1e-3);
/// assert!((point.point_scale_factor() - 0.9997595392).abs() < 1e-10);
/// assert!((point.grid_convergence() - 0.4474814139).abs() < 1e-9);
/// ```
pub fn geographic_to_grid(latitude: f64, longitude: f64) -> Result<GridPoint, Error> {
    MGA2020.project(latitude, longitude)
}

/// Projects a latitude/longitude in decimal degrees onto the grid described
/// by `config`. Derives the grid constants on every call; build a
/// [`TransverseMercator`] once when projecting many points.
///
/// # Errors
///
/// Same as [`TransverseMercator::project`].
pub fn forward_project(latitude: f64, longitude: f64, config: &GridConfig) -> Result<GridPoint, Error> {
    TransverseMercator::new(config.clone()).project(latitude, longitude)
}
