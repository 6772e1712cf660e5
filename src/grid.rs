use crate::{Error, Ellipsoid, ZoneSpec, constants::{TM_FALSE_EASTING, TM_FALSE_NORTHING_SOUTH, TM_K0}};

/// Parameters of a transverse Mercator map grid. Built once and handed to
/// [`TransverseMercator::new`](crate::TransverseMercator::new); nothing in the
/// projection reads grid constants from anywhere else.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    name: String,
    ellipsoid: Ellipsoid,
    central_scale_factor: f64,
    false_easting: f64,
    false_northing: f64,
    zones: ZoneSpec,
}

impl GridConfig {
    /// Tries to create a grid definition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the central scale factor isn't a
    /// positive finite number or if either false origin offset isn't finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridconvert::{Ellipsoid, GridConfig, ZoneSpec};
    ///
    /// let zones = ZoneSpec::uniform(6.0, -186.0, 46..=59).unwrap();
    /// let grid = GridConfig::create("MGA94", Ellipsoid::grs80(), 0.9996, 500_000.0, 10_000_000.0, zones);
    ///
    /// assert!(grid.is_ok());
    /// assert_eq!(grid.unwrap(), GridConfig::mga94());
    ///
    /// let invalid = GridConfig::create("bad", Ellipsoid::grs80(), 0.0, 0.0, 0.0, ZoneSpec::mga());
    /// assert!(invalid.is_err());
    /// ```
    pub fn create<S>(
        name: S,
        ellipsoid: Ellipsoid,
        central_scale_factor: f64,
        false_easting: f64,
        false_northing: f64,
        zones: ZoneSpec,
    ) -> Result<GridConfig, Error>
    where
        S: Into<String>,
    {
        if !(central_scale_factor > 0. && central_scale_factor.is_finite()) {
            Err(Error::Configuration(format!("Central scale factor {central_scale_factor} must be positive and finite.")))
        } else if !(false_easting.is_finite() && false_northing.is_finite()) {
            Err(Error::Configuration(format!("False origin ({false_easting}, {false_northing}) must be finite.")))
        } else {
            Ok(Self {
                name: name.into(),
                ellipsoid,
                central_scale_factor,
                false_easting,
                false_northing,
                zones,
            })
        }
    }

    fn tm(name: &str, ellipsoid: Ellipsoid, false_northing: f64, zones: ZoneSpec) -> GridConfig {
        Self {
            name: name.to_owned(),
            ellipsoid,
            central_scale_factor: TM_K0,
            false_easting: TM_FALSE_EASTING,
            false_northing,
            zones,
        }
    }

    /// Map Grid of Australia on GDA2020.
    pub fn mga2020() -> GridConfig {
        GridConfig::tm("MGA2020", Ellipsoid::grs80(), TM_FALSE_NORTHING_SOUTH, ZoneSpec::mga())
    }

    /// Map Grid of Australia on GDA94. Same grid and ellipsoid as MGA2020.
    pub fn mga94() -> GridConfig {
        GridConfig::tm("MGA94", Ellipsoid::grs80(), TM_FALSE_NORTHING_SOUTH, ZoneSpec::mga())
    }

    /// Australian Map Grid on AGD66, using the Australian National Spheroid.
    pub fn amg66() -> GridConfig {
        GridConfig::tm("AMG66", Ellipsoid::ans(), TM_FALSE_NORTHING_SOUTH, ZoneSpec::mga())
    }

    /// WGS84 UTM for either hemisphere.
    pub fn utm(northp: bool) -> GridConfig {
        let (name, false_northing) = if northp {
            ("UTM north", 0.)
        } else {
            ("UTM south", TM_FALSE_NORTHING_SOUTH)
        };

        GridConfig::tm(name, Ellipsoid::wgs84(), false_northing, ZoneSpec::utm())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    pub fn central_scale_factor(&self) -> f64 {
        self.central_scale_factor
    }

    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }

    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }

    pub fn zones(&self) -> &ZoneSpec {
        &self.zones
    }
}
