use std::fmt::Display;

use crate::{Error, ParseCoord, utility::dms};

/// Geographic point in decimal degrees on the grid's ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range (-90, 90]
    /// * Longitude must be in range (-180, 180)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputDomain`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridconvert::LatLon;
    ///
    /// let coord = LatLon::create(-23.67012389, 133.8855133);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), -23.67012389);
    /// assert_eq!(coord.longitude(), 133.8855133);
    ///
    /// // The north pole is part of the domain, the south pole isn't
    /// assert!(LatLon::create(90.0, 0.0).is_ok());
    /// assert!(LatLon::create(-90.0, 0.0).is_err());
    ///
    /// assert!(LatLon::create(0.0, 180.0).is_err());
    /// assert!(LatLon::create(0.0, -180.0).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        let qd = f64::from(dms::QD);
        let hd = f64::from(dms::HD);

        if !(lat > -qd && lat <= qd) {
            Err(Error::InputDomain(format!("Latitude {lat} outside of valid range (-90, 90].")))
        } else if !(lon > -hd && lon < hd) {
            Err(Error::InputDomain(format!("Longitude {lon} outside of valid range (-180, 180).")))
        } else {
            Ok(Self {
                latitude: lat,
                longitude: lon,
            })
        }
    }

    /// Re-checks a point that may have been built without [`LatLon::create`].
    pub(crate) fn validate(&self) -> Result<(), Error> {
        LatLon::create(self.latitude, self.longitude).map(|_| ())
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl ParseCoord for LatLon {
    /// Parses `"<lat> <lon>"`, separated by whitespace and/or a comma.
    fn parse_coord(value: &str) -> Result<LatLon, Error> {
        let mut pieces = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty());

        let mut next_value = |name: &str| -> Result<f64, Error> {
            pieces
                .next()
                .ok_or_else(|| Error::InvalidCoord(format!("Missing {name} in \"{value}\"")))?
                .parse::<f64>()
                .map_err(|err| Error::InvalidCoord(format!("Invalid {name} in \"{value}\": {err}")))
        };

        let lat = next_value("latitude")?;
        let lon = next_value("longitude")?;

        if pieces.next().is_some() {
            return Err(Error::InvalidCoord(format!("Trailing input in \"{value}\"")));
        }

        LatLon::create(lat, lon)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_bounds() {
        assert!(LatLon::create(90., 179.999).is_ok());
        assert!(LatLon::create(-89.999_999, -179.999).is_ok());
        assert!(matches!(LatLon::create(-90., 0.), Err(Error::InputDomain(_))));
        assert!(matches!(LatLon::create(90.0001, 0.), Err(Error::InputDomain(_))));
        assert!(matches!(LatLon::create(0., -180.), Err(Error::InputDomain(_))));
        assert!(matches!(LatLon::create(0., 180.), Err(Error::InputDomain(_))));
        assert!(matches!(LatLon::create(f64::NAN, 0.), Err(Error::InputDomain(_))));
        assert!(matches!(LatLon::create(0., f64::NAN), Err(Error::InputDomain(_))));
    }

    #[test]
    fn parse_pairs() {
        let coord = LatLon::parse_coord("-23.67012389 133.8855133").unwrap();
        assert_eq!(coord, LatLon::create(-23.670_123_89, 133.885_513_3).unwrap());

        let coord = LatLon::parse_coord("  -37.81,144.96 ").unwrap();
        assert_eq!(coord.latitude(), -37.81);
        assert_eq!(coord.longitude(), 144.96);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(LatLon::parse_coord("-37.81"), Err(Error::InvalidCoord(_))));
        assert!(matches!(LatLon::parse_coord("south 144.96"), Err(Error::InvalidCoord(_))));
        assert!(matches!(LatLon::parse_coord("-37.81 144.96 12"), Err(Error::InvalidCoord(_))));
        assert!(matches!(LatLon::parse_coord("-91 144.96"), Err(Error::InputDomain(_))));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let coord = LatLon::create(-33.8688, 151.2093).unwrap();
        assert_eq!(coord.to_string(), "-33.8688 151.2093");
        assert_eq!(LatLon::parse_coord(&coord.to_string()).unwrap(), coord);
    }
}
