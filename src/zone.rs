use std::{collections::BTreeMap, ops::RangeInclusive};

use lazy_static::lazy_static;
use num::ToPrimitive;

use crate::{Error, constants::{TM_ZONE0_EDGE, TM_ZONE_WIDTH}};

pub(crate) const MIN_MGA_ZONE: i32 = 46;
pub(crate) const MAX_MGA_ZONE: i32 = 59;
pub(crate) const MIN_UTM_ZONE: i32 = 1;
pub(crate) const MAX_UTM_ZONE: i32 = 60;

lazy_static! {
    /// Central meridians of the MGA zones covering the Australian region
    static ref MGA_CENTRAL_MERIDIANS: BTreeMap<i32, f64> = (MIN_MGA_ZONE..=MAX_MGA_ZONE)
        .map(|zone| (zone, f64::from(6 * zone - 183)))
        .collect();
}

/// A projection zone and the longitude of its central meridian (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub(crate) index: i32,
    pub(crate) central_meridian: f64,
}

impl Zone {
    #[inline]
    pub fn index(&self) -> i32 {
        self.index
    }

    #[inline]
    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }
}

/// Zone layout of a grid: zones of constant width tiling the longitude
/// domain from a zone-0 edge, with central meridians looked up from a table.
/// Zones are closed on the west and open on the east, `[west, east)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneSpec {
    width: f64,
    zone0_edge: f64,
    central_meridians: BTreeMap<i32, f64>,
}

impl ZoneSpec {
    /// Builds a zone layout from its width (degrees), the western edge of
    /// zone 0 (degrees) and the central meridian of every supported zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the width isn't positive, or if
    /// the edge or any central meridian isn't finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use gridconvert::ZoneSpec;
    ///
    /// let spec = ZoneSpec::create(6.0, -186.0, [(55, 147.0), (56, 153.0)]).unwrap();
    /// let zone = spec.resolve(151.2093).unwrap();
    ///
    /// assert_eq!(zone.index(), 56);
    /// assert_eq!(zone.central_meridian(), 153.0);
    ///
    /// // Zone 54 has no central meridian in this table
    /// assert!(spec.resolve(141.0).is_err());
    /// ```
    pub fn create<I>(width: f64, zone0_edge: f64, central_meridians: I) -> Result<ZoneSpec, Error>
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        if !(width > 0. && width.is_finite()) {
            return Err(Error::Configuration(format!("Zone width {width} must be a positive finite angle.")));
        }
        if !zone0_edge.is_finite() {
            return Err(Error::Configuration(format!("Zone 0 edge {zone0_edge} must be finite.")));
        }

        let central_meridians = central_meridians
            .into_iter()
            .map(|(zone, cm)| {
                if cm.is_finite() {
                    Ok((zone, cm))
                } else {
                    Err(Error::Configuration(format!("Central meridian {cm} of zone {zone} must be finite.")))
                }
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Self {
            width,
            zone0_edge,
            central_meridians,
        })
    }

    /// Zones whose central meridian lies in the middle of the zone, for every
    /// zone index in `zones`.
    ///
    /// # Errors
    ///
    /// Same as [`ZoneSpec::create`].
    pub fn uniform(width: f64, zone0_edge: f64, zones: RangeInclusive<i32>) -> Result<ZoneSpec, Error> {
        ZoneSpec::create(
            width,
            zone0_edge,
            zones.map(|zone| (zone, zone0_edge + (f64::from(zone) + 0.5) * width)),
        )
    }

    /// MGA zones 46 to 59.
    pub fn mga() -> ZoneSpec {
        Self {
            width: TM_ZONE_WIDTH,
            zone0_edge: TM_ZONE0_EDGE,
            central_meridians: MGA_CENTRAL_MERIDIANS.clone(),
        }
    }

    /// UTM zones 1 to 60, without the Norway and Svalbard exceptions.
    pub fn utm() -> ZoneSpec {
        Self {
            width: TM_ZONE_WIDTH,
            zone0_edge: TM_ZONE0_EDGE,
            central_meridians: (MIN_UTM_ZONE..=MAX_UTM_ZONE)
                .map(|zone| (zone, f64::from(6 * zone - 183)))
                .collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn zone0_edge(&self) -> f64 {
        self.zone0_edge
    }

    /// Index of the zone containing `longitude` (degrees), whether or not
    /// the zone has a central meridian.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the index doesn't fit a zone number.
    pub fn zone_index(&self, longitude: f64) -> Result<i32, Error> {
        ((longitude - self.zone0_edge) / self.width)
            .floor()
            .to_i32()
            .ok_or_else(|| Error::Configuration(format!("Longitude {longitude} has no zone index.")))
    }

    /// Resolves the zone containing `longitude` (degrees).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the zone has no central meridian
    /// in the table.
    pub fn resolve(&self, longitude: f64) -> Result<Zone, Error> {
        let index = self.zone_index(longitude)?;

        self.central_meridians
            .get(&index)
            .map(|&central_meridian| Zone { index, central_meridian })
            .ok_or_else(|| Error::Configuration(format!(
                "Zone {index} containing longitude {longitude} has no central meridian."
            )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mga_zone_of_alice_springs() {
        let zone = ZoneSpec::mga().resolve(133.885_513_3).unwrap();
        assert_eq!(zone.index(), 53);
        assert_eq!(zone.central_meridian(), 135.);
    }

    #[test]
    fn zones_are_closed_on_the_west() {
        let spec = ZoneSpec::mga();
        assert_eq!(spec.resolve(132.).unwrap().index(), 53);
        assert_eq!(spec.resolve(137.999_999).unwrap().index(), 53);
        assert_eq!(spec.resolve(138.).unwrap().index(), 54);
    }

    #[test]
    fn mga_table_is_limited() {
        let spec = ZoneSpec::mga();
        assert_eq!(spec.resolve(90.).unwrap().index(), 46);
        assert_eq!(spec.resolve(173.9).unwrap().index(), 59);
        assert!(matches!(spec.resolve(89.9), Err(Error::Configuration(_))));
        assert!(matches!(spec.resolve(174.), Err(Error::Configuration(_))));
        assert!(matches!(spec.resolve(3.), Err(Error::Configuration(_))));
    }

    #[test]
    fn utm_covers_every_longitude() {
        let spec = ZoneSpec::utm();
        assert_eq!(spec.resolve(-179.999).unwrap().index(), 1);
        assert_eq!(spec.resolve(-179.999).unwrap().central_meridian(), -177.);
        assert_eq!(spec.resolve(-0.12).unwrap().index(), 30);
        assert_eq!(spec.resolve(179.999).unwrap().central_meridian(), 177.);
    }

    #[test]
    fn uniform_matches_mga_table() {
        let uniform = ZoneSpec::uniform(6., -186., MIN_MGA_ZONE..=MAX_MGA_ZONE).unwrap();
        assert_eq!(uniform, ZoneSpec::mga());
    }

    #[test]
    fn rejects_invalid_layout() {
        assert!(ZoneSpec::create(0., -186., [(1, -183.)]).is_err());
        assert!(ZoneSpec::create(f64::NAN, -186., [(1, -183.)]).is_err());
        assert!(ZoneSpec::create(6., f64::INFINITY, [(1, -183.)]).is_err());
        assert!(ZoneSpec::create(6., -186., [(1, f64::NAN)]).is_err());
    }

    #[test]
    fn non_finite_longitude_has_no_zone() {
        assert!(ZoneSpec::utm().resolve(f64::NAN).is_err());
    }
}
