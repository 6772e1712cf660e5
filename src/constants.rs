// GRS80 semi-major axis a
pub(crate) const GRS80_A: f64 = 6_378_137.;
// GRS80 inverse flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_INV_F: f64 = 298.257222101;

// WGS84 semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// WGS84 inverse flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_INV_F: f64 = 298.257223563;

// Australian National Spheroid
pub(crate) const ANS_A: f64 = 6_378_160.;
pub(crate) const ANS_INV_F: f64 = 298.25;

// MGA / UTM central scale factor
pub(crate) const TM_K0: f64 = 9996.0 / 10_000.;
pub(crate) const TM_FALSE_EASTING: f64 = 500_000.;
pub(crate) const TM_FALSE_NORTHING_SOUTH: f64 = 10_000_000.;

// Zones are 6 degrees wide, zone 1 starts at -180
pub(crate) const TM_ZONE_WIDTH: f64 = 6.;
pub(crate) const TM_ZONE0_EDGE: f64 = -186.;
