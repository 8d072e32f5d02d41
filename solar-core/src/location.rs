use serde::Serialize;
use std::f64::consts::FRAC_PI_4;

/// WGS84 semi-major axis used by Web Mercator (EPSG:3857), in metres.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Latitude limit of the Web Mercator projection.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

/// Longitude/latitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

/// Web Mercator coordinate in metres, as used by the map display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

/// A clicked location in both coordinate systems.
///
/// Only constructible through the conversion functions, so both projections
/// always describe the same physical point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    geographic: GeoPoint,
    map_point: MapPoint,
}

impl Location {
    /// Latitude is clamped to the Mercator limit and longitude wrapped into
    /// [-180, 180).
    pub fn from_geographic(longitude: f64, latitude: f64) -> Self {
        let geographic = GeoPoint {
            longitude: wrap_longitude(longitude),
            latitude: latitude.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE),
        };
        let map_point = MapPoint {
            x: EARTH_RADIUS_M * geographic.longitude.to_radians(),
            y: EARTH_RADIUS_M * (FRAC_PI_4 + geographic.latitude.to_radians() / 2.0).tan().ln(),
        };
        Self {
            geographic,
            map_point,
        }
    }

    pub fn from_map_point(x: f64, y: f64) -> Self {
        let longitude = (x / EARTH_RADIUS_M).to_degrees();
        let latitude = (2.0 * (y / EARTH_RADIUS_M).exp().atan() - 2.0 * FRAC_PI_4).to_degrees();
        Self::from_geographic(longitude, latitude)
    }

    pub fn geographic(&self) -> GeoPoint {
        self.geographic
    }

    pub fn map_point(&self) -> MapPoint {
        self.map_point
    }
}

fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 180.0).rem_euclid(360.0) - 180.0
    }
}
