use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point, latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle (haversine) distance to another point, in meters.
    pub fn distance_m(&self, other: &LatLng) -> f64 {
        const EARTH_RADIUS_M: f64 = 6_371_000.0;
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

/// Total length of a path, summing great-circle distances between
/// consecutive points. Zero for fewer than two points.
pub fn path_length_m(points: &[LatLng]) -> f64 {
    points.windows(2).map(|pair| pair[0].distance_m(&pair[1])).sum()
}

/// Axis-aligned bounding box of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Smallest box containing every point, or None for an empty slice.
    pub fn of(points: &[LatLng]) -> Option<Self> {
        let first = points.first()?;
        let mut south_west = *first;
        let mut north_east = *first;
        for p in &points[1..] {
            south_west.lat = south_west.lat.min(p.lat);
            south_west.lon = south_west.lon.min(p.lon);
            north_east.lat = north_east.lat.max(p.lat);
            north_east.lon = north_east.lon.max(p.lon);
        }
        Some(Self { south_west, north_east })
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lon + self.north_east.lon) / 2.0,
        )
    }
}
