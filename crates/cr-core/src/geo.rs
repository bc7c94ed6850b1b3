//! Geographic coordinate type.
//!
//! Coordinates are display data only: the dashboard places intersections on
//! a map with them.  Routing never reads them.

/// A WGS-84 geographic coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f32 {
        const R: f32 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Arithmetic mean of `points` in lat/lon space, or `None` if empty.
    ///
    /// Used to centre a map view on the network; not a true spherical
    /// centroid, which is fine at city scale.
    pub fn centroid<I: IntoIterator<Item = GeoPoint>>(points: I) -> Option<GeoPoint> {
        let (mut lat, mut lon, mut n) = (0.0f64, 0.0f64, 0u32);
        for p in points {
            lat += p.lat as f64;
            lon += p.lon as f64;
            n += 1;
        }
        (n > 0).then(|| GeoPoint::new((lat / n as f64) as f32, (lon / n as f64) as f32))
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
