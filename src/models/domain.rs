/// A validated customer entry from the feed
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub user_id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CustomerRecord {
    /// The customer's location as a point
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Office latitude in degrees
pub const OFFICE_LATITUDE: f64 = 53.339428;

/// Office longitude in degrees
pub const OFFICE_LONGITUDE: f64 = -6.257664;

/// Default invite radius in kilometers
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;

/// Parameters deciding which customers are eligible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EligibilityCriteria {
    pub origin: GeoPoint,
    pub max_distance_km: f64,
    pub earth_radius_km: f64,
}

impl Default for EligibilityCriteria {
    fn default() -> Self {
        Self {
            origin: GeoPoint::new(OFFICE_LATITUDE, OFFICE_LONGITUDE),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            earth_radius_km: crate::core::distance::EARTH_RADIUS_KM,
        }
    }
}
