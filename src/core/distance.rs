use crate::models::GeoPoint;

/// Earth's mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Central angle between two points in radians
///
/// Uses the spherical law of cosines. The cosine is clamped to [-1, 1]
/// because rounding can push it just past 1.0 for identical or
/// near-identical points, where `acos` would return NaN.
#[inline]
pub fn central_angle(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lon = (a.longitude.to_radians() - b.longitude.to_radians()).abs();

    let cosine = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos();

    cosine.clamp(-1.0, 1.0).acos()
}

/// Great-circle distance between two points in kilometers
///
/// # Arguments
/// * `a` - First point in degrees
/// * `b` - Second point in degrees
///
/// # Returns
/// Distance in kilometers, never negative
#[inline]
pub fn great_circle_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    great_circle_distance_with_radius(a, b, EARTH_RADIUS_KM)
}

/// Great-circle distance on a sphere of the given radius
#[inline]
pub fn great_circle_distance_with_radius(a: GeoPoint, b: GeoPoint, radius_km: f64) -> f64 {
    if a == b {
        return 0.0;
    }

    radius_km * central_angle(a, b)
}
