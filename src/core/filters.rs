use crate::core::distance::great_circle_distance_with_radius;
use crate::models::{CustomerRecord, EligibilityCriteria};

/// Check if a distance falls inside the invite radius
///
/// The boundary is inclusive: a customer exactly `max_distance_km` away
/// is still invited.
#[inline]
pub fn within_distance(distance_km: f64, max_distance_km: f64) -> bool {
    distance_km <= max_distance_km
}

/// Distance of a customer from the criteria's origin in kilometers
#[inline]
pub fn distance_from_origin(record: &CustomerRecord, criteria: &EligibilityCriteria) -> f64 {
    great_circle_distance_with_radius(criteria.origin, record.location(), criteria.earth_radius_km)
}

/// Check if a customer is close enough to the origin to be invited
#[inline]
pub fn is_eligible(record: &CustomerRecord, criteria: &EligibilityCriteria) -> bool {
    within_distance(distance_from_origin(record, criteria), criteria.max_distance_km)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(user_id: i64, latitude: f64, longitude: f64) -> CustomerRecord {
        CustomerRecord {
            user_id,
            name: format!("Customer {}", user_id),
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_boundary_is_inclusive() {
        assert!(within_distance(100.0, 100.0));
        assert!(!within_distance(100.0 + 1e-9, 100.0));
        assert!(within_distance(0.0, 0.0));
    }

    #[test]
    fn test_office_is_eligible() {
        let criteria = EligibilityCriteria::default();
        let record = create_test_record(1, criteria.origin.latitude, criteria.origin.longitude);

        assert_eq!(distance_from_origin(&record, &criteria), 0.0);
        assert!(is_eligible(&record, &criteria));
    }

    #[test]
    fn test_far_customer_not_eligible() {
        let criteria = EligibilityCriteria::default();
        // Cork, ~278km from the office
        let record = create_test_record(2, 51.999447, -9.742744);

        assert!(!is_eligible(&record, &criteria));
    }

    #[test]
    fn test_customer_exactly_at_radius() {
        let record = create_test_record(3, 51.999447, -9.742744);
        let mut criteria = EligibilityCriteria::default();
        criteria.max_distance_km = distance_from_origin(&record, &criteria);

        assert!(is_eligible(&record, &criteria));

        criteria.max_distance_km -= 1e-9;
        assert!(!is_eligible(&record, &criteria));
    }
}
