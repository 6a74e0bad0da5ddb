// Model exports
pub mod domain;

pub use domain::{CustomerRecord, GeoPoint, EligibilityCriteria, OFFICE_LATITUDE, OFFICE_LONGITUDE, DEFAULT_MAX_DISTANCE_KM};
