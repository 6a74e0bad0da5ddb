// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod pipeline;
pub mod validator;

pub use distance::{great_circle_distance, great_circle_distance_with_radius, central_angle, EARTH_RADIUS_KM};
pub use filters::{within_distance, distance_from_origin, is_eligible};
pub use pipeline::{EligibilityPipeline, PipelineResult, collect_eligible};
pub use validator::{parse_record, ParseError, ParseErrorKind, CUSTOMER_FIELDS};
