//! Customer Invites - finds the customers who live close enough to the office
//! to be invited for food and drinks.
//!
//! The core is a single-pass pipeline over a line-delimited JSON feed: each
//! line is validated into a typed record, its great-circle distance from the
//! office is computed, and customers within the invite radius are returned
//! sorted by user id. Fetching the feed and rendering the report are handled
//! by the collaborators in [`services`].

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{EligibilityPipeline, PipelineResult, collect_eligible, parse_record, ParseError, ParseErrorKind, distance::great_circle_distance};
pub use models::{CustomerRecord, GeoPoint, EligibilityCriteria};
pub use services::{CustomerFeed, FeedError, ReportSink, ConsoleSink, MemorySink, write_report};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let office = EligibilityCriteria::default().origin;
        assert_eq!(great_circle_distance(office, office), 0.0);
    }
}
