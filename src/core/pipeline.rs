use crate::core::{
    filters::{distance_from_origin, within_distance},
    validator::parse_record,
};
use crate::models::{CustomerRecord, EligibilityCriteria, GeoPoint};
use crate::services::ReportSink;

/// Result of one pass over the feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineResult {
    /// Eligible customers sorted by user id
    pub eligible: Vec<CustomerRecord>,
    pub total_lines: usize,
    /// Lines that failed validation
    pub rejected: usize,
    /// Valid customers beyond the invite radius
    pub out_of_range: usize,
}

/// Eligibility orchestrator - validates, measures, filters and sorts customers
///
/// # Pipeline Stages
/// 1. Parse and validate each line, reporting failures to the sink
/// 2. Great-circle distance from the origin
/// 3. Inclusive radius filter
/// 4. Stable sort by user id
#[derive(Debug, Clone, Default)]
pub struct EligibilityPipeline {
    criteria: EligibilityCriteria,
}

impl EligibilityPipeline {
    pub fn new(criteria: EligibilityCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &EligibilityCriteria {
        &self.criteria
    }

    /// Run the full pipeline over a sequence of raw lines
    ///
    /// Lines are numbered from 1. A line that fails validation produces one
    /// diagnostic on `sink` and is skipped; nothing is emitted for valid
    /// lines. The input is consumed exactly once.
    ///
    /// # Arguments
    /// * `lines` - Raw feed lines, one JSON object each
    /// * `sink` - Receives one message per rejected line
    ///
    /// # Returns
    /// PipelineResult with the eligible customers in ascending user id order
    pub fn run<I, S, R>(&self, lines: I, sink: &mut R) -> PipelineResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: ReportSink + ?Sized,
    {
        let mut result = PipelineResult::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            result.total_lines += 1;

            let record = match parse_record(line.as_ref(), line_number) {
                Ok(record) => record,
                Err(err) => {
                    tracing::debug!(line = err.line(), field = ?err.field(), kind = ?err.kind(), "Rejected customer line");
                    sink.emit(&format!("ERROR: {}", err));
                    result.rejected += 1;
                    continue;
                }
            };

            let distance_km = distance_from_origin(&record, &self.criteria);
            if within_distance(distance_km, self.criteria.max_distance_km) {
                result.eligible.push(record);
            } else {
                result.out_of_range += 1;
            }
        }

        // sort_by_key is stable, so duplicate ids keep feed order
        result.eligible.sort_by_key(|record| record.user_id);

        tracing::info!(
            "Processed {} lines: {} eligible, {} rejected, {} out of range",
            result.total_lines,
            result.eligible.len(),
            result.rejected,
            result.out_of_range
        );

        result
    }
}

/// Collect the customers within `max_distance_km` of `origin`, sorted by user id
///
/// Convenience wrapper around [`EligibilityPipeline::run`] using the mean
/// Earth radius.
pub fn collect_eligible<I, S, R>(
    lines: I,
    origin: GeoPoint,
    max_distance_km: f64,
    sink: &mut R,
) -> Vec<CustomerRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: ReportSink + ?Sized,
{
    let criteria = EligibilityCriteria {
        origin,
        max_distance_km,
        ..EligibilityCriteria::default()
    };

    EligibilityPipeline::new(criteria).run(lines, sink).eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemorySink;

    fn customer_line(user_id: i64, name: &str, latitude: f64, longitude: f64) -> String {
        format!(
            r#"{{"latitude": "{}", "user_id": {}, "name": "{}", "longitude": "{}"}}"#,
            latitude, user_id, name, longitude
        )
    }

    #[test]
    fn test_run_sorts_by_user_id() {
        let pipeline = EligibilityPipeline::default();
        let mut sink = MemorySink::default();

        let lines = vec![
            customer_line(22, "John Oshea", 52.886375, -6.3701),
            customer_line(12, "Holland Peter", 53.986375, -6.19999),
            customer_line(5, "Nora Dempsey", 53.1229599, -6.2705202),
        ];

        let result = pipeline.run(&lines, &mut sink);

        let ids: Vec<i64> = result.eligible.iter().map(|c| c.user_id).collect();
        assert_eq!(ids, vec![5, 12, 22]);
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_run_counts_each_outcome() {
        let pipeline = EligibilityPipeline::default();
        let mut sink = MemorySink::default();

        let lines = vec![
            customer_line(1, "Alice Cahill", 51.92893, -10.27699), // ~313km
            "not json".to_string(),
            r#"{"user_id": 3, "name": "Ian Kehoe"}"#.to_string(),
            customer_line(4, "Ian McArdle", 53.2451022, -6.238335),
        ];

        let result = pipeline.run(lines, &mut sink);

        assert_eq!(result.total_lines, 4);
        assert_eq!(result.rejected, 2);
        assert_eq!(result.out_of_range, 1);
        assert_eq!(result.eligible.len(), 1);
        assert_eq!(result.eligible[0].user_id, 4);
        assert_eq!(sink.messages().len(), 2);
        assert!(sink.messages()[0].contains("line 2"));
        assert!(sink.messages()[1].contains("line 3"));
        assert!(sink.messages()[1].contains("latitude"));
    }

    #[test]
    fn test_duplicate_ids_keep_feed_order() {
        let pipeline = EligibilityPipeline::default();
        let mut sink = MemorySink::default();

        let lines = vec![
            customer_line(7, "First", 53.3, -6.2),
            customer_line(2, "Other", 53.3, -6.2),
            customer_line(7, "Second", 53.3, -6.2),
        ];

        let result = pipeline.run(lines, &mut sink);

        let names: Vec<&str> = result.eligible.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Other", "First", "Second"]);
    }

    #[test]
    fn test_empty_feed() {
        let mut sink = MemorySink::default();
        let result = EligibilityPipeline::default().run(Vec::<String>::new(), &mut sink);

        assert_eq!(result, PipelineResult::default());
    }

    #[test]
    fn test_collect_eligible_uses_given_radius() {
        let mut sink = MemorySink::default();
        let origin = GeoPoint::new(53.339428, -6.257664);
        let lines = vec![customer_line(1, "Alice Cahill", 51.92893, -10.27699)];

        assert!(collect_eligible(&lines, origin, 100.0, &mut sink).is_empty());
        assert_eq!(collect_eligible(&lines, origin, 500.0, &mut sink).len(), 1);
    }
}
