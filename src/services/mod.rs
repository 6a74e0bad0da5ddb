// Service exports
pub mod feed;
pub mod report;

pub use feed::{CustomerFeed, FeedError};
pub use report::{ConsoleSink, MemorySink, ReportSink, write_report, REPORT_HEADER};
