use crate::models::CustomerRecord;
use std::io::{self, Write};

/// Header line of the invite report
pub const REPORT_HEADER: &str = "CUSTOMERS TO BE INVITED FOR FOOD AND DRINKS:";

/// Destination for human-readable messages
///
/// Used both for per-line diagnostics and for the final report.
pub trait ReportSink {
    fn emit(&mut self, message: &str);
}

/// Writes each message as a line to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn emit(&mut self, message: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", message) {
            tracing::error!("Failed to write to stdout: {}", e);
        }
    }
}

/// Collects messages in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    messages: Vec<String>,
}

impl MemorySink {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl ReportSink for MemorySink {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl<T: ReportSink + ?Sized> ReportSink for &mut T {
    fn emit(&mut self, message: &str) {
        (**self).emit(message);
    }
}

/// Render the invite report for customers already in output order
///
/// Emits the header, then one `Name: .., User ID: ..` entry per customer.
/// Each entry starts with a newline so entries are separated by a blank line.
pub fn write_report<R: ReportSink + ?Sized>(sink: &mut R, customers: &[CustomerRecord]) {
    sink.emit(REPORT_HEADER);
    for customer in customers {
        sink.emit(&format!("\nName: {}, User ID: {}", customer.name, customer.user_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(user_id: i64, name: &str) -> CustomerRecord {
        CustomerRecord {
            user_id,
            name: name.to_string(),
            latitude: 53.0,
            longitude: -6.0,
        }
    }

    #[test]
    fn test_report_format() {
        let mut sink = MemorySink::default();
        write_report(&mut sink, &[customer(12, "Holland Peter"), customer(22, "John Oshea")]);

        assert_eq!(
            sink.into_messages(),
            vec![
                REPORT_HEADER.to_string(),
                "\nName: Holland Peter, User ID: 12".to_string(),
                "\nName: John Oshea, User ID: 22".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let mut sink = MemorySink::default();
        write_report(&mut sink, &[]);

        assert_eq!(sink.messages(), [REPORT_HEADER.to_string()]);
    }

    #[test]
    fn test_sink_through_mutable_reference() {
        fn emit_greeting<R: ReportSink>(mut sink: R) {
            sink.emit("hello");
        }

        let mut sink = MemorySink::default();
        emit_greeting(&mut sink);
        emit_greeting(&mut sink);

        assert_eq!(sink.messages(), ["hello".to_string(), "hello".to_string()]);
    }
}
