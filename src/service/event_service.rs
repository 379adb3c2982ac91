//! Event processing service.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use tracing::{debug, info, warn};

use crate::domain::{Decision, Event, FilterSpec};

/// Service that gates a stream of events against the filter spec.
pub struct EventService {
    spec: FilterSpec,
}

/// Counters for one processing run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub kept: usize,
    pub dropped: usize,
    pub malformed: usize,
}

impl EventService {
    /// Create a new EventService over a validated filter spec.
    pub fn new(spec: FilterSpec) -> Self {
        Self { spec }
    }

    /// Run the event processing loop.
    ///
    /// Reads newline-delimited JSON events from stdin and writes kept events
    /// to stdout byte-for-byte as they were received; dropped events produce
    /// no output. Malformed lines are logged and skipped, and fail the run
    /// after all input has been processed.
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let summary = self.process_stream(stdin.lock(), stdout.lock())?;

        info!(
            kept = summary.kept,
            dropped = summary.dropped,
            malformed = summary.malformed,
            "finished processing events"
        );

        if summary.malformed > 0 {
            bail!("{} input line(s) could not be parsed as events", summary.malformed);
        }
        Ok(())
    }

    /// Process a stream of newline-delimited JSON events.
    ///
    /// Kept events are echoed verbatim, so the host receives exactly the bytes
    /// it sent in; the gate never re-serializes an event.
    pub fn process_stream(&self, input: impl BufRead, mut output: impl Write) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let event: Event = match serde_json::from_str(&line) {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "skipping malformed event line");
                    summary.malformed += 1;
                    continue;
                }
            };

            match self.spec.decide(&event) {
                Decision::Keep => {
                    writeln!(output, "{}", line)?;
                    summary.kept += 1;
                }
                Decision::Drop => {
                    debug!(event = %event.event, "dropped event");
                    summary.dropped += 1;
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> EventService {
        let conditions = r#"[
            { "property": "$host", "type": "string", "operator": "not_contains", "value": "localhost" }
        ]"#;
        let spec = FilterSpec::build(Some(conditions), Some("to_drop_event"), Some("No")).unwrap();
        EventService::new(spec)
    }

    fn run(input: &str) -> (String, RunSummary) {
        let mut output = Vec::new();
        let summary = service()
            .process_stream(input.as_bytes(), &mut output)
            .unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_kept_events_are_echoed_verbatim() {
        let line = r#"{"event":"test event","properties":{"$host":"example.com"}}"#;
        let (output, summary) = run(&format!("{line}\n"));
        assert_eq!(output, format!("{line}\n"));
        assert_eq!(summary.kept, 1);
        assert_eq!(summary.dropped, 0);
    }

    #[test]
    fn test_dropped_events_produce_no_output() {
        let input = concat!(
            r#"{"event":"test event","properties":{"$host":"localhost:8000"}}"#,
            "\n",
            r#"{"event":"to_drop_event","properties":{"$host":"example.com"}}"#,
            "\n",
        );
        let (output, summary) = run(input);
        assert!(output.is_empty());
        assert_eq!(summary.dropped, 2);
    }

    #[test]
    fn test_malformed_lines_are_counted_and_skipped() {
        let input = concat!(
            "not json\n",
            r#"{"event":"test event","properties":{"$host":"example.com"}}"#,
            "\n",
        );
        let (output, summary) = run(input);
        assert_eq!(summary.malformed, 1);
        assert_eq!(summary.kept, 1);
        assert!(output.contains("example.com"));
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let (_, summary) = run("\n\n");
        assert_eq!(summary, RunSummary::default());
    }
}
