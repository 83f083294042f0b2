use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// RFC 3339 UTC timestamps for log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerRfc3339;

impl LoggerRfc3339 {
    fn stamp(now: OffsetDateTime) -> String {
        now.format(&Rfc3339)
            .unwrap_or_else(|_| "<invalid-time>".to_string())
    }
}

impl FormatTime for LoggerRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{} ", Self::stamp(OffsetDateTime::now_utc()))
    }
}
