use chrono::{DateTime, FixedOffset, Local, SecondsFormat, Timelike};

// Time of the export run, shared by every document written in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationDate {
    at: DateTime<FixedOffset>,
}

impl CreationDate {
    pub fn now() -> Self {
        Self::from(Local::now().fixed_offset())
    }

    // "2024-03-03T14:05:09+01:00"
    pub fn iso8601(&self) -> String {
        self.at.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    // "Sunday 03 March 2024"
    pub fn long_date(&self) -> String {
        self.at.format("%A %d %B %Y").to_string()
    }
}

impl From<DateTime<FixedOffset>> for CreationDate {
    fn from(at: DateTime<FixedOffset>) -> Self {
        let at = at.with_nanosecond(0).unwrap_or(at);
        CreationDate { at }
    }
}
