//! Date window over entries

use crate::domain::entry::{parse_date, Entry};
use chrono::NaiveDate;

/// Separator between the two bounds of a range argument
const RANGE_SEPARATOR: char = '-';

/// Inclusive date window.
///
/// A bound of `None` is the zero date: it sorts before every real date, so an
/// unparsable bound makes the window match little or nothing instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Parse `YYYY.MM.DD` or `YYYY.MM.DD-YYYY.MM.DD`.
    ///
    /// A single date is a one-day window. Never fails.
    pub fn parse(range: &str) -> Self {
        let (from, to) = range.split_once(RANGE_SEPARATOR).unwrap_or((range, range));
        DateRange {
            from: parse_bound(from),
            to: parse_bound(to),
        }
    }

    /// `from <= date <= to`
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        self.from <= date && date <= self.to
    }

    /// Keep only the entries dated inside the window, preserving order
    pub fn filter(&self, entries: Vec<Entry>) -> Vec<Entry> {
        let total = entries.len();
        let ranged: Vec<Entry> = entries
            .into_iter()
            .filter(|e| self.contains(e.date))
            .collect();
        log::debug!("date range kept {} of {} entries", ranged.len(), total);
        ranged
    }
}

fn parse_bound(s: &str) -> Option<NaiveDate> {
    let date = parse_date(s);
    if date.is_none() {
        log::warn!("unparsable date '{}' in range, using the zero date", s);
    }
    date
}
