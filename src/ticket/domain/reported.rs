//! Normalized reporting dates and the legacy-format boundary adapter.
//!
//! The previous tracker recorded dates as free text in two shapes,
//! `DD/MM/YYYY` and `Mon-YY`. Dates are normalized exactly once — at ticket
//! creation or at the legacy-import boundary — so the read path (statistics,
//! display) never parses strings again.

use super::TicketDomainError;
use chrono::{Datelike, NaiveDate};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capitalized canonical month abbreviations, indexed by 0-based month.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Accepted month-token spellings beyond the canonical abbreviations.
const MONTH_ALIASES: [(&str, u32); 1] = [("mayo", 4)];

/// Calendar month at year resolution, the statistics bucket key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    year: i32,
    month0: u32,
}

impl MonthKey {
    /// Creates a month key from a year and 0-based month index.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::InvalidMonthIndex`] when the index is
    /// outside `0..=11`.
    pub const fn new(year: i32, month0: u32) -> Result<Self, TicketDomainError> {
        if month0 > 11 {
            return Err(TicketDomainError::InvalidMonthIndex(month0));
        }
        Ok(Self { year, month0 })
    }

    /// Derives the month key of a full-precision date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-based month index.
    #[must_use]
    pub const fn month0(self) -> u32 {
        self.month0
    }

    /// Returns the chronological sort key, `year * 100 + month index`.
    #[must_use]
    pub fn sort_key(self) -> i64 {
        i64::from(self.year)
            .saturating_mul(100)
            .saturating_add(i64::from(self.month0))
    }

    /// Returns the canonical `Mon-YY` bucket label.
    #[must_use]
    pub fn label(self) -> String {
        let month = usize::try_from(self.month0)
            .ok()
            .and_then(|index| MONTH_ABBREVIATIONS.get(index))
            .copied()
            .unwrap_or("???");
        let short_year = self
            .year
            .checked_sub(2000)
            .filter(|year| (0..100).contains(year));
        short_year.map_or_else(
            || format!("{month}-{}", self.year),
            |year| format!("{month}-{year:02}"),
        )
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Normalized reporting date of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReportedOn {
    /// Full-precision date; new tickets are stamped with the current date.
    Day(NaiveDate),
    /// Month-resolution legacy date.
    Month(MonthKey),
    /// Unparseable legacy token, preserved verbatim for display.
    Unknown(String),
}

impl ReportedOn {
    /// Stamps the current UTC date from the injected clock.
    #[must_use]
    pub fn today(clock: &impl Clock) -> Self {
        Self::Day(clock.utc().date_naive())
    }

    /// Format-detecting adapter for legacy date tokens.
    ///
    /// `DD/MM/YYYY` becomes [`ReportedOn::Day`] (or [`ReportedOn::Month`]
    /// when the day is out of range but month and year parse), `Mon-YY`
    /// becomes [`ReportedOn::Month`], and anything else is preserved as
    /// [`ReportedOn::Unknown`].
    #[must_use]
    pub fn parse_legacy(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.contains('/') {
            return parse_day_first(trimmed).unwrap_or_else(|| Self::Unknown(raw.to_owned()));
        }
        parse_month_year(trimmed).map_or_else(|| Self::Unknown(raw.to_owned()), Self::Month)
    }

    /// Returns the statistics bucket key, when the date carries one.
    #[must_use]
    pub fn month_key(&self) -> Option<MonthKey> {
        match self {
            Self::Day(date) => Some(MonthKey::from_date(*date)),
            Self::Month(key) => Some(*key),
            Self::Unknown(_) => None,
        }
    }
}

impl fmt::Display for ReportedOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", date.format("%d/%m/%Y")),
            Self::Month(key) => write!(f, "{key}"),
            Self::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

/// Resolves a month token against the canonical table and its aliases.
fn month_index(token: &str) -> Option<u32> {
    let canonical = MONTH_ABBREVIATIONS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(token))
        .and_then(|index| u32::try_from(index).ok());
    canonical.or_else(|| {
        MONTH_ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(token))
            .map(|(_, index)| *index)
    })
}

fn parse_day_first(value: &str) -> Option<ReportedOn> {
    let mut segments = value.split('/');
    let day = segments.next()?.trim().parse::<u32>().ok()?;
    let month = segments.next()?.trim().parse::<u32>().ok()?;
    let year = segments.next()?.trim().parse::<i32>().ok()?;
    if segments.next().is_some() {
        return None;
    }
    let month0 = month.checked_sub(1)?;
    let key = MonthKey::new(year, month0).ok()?;
    let reported = NaiveDate::from_ymd_opt(year, month, day)
        .map_or_else(|| ReportedOn::Month(key), ReportedOn::Day);
    Some(reported)
}

fn parse_month_year(value: &str) -> Option<MonthKey> {
    let mut segments = value.split('-');
    let token = segments.next()?.trim();
    let year_token = segments.next()?.trim();
    if segments.next().is_some() {
        return None;
    }
    let month0 = month_index(token)?;
    let short_year = year_token.parse::<i32>().ok()?;
    MonthKey::new(2000_i32.checked_add(short_year)?, month0).ok()
}
