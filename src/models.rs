// Core data structures for the diary crawler

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Sentinel string for entries without a rating
pub const NOT_RATED: &str = "Not rated";

/// Canonical rating of a diary entry
///
/// Serialized as a plain string so the JSON shape matches what the
/// visualization client expects: `"3.5"`, `"Not rated"`, or an unrecognized
/// class token passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Rating {
    /// Raw value on the site's 0-10 half-star scale
    Stars(u32),
    /// Non-numeric `rated-*` suffix, kept as found
    Unrecognized(String),
    #[default]
    NotRated,
}

impl Rating {
    /// Rating on the 0.0-5.0 star scale, when numeric
    #[must_use]
    pub fn stars(&self) -> Option<f64> {
        match self {
            Self::Stars(raw) => Some(f64::from(*raw) / 2.0),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_rated(&self) -> bool {
        !matches!(self, Self::NotRated)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stars(raw) => write!(f, "{:.1}", f64::from(*raw) / 2.0),
            Self::Unrecognized(token) => f.write_str(token),
            Self::NotRated => f.write_str(NOT_RATED),
        }
    }
}

impl FromStr for Rating {
    type Err = std::convert::Infallible;

    /// Inverse of `Display`; never fails, anything unknown is `Unrecognized`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NOT_RATED {
            return Ok(Self::NotRated);
        }

        // Only exact half-star renderings map back to Stars
        if let Ok(value) = s.parse::<f64>() {
            let raw = value * 2.0;
            if raw >= 0.0 && raw.fract() == 0.0 && raw <= f64::from(u32::MAX) {
                let candidate = Self::Stars(raw as u32);
                if candidate.to_string() == s {
                    return Ok(candidate);
                }
            }
        }

        Ok(Self::Unrecognized(s.to_string()))
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_default())
    }
}

/// One logged viewing from a user's film diary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    /// `YYYY-MM-DD` taken from the entry's link path, empty when absent
    pub date: String,
    pub film_title: String,
    /// Release year as displayed; may be empty
    pub film_year: String,
    pub rating: Rating,
    pub liked: bool,
    /// True unless the row explicitly marks the viewing as not a rewatch
    pub rewatch: bool,
}

impl DiaryEntry {
    /// Watch date as a calendar date, when the `date` field holds one
    #[must_use]
    pub fn watched_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Aggregate counts over a crawled diary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiarySummary {
    pub total: usize,
    pub liked: usize,
    pub rewatches: usize,
    pub rated: usize,
    pub first_watched: Option<NaiveDate>,
    pub last_watched: Option<NaiveDate>,
}

impl DiarySummary {
    pub fn from_entries(entries: &[DiaryEntry]) -> Self {
        let dates = entries.iter().filter_map(DiaryEntry::watched_on);

        Self {
            total: entries.len(),
            liked: entries.iter().filter(|e| e.liked).count(),
            rewatches: entries.iter().filter(|e| e.rewatch).count(),
            rated: entries.iter().filter(|e| e.rating.is_rated()).count(),
            first_watched: dates.clone().min(),
            last_watched: dates.max(),
        }
    }
}

impl fmt::Display for DiarySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries ({} liked, {} rewatches, {} rated)",
            self.total, self.liked, self.rewatches, self.rated
        )?;
        if let (Some(first), Some(last)) = (self.first_watched, self.last_watched) {
            write!(f, " from {first} to {last}")?;
        }
        Ok(())
    }
}
