//! HTML parsing and diary entry extraction
//!
//! This module turns one diary listing page into [`DiaryEntry`] values plus
//! the "is there an older page" signal used by the crawler.
//!
//! Parsing never fails: a row missing some element yields an entry with that
//! field left empty or defaulted.

pub mod rating;
pub mod selectors;

pub use rating::{normalize_rating, RatingContext};

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

use crate::models::DiaryEntry;
use selectors::{
    DATE_LINK, ENTRY_ROW, FILM_TITLE, FILM_YEAR, LIKED_CLASS, LIKED_ICON, NEXT_PAGE, REWATCH_CELL,
    REWATCH_OFF_CLASS,
};

/// Everything the crawler needs from one listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiaryPage {
    /// Entries in the order they appear on the page
    pub entries: Vec<DiaryEntry>,
    /// Whether the page links to an older page
    pub has_next: bool,
}

/// Parse a listing page into entries and its pagination signal
pub fn parse_page(html: &str) -> DiaryPage {
    let document = Html::parse_document(html);

    DiaryPage {
        entries: entries_in(&document),
        has_next: next_link_in(&document),
    }
}

/// Extract every diary entry from a listing page, in page order
pub fn parse_entries(html: &str) -> Vec<DiaryEntry> {
    entries_in(&Html::parse_document(html))
}

/// Whether the page has an "older" pagination link
pub fn has_next_page(html: &str) -> bool {
    next_link_in(&Html::parse_document(html))
}

fn entries_in(document: &Html) -> Vec<DiaryEntry> {
    document.select(&ENTRY_ROW).map(|row| parse_row(&row)).collect()
}

fn next_link_in(document: &Html) -> bool {
    document.select(&NEXT_PAGE).next().is_some()
}

/// Build one entry from a diary row
pub fn parse_row(row: &ElementRef<'_>) -> DiaryEntry {
    let entry = DiaryEntry {
        date: extract_date(row),
        film_title: text_of(row, &FILM_TITLE),
        film_year: text_of(row, &FILM_YEAR),
        rating: normalize_rating(&RatingContext::from_row(row)),
        liked: extract_liked(row),
        rewatch: extract_rewatch(row),
    };

    if entry.film_title.is_empty() {
        tracing::warn!(date = %entry.date, "Diary row without a film title; markup may have changed");
    }

    tracing::trace!(
        date = %entry.date,
        title = %entry.film_title,
        year = %entry.film_year,
        rating = %entry.rating,
        liked = entry.liked,
        rewatch = entry.rewatch,
        "Parsed diary row"
    );

    entry
}

/// Concatenated, trimmed text of every match
fn text_of(row: &ElementRef<'_>, selector: &Selector) -> String {
    row.select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Date from the day link's href, e.g. `/user/film/heat/2021/07/04/`
///
/// The visible text is only the day of month, so it is never used.
pub fn extract_date(row: &ElementRef<'_>) -> String {
    row.select(&DATE_LINK)
        .next()
        .and_then(|link| link.value().attr("href"))
        .and_then(date_from_path)
        .unwrap_or_default()
}

/// Pull `YYYY-MM-DD` out of a link path containing `/YYYY/MM/DD/`
pub fn date_from_path(path: &str) -> Option<String> {
    static DATE_PATH: OnceLock<Regex> = OnceLock::new();

    let re = DATE_PATH
        .get_or_init(|| Regex::new(r"/(\d{4})/(\d{2})/(\d{2})/").expect("Invalid regex pattern"));

    let caps = re.captures(path)?;
    Some(format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]))
}

type FlagStrategy = fn(&ElementRef<'_>) -> Option<bool>;

/// Owner view icon first, then the looser public-view class
const LIKED_STRATEGIES: &[FlagStrategy] = &[liked_icon, liked_class];

/// Whether the row carries a "liked" marker under either convention
pub fn extract_liked(row: &ElementRef<'_>) -> bool {
    LIKED_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(row))
        .unwrap_or(false)
}

fn liked_icon(row: &ElementRef<'_>) -> Option<bool> {
    row.select(&LIKED_ICON).next().map(|_| true)
}

fn liked_class(row: &ElementRef<'_>) -> Option<bool> {
    row.select(&LIKED_CLASS).next().map(|_| true)
}

/// Rewatch flag; absent status cell counts as a rewatch
///
/// Only an explicit "status off" modifier on the rewatch cell clears it.
pub fn extract_rewatch(row: &ElementRef<'_>) -> bool {
    !row.select(&REWATCH_CELL).any(|cell| {
        cell.value()
            .classes()
            .any(|class| class == REWATCH_OFF_CLASS)
    })
}
