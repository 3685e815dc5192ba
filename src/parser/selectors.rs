//! CSS selectors for the Letterboxd diary listing
//!
//! The listing renders differently for a signed-in owner and for the public,
//! so a few fields have more than one selector; see [`super::rating`] and
//! [`super::extract_liked`] for the order in which they are tried.

use lazy_static::lazy_static;
use scraper::Selector;

// Helper macro to parse selectors safely at compile time
macro_rules! parse_selector {
    ($s:expr) => {
        Selector::parse($s).expect(concat!("Invalid CSS selector: ", $s))
    };
}

lazy_static! {
    /// One `<tr>` per diary entry
    pub static ref ENTRY_ROW: Selector = parse_selector!(".diary-entry-row");

    /// Day-of-month link; its href carries the full `/YYYY/MM/DD/` date
    pub static ref DATE_LINK: Selector = parse_selector!(".diary-day a");

    pub static ref FILM_TITLE: Selector = parse_selector!(".headline-3 a");
    pub static ref FILM_YEAR: Selector = parse_selector!(".td-released span");

    /// Owner view: interactive star widget with `aria-valuenow` on 0-10
    pub static ref RATING_RANGE: Selector = parse_selector!(".rateit-range");

    /// Public view: `<span class="rating rated-N">`
    pub static ref RATING_CLASS: Selector = parse_selector!(".rating");

    /// Owner view: heart icon inside the like cell
    pub static ref LIKED_ICON: Selector = parse_selector!(".td-like .icon-liked");

    /// Public view: any `like` marker in the row
    pub static ref LIKED_CLASS: Selector = parse_selector!(".like");

    pub static ref REWATCH_CELL: Selector = parse_selector!(".td-rewatch");

    /// "Older" pagination link
    pub static ref NEXT_PAGE: Selector = parse_selector!(".pagination a.next");
}

/// Class that marks the rewatch cell as "not a rewatch"
pub const REWATCH_OFF_CLASS: &str = "icon-status-off";

/// Prefix of the public view's rating class token
pub const RATED_CLASS_PREFIX: &str = "rated-";
