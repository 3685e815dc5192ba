//! Rating normalization
//!
//! A diary row exposes its rating in one of two ways: the owner's view has an
//! interactive widget whose `aria-valuenow` is the 0-10 value, the public view
//! has a `rated-N` class token on the rating span. Both map onto the same
//! [`Rating::Stars`] half-star count.

use scraper::ElementRef;

use crate::models::Rating;
use crate::parser::selectors::{RATED_CLASS_PREFIX, RATING_CLASS, RATING_RANGE};

/// Raw rating data found in a diary row, before interpretation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingContext {
    /// `aria-valuenow` of the star widget
    pub range_value: Option<String>,
    /// Full `class` attribute of the first rating span
    pub rating_class: Option<String>,
}

impl RatingContext {
    /// Gather the raw rating attributes from a diary row
    pub fn from_row(row: &ElementRef<'_>) -> Self {
        Self {
            range_value: first_attr(row, &RATING_RANGE, "aria-valuenow"),
            rating_class: first_attr(row, &RATING_CLASS, "class"),
        }
    }
}

fn first_attr(row: &ElementRef<'_>, selector: &scraper::Selector, attr: &str) -> Option<String> {
    row.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

type RatingStrategy = fn(&RatingContext) -> Option<Rating>;

/// Tried in order, first hit wins
const STRATEGIES: &[RatingStrategy] = &[from_range_value, from_rated_class];

/// Convert raw rating data into its canonical form
///
/// Returns [`Rating::NotRated`] only when neither source is present.
pub fn normalize_rating(context: &RatingContext) -> Rating {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(context))
        .unwrap_or(Rating::NotRated)
}

/// Widget value, e.g. `aria-valuenow="7"`
///
/// A value that is not an unsigned integer is treated as absent.
fn from_range_value(context: &RatingContext) -> Option<Rating> {
    let value = context.range_value.as_deref()?.trim();
    value.parse::<u32>().ok().map(Rating::Stars)
}

/// Class token, e.g. `class="rating rated-4"`
///
/// A non-numeric suffix is passed through unchanged; a bare `rated-` is
/// treated as absent.
fn from_rated_class(context: &RatingContext) -> Option<Rating> {
    let token = context
        .rating_class
        .as_deref()?
        .split_whitespace()
        .find_map(|class| {
            class
                .strip_prefix(RATED_CLASS_PREFIX)
                .filter(|suffix| !suffix.is_empty())
        })?;

    Some(match token.parse::<u32>() {
        Ok(raw) => Rating::Stars(raw),
        Err(_) => Rating::Unrecognized(token.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn range(value: &str) -> RatingContext {
        RatingContext {
            range_value: Some(value.to_string()),
            rating_class: None,
        }
    }

    fn class(value: &str) -> RatingContext {
        RatingContext {
            range_value: None,
            rating_class: Some(value.to_string()),
        }
    }

    #[test]
    fn test_range_value_is_halved() {
        assert_eq!(normalize_rating(&range("9")).to_string(), "4.5");
        assert_eq!(normalize_rating(&range("7")).to_string(), "3.5");
        assert_eq!(normalize_rating(&range("10")).to_string(), "5.0");
        assert_eq!(normalize_rating(&range("1")).to_string(), "0.5");
    }

    #[test]
    fn test_rated_class_is_halved() {
        assert_eq!(normalize_rating(&class("rating rated-4")).to_string(), "2.0");
        assert_eq!(normalize_rating(&class("rated-10 rating -green")).to_string(), "5.0");
    }

    #[test]
    fn test_range_value_wins_over_class() {
        let context = RatingContext {
            range_value: Some("6".into()),
            rating_class: Some("rating rated-2".into()),
        };
        assert_eq!(normalize_rating(&context), Rating::Stars(6));
    }

    #[test]
    fn test_non_numeric_range_falls_back_to_class() {
        let context = RatingContext {
            range_value: Some("".into()),
            rating_class: Some("rating rated-3".into()),
        };
        assert_eq!(normalize_rating(&context), Rating::Stars(3));
    }

    #[test]
    fn test_non_numeric_class_token_passes_through() {
        assert_eq!(
            normalize_rating(&class("rating rated-large")),
            Rating::Unrecognized("large".into())
        );
    }

    #[test]
    fn test_bare_rated_prefix_is_not_a_rating() {
        assert_eq!(normalize_rating(&class("rating rated-")), Rating::NotRated);
        assert_eq!(normalize_rating(&class("rating rated- rated-6")), Rating::Stars(6));
    }

    #[test]
    fn test_not_rated_without_sources() {
        assert_eq!(normalize_rating(&RatingContext::default()), Rating::NotRated);
        assert_eq!(normalize_rating(&class("rating -micro")), Rating::NotRated);
        assert_eq!(normalize_rating(&range("n/a")).to_string(), "Not rated");
    }

    #[test]
    fn test_from_row_reads_both_sources() {
        let html = scraper::Html::parse_fragment(
            r#"<table><tr class="diary-entry-row"><td class="td-rating">
                <div class="rateit"><input class="rateit-range" aria-valuenow="8"></div>
                <span class="rating rated-8">★★★★</span>
            </td></tr></table>"#,
        );
        let row = html
            .select(&crate::parser::selectors::ENTRY_ROW)
            .next()
            .unwrap();
        let context = RatingContext::from_row(&row);

        assert_eq!(context.range_value.as_deref(), Some("8"));
        assert_eq!(context.rating_class.as_deref(), Some("rating rated-8"));
    }

    proptest! {
        #[test]
        fn prop_rating_is_monotonic(a in 0u32..=10, b in 0u32..=10) {
            let ra = normalize_rating(&range(&a.to_string())).stars().unwrap();
            let rb = normalize_rating(&class(&format!("rating rated-{b}"))).stars().unwrap();
            prop_assert_eq!(a <= b, ra <= rb);
        }

        #[test]
        fn prop_both_tiers_agree(raw in 0u32..=10) {
            let from_range = normalize_rating(&range(&raw.to_string()));
            let from_class = normalize_rating(&class(&format!("rating rated-{raw}")));
            prop_assert_eq!(from_range.to_string(), format!("{:.1}", f64::from(raw) / 2.0));
            prop_assert_eq!(from_range, from_class);
        }
    }
}
